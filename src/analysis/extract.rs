//! Heading-anchored extraction primitives.
//!
//! The model reply is free text shaped by the prompt templates: numbered
//! sections ("4. Care Information:") containing `Label: value` lines. These
//! primitives locate a label anywhere in the reply and capture its value up to
//! the next recognized boundary. They are total: a missing label yields
//! `None` and the caller substitutes that field's documented default.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::prompt::{LABEL_DETECTED_PLANT, LABEL_PLANT_NAME};

/// Fallback when neither plant-name heading is present.
pub const UNKNOWN_PLANT: &str = "Unknown Plant";

/// A line opening a numbered section ("5. Growth Information:"). The period
/// must be followed by whitespace or end the line so decimals ("2.5 cm") are
/// not mistaken for headings.
static NUMBERED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\d+\.([ \t]|$)").unwrap());

/// A line that looks like another `Label:` heading, with an optional list
/// marker or section number in front.
static LABEL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:[-*][ \t]*)?(?:\d+\.[ \t]*)?[A-Za-z][A-Za-z ()/'&-]{0,39}:").unwrap()
});

/// Anchor for one label: start of line, optional list marker, optional section
/// number, the label, then either a colon or end of line. Requiring the colon
/// (or line end) keeps "Disease" from anchoring inside a "Disease Status:"
/// line.
fn anchor_regex(label: &str) -> Regex {
    RegexBuilder::new(&format!(
        r"^[ \t]*(?:[-*][ \t]*)?(?:\d+\.[ \t]*)?{}[ \t]*(?::[ \t]*|$)",
        regex::escape(label)
    ))
    .case_insensitive(true)
    .multi_line(true)
    .build()
    .expect("label anchor regex")
}

/// Capture the value following the first occurrence of `label`.
///
/// The value starts after the label's colon (same line) and may wrap onto
/// following lines; it ends at the next numbered heading, the next `Label:`
/// line, a blank line, or end of input. Returns `None` when the label is
/// absent or its value is empty after trimming.
pub fn extract_field(text: &str, label: &str) -> Option<String> {
    let m = anchor_regex(label).find(text)?;
    let rest = &text[m.end()..];

    let mut lines = rest.split('\n');
    let mut captured: Vec<&str> = Vec::new();
    if let Some(first) = lines.next() {
        captured.push(first);
    }
    for line in lines {
        if line.trim().is_empty()
            || NUMBERED_HEADING.is_match(line)
            || LABEL_LINE.is_match(line)
        {
            break;
        }
        captured.push(line);
    }

    let value = captured.join("\n").trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Capture a multi-line block section ("Quick Summary", "Growth Information").
///
/// Same anchor as [`extract_field`], but the block runs until the next
/// numbered heading or end of input. Blank lines and inner `Label:` bullets
/// (like "- Light: ...") belong to the block, and bullet markers are retained.
pub fn extract_section(text: &str, label: &str) -> Option<String> {
    let m = anchor_regex(label).find(text)?;
    let rest = &text[m.end()..];

    let mut lines = rest.split('\n');
    let mut captured: Vec<&str> = Vec::new();
    if let Some(first) = lines.next() {
        captured.push(first);
    }
    for line in lines {
        if NUMBERED_HEADING.is_match(line) {
            break;
        }
        captured.push(line);
    }

    let value = captured.join("\n").trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Plant name with the two-tier heading fallback: different prompt revisions
/// used "Detected Plant:" and "Plant Name:", so both must be tolerated.
pub fn extract_plant_name(text: &str) -> String {
    extract_field(text, LABEL_DETECTED_PLANT)
        .or_else(|| extract_field(text, LABEL_PLANT_NAME))
        .unwrap_or_else(|| UNKNOWN_PLANT.to_string())
}

/// Derive an ordered bullet list from a block: keep lines that start with a
/// list marker or contain a colon, strip the marker, trim, drop empties.
pub fn split_list_items(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with('-') || trimmed.starts_with('*') || trimmed.contains(':') {
                let stripped = trimmed.trim_start_matches(['-', '*']).trim();
                (!stripped.is_empty()).then(|| stripped.to_string())
            } else {
                None
            }
        })
        .collect()
}
