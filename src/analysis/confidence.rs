//! Confidence resolution for identification records.
//!
//! Two mutually exclusive behaviors exist in the field: newer prompt
//! revisions request an explicit "Confidence:" line and parse it; older
//! clients never asked and filled the field with a 90-100 placeholder. The
//! policy makes the choice explicit per analyzer instance instead of mixing
//! both silently.

use rand::Rng;

use super::extract::extract_field;
use super::prompt::LABEL_CONFIDENCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfidencePolicy {
    /// Parse the explicit "Confidence:" line the canonical prompt requests.
    /// Missing or unparsable values resolve to 0 so a fallback stays visible
    /// to callers.
    #[default]
    Reported,
    /// Placeholder behavior carried over from prompt revisions that never
    /// requested a confidence line: uniform 90-100, ignoring the reply.
    /// Not idempotent across calls.
    Synthesized,
}

/// Resolve the confidence value for a reply under the given policy.
pub fn resolve_confidence(text: &str, policy: ConfidencePolicy) -> u8 {
    match policy {
        ConfidencePolicy::Reported => parse_reported(text).unwrap_or(0),
        ConfidencePolicy::Synthesized => rand::thread_rng().gen_range(90..=100),
    }
}

/// Leading integer of the "Confidence:" field, capped at 100.
/// Tolerates trailing decoration like "92%" or "92 out of 100".
fn parse_reported(text: &str) -> Option<u8> {
    let value = extract_field(text, LABEL_CONFIDENCE)?;
    let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
    let parsed: u32 = digits.parse().ok()?;
    Some(parsed.min(100) as u8)
}
