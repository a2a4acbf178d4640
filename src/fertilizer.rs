//! Fertilizer recommendation lookup.
//!
//! Keyword-matched advice keyed by a free-text context (a plant type or a
//! disease name). The advisor owns an explicit get-or-compute cache with no
//! global state; entries are idempotent for a given key, so last writer wins
//! is acceptable for concurrent callers holding their own locks.

use std::collections::HashMap;

const FUNGAL: &[&str] = &[
    "Use fungicide-containing fertilizers with a balanced NPK ratio",
    "Add sulfur-based amendments to increase soil acidity",
    "Apply copper-based fertilizers for fungal disease resistance",
    "Use compost tea as a natural fungicide and fertilizer",
];

const DEFICIENCY: &[&str] = &[
    "Apply complete NPK fertilizer with micronutrients",
    "Use iron supplements for yellowing leaves",
    "Add magnesium sulfate (Epsom salt) for magnesium deficiency",
    "Apply calcium nitrate for calcium deficiency symptoms",
];

const SUCCULENT: &[&str] = &[
    "Use low-nitrogen, high-phosphorus fertilizer (like 5-10-5)",
    "Apply diluted fertilizer at 1/4 strength during growing season",
    "Add crushed eggshells for calcium supplementation",
    "Use cactus-specific fertilizer formulations",
];

const TROPICAL: &[&str] = &[
    "Use balanced liquid fertilizer (like 10-10-10) diluted to half strength",
    "Apply slow-release fertilizer pellets at the beginning of growing season",
    "Add fish emulsion for nitrogen and micronutrients",
    "Supplement with magnesium for vibrant foliage",
];

const GENERAL: &[&str] = &[
    "Use balanced all-purpose fertilizer (like 10-10-10)",
    "Apply slow-release fertilizer at the beginning of growing season",
    "Use organic compost to improve soil fertility",
    "Add worm castings for micronutrient enrichment",
];

/// Pick the recommendation set for a context string.
fn recommend(context: &str) -> &'static [&'static str] {
    let lower = context.to_lowercase();
    if ["fungal", "mildew", "rot"].iter().any(|k| lower.contains(k)) {
        FUNGAL
    } else if ["nutrient deficiency", "yellowing"]
        .iter()
        .any(|k| lower.contains(k))
    {
        DEFICIENCY
    } else if ["succulent", "cactus"].iter().any(|k| lower.contains(k)) {
        SUCCULENT
    } else if ["tropical", "monstera", "philodendron"]
        .iter()
        .any(|k| lower.contains(k))
    {
        TROPICAL
    } else {
        GENERAL
    }
}

/// Memoizing fertilizer advisor. Owned by the calling service, never global.
#[derive(Default)]
pub struct FertilizerAdvisor {
    cache: HashMap<String, Vec<String>>,
}

impl FertilizerAdvisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recommendations for a plant type or disease name, computed once per
    /// normalized context and cached.
    pub fn recommendations(&mut self, context: &str) -> Vec<String> {
        let key = context.trim().to_lowercase();
        self.cache
            .entry(key)
            .or_insert_with(|| recommend(context).iter().map(|s| s.to_string()).collect())
            .clone()
    }
}
