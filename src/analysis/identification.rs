//! Identification-mode extraction: raw reply text → [`IdentificationRecord`].

use super::confidence::{resolve_confidence, ConfidencePolicy};
use super::extract::{extract_field, extract_plant_name, extract_section};
use super::prompt::{
    LABEL_ADDITIONAL_TIPS, LABEL_GROWTH_INFORMATION, LABEL_HUMIDITY, LABEL_LIGHT,
    LABEL_QUICK_SUMMARY, LABEL_SCIENTIFIC_NAME, LABEL_SOIL, LABEL_TEMPERATURE, LABEL_WATER,
};
use super::types::{CareInfo, IdentificationRecord};

pub const UNKNOWN_SCIENTIFIC_NAME: &str = "Unknown scientific name";
pub const DEFAULT_LIGHT: &str = "Moderate light";
pub const DEFAULT_WATER: &str = "Regular watering";
pub const DEFAULT_HUMIDITY: &str = "Average humidity";
pub const DEFAULT_TEMPERATURE: &str = "65-85°F (18-29°C)";
pub const DEFAULT_SOIL: &str = "Well-draining potting mix";

/// Map a reply to an identification record. Total: every absent heading
/// degrades to its documented default, so malformed or empty input yields an
/// all-default record rather than an error.
pub fn extract_identification(text: &str, policy: ConfidencePolicy) -> IdentificationRecord {
    IdentificationRecord {
        common_name: extract_plant_name(text),
        scientific_name: extract_field(text, LABEL_SCIENTIFIC_NAME)
            .unwrap_or_else(|| UNKNOWN_SCIENTIFIC_NAME.to_string()),
        summary: extract_section(text, LABEL_QUICK_SUMMARY).unwrap_or_default(),
        confidence: resolve_confidence(text, policy),
        care: CareInfo {
            light: extract_field(text, LABEL_LIGHT).unwrap_or_else(|| DEFAULT_LIGHT.to_string()),
            water: extract_field(text, LABEL_WATER).unwrap_or_else(|| DEFAULT_WATER.to_string()),
            humidity: extract_field(text, LABEL_HUMIDITY)
                .unwrap_or_else(|| DEFAULT_HUMIDITY.to_string()),
            temperature: extract_field(text, LABEL_TEMPERATURE)
                .unwrap_or_else(|| DEFAULT_TEMPERATURE.to_string()),
            soil: extract_field(text, LABEL_SOIL).unwrap_or_else(|| DEFAULT_SOIL.to_string()),
        },
        growth_info: extract_section(text, LABEL_GROWTH_INFORMATION).unwrap_or_default(),
        additional_info: extract_section(text, LABEL_ADDITIONAL_TIPS).unwrap_or_default(),
    }
}
