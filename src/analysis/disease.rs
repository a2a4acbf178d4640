//! Disease-mode extraction: raw reply text → [`DiseaseRecord`].

use super::extract::{extract_field, extract_plant_name, extract_section, split_list_items};
use super::prompt::{
    LABEL_ADDITIONAL_INFORMATION, LABEL_CAUSE, LABEL_DISEASE, LABEL_DISEASE_STATUS,
    LABEL_PREVENTION, LABEL_QUICK_SUMMARY, LABEL_SYMPTOMS, LABEL_TREATMENT,
};
use super::types::DiseaseRecord;

pub const UNKNOWN_DISEASE: &str = "Unknown disease";
pub const DEFAULT_SYMPTOMS: &str = "No specific symptoms identified";
pub const DEFAULT_CAUSE: &str = "Unknown cause";
pub const DEFAULT_TREATMENT: &str = "Consult a plant specialist";
pub const DEFAULT_PREVENTION: &str = "Maintain proper plant care";

/// Phrases that indicate a disease is being described, used only when the
/// reply carries no explicit "Disease Status:" field.
const DISEASE_PHRASES: &[&str] = &[
    "disease detected",
    "disease present",
    "is infected",
    "shows symptoms of",
    "suffering from",
];

/// Map a reply to a disease record. Total: every absent heading degrades to
/// its documented default.
pub fn extract_disease(text: &str) -> DiseaseRecord {
    DiseaseRecord {
        plant_name: extract_plant_name(text),
        disease_name: extract_field(text, LABEL_DISEASE)
            .unwrap_or_else(|| UNKNOWN_DISEASE.to_string()),
        summary: extract_section(text, LABEL_QUICK_SUMMARY).unwrap_or_default(),
        symptoms: extract_field(text, LABEL_SYMPTOMS)
            .unwrap_or_else(|| DEFAULT_SYMPTOMS.to_string()),
        cause: extract_field(text, LABEL_CAUSE).unwrap_or_else(|| DEFAULT_CAUSE.to_string()),
        treatment: extract_field(text, LABEL_TREATMENT)
            .unwrap_or_else(|| DEFAULT_TREATMENT.to_string()),
        prevention: extract_field(text, LABEL_PREVENTION)
            .unwrap_or_else(|| DEFAULT_PREVENTION.to_string()),
        additional_info: extract_section(text, LABEL_ADDITIONAL_INFORMATION).unwrap_or_default(),
    }
}

/// Display heuristic for whether the reply describes a present disease, used
/// for branching UI (healthy vs. infected states), never for the
/// `disease_name` field itself.
///
/// An explicit "Disease Status: Yes/No" field always wins; the phrase scan is
/// the fallback for replies that never carried one. Fragile by nature: treat
/// the result as a hint, not a diagnosis.
pub fn disease_present(text: &str) -> bool {
    if let Some(status) = extract_field(text, LABEL_DISEASE_STATUS) {
        return status.to_ascii_lowercase().starts_with("yes");
    }
    let lower = text.to_lowercase();
    DISEASE_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

impl DiseaseRecord {
    /// Bullet view of the prose `symptoms` field, markers stripped.
    pub fn symptom_items(&self) -> Vec<String> {
        split_list_items(&self.symptoms)
    }

    pub fn cause_items(&self) -> Vec<String> {
        split_list_items(&self.cause)
    }

    pub fn treatment_items(&self) -> Vec<String> {
        split_list_items(&self.treatment)
    }

    pub fn prevention_items(&self) -> Vec<String> {
        split_list_items(&self.prevention)
    }
}
