use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Which of the two supported analysis tasks a request performs.
/// Selects both the prompt template and the extraction schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Identification,
    Disease,
}

/// Register knob for the prompt: changes the vocabulary instruction given to
/// the model, never the structural heading contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Hobbyist,
    Expert,
}

/// Care requirements parsed from the "Care Information" section.
/// Each field defaults independently when its heading is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareInfo {
    pub light: String,
    pub water: String,
    pub humidity: String,
    pub temperature: String,
    pub soil: String,
}

/// One plant identification outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationRecord {
    pub common_name: String,
    pub scientific_name: String,
    pub summary: String,
    /// 0-100. Under `ConfidencePolicy::Reported`, 0 means the model did not
    /// report a usable value; callers can render that as "unknown".
    pub confidence: u8,
    pub care: CareInfo,
    pub growth_info: String,
    pub additional_info: String,
}

/// One disease-diagnosis outcome. All category fields are prose; bullet views
/// are derived on demand (see `DiseaseRecord::treatment_items` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub plant_name: String,
    pub disease_name: String,
    pub summary: String,
    pub symptoms: String,
    pub cause: String,
    pub treatment: String,
    pub prevention: String,
    pub additional_info: String,
}

/// The two record shapes behind a single extraction entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnalysisRecord {
    Identification(IdentificationRecord),
    Disease(DiseaseRecord),
}

/// Structured record plus the unmodified model reply. `raw_response` is
/// retained verbatim for audit and export; extraction only ever reads from
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub record: AnalysisRecord,
    pub raw_response: String,
}

/// Generative model client abstraction (allows mocking).
pub trait GenerativeModel: Send + Sync {
    /// Text-only generation (care assistant).
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;

    /// Generation with an inline base64 image attached (identification and
    /// disease analysis). The image is already encoded by the caller; the
    /// core never touches raw pixels.
    fn generate_with_image(
        &self,
        prompt: &str,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, AnalysisError>;
}
