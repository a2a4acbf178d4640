//! Analysis orchestration: prompt → model → extraction.
//!
//! The analyzer is the only place where the pure core (prompt builder and
//! extractor) meets the model client. Network and API failures abort the
//! operation before extraction runs. Once a reply text exists the result is
//! total: extraction degrades missing fields to defaults instead of failing.

use std::sync::Arc;

use crate::analysis::{
    build_prompt, extract_outcome, AnalysisError, AnalysisMode, AnalysisOutcome,
    ConfidencePolicy, ExperienceLevel, GenerativeModel,
};

pub struct PlantAnalyzer {
    model: Arc<dyn GenerativeModel>,
    level: ExperienceLevel,
    confidence: ConfidencePolicy,
}

impl PlantAnalyzer {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            level: ExperienceLevel::default(),
            confidence: ConfidencePolicy::default(),
        }
    }

    pub fn with_level(mut self, level: ExperienceLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_confidence_policy(mut self, policy: ConfidencePolicy) -> Self {
        self.confidence = policy;
        self
    }

    /// Run one analysis over an already-encoded image.
    ///
    /// `image_base64` and `mime_type` come from the caller's image pipeline;
    /// the analyzer forwards them untouched.
    pub fn analyze(
        &self,
        mode: AnalysisMode,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let _span = tracing::info_span!(
            "plant_analyze",
            mode = ?mode,
            level = ?self.level,
            image_len = image_base64.len(),
        )
        .entered();
        let start = std::time::Instant::now();

        let prompt = build_prompt(mode, self.level);
        let raw = self
            .model
            .generate_with_image(&prompt, image_base64, mime_type)?;

        let outcome = extract_outcome(mode, &raw, self.confidence);

        tracing::info!(
            mode = ?mode,
            elapsed_ms = %start.elapsed().as_millis(),
            reply_len = raw.len(),
            "analysis complete"
        );

        Ok(outcome)
    }
}
