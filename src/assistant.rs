//! Care-advice flow: free-form question → model → answer with extras.
//!
//! Unlike the image analyses this flow has no structural heading contract;
//! the answer is returned as-is. The extras (fertilizer recommendations,
//! related topics) are derived locally from keyword scans, never from a
//! second model call.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisError, GenerativeModel};
use crate::fertilizer::FertilizerAdvisor;

/// Question words that make fertilizer advice relevant.
const FERTILIZER_KEYWORDS: &[&str] = &["fertilizer", "nutrient", "feed", "nutrition", "fertilize"];

/// Topic catalogue scanned against the answer text.
const RELATED_TOPICS: &[&str] = &[
    "watering schedule",
    "light requirements",
    "soil composition",
    "pruning techniques",
    "pest management",
    "disease prevention",
    "propagation methods",
    "seasonal care",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareAdvice {
    pub answer: String,
    pub fertilizer_recommendations: Vec<String>,
    pub related_topics: Vec<String>,
}

pub struct CareAssistant {
    model: Arc<dyn GenerativeModel>,
    fertilizer: Mutex<FertilizerAdvisor>,
}

impl CareAssistant {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            fertilizer: Mutex::new(FertilizerAdvisor::new()),
        }
    }

    /// Answer a plant-care question, optionally scoped to a plant type.
    pub fn advise(
        &self,
        question: &str,
        plant_type: Option<&str>,
    ) -> Result<CareAdvice, AnalysisError> {
        let _span = tracing::info_span!("care_advise", question_len = question.len()).entered();

        let prompt = build_advice_prompt(question, plant_type);
        let answer = self.model.generate(&prompt)?;

        let fertilizer_recommendations = if wants_fertilizer_advice(question) {
            let mut advisor = self
                .fertilizer
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            advisor.recommendations(plant_type.unwrap_or("general"))
        } else {
            Vec::new()
        };

        let related_topics = related_topics(&answer);

        tracing::info!(
            answer_len = answer.len(),
            fertilizer = fertilizer_recommendations.len(),
            topics = related_topics.len(),
            "care advice complete"
        );

        Ok(CareAdvice {
            answer,
            fertilizer_recommendations,
            related_topics,
        })
    }
}

fn build_advice_prompt(question: &str, plant_type: Option<&str>) -> String {
    let mut prompt = format!(
        "You are a helpful assistant providing personalized advice for plant care. \
         The user will ask a question about plant care, and you should provide helpful \
         and informative advice.\n\nUser question: {question}"
    );
    if let Some(plant_type) = plant_type {
        prompt.push_str(&format!("\nPlant type: {plant_type}"));
    }
    prompt
}

fn wants_fertilizer_advice(question: &str) -> bool {
    let lower = question.to_lowercase();
    FERTILIZER_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Catalogue topics actually mentioned in the answer.
fn related_topics(answer: &str) -> Vec<String> {
    let lower = answer.to_lowercase();
    RELATED_TOPICS
        .iter()
        .filter(|topic| lower.contains(*topic))
        .map(|topic| topic.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::MockModel;

    #[test]
    fn prompt_contains_question_and_plant_type() {
        let prompt = build_advice_prompt("Why are the leaves drooping?", Some("Peace Lily"));
        assert!(prompt.contains("Why are the leaves drooping?"));
        assert!(prompt.contains("Plant type: Peace Lily"));
    }

    #[test]
    fn prompt_omits_plant_type_when_absent() {
        let prompt = build_advice_prompt("How often should I water?", None);
        assert!(!prompt.contains("Plant type:"));
    }

    #[test]
    fn fertilizer_keywords_trigger_recommendations() {
        let assistant = CareAssistant::new(Arc::new(MockModel::new("Feed monthly.")));
        let advice = assistant
            .advise("What fertilizer should I use?", Some("Monstera"))
            .unwrap();
        assert!(!advice.fertilizer_recommendations.is_empty());
        assert!(advice
            .fertilizer_recommendations
            .iter()
            .any(|r| r.contains("fish emulsion")));
    }

    #[test]
    fn non_fertilizer_question_gets_no_recommendations() {
        let assistant = CareAssistant::new(Arc::new(MockModel::new("Move it near a window.")));
        let advice = assistant.advise("Is my plant getting enough sun?", None).unwrap();
        assert!(advice.fertilizer_recommendations.is_empty());
    }

    #[test]
    fn related_topics_scanned_from_answer() {
        let answer = "Adjust your watering schedule and check the light requirements.";
        let assistant = CareAssistant::new(Arc::new(MockModel::new(answer)));
        let advice = assistant.advise("Help my fern", None).unwrap();
        assert_eq!(
            advice.related_topics,
            vec!["watering schedule", "light requirements"]
        );
    }

    #[test]
    fn answer_passed_through_unmodified() {
        let assistant = CareAssistant::new(Arc::new(MockModel::new("  Verbatim answer.  ")));
        let advice = assistant.advise("anything", None).unwrap();
        assert_eq!(advice.answer, "  Verbatim answer.  ");
    }
}
