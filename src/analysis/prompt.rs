//! Prompt templates for the two analysis modes.
//!
//! The heading strings below are a wire contract between the prompt and the
//! extractor: the extractor anchors on exactly these labels, and a reply that
//! drops one degrades to that field's default rather than erroring. Change a
//! label here and in the matching extractor together, never alone.

use super::types::{AnalysisMode, ExperienceLevel};

// ──────────────────────────────────────────────
// Heading contract
// ──────────────────────────────────────────────

pub const LABEL_DETECTED_PLANT: &str = "Detected Plant";
pub const LABEL_PLANT_NAME: &str = "Plant Name";
pub const LABEL_SCIENTIFIC_NAME: &str = "Scientific Name";
pub const LABEL_QUICK_SUMMARY: &str = "Quick Summary";
pub const LABEL_LIGHT: &str = "Light";
pub const LABEL_WATER: &str = "Water";
pub const LABEL_HUMIDITY: &str = "Humidity";
pub const LABEL_TEMPERATURE: &str = "Temperature";
pub const LABEL_SOIL: &str = "Soil";
pub const LABEL_GROWTH_INFORMATION: &str = "Growth Information";
pub const LABEL_ADDITIONAL_TIPS: &str = "Additional Tips";
pub const LABEL_CONFIDENCE: &str = "Confidence";
pub const LABEL_DISEASE: &str = "Disease";
pub const LABEL_DISEASE_STATUS: &str = "Disease Status";
pub const LABEL_SYMPTOMS: &str = "Symptoms";
pub const LABEL_CAUSE: &str = "Cause";
pub const LABEL_TREATMENT: &str = "Treatment";
pub const LABEL_PREVENTION: &str = "Prevention";
pub const LABEL_ADDITIONAL_INFORMATION: &str = "Additional Information";

// ──────────────────────────────────────────────
// Templates
// ──────────────────────────────────────────────

const IDENTIFICATION_ROLE: &str = "You are an expert botanist.";

const IDENTIFICATION_TEMPLATE: &str = "\
Analyze this plant image and provide details in the following format:

1. Detected Plant: [name of the plant species]
2. Scientific Name: [latin name]
3. Quick Summary:
   - Brief description of the plant
   - Native origin
   - Common uses

4. Care Information:
   - Light: [light requirements]
   - Water: [watering needs]
   - Humidity: [humidity requirements]
   - Temperature: [ideal temperature range]
   - Soil: [soil preferences]

5. Growth Information:
   - Expected size/height
   - Growth rate
   - Special considerations

6. Additional Tips:
   - Common issues to watch for
   - Seasonal care adjustments
   - Propagation methods

7. Confidence: [your identification confidence as a whole number between 0 and 100]

Begin your report with 'Detected Plant:' followed by the species name.";

const DISEASE_ROLE: &str = "You are an expert plant pathologist.";

const DISEASE_TEMPLATE: &str = "\
Analyze this plant/leaf image and provide a detailed report on any diseases or issues:

0. Detected Plant: [identify the plant species]
1. Disease: [name of disease or problem]
2. Quick Summary:
   - Severity level
   - Urgency of treatment

3. Symptoms:
   - Visible symptoms in the image
   - Progression of symptoms

4. Cause:
   - What causes this disease/condition
   - Contributing factors

5. Treatment:
   - Immediate steps
   - Ongoing treatment
   - Products or methods to use

6. Prevention:
   - How to prevent this in the future
   - Early warning signs

7. Additional Information:
   - Impact on plant health
   - Potential spread to other plants

Begin your report with 'Detected Plant:' followed by the species name.";

/// Vocabulary instruction for the chosen experience level. Register only:
/// the section headings and their order are identical across levels.
fn register_instruction(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => {
            "Use plain, jargon-free language and give care guidance as simple step-by-step instructions."
        }
        ExperienceLevel::Hobbyist => {
            "Use a mix of common and botanical terminology, assuming some hands-on growing experience."
        }
        ExperienceLevel::Expert => {
            "Use precise technical and scientific terminology, including cultivar-level detail where relevant."
        }
    }
}

/// Render the instruction text sent with the image. Pure function of
/// `(mode, level)`; never touches the network or the image.
pub fn build_prompt(mode: AnalysisMode, level: ExperienceLevel) -> String {
    let (role, template) = match mode {
        AnalysisMode::Identification => (IDENTIFICATION_ROLE, IDENTIFICATION_TEMPLATE),
        AnalysisMode::Disease => (DISEASE_ROLE, DISEASE_TEMPLATE),
    };
    format!("{role} {}\n\n{template}", register_instruction(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identification_prompt_contains_all_labels() {
        let prompt = build_prompt(AnalysisMode::Identification, ExperienceLevel::Hobbyist);
        for label in [
            LABEL_DETECTED_PLANT,
            LABEL_SCIENTIFIC_NAME,
            LABEL_QUICK_SUMMARY,
            LABEL_LIGHT,
            LABEL_WATER,
            LABEL_HUMIDITY,
            LABEL_TEMPERATURE,
            LABEL_SOIL,
            LABEL_GROWTH_INFORMATION,
            LABEL_ADDITIONAL_TIPS,
            LABEL_CONFIDENCE,
        ] {
            assert!(
                prompt.contains(&format!("{label}:")),
                "missing label: {label}"
            );
        }
    }

    #[test]
    fn disease_prompt_contains_all_labels() {
        let prompt = build_prompt(AnalysisMode::Disease, ExperienceLevel::Hobbyist);
        for label in [
            LABEL_DETECTED_PLANT,
            LABEL_DISEASE,
            LABEL_QUICK_SUMMARY,
            LABEL_SYMPTOMS,
            LABEL_CAUSE,
            LABEL_TREATMENT,
            LABEL_PREVENTION,
            LABEL_ADDITIONAL_INFORMATION,
        ] {
            assert!(
                prompt.contains(&format!("{label}:")),
                "missing label: {label}"
            );
        }
    }

    #[test]
    fn both_prompts_request_detected_plant_anchor() {
        for mode in [AnalysisMode::Identification, AnalysisMode::Disease] {
            let prompt = build_prompt(mode, ExperienceLevel::Hobbyist);
            assert!(prompt.contains("Begin your report with 'Detected Plant:'"));
        }
    }

    #[test]
    fn register_varies_with_level_but_template_does_not() {
        let beginner = build_prompt(AnalysisMode::Identification, ExperienceLevel::Beginner);
        let expert = build_prompt(AnalysisMode::Identification, ExperienceLevel::Expert);
        assert_ne!(beginner, expert);
        assert!(beginner.contains("step-by-step"));
        assert!(expert.contains("scientific terminology"));
        // Structural contract identical across levels
        assert!(beginner.contains(IDENTIFICATION_TEMPLATE));
        assert!(expert.contains(IDENTIFICATION_TEMPLATE));
    }

    #[test]
    fn build_is_deterministic() {
        let a = build_prompt(AnalysisMode::Disease, ExperienceLevel::Beginner);
        let b = build_prompt(AnalysisMode::Disease, ExperienceLevel::Beginner);
        assert_eq!(a, b);
    }

    #[test]
    fn modes_use_distinct_roles() {
        let id = build_prompt(AnalysisMode::Identification, ExperienceLevel::Hobbyist);
        let disease = build_prompt(AnalysisMode::Disease, ExperienceLevel::Hobbyist);
        assert!(id.contains("botanist"));
        assert!(disease.contains("plant pathologist"));
    }
}
