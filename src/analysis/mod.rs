pub mod confidence;
pub mod disease;
pub mod extract;
pub mod identification;
pub mod prompt;
pub mod types;

pub use confidence::*;
pub use disease::*;
pub use extract::*;
pub use identification::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

/// Single extraction entry point: the mode selects which record schema
/// applies. Total: malformed or empty text yields an all-default record,
/// never an error.
pub fn extract_record(
    mode: AnalysisMode,
    text: &str,
    policy: ConfidencePolicy,
) -> AnalysisRecord {
    match mode {
        AnalysisMode::Identification => {
            AnalysisRecord::Identification(extract_identification(text, policy))
        }
        AnalysisMode::Disease => AnalysisRecord::Disease(extract_disease(text)),
    }
}

/// Extraction plus the verbatim reply, packaged for callers that retain the
/// raw text for audit and export.
pub fn extract_outcome(
    mode: AnalysisMode,
    text: &str,
    policy: ConfidencePolicy,
) -> AnalysisOutcome {
    AnalysisOutcome {
        record: extract_record(mode, text, policy),
        raw_response: text.to_string(),
    }
}

/// Errors raised by the collaborators around extraction (model client, media
/// helpers). Extraction itself is total: a missing heading degrades to a
/// documented per-field default and is never surfaced as an error.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("model endpoint is not reachable at {0}")]
    Connection(String),

    #[error("model API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("no API key configured: set {0}")]
    MissingApiKey(String),

    #[error("invalid image payload: {0}")]
    Media(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_point_dispatches_on_mode() {
        let id = extract_record(
            AnalysisMode::Identification,
            "Detected Plant: Fern",
            ConfidencePolicy::Reported,
        );
        assert!(matches!(id, AnalysisRecord::Identification(_)));

        let disease = extract_record(
            AnalysisMode::Disease,
            "Detected Plant: Fern",
            ConfidencePolicy::Reported,
        );
        assert!(matches!(disease, AnalysisRecord::Disease(_)));
    }

    #[test]
    fn raw_response_is_retained_verbatim() {
        // Never trimmed, re-cased, or otherwise altered.
        let text = "  Detected Plant: Ivy  \n\nTrailing whitespace preserved  ";
        let outcome = extract_outcome(AnalysisMode::Disease, text, ConfidencePolicy::Reported);
        assert_eq!(outcome.raw_response, text);
    }
}
