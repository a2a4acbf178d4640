//! Gemini `generateContent` HTTP client.
//!
//! Production implementation of the [`GenerativeModel`] seam plus a mock for
//! tests. The client only ever hands back the reply's final text; transport
//! and API errors surface as [`AnalysisError`] before extraction runs.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisError, GenerativeModel};
use crate::config;

/// Gemini REST client.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default endpoint and model, API key from the environment.
    pub fn from_env() -> Result<Self, AnalysisError> {
        let api_key = config::gemini_api_key()
            .ok_or_else(|| AnalysisError::MissingApiKey(config::GEMINI_API_KEY_ENV.to_string()))?;
        Ok(Self::new(
            config::GEMINI_API_URL,
            &api_key,
            config::GEMINI_MODEL,
            config::DEFAULT_TIMEOUT_SECS,
        ))
    }

    fn send(&self, parts: Vec<Part>) -> Result<String, AnalysisError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                AnalysisError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                AnalysisError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                AnalysisError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        reply_text(parsed)
    }
}

impl GenerativeModel for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        self.send(vec![Part::text(prompt)])
    }

    fn generate_with_image(
        &self,
        prompt: &str,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, AnalysisError> {
        self.send(vec![
            Part::text(prompt),
            Part::inline_image(mime_type, image_base64),
        ])
    }
}

// ──────────────────────────────────────────────
// Wire types
// ──────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn inline_image(mime_type: &str, data: &str) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

/// Concatenated text parts of the first candidate. An in-body error object or
/// an empty candidate list is a hard failure that the extractor never sees.
fn reply_text(parsed: GenerateContentResponse) -> Result<String, AnalysisError> {
    if let Some(error) = parsed.error {
        return Err(AnalysisError::Api {
            status: error.code,
            body: error.message,
        });
    }
    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AnalysisError::MalformedResponse("no candidates in reply".into()))?;
    let parts = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default();
    Ok(parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join(""))
}

// ──────────────────────────────────────────────
// MockModel (testing)
// ──────────────────────────────────────────────

/// Mock model client returning a configurable reply.
pub struct MockModel {
    response: String,
}

impl MockModel {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl GenerativeModel for MockModel {
    fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
        Ok(self.response.clone())
    }

    fn generate_with_image(
        &self,
        _prompt: &str,
        _image_base64: &str,
        _mime_type: &str,
    ) -> Result<String, AnalysisError> {
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_configured_response() {
        let model = MockModel::new("Detected Plant: Fern");
        assert_eq!(model.generate("prompt").unwrap(), "Detected Plant: Fern");
        assert_eq!(
            model.generate_with_image("prompt", "aGk=", "image/jpeg").unwrap(),
            "Detected Plant: Fern"
        );
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = GeminiClient::new("http://localhost:9999/", "key", "gemini-test", 30);
        assert_eq!(client.base_url, "http://localhost:9999");
        assert_eq!(client.timeout_secs, 30);
    }

    #[test]
    fn request_body_serializes_camel_case() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text("hello"), Part::inline_image("image/png", "aGk=")],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(json["contents"][0]["parts"][1]["inlineData"]["data"], "aGk=");
        // Unused fields are omitted, not serialized as null
        assert!(json["contents"][0]["parts"][0]
            .as_object()
            .unwrap()
            .get("inlineData")
            .is_none());
    }

    #[test]
    fn reply_text_joins_candidate_parts() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Detected Plant: "},{"text":"Ivy"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(reply_text(parsed).unwrap(), "Detected Plant: Ivy");
    }

    #[test]
    fn reply_text_error_body_is_api_error() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"error":{"code":429,"message":"quota exceeded"}}"#,
        )
        .unwrap();
        let err = reply_text(parsed).unwrap_err();
        assert!(matches!(err, AnalysisError::Api { status: 429, .. }));
    }

    #[test]
    fn reply_text_no_candidates_is_malformed() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            reply_text(parsed).unwrap_err(),
            AnalysisError::MalformedResponse(_)
        ));
    }

    #[test]
    fn reply_text_candidate_without_content_is_empty() {
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{}]}"#).unwrap();
        assert_eq!(reply_text(parsed).unwrap(), "");
    }
}
