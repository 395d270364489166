/// Gemini API types for schedule extraction
use planshot_domain::PlanshotError;
use serde::{Deserialize, Serialize};

/// Gemini API error types
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// Network-level error (connection failed, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Gemini API returned an error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Quota or rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Authentication failed (invalid or unauthorised API key)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Response body doesn't match expected schema
    #[error("Invalid response schema: {0}")]
    InvalidSchema(String),

    /// The model answered without any text
    #[error("Response contained no text (finish reason: {0})")]
    EmptyResponse(String),
}

impl From<GeminiError> for PlanshotError {
    fn from(value: GeminiError) -> Self {
        PlanshotError::ExtractionFailure(value.to_string())
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub(crate) struct InlineData {
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Response from `models/{model}:generateContent`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if it has any.
    pub(crate) fn first_candidate_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|part| part.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }

    /// Why the model produced nothing, when it says so.
    pub(crate) fn block_reason(&self) -> Option<String> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone())
            .or_else(|| self.candidates.first().and_then(|c| c.finish_reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_text_and_inline_image_parts() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: "read this".into() },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png".into(),
                            data: "iVBORw0=".into(),
                        },
                    },
                ],
            }],
        };

        let json = serde_json::to_value(&request).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{
                    "parts": [
                        { "text": "read this" },
                        { "inline_data": { "mime_type": "image/png", "data": "iVBORw0=" } }
                    ]
                }]
            })
        );
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [{ "text": "[{\"summary\":" }, { "text": "\"Gym\"}]" }] } },
                    { "content": { "parts": [{ "text": "ignored" }] } }
                ]
            }"#,
        )
        .expect("should deserialize");

        assert_eq!(response.first_candidate_text().as_deref(), Some(r#"[{"summary":"Gym"}]"#));
    }

    #[test]
    fn blocked_prompt_has_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#)
                .expect("should deserialize");

        assert_eq!(response.first_candidate_text(), None);
        assert_eq!(response.block_reason().as_deref(), Some("SAFETY"));
    }

    #[test]
    fn errors_become_extraction_failures() {
        let err: PlanshotError =
            GeminiError::Api { status: 500, message: "backend error".into() }.into();

        match err {
            PlanshotError::ExtractionFailure(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("backend error"));
            }
            other => panic!("expected extraction failure, got {:?}", other),
        }
    }

    #[test]
    fn empty_response_message_names_reason() {
        assert_eq!(
            GeminiError::EmptyResponse("SAFETY".into()).to_string(),
            "Response contained no text (finish reason: SAFETY)"
        );
    }
}
