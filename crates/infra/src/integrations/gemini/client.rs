/// Gemini API client for schedule extraction
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use planshot_core::extraction::{ExtractionRequest, ScheduleExtractor};
use planshot_domain::constants::{DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL};
use planshot_domain::{ImageUpload, PlanshotError};
use reqwest::Method;
use tracing::{debug, info};

use super::types::{
    Content, GeminiError, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
};
use crate::http::HttpClient;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client that reads schedules out of images
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key (required)
    /// * `http_client` - shared HTTP transport
    pub fn new(api_key: String, http_client: HttpClient) -> Self {
        Self {
            http_client,
            api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
        }
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different API host
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    /// Send `instruction` and `image` to the model and return the text it writes.
    ///
    /// # Errors
    /// Returns `GeminiError` for network failures, error statuses, or a
    /// response without any text.
    pub async fn generate(
        &self,
        instruction: &str,
        image: &ImageUpload,
    ) -> Result<String, GeminiError> {
        info!(
            model = %self.model,
            image = image.name(),
            image_bytes = image.bytes().len(),
            "requesting schedule extraction from Gemini"
        );

        let request_payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: instruction.to_string() },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.format().mime_type().to_string(),
                            data: STANDARD.encode(image.bytes()),
                        },
                    },
                ],
            }],
        };

        let request_builder = self
            .http_client
            .request(Method::POST, self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_payload);

        let response = self.http_client.send(request_builder).await.map_err(|err| match err {
            PlanshotError::Network(msg) => GeminiError::Network(msg),
            other => GeminiError::Network(format!("HTTP error: {other}")),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received Gemini API response");

        if !status.is_success() {
            return Err(self.handle_error_status(status.as_u16(), response).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidSchema(format!("Failed to parse response: {e}")))?;

        let text = body.first_candidate_text().ok_or_else(|| {
            GeminiError::EmptyResponse(body.block_reason().unwrap_or_else(|| "none".to_string()))
        })?;

        info!(response_chars = text.chars().count(), "Gemini extraction complete");
        Ok(text)
    }

    /// Handle HTTP error status codes
    async fn handle_error_status(&self, status: u16, response: reqwest::Response) -> GeminiError {
        let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            401 | 403 => {
                GeminiError::Authentication(format!("API key rejected ({status}): {message}"))
            }
            429 => GeminiError::RateLimit(message),
            _ => GeminiError::Api { status, message },
        }
    }
}

#[async_trait]
impl ScheduleExtractor for GeminiClient {
    async fn extract(&self, request: ExtractionRequest<'_>) -> planshot_domain::Result<String> {
        Ok(self.generate(request.instruction, request.image).await?)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
