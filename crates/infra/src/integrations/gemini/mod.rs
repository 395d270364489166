/// Gemini integration for reading schedules out of photographed plans
///
/// # Architecture
///
/// - **Client**: `GeminiClient` - `generateContent` wrapper implementing
///   `ScheduleExtractor`
/// - **Types**: Request/response types and `GeminiError`
///
/// # Usage
///
/// ```no_run
/// use planshot_infra::http::HttpClient;
/// use planshot_infra::integrations::gemini::GeminiClient;
/// # async fn example(image: planshot_domain::ImageUpload) -> Result<(), Box<dyn std::error::Error>> {
/// let http_client = HttpClient::new()?;
///
/// let api_key = std::env::var("GEMINI_API_KEY")?;
/// let client = GeminiClient::new(api_key, http_client);
///
/// let text = client.generate("List the tasks as JSON.", &image).await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
///
/// # Error Handling
///
/// - **401/403**: `Authentication`
/// - **429**: `RateLimit`
/// - **Other non-2xx**: `Api` with status and body
/// - **No text in the first candidate**: `EmptyResponse`
///
/// Nothing is retried. Every variant converts into
/// `PlanshotError::ExtractionFailure`.
pub mod client;
pub mod types;

pub use client::GeminiClient;
pub use types::GeminiError;
