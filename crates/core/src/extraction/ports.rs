//! Port interfaces for schedule extraction

use async_trait::async_trait;
use planshot_domain::{ImageUpload, Result};

/// One image plus the instruction sent with it. Lives for a single call.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRequest<'a> {
    pub image: &'a ImageUpload,
    pub instruction: &'a str,
}

/// Trait for services that read a schedule out of an image
#[async_trait]
pub trait ScheduleExtractor: Send + Sync {
    /// Send the request and return the service's text verbatim.
    ///
    /// Implementations must not retry or post-process the response.
    async fn extract(&self, request: ExtractionRequest<'_>) -> Result<String>;

    /// Human-readable name of the backing model, for logs and the CLI banner.
    fn model_name(&self) -> &str;
}
