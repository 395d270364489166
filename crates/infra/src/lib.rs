//! # Planshot Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client shared by both remote services
//! - External service integrations (Gemini, Google Calendar)
//! - Image loading and format sniffing
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `planshot-core`
//! - Depends on `planshot-domain` and `planshot-core`
//! - Contains all "impure" code (network and file I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod image_loader;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use image_loader::{image_from_bytes, load_image};
pub use integrations::calendar::{CalendarApiError, GoogleCalendarClient, StoredToken};
pub use integrations::gemini::{GeminiClient, GeminiError};
