//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Planshot
///
/// The first four variants are the pipeline taxonomy surfaced to callers.
/// The remaining variants describe setup and adapter failures that are
/// reclassified into one of the pipeline variants at the orchestrator
/// boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum PlanshotError {
    /// A credential required to run the pipeline is absent.
    #[error("Missing credential: {0}")]
    CredentialMissing(String),

    /// The extraction service could not be reached or returned an error.
    #[error("Extraction failed: {0}")]
    ExtractionFailure(String),

    /// The extraction service answered, but not with a task array.
    #[error("Malformed extractor output: {0}")]
    MalformedOutput(String),

    /// A calendar insert call failed part-way through a sync.
    #[error("Calendar sync failed at task {position} (\"{summary}\") after {created} event(s) created: {message}")]
    SyncFailure {
        /// Events created before the failing call. These are not rolled back.
        created: usize,
        /// 1-based position of the task whose insert failed.
        position: usize,
        /// Summary of the task whose insert failed.
        summary: String,
        /// Underlying error detail.
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlanshotError {
    /// Number of calendar events known to exist after this failure.
    ///
    /// Only a [`PlanshotError::SyncFailure`] can leave events behind.
    pub fn events_created(&self) -> usize {
        match self {
            Self::SyncFailure { created, .. } => *created,
            _ => 0,
        }
    }
}

/// Result type alias for Planshot operations
pub type Result<T> = std::result::Result<T, PlanshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_failure_message_names_task_and_count() {
        let err = PlanshotError::SyncFailure {
            created: 1,
            position: 2,
            summary: "Lunch".into(),
            message: "Network error: HTTP 500".into(),
        };

        let text = err.to_string();
        assert!(text.contains("task 2"));
        assert!(text.contains("\"Lunch\""));
        assert!(text.contains("after 1 event(s)"));
        assert!(text.contains("HTTP 500"));
        assert_eq!(err.events_created(), 1);
    }

    #[test]
    fn other_variants_report_no_created_events() {
        assert_eq!(PlanshotError::MalformedOutput("x".into()).events_created(), 0);
        assert_eq!(PlanshotError::ExtractionFailure("x".into()).events_created(), 0);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(PlanshotError::CredentialMissing("GEMINI_API_KEY".into()))
            .expect("serialize");

        assert_eq!(json["type"], "CredentialMissing");
        assert_eq!(json["detail"], "GEMINI_API_KEY");
    }
}
