//! Calendar integration type definitions

use planshot_domain::PlanshotError;
use serde::Deserialize;

/// Google Calendar API error types
#[derive(Debug, thiserror::Error)]
pub enum CalendarApiError {
    /// Network-level error (connection failed, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Token rejected or lacking the calendar scope
    #[error("Authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    /// The calendar id does not exist or is not visible to the token
    #[error("Calendar '{0}' not found")]
    CalendarNotFound(String),

    /// Any other error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl From<CalendarApiError> for PlanshotError {
    fn from(value: CalendarApiError) -> Self {
        match value {
            CalendarApiError::Network(_) => PlanshotError::Network(value.to_string()),
            CalendarApiError::Authentication { .. } => PlanshotError::Auth(value.to_string()),
            CalendarApiError::CalendarNotFound(_) => PlanshotError::InvalidInput(value.to_string()),
            CalendarApiError::Api { .. } => PlanshotError::Network(value.to_string()),
        }
    }
}

/// Error envelope Google APIs return on non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct GoogleErrorEnvelope {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl GoogleErrorEnvelope {
    /// Human-readable message from an error body, falling back to the raw text.
    pub(crate) fn describe(body: &str) -> String {
        match serde_json::from_str::<Self>(body) {
            Ok(envelope) => match envelope.error.status {
                Some(status) if !envelope.error.message.is_empty() => {
                    format!("{} ({status})", envelope.error.message)
                }
                _ if !envelope.error.message.is_empty() => envelope.error.message,
                _ => body.trim().to_string(),
            },
            Err(_) => body.trim().to_string(),
        }
    }
}
