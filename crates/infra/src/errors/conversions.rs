//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use planshot_domain::PlanshotError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PlanshotError);

impl From<InfraError> for PlanshotError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PlanshotError> for InfraError {
    fn from(value: PlanshotError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPlanshotError {
    fn into_planshot(self) -> PlanshotError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → PlanshotError */
/* -------------------------------------------------------------------------- */

impl IntoPlanshotError for IoError {
    fn into_planshot(self) -> PlanshotError {
        match self.kind() {
            ErrorKind::NotFound => PlanshotError::InvalidInput(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                PlanshotError::InvalidInput(format!("permission denied: {self}"))
            }
            _ => PlanshotError::Internal(format!("I/O error: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_planshot())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PlanshotError */
/* -------------------------------------------------------------------------- */

impl IntoPlanshotError for HttpError {
    fn into_planshot(self) -> PlanshotError {
        if self.is_timeout() {
            return PlanshotError::Network(format!(
                "HTTP request timed out: {}",
                error_chain(&self)
            ));
        }

        if self.is_connect() {
            return PlanshotError::Network(format!(
                "HTTP connection failure: {}",
                error_chain(&self)
            ));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => PlanshotError::Auth(message),
                400..=499 => PlanshotError::InvalidInput(message),
                _ => PlanshotError::Network(message),
            };
        }

        if self.is_decode() {
            return PlanshotError::Internal(format!("failed to decode HTTP response: {self}"));
        }

        PlanshotError::Network(error_chain(&self))
    }
}

/// `err` followed by each of its sources, joined with `: `.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_planshot())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
