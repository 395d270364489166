//! Task records extracted from a photographed plan

use serde::{Deserialize, Serialize};

/// One (label, start, end) triple read from the image.
///
/// The timestamps are kept exactly as the extractor wrote them and handed to
/// the calendar verbatim; the calendar service is the authority on whether
/// they are acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    summary: String,
    #[serde(rename = "start_iso")]
    start: String,
    #[serde(rename = "end_iso")]
    end: String,
}

impl TaskRecord {
    pub fn new(
        summary: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self { summary: summary.into(), start: start.into(), end: end.into() }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Start timestamp as written by the extractor.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// End timestamp as written by the extractor.
    pub fn end(&self) -> &str {
        &self.end
    }
}
