//! Pipeline orchestration and run state

pub mod service;
mod state;

pub use service::{PendingReview, PipelineOrchestrator, PipelineOutcome};
