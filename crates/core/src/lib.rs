//! # Planshot Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for the extraction service, the calendar and observers
//! - The tolerant schedule parser
//! - Calendar sync and the pipeline orchestrator
//!
//! ## Architecture Principles
//! - Only depends on `planshot-domain`
//! - No HTTP, file system or terminal code
//! - All external dependencies via traits

pub mod extraction;
pub mod pipeline;
pub mod schedule;
pub mod sync;

// Infrastructure ports
pub mod observer_ports;

pub use extraction::{extraction_instruction, ExtractionRequest, ScheduleExtractor};
pub use observer_ports::{NoopObserver, PipelineObserver};
pub use pipeline::{PendingReview, PipelineOrchestrator, PipelineOutcome};
pub use schedule::{parse_schedule, strip_code_fences};
pub use sync::{
    strategy_for, CalendarGateway, CalendarSyncService, ColorStrategy, FixedColor, NoColor,
    RandomPaletteColor,
};
