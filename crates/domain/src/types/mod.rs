//! Domain types and models

pub mod event;
pub mod image;
pub mod pipeline;
pub mod task;

pub use event::{CalendarEventPayload, ColorId, CreatedEvent, EventDateTime};
pub use image::{ImageFormat, ImageUpload};
pub use pipeline::{PipelineMode, PipelineState, SyncProgress, SyncResult};
pub use task::TaskRecord;
