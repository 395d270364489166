//! Image-to-text extraction
//!
//! The port every extraction backend implements, and the instruction that
//! tells the backend which output shape to produce.

pub mod ports;
pub mod prompt;

pub use ports::{ExtractionRequest, ScheduleExtractor};
pub use prompt::extraction_instruction;
