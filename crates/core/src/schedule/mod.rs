//! Decoding extractor output into task records

pub mod parser;

pub use parser::{parse_schedule, strip_code_fences};
