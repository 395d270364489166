//! # Planshot Domain
//!
//! Business domain types and models for Planshot.
//!
//! This crate contains:
//! - Task records, calendar event payloads and color ids
//! - Pipeline modes, run states and sync outcomes
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Planshot crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
