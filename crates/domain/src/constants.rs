//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Extraction service
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

// Calendar service
pub const DEFAULT_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
/// Google's alias for the user's main calendar
pub const PRIMARY_CALENDAR_ID: &str = "primary";
pub const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";

// Transport
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

// Parser diagnostics
pub const MALFORMED_PREVIEW_CHARS: usize = 160;
