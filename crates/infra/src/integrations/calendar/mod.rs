//! Google Calendar integration
//!
//! Event creation through the Calendar v3 REST API, plus parsing of the
//! stored authorization token that grants it.

pub mod google;
pub mod token;
pub mod types;

pub use google::GoogleCalendarClient;
pub use token::StoredToken;
pub use types::CalendarApiError;
