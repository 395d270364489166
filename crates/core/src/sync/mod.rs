//! Turning task records into calendar events

pub mod color;
pub mod ports;
pub mod service;

pub use color::{strategy_for, ColorStrategy, FixedColor, NoColor, RandomPaletteColor};
pub use ports::CalendarGateway;
pub use service::CalendarSyncService;
