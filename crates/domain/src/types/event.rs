//! Calendar event payloads and display colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::task::TaskRecord;
use crate::errors::{PlanshotError, Result};

/// Google Calendar event color identifier (`"1"`..`"11"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorId(u8);

const COLOR_NAMES: [&str; 11] = [
    "Lavender",
    "Sage",
    "Grape",
    "Flamingo",
    "Banana",
    "Tangerine",
    "Peacock",
    "Graphite",
    "Blueberry",
    "Basil",
    "Tomato",
];

impl ColorId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 11;

    /// Every valid event color, in id order.
    pub const PALETTE: [ColorId; 11] = [
        ColorId(1),
        ColorId(2),
        ColorId(3),
        ColorId(4),
        ColorId(5),
        ColorId(6),
        ColorId(7),
        ColorId(8),
        ColorId(9),
        ColorId(10),
        ColorId(11),
    ];

    /// Create a color id.
    ///
    /// # Errors
    /// Returns `PlanshotError::InvalidInput` when `id` is outside `1..=11`.
    pub fn new(id: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&id) {
            Ok(Self(id))
        } else {
            Err(PlanshotError::InvalidInput(format!(
                "color id must be between {} and {}, got {id}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Display name Google shows for this color.
    pub fn name(self) -> &'static str {
        COLOR_NAMES[usize::from(self.0 - 1)]
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ColorId {
    type Err = PlanshotError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return Self::new(id);
        }
        COLOR_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(trimmed))
            .map(|index| Self::PALETTE[index])
            .ok_or_else(|| PlanshotError::InvalidInput(format!("unknown color: {s}")))
    }
}

impl TryFrom<String> for ColorId {
    type Error = PlanshotError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ColorId> for String {
    fn from(value: ColorId) -> Self {
        value.to_string()
    }
}

/// `start`/`end` object of a calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: String,
    pub time_zone: String,
}

/// Body of one calendar "insert event" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventPayload {
    pub summary: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<ColorId>,
}

impl CalendarEventPayload {
    /// Build the payload for `task` in the given IANA time zone.
    pub fn from_task(task: &TaskRecord, time_zone: &str, color_id: Option<ColorId>) -> Self {
        Self {
            summary: task.summary().to_string(),
            start: EventDateTime {
                date_time: task.start().to_string(),
                time_zone: time_zone.to_string(),
            },
            end: EventDateTime { date_time: task.end().to_string(), time_zone: time_zone.to_string() },
            color_id,
        }
    }
}

/// Event as acknowledged by the calendar service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
}
