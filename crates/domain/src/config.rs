//! Configuration management

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_API_BASE, DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_TIME_ZONE, PRIMARY_CALENDAR_ID,
};
use crate::errors::{PlanshotError, Result};
use crate::types::{ColorId, PipelineMode};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub calendar: CalendarConfig,
    pub pipeline: PipelineConfig,
    pub http: HttpConfig,
}

/// Extraction service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
}

/// Calendar service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub calendar_id: String,
    pub time_zone: String,
    pub color: ColorSelection,
    pub api_base_url: String,
}

/// Pipeline behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub mode: PipelineMode,
}

/// Transport configuration shared by both remote services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base_url: DEFAULT_GEMINI_API_BASE.to_string(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            calendar_id: PRIMARY_CALENDAR_ID.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            color: ColorSelection::default(),
            api_base_url: DEFAULT_CALENDAR_API_BASE.to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS }
    }
}

/// How each event's display color is chosen.
///
/// Written in config files as `"none"`, `"random"`, or a color id / name
/// (`"7"`, `"peacock"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorSelection {
    /// Leave the calendar's default color.
    None,
    /// Pick uniformly from the palette, independently per event.
    #[default]
    Random,
    /// Use the same color for every event.
    Fixed(ColorId),
}

impl fmt::Display for ColorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Random => f.write_str("random"),
            Self::Fixed(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for ColorSelection {
    type Err = PlanshotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "default" => Ok(Self::None),
            "random" => Ok(Self::Random),
            other => other.parse::<ColorId>().map(Self::Fixed).map_err(|_| {
                PlanshotError::Config(format!(
                    "invalid color selection '{s}' (expected none, random, 1-11 or a color name)"
                ))
            }),
        }
    }
}

impl TryFrom<String> for ColorSelection {
    type Error = PlanshotError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ColorSelection> for String {
    fn from(value: ColorSelection) -> Self {
        value.to_string()
    }
}

/// Credentials resolved from configuration. Both are treated as opaque.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub extraction_api_key: String,
    pub calendar_access_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("extraction_api_key", &"<redacted>")
            .field("calendar_access_token", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Resolve both service credentials.
    ///
    /// # Errors
    /// Returns `PlanshotError::CredentialMissing` naming the first absent
    /// or blank credential.
    pub fn credentials(&self) -> Result<Credentials> {
        let extraction_api_key = non_blank(self.extraction.api_key.as_deref())
            .ok_or_else(|| {
                PlanshotError::CredentialMissing(
                    "extraction API key (set GEMINI_API_KEY or extraction.api_key)".into(),
                )
            })?
            .to_string();

        let calendar_access_token = non_blank(self.calendar.access_token.as_deref())
            .ok_or_else(|| {
                PlanshotError::CredentialMissing(
                    "calendar token (set GOOGLE_TOKEN, GOOGLE_ACCESS_TOKEN or calendar.access_token)"
                        .into(),
                )
            })?
            .to_string();

        Ok(Credentials { extraction_api_key, calendar_access_token })
    }

    /// Check non-credential settings.
    ///
    /// # Errors
    /// Returns `PlanshotError::Config` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.extraction.model.trim().is_empty() {
            return Err(PlanshotError::Config("extraction.model must not be empty".into()));
        }
        if self.calendar.calendar_id.trim().is_empty() {
            return Err(PlanshotError::Config("calendar.calendar_id must not be empty".into()));
        }
        self.calendar.time_zone.parse::<chrono_tz::Tz>().map_err(|_| {
            PlanshotError::Config(format!(
                "calendar.time_zone '{}' is not an IANA time zone",
                self.calendar.time_zone
            ))
        })?;
        if self.http.timeout_seconds == 0 {
            return Err(PlanshotError::Config("http.timeout_seconds must be positive".into()));
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Config {
        let mut config = Config::default();
        config.extraction.api_key = Some("gemini-key".into());
        config.calendar.access_token = Some("ya29.token".into());
        config
    }

    #[test]
    fn defaults_match_primary_calendar_and_random_colors() {
        let config = Config::default();

        assert_eq!(config.calendar.calendar_id, "primary");
        assert_eq!(config.calendar.time_zone, "Asia/Kolkata");
        assert_eq!(config.calendar.color, ColorSelection::Random);
        assert_eq!(config.extraction.model, "gemini-flash-latest");
        assert_eq!(config.pipeline.mode, PipelineMode::OneShot);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_api_key_is_credential_error() {
        let mut config = configured();
        config.extraction.api_key = Some("   ".into());

        let err = config.credentials().unwrap_err();
        assert!(matches!(err, PlanshotError::CredentialMissing(ref m) if m.contains("GEMINI_API_KEY")));
    }

    #[test]
    fn missing_token_is_credential_error() {
        let mut config = configured();
        config.calendar.access_token = None;

        let err = config.credentials().unwrap_err();
        assert!(matches!(err, PlanshotError::CredentialMissing(ref m) if m.contains("GOOGLE_TOKEN")));
    }

    #[test]
    fn credentials_debug_is_redacted() {
        let creds = configured().credentials().expect("credentials");
        let debug = format!("{creds:?}");

        assert!(!debug.contains("gemini-key"));
        assert!(!debug.contains("ya29"));
    }

    #[test]
    fn rejects_unknown_time_zone() {
        let mut config = configured();
        config.calendar.time_zone = "Mars/Olympus".into();

        assert!(matches!(config.validate(), Err(PlanshotError::Config(_))));
    }

    #[test]
    fn color_selection_spellings() {
        assert_eq!("random".parse::<ColorSelection>(), Ok(ColorSelection::Random));
        assert_eq!("NONE".parse::<ColorSelection>(), Ok(ColorSelection::None));
        assert_eq!(
            "peacock".parse::<ColorSelection>().map(|c| c.to_string()),
            Ok("7".to_string())
        );
        assert!(matches!("12".parse::<ColorSelection>(), Err(PlanshotError::Config(_))));
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "calendar": { "color": "3", "time_zone": "Europe/Berlin" }, "pipeline": { "mode": "review" } }"#,
        )
        .expect("deserialize");

        assert_eq!(config.calendar.color, ColorSelection::Fixed(ColorId::PALETTE[2]));
        assert_eq!(config.calendar.calendar_id, "primary");
        assert_eq!(config.pipeline.mode, PipelineMode::Review);
        assert_eq!(config.http.timeout_seconds, 60);
    }

    #[test]
    fn serialization_skips_secrets() {
        let json = serde_json::to_string(&configured()).expect("serialize");

        assert!(!json.contains("gemini-key"));
        assert!(!json.contains("ya29"));
    }
}
