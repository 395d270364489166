//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Read the file given explicitly, or the first one found by
//!    [`probe_config_paths`]; fall back to defaults when there is none
//! 2. Apply environment overrides on top
//! 3. Validate the result
//!
//! Supports JSON and TOML files (detected by extension).
//!
//! ## Environment Variables
//! - `GEMINI_API_KEY`: Extraction service API key
//! - `GOOGLE_TOKEN`: Authorized-user token JSON for the calendar
//! - `GOOGLE_ACCESS_TOKEN`: Raw calendar bearer token (wins over `GOOGLE_TOKEN`)
//! - `PLANSHOT_MODEL`: Extraction model name
//! - `PLANSHOT_CALENDAR_ID`: Target calendar id
//! - `PLANSHOT_TIME_ZONE`: IANA time zone for created events
//! - `PLANSHOT_COLOR`: `none`, `random`, or a color id / name
//! - `PLANSHOT_MODE`: `one-shot` or `review`
//! - `PLANSHOT_HTTP_TIMEOUT`: Per-request timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./planshot.toml`, `./planshot.json` (current working directory)
//! 2. `./config.toml`, `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Utc;
use planshot_domain::{ColorSelection, Config, PipelineMode, PlanshotError, Result};

use crate::integrations::calendar::StoredToken;

const CONFIG_FILE_NAMES: [&str; 4] = ["planshot.toml", "planshot.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// Uses `path` when given, otherwise the first probed config file, otherwise
/// built-in defaults. Environment overrides are applied last.
///
/// # Errors
/// Returns `PlanshotError::Config` if:
/// - An explicit file is missing or unreadable
/// - File format is invalid
/// - An environment override has an invalid value
/// - The merged configuration fails validation
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let mut config = match path.or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!(explicit, "No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Fields missing from the file take their defaults.
///
/// # Errors
/// Returns `PlanshotError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PlanshotError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PlanshotError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PlanshotError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Apply environment overrides to `config`
///
/// Unset and blank variables leave the corresponding field alone.
///
/// # Errors
/// Returns `PlanshotError::Config` for unparseable values.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(key) = env_opt("GEMINI_API_KEY") {
        tracing::debug!(key_len = key.len(), "Using GEMINI_API_KEY from environment");
        config.extraction.api_key = Some(key);
    }

    if let Some(raw) = env_opt("GOOGLE_TOKEN") {
        let token = StoredToken::from_json(&raw)?;
        if token.is_expired_at(Utc::now()) {
            tracing::warn!(
                expiry = ?token.expiry(),
                "GOOGLE_TOKEN access token has expired; calendar calls will likely be rejected"
            );
        }
        tracing::debug!(token_len = token.access_token().len(), "Using GOOGLE_TOKEN from environment");
        config.calendar.access_token = Some(token.access_token().to_string());
    }

    if let Some(token) = env_opt("GOOGLE_ACCESS_TOKEN") {
        tracing::debug!(token_len = token.len(), "Using GOOGLE_ACCESS_TOKEN from environment");
        config.calendar.access_token = Some(token);
    }

    if let Some(model) = env_opt("PLANSHOT_MODEL") {
        config.extraction.model = model;
    }
    if let Some(calendar_id) = env_opt("PLANSHOT_CALENDAR_ID") {
        config.calendar.calendar_id = calendar_id;
    }
    if let Some(time_zone) = env_opt("PLANSHOT_TIME_ZONE") {
        config.calendar.time_zone = time_zone;
    }
    if let Some(color) = env_parse::<ColorSelection>("PLANSHOT_COLOR")? {
        config.calendar.color = color;
    }
    if let Some(mode) = env_parse::<PipelineMode>("PLANSHOT_MODE")? {
        config.pipeline.mode = mode;
    }
    if let Some(timeout) = env_parse::<u64>("PLANSHOT_HTTP_TIMEOUT")? {
        config.http.timeout_seconds = timeout;
    }

    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `PlanshotError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PlanshotError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PlanshotError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(PlanshotError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, then the executable's directory,
/// for `planshot.{toml,json}` and `config.{toml,json}`.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Non-blank environment variable, trimmed
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `PlanshotError::Config` naming the variable when parsing fails.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| PlanshotError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}
