//! Stored Google authorization token
//!
//! Accepts the "authorized user" JSON Google's auth libraries write
//! (`token.json`). Only the access token is used; refreshing it is left to
//! whatever produced the file.

use chrono::{DateTime, NaiveDateTime, Utc};
use planshot_domain::{PlanshotError, Result};
use serde::Deserialize;

#[derive(Clone, Deserialize)]
pub struct StoredToken {
    #[serde(alias = "access_token")]
    token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expiry: Option<String>,
    #[serde(default)]
    scopes: Vec<String>,
}

impl StoredToken {
    /// Parse authorized-user JSON.
    ///
    /// # Errors
    /// Returns `PlanshotError::Config` when the JSON is malformed or carries
    /// no access token.
    pub fn from_json(raw: &str) -> Result<Self> {
        let token: Self = serde_json::from_str(raw)
            .map_err(|e| PlanshotError::Config(format!("GOOGLE_TOKEN is not valid token JSON: {e}")))?;
        if token.token.trim().is_empty() {
            return Err(PlanshotError::Config("GOOGLE_TOKEN has an empty access token".into()));
        }
        Ok(token)
    }

    pub fn access_token(&self) -> &str {
        self.token.trim()
    }

    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Expiry instant, when present and parseable. Naive timestamps are UTC.
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        let raw = self.expiry.as_deref()?.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
            .ok()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry().is_some_and(|expiry| expiry <= now)
    }
}

impl std::fmt::Debug for StoredToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredToken")
            .field("token", &format!("<{} chars>", self.token.len()))
            .field("has_refresh_token", &self.has_refresh_token())
            .field("expiry", &self.expiry)
            .field("scopes", &self.scopes)
            .finish()
    }
}
