//! Application context - dependency injection container
//!
//! Builds every adapter from a loaded [`Config`] and hands the commands a
//! ready pipeline. Credentials are resolved here, so a missing key stops the
//! program before any image is read.

use std::sync::Arc;
use std::time::Duration;

use planshot_core::{strategy_for, CalendarSyncService, PipelineOrchestrator};
use planshot_domain::{Config, Result};
use planshot_infra::{GeminiClient, GoogleCalendarClient, HttpClient};

pub struct AppContext {
    pub config: Config,
    pub pipeline: PipelineOrchestrator,
}

impl AppContext {
    /// Wire the extractor, calendar gateway and orchestrator.
    ///
    /// # Errors
    /// Returns `PlanshotError::CredentialMissing` when either credential is
    /// absent, or an internal error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let credentials = config.credentials()?;

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.http.timeout_seconds))
            .build()?;

        let extractor = GeminiClient::new(credentials.extraction_api_key, http_client.clone())
            .with_model(config.extraction.model.clone())
            .with_api_base(config.extraction.api_base_url.clone());

        let gateway = GoogleCalendarClient::new(credentials.calendar_access_token, http_client)
            .with_api_base(config.calendar.api_base_url.clone());

        let sync = CalendarSyncService::new(
            Arc::new(gateway),
            strategy_for(config.calendar.color),
            config.calendar.calendar_id.clone(),
            config.calendar.time_zone.clone(),
        );

        tracing::info!(
            model = %config.extraction.model,
            calendar_id = %config.calendar.calendar_id,
            time_zone = %config.calendar.time_zone,
            color = %config.calendar.color,
            mode = %config.pipeline.mode,
            "planshot context initialized"
        );

        let pipeline = PipelineOrchestrator::new(Arc::new(extractor), sync);
        Ok(Self { config, pipeline })
    }
}

#[cfg(test)]
mod tests {
    use planshot_domain::PlanshotError;

    use super::*;

    fn configured() -> Config {
        let mut config = Config::default();
        config.extraction.api_key = Some("gemini-key".into());
        config.calendar.access_token = Some("ya29.token".into());
        config
    }

    #[test]
    fn builds_with_both_credentials() {
        let ctx = AppContext::new(configured()).expect("context builds");

        assert!(ctx.pipeline.instruction().contains("start_iso"));
        assert_eq!(ctx.config.calendar.calendar_id, "primary");
    }

    #[test]
    fn missing_api_key_is_credential_missing() {
        let mut config = configured();
        config.extraction.api_key = None;

        let result = AppContext::new(config);

        assert!(matches!(result, Err(PlanshotError::CredentialMissing(_))));
    }

    #[test]
    fn blank_calendar_token_is_credential_missing() {
        let mut config = configured();
        config.calendar.access_token = Some("   ".into());

        let result = AppContext::new(config);

        assert!(matches!(result, Err(PlanshotError::CredentialMissing(msg)) if msg.contains("calendar")));
    }
}
