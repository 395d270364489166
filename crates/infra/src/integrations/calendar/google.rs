//! Google Calendar v3 gateway

use async_trait::async_trait;
use planshot_core::sync::CalendarGateway;
use planshot_domain::constants::DEFAULT_CALENDAR_API_BASE;
use planshot_domain::{CalendarEventPayload, CreatedEvent, PlanshotError, Result};
use reqwest::Method;
use tracing::{debug, instrument, warn};

use super::types::{CalendarApiError, GoogleErrorEnvelope};
use crate::http::HttpClient;

/// Inserts events through the Google Calendar REST API with a bearer token
pub struct GoogleCalendarClient {
    http_client: HttpClient,
    access_token: String,
    api_base: String,
}

impl GoogleCalendarClient {
    pub fn new(access_token: String, http_client: HttpClient) -> Self {
        Self { http_client, access_token, api_base: DEFAULT_CALENDAR_API_BASE.to_string() }
    }

    /// Point the client at a different API host
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    fn events_url(&self, calendar_id: &str) -> String {
        format!(
            "{}/calendars/{}/events",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(calendar_id)
        )
    }

    /// Create one event.
    ///
    /// # Errors
    /// Returns `CalendarApiError` for transport failures and error statuses.
    #[instrument(skip_all, fields(calendar_id = %calendar_id, summary = %event.summary))]
    pub async fn create_event(
        &self,
        calendar_id: &str,
        event: &CalendarEventPayload,
    ) -> std::result::Result<CreatedEvent, CalendarApiError> {
        let request_builder = self
            .http_client
            .request(Method::POST, self.events_url(calendar_id))
            .bearer_auth(&self.access_token)
            .json(event);

        let response = self.http_client.send(request_builder).await.map_err(|err| match err {
            PlanshotError::Network(msg) => CalendarApiError::Network(msg),
            other => CalendarApiError::Network(format!("HTTP error: {other}")),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received Google Calendar response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            let message = GoogleErrorEnvelope::describe(&body);
            return Err(match status.as_u16() {
                401 | 403 => CalendarApiError::Authentication { status: status.as_u16(), message },
                404 => CalendarApiError::CalendarNotFound(calendar_id.to_string()),
                code => CalendarApiError::Api { status: code, message },
            });
        }

        // A 2xx means the event exists, so an unreadable body only loses the id
        let body = response.text().await.unwrap_or_default();
        let created = match serde_json::from_str::<CreatedEvent>(&body) {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "created event response did not parse; keeping it as created");
                CreatedEvent { id: String::new(), html_link: None }
            }
        };

        debug!(event_id = %created.id, "calendar event created");
        Ok(created)
    }
}

#[async_trait]
impl CalendarGateway for GoogleCalendarClient {
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &CalendarEventPayload,
    ) -> Result<CreatedEvent> {
        Ok(self.create_event(calendar_id, event).await?)
    }
}
