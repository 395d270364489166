//! Port interfaces for calendar sync

use async_trait::async_trait;
use planshot_domain::{CalendarEventPayload, CreatedEvent, Result};

/// Creates events in a remote calendar.
///
/// One call creates exactly one event. Implementations do not deduplicate:
/// inserting the same payload twice creates two events.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// Insert `event` into the calendar identified by `calendar_id`.
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &CalendarEventPayload,
    ) -> Result<CreatedEvent>;
}
