//! Calendar sync service

use std::sync::Arc;

use planshot_domain::{
    CalendarEventPayload, PlanshotError, Result, SyncProgress, SyncResult, TaskRecord,
};
use tracing::{debug, info, warn};

use super::color::ColorStrategy;
use super::ports::CalendarGateway;
use crate::observer_ports::PipelineObserver;

/// Creates one calendar event per task, in input order.
pub struct CalendarSyncService {
    gateway: Arc<dyn CalendarGateway>,
    colors: Arc<dyn ColorStrategy>,
    calendar_id: String,
    time_zone: String,
}

impl CalendarSyncService {
    pub fn new(
        gateway: Arc<dyn CalendarGateway>,
        colors: Arc<dyn ColorStrategy>,
        calendar_id: impl Into<String>,
        time_zone: impl Into<String>,
    ) -> Self {
        Self { gateway, colors, calendar_id: calendar_id.into(), time_zone: time_zone.into() }
    }

    /// Build the insert payload for one task, drawing its color from the strategy.
    pub fn build_payload(&self, task: &TaskRecord) -> CalendarEventPayload {
        CalendarEventPayload::from_task(task, &self.time_zone, self.colors.next_color())
    }

    /// Insert every task, one call at a time.
    ///
    /// Progress is reported to `observer` after each successful insert. An
    /// empty task list makes no calls and succeeds with zero events.
    ///
    /// # Errors
    /// Stops at the first failed insert and returns
    /// `PlanshotError::SyncFailure` carrying the number of events already
    /// created and the 1-based position of the failing task. Events created
    /// before the failure are left in the calendar.
    pub async fn sync(
        &self,
        tasks: &[TaskRecord],
        observer: &dyn PipelineObserver,
    ) -> Result<SyncResult> {
        let total = tasks.len();
        let mut result = SyncResult { created: Vec::with_capacity(total) };

        info!(total, calendar_id = %self.calendar_id, "syncing tasks to calendar");

        for (index, task) in tasks.iter().enumerate() {
            let payload = self.build_payload(task);
            debug!(
                position = index + 1,
                summary = task.summary(),
                color = ?payload.color_id,
                "inserting calendar event"
            );

            match self.gateway.insert_event(&self.calendar_id, &payload).await {
                Ok(event) => {
                    let progress = SyncProgress { completed: index + 1, total };
                    observer.task_synced(task, &event, progress);
                    result.created.push(event);
                }
                Err(err) => {
                    let created = result.count();
                    warn!(
                        position = index + 1,
                        created,
                        summary = task.summary(),
                        error = %err,
                        "calendar insert failed; stopping sync"
                    );
                    return Err(PlanshotError::SyncFailure {
                        created,
                        position: index + 1,
                        summary: task.summary().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        info!(created = result.count(), "calendar sync complete");
        Ok(result)
    }
}
