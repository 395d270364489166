//! Port for watching a pipeline run
//!
//! Front ends implement this to render state changes and per-task progress.
//! Every method has a no-op default so observers only override what they show.

use planshot_domain::{CreatedEvent, PipelineState, SyncProgress, TaskRecord};

pub trait PipelineObserver: Send + Sync {
    /// Called on every state transition of a run, including the move to `Failed`.
    fn state_changed(&self, _from: PipelineState, _to: PipelineState) {}

    /// Called after each successful calendar insert, in input order.
    fn task_synced(&self, _task: &TaskRecord, _event: &CreatedEvent, _progress: SyncProgress) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}
