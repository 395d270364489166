//! Console rendering of pipeline progress

use planshot_core::PipelineObserver;
use planshot_domain::{CreatedEvent, PipelineState, SyncProgress, TaskRecord};

/// Prints stage hints to stderr and one stdout line per created event.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl PipelineObserver for ConsoleObserver {
    fn state_changed(&self, from: PipelineState, to: PipelineState) {
        tracing::debug!(%from, %to, "pipeline state changed");
        match to {
            PipelineState::Extracting => eprintln!("Reading schedule from image..."),
            PipelineState::Syncing => eprintln!("Adding tasks to your calendar..."),
            _ => {}
        }
    }

    fn task_synced(&self, task: &TaskRecord, _event: &CreatedEvent, progress: SyncProgress) {
        println!("{}", progress_line(task, progress));
    }
}

pub fn progress_line(task: &TaskRecord, progress: SyncProgress) -> String {
    format!(
        "[{}/{}] created \"{}\" ({:.0}%)",
        progress.completed,
        progress.total,
        task.summary(),
        progress.fraction() * 100.0
    )
}
