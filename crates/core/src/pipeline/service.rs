//! Pipeline orchestrator - extract, parse, sync

use std::sync::Arc;

use chrono::{Datelike, Local};
use planshot_domain::{
    ImageUpload, PipelineMode, PipelineState, PlanshotError, Result, SyncResult, TaskRecord,
};
use tracing::{info, instrument};

use super::state::RunTracker;
use crate::extraction::{extraction_instruction, ExtractionRequest, ScheduleExtractor};
use crate::observer_ports::PipelineObserver;
use crate::schedule::parse_schedule;
use crate::sync::CalendarSyncService;

/// Parsed tasks waiting for the caller's go-ahead.
///
/// Produced only by [`PipelineOrchestrator::review`]. Syncing requires
/// handing it back to [`PipelineOrchestrator::confirm`]; dropping it ends the
/// run without touching the calendar.
#[must_use = "a pending review does nothing until it is confirmed"]
#[derive(Debug)]
pub struct PendingReview {
    tasks: Vec<TaskRecord>,
}

impl PendingReview {
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Abandon the review and keep the parsed tasks.
    pub fn into_tasks(self) -> Vec<TaskRecord> {
        self.tasks
    }
}

/// Result of [`PipelineOrchestrator::execute`].
#[derive(Debug)]
pub enum PipelineOutcome {
    /// One-shot run finished; events were created.
    Synced(SyncResult),
    /// Review run stopped after parsing.
    AwaitingConfirmation(PendingReview),
}

/// Sequences extractor, parser and calendar sync for one image at a time.
pub struct PipelineOrchestrator {
    extractor: Arc<dyn ScheduleExtractor>,
    sync: CalendarSyncService,
    instruction: String,
}

impl PipelineOrchestrator {
    /// Build an orchestrator whose instruction names the current local year.
    pub fn new(extractor: Arc<dyn ScheduleExtractor>, sync: CalendarSyncService) -> Self {
        let instruction = extraction_instruction(Local::now().year());
        Self { extractor, sync, instruction }
    }

    /// Replace the extraction instruction.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Model behind the extractor, as it should be shown to the user.
    pub fn model_name(&self) -> &str {
        self.extractor.model_name()
    }

    /// One-shot mode: extract, parse and sync without stopping.
    ///
    /// # Errors
    /// Returns the failing stage's error: `ExtractionFailure` (or
    /// `CredentialMissing`), `MalformedOutput` or `SyncFailure`.
    #[instrument(skip_all, fields(image = image.name(), mode = "one-shot"))]
    pub async fn run(
        &self,
        image: &ImageUpload,
        observer: &dyn PipelineObserver,
    ) -> Result<SyncResult> {
        let mut tracker = RunTracker::new(observer);
        let tasks = self.extract_tasks(image, &mut tracker).await?;
        self.sync_tasks(&tasks, &mut tracker).await
    }

    /// Review mode, first half: extract and parse, then stop.
    ///
    /// # Errors
    /// Returns `ExtractionFailure` (or `CredentialMissing`) or `MalformedOutput`.
    #[instrument(skip_all, fields(image = image.name(), mode = "review"))]
    pub async fn review(
        &self,
        image: &ImageUpload,
        observer: &dyn PipelineObserver,
    ) -> Result<PendingReview> {
        let mut tracker = RunTracker::new(observer);
        let tasks = self.extract_tasks(image, &mut tracker).await?;
        tracker.advance(PipelineState::ReviewPending)?;
        info!(task_count = tasks.len(), "awaiting confirmation before sync");
        Ok(PendingReview { tasks })
    }

    /// Review mode, second half: sync the reviewed tasks.
    ///
    /// # Errors
    /// Returns `SyncFailure` on the first failed insert.
    #[instrument(skip_all, fields(task_count = pending.tasks.len()))]
    pub async fn confirm(
        &self,
        pending: PendingReview,
        observer: &dyn PipelineObserver,
    ) -> Result<SyncResult> {
        let mut tracker = RunTracker::resume(PipelineState::ReviewPending, observer);
        self.sync_tasks(&pending.tasks, &mut tracker).await
    }

    /// Run `image` in the given mode.
    ///
    /// # Errors
    /// See [`Self::run`] and [`Self::review`].
    pub async fn execute(
        &self,
        image: &ImageUpload,
        mode: PipelineMode,
        observer: &dyn PipelineObserver,
    ) -> Result<PipelineOutcome> {
        match mode {
            PipelineMode::OneShot => self.run(image, observer).await.map(PipelineOutcome::Synced),
            PipelineMode::Review => {
                self.review(image, observer).await.map(PipelineOutcome::AwaitingConfirmation)
            }
        }
    }

    async fn extract_tasks(
        &self,
        image: &ImageUpload,
        tracker: &mut RunTracker<'_>,
    ) -> Result<Vec<TaskRecord>> {
        tracker.advance(PipelineState::Extracting)?;
        info!(model = self.extractor.model_name(), "extracting schedule from image");
        let request = ExtractionRequest { image, instruction: &self.instruction };
        let raw = match self.extractor.extract(request).await {
            Ok(raw) => raw,
            Err(err) => return Err(tracker.fail(as_extraction_failure(err))),
        };

        tracker.advance(PipelineState::Parsing)?;
        match parse_schedule(&raw) {
            Ok(tasks) => {
                info!(task_count = tasks.len(), "parsed schedule");
                Ok(tasks)
            }
            Err(err) => Err(tracker.fail(as_malformed_output(err))),
        }
    }

    async fn sync_tasks(
        &self,
        tasks: &[TaskRecord],
        tracker: &mut RunTracker<'_>,
    ) -> Result<SyncResult> {
        tracker.advance(PipelineState::Syncing)?;
        match self.sync.sync(tasks, tracker.observer()).await {
            Ok(result) => {
                tracker.advance(PipelineState::Done)?;
                Ok(result)
            }
            Err(err) => Err(tracker.fail(as_sync_failure(err))),
        }
    }
}

fn as_extraction_failure(err: PlanshotError) -> PlanshotError {
    match err {
        PlanshotError::ExtractionFailure(_) | PlanshotError::CredentialMissing(_) => err,
        other => PlanshotError::ExtractionFailure(other.to_string()),
    }
}

fn as_malformed_output(err: PlanshotError) -> PlanshotError {
    match err {
        PlanshotError::MalformedOutput(_) => err,
        other => PlanshotError::MalformedOutput(other.to_string()),
    }
}

fn as_sync_failure(err: PlanshotError) -> PlanshotError {
    match err {
        PlanshotError::SyncFailure { .. } => err,
        other => PlanshotError::SyncFailure {
            created: 0,
            position: 1,
            summary: String::new(),
            message: other.to_string(),
        },
    }
}
