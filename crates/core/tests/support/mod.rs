//! Shared test helpers for `planshot-core` integration tests.
//!
//! In-memory stand-ins for the extraction service, the calendar and the
//! pipeline observer, so pipeline tests can focus on behaviour.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use planshot_core::{CalendarGateway, ExtractionRequest, PipelineObserver, ScheduleExtractor};
use planshot_domain::{
    CalendarEventPayload, CreatedEvent, ImageFormat, ImageUpload, PipelineState, PlanshotError,
    Result, SyncProgress, TaskRecord,
};

pub const GYM_JSON: &str =
    r#"[{"summary":"Gym","start_iso":"2025-06-01T07:00:00","end_iso":"2025-06-01T08:00:00"}]"#;

pub const THREE_TASKS_JSON: &str = r#"```json
[
  {"summary": "Standup", "start_iso": "2025-06-02T09:00:00", "end_iso": "2025-06-02T09:15:00"},
  {"summary": "Lunch", "start_iso": "2025-06-02T13:00:00", "end_iso": "2025-06-02T14:00:00"},
  {"summary": "Review PRs", "start_iso": "2025-06-02T15:00:00", "end_iso": "2025-06-02T16:30:00"}
]
```"#;

/// Small PNG-tagged upload; the mocks never decode it.
pub fn sample_image() -> ImageUpload {
    ImageUpload::new("plan.png", ImageFormat::Png, vec![0x89, b'P', b'N', b'G'])
        .expect("non-empty image")
}

pub fn tasks(summaries: &[&str]) -> Vec<TaskRecord> {
    summaries
        .iter()
        .enumerate()
        .map(|(i, summary)| {
            TaskRecord::new(
                *summary,
                format!("2025-06-01T{:02}:00:00", 8 + i),
                format!("2025-06-01T{:02}:30:00", 8 + i),
            )
        })
        .collect()
}

/// Extractor that answers every call with a fixed reply.
pub struct ScriptedExtractor {
    reply: Result<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExtractor {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { reply: Ok(text.into()), calls: Mutex::new(Vec::new()) }
    }

    pub fn failing(err: PlanshotError) -> Self {
        Self { reply: Err(err), calls: Mutex::new(Vec::new()) }
    }

    /// Instructions received, one per call.
    pub fn instructions(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScheduleExtractor for ScriptedExtractor {
    async fn extract(&self, request: ExtractionRequest<'_>) -> Result<String> {
        self.calls.lock().unwrap().push(request.instruction.to_string());
        self.reply.clone()
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Calendar that records every insert and can be told to fail on the nth.
#[derive(Default, Clone)]
pub struct RecordingGateway {
    inserts: Arc<Mutex<Vec<(String, CalendarEventPayload)>>>,
    fail_on: Option<usize>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `call`th insert (1-based) and every one after it.
    pub fn failing_on(call: usize) -> Self {
        Self { fail_on: Some(call), ..Self::default() }
    }

    /// Every attempted insert, including failed ones, in call order.
    pub fn inserts(&self) -> Vec<(String, CalendarEventPayload)> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn summaries(&self) -> Vec<String> {
        self.inserts().into_iter().map(|(_, event)| event.summary).collect()
    }
}

#[async_trait]
impl CalendarGateway for RecordingGateway {
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &CalendarEventPayload,
    ) -> Result<CreatedEvent> {
        let call = {
            let mut inserts = self.inserts.lock().unwrap();
            inserts.push((calendar_id.to_string(), event.clone()));
            inserts.len()
        };

        if self.fail_on.is_some_and(|n| call >= n) {
            return Err(PlanshotError::Network("calendar returned 503".into()));
        }

        Ok(CreatedEvent { id: format!("evt-{call}"), html_link: None })
    }
}

/// Observer that keeps everything it is told.
#[derive(Default)]
pub struct RecordingObserver {
    transitions: Mutex<Vec<(PipelineState, PipelineState)>>,
    progress: Mutex<Vec<(String, SyncProgress)>>,
}

impl RecordingObserver {
    pub fn transitions(&self) -> Vec<(PipelineState, PipelineState)> {
        self.transitions.lock().unwrap().clone()
    }

    /// States visited, starting with the first `from`.
    pub fn states(&self) -> Vec<PipelineState> {
        let transitions = self.transitions();
        let mut states: Vec<_> = transitions.first().map(|(from, _)| *from).into_iter().collect();
        states.extend(transitions.iter().map(|(_, to)| *to));
        states
    }

    pub fn progress(&self) -> Vec<(String, SyncProgress)> {
        self.progress.lock().unwrap().clone()
    }
}

impl PipelineObserver for RecordingObserver {
    fn state_changed(&self, from: PipelineState, to: PipelineState) {
        self.transitions.lock().unwrap().push((from, to));
    }

    fn task_synced(&self, task: &TaskRecord, _event: &CreatedEvent, progress: SyncProgress) {
        self.progress.lock().unwrap().push((task.summary().to_string(), progress));
    }
}
