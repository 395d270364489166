//! Per-run state tracking

use planshot_domain::{PipelineState, PlanshotError, Result};
use tracing::{debug, warn};

use crate::observer_ports::PipelineObserver;

/// Walks one run through the pipeline state machine.
///
/// Each accepted transition is logged and forwarded to the observer.
pub(crate) struct RunTracker<'a> {
    state: PipelineState,
    observer: &'a dyn PipelineObserver,
}

impl<'a> RunTracker<'a> {
    pub(crate) fn new(observer: &'a dyn PipelineObserver) -> Self {
        Self::resume(PipelineState::Idle, observer)
    }

    /// Continue a run that was paused in `state`.
    pub(crate) fn resume(state: PipelineState, observer: &'a dyn PipelineObserver) -> Self {
        Self { state, observer }
    }

    pub(crate) fn state(&self) -> PipelineState {
        self.state
    }

    pub(crate) fn observer(&self) -> &'a dyn PipelineObserver {
        self.observer
    }

    /// Move to `next`.
    ///
    /// # Errors
    /// Returns `PlanshotError::Internal` when the state machine has no such edge.
    pub(crate) fn advance(&mut self, next: PipelineState) -> Result<()> {
        let from = self.state;
        if !from.can_transition_to(next) {
            return Err(PlanshotError::Internal(format!(
                "invalid pipeline transition {from} -> {next}"
            )));
        }
        self.state = next;
        debug!(%from, to = %next, "pipeline state changed");
        self.observer.state_changed(from, next);
        Ok(())
    }

    /// Record a failure and hand back `err` for propagation.
    pub(crate) fn fail(&mut self, err: PlanshotError) -> PlanshotError {
        warn!(state = %self.state(), error = %err, "pipeline run failed");
        if self.state.is_terminal() {
            debug!(state = %self.state, "run already finished");
        } else if let Err(transition) = self.advance(PipelineState::Failed) {
            debug!(error = %transition, "run already outside a failable state");
        }
        err
    }
}
