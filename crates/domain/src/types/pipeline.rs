//! Pipeline modes, run states and sync outcomes

use serde::{Deserialize, Serialize};

use super::event::CreatedEvent;
use crate::impl_domain_status_conversions;

/// How a run moves from parsed tasks to calendar events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineMode {
    /// Sync immediately after parsing.
    #[default]
    OneShot,
    /// Stop after parsing and wait for an explicit confirmation.
    Review,
}

impl_domain_status_conversions!(PipelineMode {
    OneShot => "one-shot",
    Review => "review",
});

/// Lifecycle of a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineState {
    Idle,
    Extracting,
    Parsing,
    ReviewPending,
    Syncing,
    Done,
    Failed,
}

impl_domain_status_conversions!(PipelineState {
    Idle => "idle",
    Extracting => "extracting",
    Parsing => "parsing",
    ReviewPending => "review-pending",
    Syncing => "syncing",
    Done => "done",
    Failed => "failed",
});

impl PipelineState {
    /// Whether the run may move from `self` to `next`.
    ///
    /// `ReviewPending` has no failure edge: it is left only by confirmation
    /// or by abandoning the run.
    pub fn can_transition_to(self, next: Self) -> bool {
        use PipelineState::{Done, Extracting, Failed, Idle, Parsing, ReviewPending, Syncing};

        matches!(
            (self, next),
            (Idle, Extracting)
                | (Extracting, Parsing | Failed)
                | (Parsing, ReviewPending | Syncing | Failed)
                | (ReviewPending, Syncing)
                | (Syncing, Done | Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Progress of a sync, reported after each successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncProgress {
    pub completed: usize,
    pub total: usize,
}

impl SyncProgress {
    /// Fraction of tasks created, in `[0, 1]`. An empty sync is complete.
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.completed.min(self.total) as f64) / (self.total as f64)
    }
}

/// Outcome of a completed sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    pub created: Vec<CreatedEvent>,
}

impl SyncResult {
    /// Number of calendar events created.
    pub fn count(&self) -> usize {
        self.created.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_cli_spelling() {
        assert_eq!("one-shot".parse::<PipelineMode>(), Ok(PipelineMode::OneShot));
        assert_eq!("Review".parse::<PipelineMode>(), Ok(PipelineMode::Review));
        assert_eq!(PipelineMode::default().to_string(), "one-shot");
        assert!("batch".parse::<PipelineMode>().is_err());
    }

    #[test]
    fn one_shot_path_is_valid() {
        let path = [
            PipelineState::Idle,
            PipelineState::Extracting,
            PipelineState::Parsing,
            PipelineState::Syncing,
            PipelineState::Done,
        ];
        assert!(path.windows(2).all(|w| w[0].can_transition_to(w[1])));
    }

    #[test]
    fn review_path_is_valid() {
        let path = [
            PipelineState::Idle,
            PipelineState::Extracting,
            PipelineState::Parsing,
            PipelineState::ReviewPending,
            PipelineState::Syncing,
            PipelineState::Done,
        ];
        assert!(path.windows(2).all(|w| w[0].can_transition_to(w[1])));
    }

    #[test]
    fn terminal_states_have_no_exits() {
        let all = [
            PipelineState::Idle,
            PipelineState::Extracting,
            PipelineState::Parsing,
            PipelineState::ReviewPending,
            PipelineState::Syncing,
            PipelineState::Done,
            PipelineState::Failed,
        ];
        for terminal in [PipelineState::Done, PipelineState::Failed] {
            assert!(terminal.is_terminal());
            assert!(all.iter().all(|next| !terminal.can_transition_to(*next)));
        }
    }

    #[test]
    fn review_pending_cannot_skip_confirmation() {
        assert!(!PipelineState::ReviewPending.can_transition_to(PipelineState::Done));
        assert!(!PipelineState::ReviewPending.can_transition_to(PipelineState::Failed));
        assert!(!PipelineState::Extracting.can_transition_to(PipelineState::Syncing));
    }

    #[test]
    fn progress_fraction() {
        assert!((SyncProgress { completed: 1, total: 4 }.fraction() - 0.25).abs() < f64::EPSILON);
        assert!((SyncProgress { completed: 0, total: 0 }.fraction() - 1.0).abs() < f64::EPSILON);
    }
}
