//! Presentation shell state machine
//!
//! The shell starts in `Initializing` with all workflow triggers disabled.
//! It moves to `Ready` exactly once, when the bootstrap pipeline succeeds,
//! and never leaves `Ready` afterwards. A bootstrap failure moves it to
//! `Failed`, from which a manual retry re-runs the pipeline.

use std::sync::Arc;

use sealbox_core::{SdkClient, WorkflowService};
use serde::{Deserialize, Serialize};

/// Internal shell state. `Ready` owns the client handle and the workflow
/// service for the lifetime of the screen.
pub(crate) enum ShellState {
    Initializing,
    Ready {
        // Kept alive so the SDK identity outlives every workflow call.
        #[allow(dead_code)]
        client: Arc<dyn SdkClient>,
        workflows: Arc<WorkflowService>,
    },
    Failed {
        reason: String,
    },
}

/// Externally visible shell phase, serializable for the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ShellPhase {
    /// Bootstrap in progress; only a status message is shown.
    Initializing,
    /// Bootstrap succeeded; the four workflow triggers are interactive.
    Ready,
    /// Bootstrap failed; a retry trigger is shown instead.
    Failed { reason: String },
}

impl ShellPhase {
    /// Whether workflow triggers should be interactive.
    pub fn triggers_enabled(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl From<&ShellState> for ShellPhase {
    fn from(state: &ShellState) -> Self {
        match state {
            ShellState::Initializing => Self::Initializing,
            ShellState::Ready { .. } => Self::Ready,
            ShellState::Failed { reason } => Self::Failed { reason: reason.clone() },
        }
    }
}
