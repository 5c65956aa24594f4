//! Bug-report submit control state machine.
//!
//! ```text
//! Idle --begin--> Submitting --finish(success)--> Success
//!                            \--finish(error)---> Failure
//! ```
//!
//! `Success` and `Failure` are terminal for a popup instance; a fresh popup
//! starts again at `Idle`.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use crate::net::error::ApiError;
use crate::net::types::{ReportDraft, ReportResponse};
use crate::util::generation::{Generation, Ticket};

pub const SUBMIT_LABEL: &str = "Submit Report";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_MESSAGE: &str = "Report submitted. You can now close this window.";
pub const FAILURE_MESSAGE: &str = "Unable to submit report. Please try again later.";

/// Display variant of the submit control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

impl SubmitState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

/// Submit control for one bug-report popup instance.
#[derive(Clone, Debug, Default)]
pub struct ReportSubmitter {
    state: SubmitState,
    generation: Generation,
    pending: Option<Ticket>,
}

impl ReportSubmitter {
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Start a submission from the two input values.
    ///
    /// `None` for either field means its input is not mounted; the call is
    /// then a silent no-op. Calls outside `Idle` are rejected as well.
    pub fn begin(&mut self, title: Option<String>, description: Option<String>) -> Option<(Ticket, ReportDraft)> {
        if self.state != SubmitState::Idle {
            return None;
        }
        let (Some(title), Some(description)) = (title, description) else {
            return None;
        };
        let ticket = self.generation.issue();
        self.state = SubmitState::Submitting;
        self.pending = Some(ticket);
        Some((ticket, ReportDraft { title, description }))
    }

    /// Settle the in-flight submission.
    ///
    /// Only the first completion for the pending ticket counts. Anything
    /// other than `{ "success": true }` lands in `Failure`. Returns whether
    /// the state changed.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<ReportResponse, ApiError>) -> bool {
        if self.state != SubmitState::Submitting
            || self.pending != Some(ticket)
            || !self.generation.is_current(ticket)
        {
            return false;
        }
        self.pending = None;
        self.state = match outcome {
            Ok(ReportResponse { success: true }) => SubmitState::Success,
            Ok(ReportResponse { success: false }) => {
                leptos::logging::warn!("bug report rejected by server");
                SubmitState::Failure
            }
            Err(e) => {
                leptos::logging::warn!("bug report submission failed: {e}");
                SubmitState::Failure
            }
        };
        true
    }

    /// Drop any pending result; used when the popup unmounts.
    pub fn retire(&mut self) {
        self.generation.invalidate();
    }
}
