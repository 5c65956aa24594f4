//! App-header popup state: which panel is open and the history it shows.
//!
//! DESIGN
//! ======
//! The open panel is a single enum value, so the history and bug-report
//! popups can never be visible together. History results are gated by a
//! request generation: closing the panel or reopening it stales any fetch
//! still in flight.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use super::history::HistoryRow;
use crate::util::generation::{Generation, Ticket};

/// Popup currently shown beneath the app header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenPanel {
    #[default]
    None,
    History,
    BugReport,
}

/// Panel visibility plus the rows of the history popup.
#[derive(Clone, Debug, Default)]
pub struct PanelState {
    pub open: OpenPanel,
    /// `None` while a history fetch is in flight or the panel is closed.
    pub history: Option<Vec<HistoryRow>>,
    history_generation: Generation,
}

impl PanelState {
    pub fn history_open(&self) -> bool {
        self.open == OpenPanel::History
    }

    pub fn bug_report_open(&self) -> bool {
        self.open == OpenPanel::BugReport
    }

    /// Show the history popup and return the ticket for its fetch.
    ///
    /// Any bug-report popup closes. The previous list is discarded so the
    /// popup shows a loading state until the new rows arrive.
    pub fn open_history(&mut self) -> Ticket {
        self.open = OpenPanel::History;
        self.history = None;
        self.history_generation.issue()
    }

    /// Show the bug-report popup. Any history popup closes.
    pub fn open_bug_report(&mut self) {
        if self.history_open() {
            self.discard_history();
        }
        self.open = OpenPanel::BugReport;
    }

    /// Hide the history popup if it is the one showing.
    pub fn close_history(&mut self) {
        if self.history_open() {
            self.open = OpenPanel::None;
            self.discard_history();
        }
    }

    /// Hide the bug-report popup if it is the one showing.
    pub fn close_bug_report(&mut self) {
        if self.bug_report_open() {
            self.open = OpenPanel::None;
        }
    }

    /// Replace the history list if `ticket` belongs to the latest open.
    ///
    /// Returns `false` when the result is stale and was dropped.
    pub fn apply_history(&mut self, ticket: Ticket, rows: Vec<HistoryRow>) -> bool {
        if !self.history_open() || !self.history_generation.is_current(ticket) {
            return false;
        }
        self.history = Some(rows);
        true
    }

    /// Drop every pending history result; used when the header unmounts.
    pub fn retire(&mut self) {
        self.history_generation.invalidate();
    }

    fn discard_history(&mut self) {
        self.history = None;
        self.history_generation.advance();
    }
}
