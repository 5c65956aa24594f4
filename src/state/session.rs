//! Session identity for the site header.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site header probes `/api/user/session` once per mount. The resolved
//! identity picks the header action icon and the popup it opens; it is
//! never refreshed for the life of the mount.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::SessionUser;
use crate::util::generation::{Generation, Ticket};

const CHECKING_SESSION_TITLE: &str = "Checking session...";

/// Identity as seen by the site header.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
    probed: bool,
    generation: Generation,
}

/// Action icon offered at the end of the site navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    /// Signed in: profile icon opening account settings.
    Account,
    /// Anonymous: sign-in icon opening the login popup.
    SignIn,
}

/// Popup currently shown by the site header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPopup {
    #[default]
    None,
    Account,
    Login,
}

impl HeaderAction {
    /// Popup opened when the action icon is clicked.
    pub fn popup(self) -> SessionPopup {
        match self {
            Self::Account => SessionPopup::Account,
            Self::SignIn => SessionPopup::Login,
        }
    }

    /// Inline glyph standing in for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Account => "\u{1f464}",
            Self::SignIn => "\u{21e5}",
        }
    }
}

impl SessionState {
    /// Begin the mount-time probe. Only the first call yields a ticket.
    pub fn begin_probe(&mut self) -> Option<Ticket> {
        if self.probed {
            return None;
        }
        self.probed = true;
        self.loading = true;
        Some(self.generation.issue())
    }

    /// Record the probe outcome. Any error means anonymous.
    ///
    /// Returns `false` when the ticket is stale and nothing changed.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<SessionUser, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.user = match outcome {
            Ok(user) => Some(user),
            Err(ApiError::Status(status)) => {
                leptos::logging::log!("session probe: signed out ({status})");
                None
            }
            Err(e) => {
                leptos::logging::warn!("session probe failed: {e}");
                None
            }
        };
        // Identity is frozen for the rest of the mount.
        self.generation.advance();
        true
    }

    /// Drop the pending probe result; used when the header unmounts.
    pub fn retire(&mut self) {
        self.generation.invalidate();
    }

    pub fn action(&self) -> HeaderAction {
        if self.user.is_some() { HeaderAction::Account } else { HeaderAction::SignIn }
    }

    /// Tooltip for the action icon.
    pub fn action_title(&self) -> String {
        match &self.user {
            Some(user) => format!("Signed in as {}", user.full_name()),
            None if self.loading => CHECKING_SESSION_TITLE.to_owned(),
            None => "Sign in".to_owned(),
        }
    }
}
