use super::*;

fn ada() -> SessionUser {
    SessionUser {
        firstname: "Ada".to_owned(),
        lastname: "Lovelace".to_owned(),
        email: Some("ada@example.com".to_owned()),
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_is_anonymous() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.action(), HeaderAction::SignIn);
}

// =============================================================
// Probe lifecycle
// =============================================================

#[test]
fn probe_starts_once_per_mount() {
    let mut state = SessionState::default();
    assert!(state.begin_probe().is_some());
    assert!(state.loading);
    assert!(state.begin_probe().is_none());
}

#[test]
fn unauthorized_probe_offers_sign_in() {
    let mut state = SessionState::default();
    let ticket = state.begin_probe().unwrap();
    assert!(state.resolve(ticket, Err(ApiError::Status(401))));
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.action(), HeaderAction::SignIn);
    assert_eq!(state.action().popup(), SessionPopup::Login);
    assert_eq!(state.action_title(), "Sign in");
}

#[test]
fn not_found_probe_offers_sign_in() {
    let mut state = SessionState::default();
    let ticket = state.begin_probe().unwrap();
    state.resolve(ticket, Err(ApiError::Status(404)));
    assert_eq!(state.action(), HeaderAction::SignIn);
}

#[test]
fn transport_failure_is_treated_as_signed_out() {
    let mut state = SessionState::default();
    let ticket = state.begin_probe().unwrap();
    state.resolve(ticket, Err(ApiError::Transport("offline".to_owned())));
    assert!(state.user.is_none());
    assert_eq!(state.action(), HeaderAction::SignIn);
}

#[test]
fn successful_probe_offers_account() {
    let mut state = SessionState::default();
    let ticket = state.begin_probe().unwrap();
    assert!(state.resolve(ticket, Ok(ada())));
    assert_eq!(state.user, Some(ada()));
    assert_eq!(state.action(), HeaderAction::Account);
    assert_eq!(state.action().popup(), SessionPopup::Account);
    assert_eq!(state.action_title(), "Signed in as Ada Lovelace");
}

#[test]
fn pending_probe_shows_sign_in_with_checking_title() {
    let mut state = SessionState::default();
    state.begin_probe();
    assert_eq!(state.action(), HeaderAction::SignIn);
    assert_eq!(state.action_title(), "Checking session...");
}

#[test]
fn resolved_identity_is_frozen_for_the_mount() {
    let mut state = SessionState::default();
    let ticket = state.begin_probe().unwrap();
    assert!(state.resolve(ticket, Ok(ada())));
    assert!(!state.resolve(ticket, Err(ApiError::Status(401))));
    assert_eq!(state.user, Some(ada()));
    assert_eq!(state.action(), HeaderAction::Account);
}

#[test]
fn probe_result_after_retire_is_dropped() {
    let mut state = SessionState::default();
    let ticket = state.begin_probe().unwrap();
    state.retire();
    assert!(!state.resolve(ticket, Ok(ada())));
    assert!(state.user.is_none());
}

// =============================================================
// HeaderAction
// =============================================================

#[test]
fn header_action_glyphs_differ() {
    assert_ne!(HeaderAction::Account.glyph(), HeaderAction::SignIn.glyph());
}

#[test]
fn session_popup_default_is_none() {
    assert_eq!(SessionPopup::default(), SessionPopup::None);
}
