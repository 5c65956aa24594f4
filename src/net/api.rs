//! REST API helpers for the Share backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: stubs returning [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` and never panics. Transport,
//! status, and decode failures are kept distinct so callers can log them,
//! but all of them degrade to the same inline message in the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::SessionResponse;
use super::types::{HistoryRecord, ReportDraft, ReportResponse, SessionUser};

pub const SESSION_ENDPOINT: &str = "/api/user/session";
pub const HISTORY_ENDPOINT: &str = "/api/history";
pub const REPORT_ENDPOINT: &str = "/api/report";

/// Link target for a single upload in the history list.
pub fn upload_href(upload_id: &str) -> String {
    format!("/uploads/{upload_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_result(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(feature = "hydrate")]
fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn malformed(err: impl std::fmt::Display) -> ApiError {
    ApiError::Malformed(err.to_string())
}

/// Probe `GET /api/user/session` for the signed-in user.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx answers (401/404 when signed out),
/// and transport/decode errors otherwise.
pub async fn fetch_session_user() -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .map_err(transport)?;
        status_result(resp.ok(), resp.status())?;
        let body: SessionResponse = resp.json().await.map_err(malformed)?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the caller's upload history from `GET /api/history`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body is not an array of history records.
pub async fn fetch_history() -> Result<Vec<HistoryRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(HISTORY_ENDPOINT)
            .send()
            .await
            .map_err(transport)?;
        status_result(resp.ok(), resp.status())?;
        resp.json::<Vec<HistoryRecord>>().await.map_err(malformed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Submit a bug report as form fields to `POST /api/report`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body is not `{ "success": bool }`.
pub async fn submit_report(draft: &ReportDraft) -> Result<ReportResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        for (name, value) in draft.form_fields() {
            params.append(name, value);
        }
        let resp = gloo_net::http::Request::post(REPORT_ENDPOINT)
            .body(params)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        status_result(resp.ok(), resp.status())?;
        resp.json::<ReportResponse>().await.map_err(malformed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}
