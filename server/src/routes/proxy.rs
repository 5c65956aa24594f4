//! `/api/*` forwarder to the upstream Share backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls relative `/api/...` URLs. In deployments where
//! the backend lives elsewhere, this handler relays those requests so the
//! page and the API share one origin (and one cookie jar).

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers relayed upstream.
const FORWARDED_REQUEST_HEADERS: &[&str] = &["content-type", "cookie", "accept", "user-agent"];
/// Response headers relayed back to the browser.
const FORWARDED_RESPONSE_HEADERS: &[&str] = &["content-type", "set-cookie", "cache-control"];

/// Join upstream base, API path, and raw query.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/api/{path}?{query}"),
        None => format!("{base}/api/{path}"),
    }
}

/// Copy the allow-listed headers from `from` into a fresh map.
pub(crate) fn allowed_headers(from: &HeaderMap, names: &[&'static str]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in from.get_all(*name) {
            out.append(*name, value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: relay to `SHARE_API_URL`, or 404 when unset.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(upstream) = state.upstream.as_deref() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let url = upstream_url(upstream, &path, query.as_deref());

    let result = state
        .http
        .request(method.clone(), &url)
        .headers(allowed_headers(&headers, FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await;

    let resp = match result {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = resp.status();
    let out_headers = allowed_headers(resp.headers(), FORWARDED_RESPONSE_HEADERS);
    match resp.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, %status, "forwarded api request");
            (status, out_headers, bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream body read failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
