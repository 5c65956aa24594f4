//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable. Callers degrade each one to an inline
//! message (history error row, report failure, anonymous session) and never
//! retry on their own.

use thiserror::Error;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Browser-only endpoint called from a server or test build.
    #[error("not available on server")]
    Unavailable,
}
