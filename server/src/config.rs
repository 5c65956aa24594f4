//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL that `/api/*` requests are forwarded to, if any.
    pub api_upstream: Option<String>,
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SHARE_API_URL`: `http(s)://` base of the backend serving `/api`
    /// - `SHARE_PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] for a malformed port or upstream URL.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] for a malformed port or upstream URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerError::Config(format!("invalid PORT: {raw:?}")))?,
            None => DEFAULT_PORT,
        };
        let api_upstream = parse_upstream(lookup("SHARE_API_URL").as_deref())?;
        let proxy_timeout_secs = lookup("SHARE_PROXY_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_PROXY_TIMEOUT_SECS);

        Ok(Self { port, api_upstream, proxy_timeout_secs })
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<Option<String>, ServerError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ServerError::Config(format!("SHARE_API_URL must be http(s): {raw:?}")));
    }
    Ok(Some(raw.trim_end_matches('/').to_owned()))
}
