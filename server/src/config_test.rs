use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_upstream, None);
    assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}

#[test]
fn reads_port_and_timeout() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("SHARE_PROXY_TIMEOUT_SECS", "5")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.proxy_timeout_secs, 5);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_timeout_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup(&[("SHARE_PROXY_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}

#[test]
fn upstream_trailing_slash_is_trimmed() {
    let config = ServerConfig::from_lookup(lookup(&[("SHARE_API_URL", "https://share.example.com/")])).unwrap();
    assert_eq!(config.api_upstream.as_deref(), Some("https://share.example.com"));
}

#[test]
fn blank_upstream_means_no_proxy() {
    let config = ServerConfig::from_lookup(lookup(&[("SHARE_API_URL", "   ")])).unwrap();
    assert_eq!(config.api_upstream, None);
}

#[test]
fn non_http_upstream_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("SHARE_API_URL", "ftp://share.example.com")])).unwrap_err();
    assert!(err.to_string().contains("SHARE_API_URL"));
}
