use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream, DEFAULT_API_UPSTREAM);
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts { request_secs: DEFAULT_PROXY_TIMEOUT_SECS, connect_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn overrides_are_parsed_and_upstream_is_trimmed() {
    let cfg = Config::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("API_UPSTREAM", "https://api.example.ma/"),
        ("API_PROXY_TIMEOUT_SECS", "30"),
        ("API_PROXY_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream, "https://api.example.ma");
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(30));
    assert_eq!(cfg.timeouts.connect(), Duration::from_secs(2));
}

#[test]
fn malformed_timeouts_fall_back_to_defaults() {
    let cfg = Config::from_lookup(lookup(&[("API_PROXY_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}

#[test]
fn invalid_port_is_an_error() {
    let err = Config::from_lookup(lookup(&[("PORT", "99999")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "99999".to_owned() });
}

#[test]
fn upstream_must_be_http() {
    let err = Config::from_lookup(lookup(&[("API_UPSTREAM", "ftp://files")])).unwrap_err();
    assert!(matches!(err, ConfigError::NotHttp { .. }));
}
