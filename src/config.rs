//! Host configuration parsed from environment variables.
//!
//! Leptos options are not covered here; they come from
//! `[package.metadata.leptos]` and `LEPTOS_*` via `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    NotHttp { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl ProxyTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub upstream: String,
    pub timeouts: ProxyTimeouts,
}

impl Config {
    /// Build the config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM`: default `http://127.0.0.1:8000`
    /// - `API_PROXY_TIMEOUT_SECS`: default 10
    /// - `API_PROXY_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a malformed port or upstream URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a malformed port or upstream URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let upstream = lookup("API_UPSTREAM")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM.to_owned());
        let upstream = upstream.trim().trim_end_matches('/').to_owned();
        if !(upstream.starts_with("http://") || upstream.starts_with("https://")) {
            return Err(ConfigError::NotHttp { var: "API_UPSTREAM", value: upstream });
        }

        let timeouts = ProxyTimeouts {
            request_secs: parse_u64(&lookup, "API_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS),
            connect_secs: parse_u64(&lookup, "API_PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, upstream, timeouts })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key).and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}
