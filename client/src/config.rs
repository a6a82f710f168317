//! Client configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://property.reworkstaging.name.ng/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP timeout pair applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Remote API base URL, without a trailing slash.
    pub base_url: String,
    /// Location of the role-scoped session file.
    pub session_file: PathBuf,
    pub timeouts: HttpTimeouts,
}

impl ClientConfig {
    /// Build config from environment variables.
    ///
    /// All variables are optional:
    /// - `HEARTH_BASE_URL`: remote API base URL
    /// - `HEARTH_SESSION_FILE`: session file path
    /// - `HEARTH_REQUEST_TIMEOUT_SECS`: default 30
    /// - `HEARTH_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("HEARTH_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let session_file = std::env::var("HEARTH_SESSION_FILE")
            .map_or_else(|_| default_session_file(), PathBuf::from);
        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("HEARTH_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("HEARTH_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self { base_url, session_file, timeouts }
    }
}

fn default_session_file() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home).join(".hearth").join("session.json"),
        _ => PathBuf::from(".hearth-session.json"),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
