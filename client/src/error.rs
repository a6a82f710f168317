//! Error taxonomy for the API client.

use listings::Role;

/// Fallback message shown when the server does not provide one.
pub const GENERIC_API_ERROR: &str = "Something went wrong";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("no {role} session; log in as {role} first")]
    MissingToken { role: Role },
    #[error("login response carried no token")]
    MissingLoginToken,
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-2xx response. `msg` is the server's `msg` field when present,
    /// otherwise [`GENERIC_API_ERROR`].
    #[error("server returned {status}: {msg}")]
    Api { status: u16, msg: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("file i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file is corrupt: {0}")]
    SessionCorrupt(String),
}
