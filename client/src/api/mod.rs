//! HTTP plumbing shared by every remote operation.
//!
//! Request construction ([`ApiRequest`] builders in the resource modules)
//! and response parsing ([`parse_payload`] / [`parse_body`]) are pure;
//! [`ApiClient::send`] is the only place a request actually leaves the
//! process.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses surface the server's `msg` field when one is present
//! and a generic fallback otherwise. There is no retry; callers re-trigger
//! the operation.

pub mod appointments;
pub mod auth;
pub mod merchants;
pub mod properties;
pub mod reviews;
pub mod users;
pub mod wishlist;

use std::path::Path;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use listings::Envelope;

use crate::config::ClientConfig;
use crate::error::{ApiError, GENERIC_API_ERROR};

/// A fully described API request, built by the resource modules.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path under the base URL, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub token: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, token: None }
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.token = Some(token.to_owned());
        self
    }
}

#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] for a base URL without an
    /// http(s) scheme and [`ApiError::HttpClientBuild`] if the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    /// Send a request and return the unwrapped payload (`data` field when
    /// present, whole body otherwise).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] on transport failure and
    /// [`ApiError::Api`] for non-2xx responses.
    pub async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let body = self.dispatch(request).await?;
        Ok(Envelope::unwrap_data(body))
    }

    /// Send a request and return the full response body with the envelope
    /// intact. Pagination loops need this to read `total`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`].
    pub async fn send_raw(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.dispatch(request).await
    }

    /// Upload a multipart form (avatar / property images) with a bearer
    /// token. The resource endpoints all use PUT.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`].
    pub async fn upload(
        &self,
        path: &str,
        token: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        parse_payload(status, &text)
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        parse_body(status, &text)
    }
}

/// Parse a response into its unwrapped payload.
///
/// # Errors
///
/// Returns [`ApiError::Api`] for non-2xx statuses.
pub fn parse_payload(status: u16, body: &str) -> Result<Value, ApiError> {
    parse_body(status, body).map(Envelope::unwrap_data)
}

/// Parse a response into its full JSON body, mapping non-2xx statuses to
/// [`ApiError::Api`] with the server `msg` or the generic fallback. An
/// unparseable body becomes `null` rather than a decode error, because
/// error responses are not guaranteed to be JSON.
fn parse_body(status: u16, body: &str) -> Result<Value, ApiError> {
    let value = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);

    if !(200..300).contains(&status) {
        let msg = Envelope::message(&value).unwrap_or(GENERIC_API_ERROR).to_owned();
        tracing::debug!(status, %msg, "api error response");
        return Err(ApiError::Api { status, msg });
    }

    Ok(value)
}

/// Decode an unwrapped payload into a typed record.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the payload does not match `T`.
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(payload)?)
}

/// Build a multipart form from files on disk under one repeated field name.
/// Uploads are small user-selected files; they are read eagerly.
///
/// # Errors
///
/// Returns [`ApiError::Io`] for unreadable files.
pub fn file_form(field: &'static str, paths: &[impl AsRef<Path>]) -> Result<reqwest::multipart::Form, ApiError> {
    let mut form = reqwest::multipart::Form::new();
    for path in paths {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_owned());
        form = form.part(field, reqwest::multipart::Part::bytes(bytes).file_name(file_name));
    }
    Ok(form)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
