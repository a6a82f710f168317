//! `/auth` operations.

use serde_json::json;

use listings::LoginData;

use crate::api::{ApiClient, ApiRequest, decode};
use crate::error::ApiError;

/// Build the login request. Credentials are trimmed before submission.
#[must_use]
pub fn login_request(email: &str, password: &str) -> ApiRequest {
    ApiRequest::new(reqwest::Method::POST, "/auth/login")
        .body(json!({ "email": email.trim(), "password": password.trim() }))
}

/// Authenticate and return the login payload. The caller decides which
/// session slot it lands in via [`crate::Session::apply_login`].
///
/// # Errors
///
/// Returns [`ApiError::Api`] for rejected credentials and
/// [`ApiError::Decode`] for an unreadable payload.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<LoginData, ApiError> {
    let payload = api.send(login_request(email, password)).await?;
    decode(payload)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
