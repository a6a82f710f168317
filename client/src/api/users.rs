//! `/users` operations — account creation, directory listing, profile
//! reads and edits, avatar upload.

use serde_json::Value;

use listings::{NewUser, Property, User};

use crate::api::{ApiClient, ApiRequest, decode, file_form};
use crate::error::ApiError;

/// Page-numbered listing window (`/users` paginates with `page`/`limit`).
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub page: u64,
    pub limit: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 0, limit: 5 }
    }
}

#[must_use]
pub fn create_user_request(token: &str, form: &NewUser) -> ApiRequest {
    ApiRequest::new(reqwest::Method::POST, "/users")
        .bearer(token)
        .body(serde_json::to_value(form).unwrap_or(Value::Null))
}

#[must_use]
pub fn list_users_request(token: &str, page: Page) -> ApiRequest {
    ApiRequest::new(reqwest::Method::GET, "/users")
        .query("limit", page.limit)
        .query("page", page.page)
        .bearer(token)
}

/// Register an account. The remote API requires an authenticated caller
/// even for registration, so a token is mandatory.
///
/// # Errors
///
/// Returns [`ApiError::Api`] when the server rejects the submission.
pub async fn create_user(api: &ApiClient, token: &str, form: &NewUser) -> Result<User, ApiError> {
    let payload = api.send(create_user_request(token, form)).await?;
    decode(payload)
}

/// List registered users, paginated.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn list_users(api: &ApiClient, token: &str, page: Page) -> Result<Vec<User>, ApiError> {
    let payload = api.send(list_users_request(token, page)).await?;
    decode(payload)
}

/// Fetch one user by id.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn get_user(api: &ApiClient, token: &str, id: &str) -> Result<User, ApiError> {
    let request = ApiRequest::new(reqwest::Method::GET, format!("/users/{id}")).bearer(token);
    decode(api.send(request).await?)
}

/// Update a user record with a partial JSON body of changed fields.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn update_user(api: &ApiClient, token: &str, id: &str, fields: Value) -> Result<User, ApiError> {
    let request = ApiRequest::new(reqwest::Method::PUT, format!("/users/{id}"))
        .bearer(token)
        .body(fields);
    decode(api.send(request).await?)
}

/// Properties this user has bought.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn user_properties(api: &ApiClient, token: &str, user_id: &str) -> Result<Vec<Property>, ApiError> {
    let request =
        ApiRequest::new(reqwest::Method::GET, format!("/users/{user_id}/properties")).bearer(token);
    decode(api.send(request).await?)
}

/// Upload a profile avatar (`PUT /users/:id/resource`, field `avatar`).
///
/// # Errors
///
/// Returns [`ApiError::Io`] for an unreadable file and [`ApiError::Api`]
/// when the upload is rejected.
pub async fn upload_avatar(
    api: &ApiClient,
    token: &str,
    user_id: &str,
    file: &std::path::Path,
) -> Result<Value, ApiError> {
    let form = file_form("avatar", &[file])?;
    api.upload(&format!("/users/{user_id}/resource"), token, form).await
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
