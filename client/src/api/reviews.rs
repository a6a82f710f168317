//! `/reviews` operations, always scoped to one property.

use serde_json::json;

use listings::Review;

use crate::api::{ApiClient, ApiRequest, decode};
use crate::error::ApiError;

#[must_use]
pub fn list_reviews_request(token: &str, property_id: &str, page: u64, limit: u64) -> ApiRequest {
    ApiRequest::new(reqwest::Method::GET, "/reviews")
        .query("property_id", property_id)
        .query("limit", limit)
        .query("page", page)
        .bearer(token)
}

/// Reviews for one property — a single scoped GET.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn list_reviews(
    api: &ApiClient,
    token: &str,
    property_id: &str,
    page: u64,
    limit: u64,
) -> Result<Vec<Review>, ApiError> {
    decode(api.send(list_reviews_request(token, property_id, page, limit)).await?)
}

/// Post a review as the current identity.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn post_review(
    api: &ApiClient,
    token: &str,
    property_id: &str,
    user_id: &str,
    text: &str,
) -> Result<Review, ApiError> {
    let request = ApiRequest::new(reqwest::Method::POST, "/reviews")
        .bearer(token)
        .body(json!({ "property_id": property_id, "user_id": user_id, "text": text }));
    decode(api.send(request).await?)
}

/// Edit a review's text.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn update_review(api: &ApiClient, token: &str, id: &str, text: &str) -> Result<Review, ApiError> {
    let request = ApiRequest::new(reqwest::Method::PUT, format!("/reviews/{id}"))
        .bearer(token)
        .body(json!({ "text": text }));
    decode(api.send(request).await?)
}

/// Delete a review.
///
/// # Errors
///
/// Returns [`ApiError::Api`] as usual.
pub async fn delete_review(api: &ApiClient, token: &str, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::new(reqwest::Method::DELETE, format!("/reviews/{id}")).bearer(token);
    api.send(request).await?;
    Ok(())
}

#[cfg(test)]
#[path = "reviews_test.rs"]
mod tests;
