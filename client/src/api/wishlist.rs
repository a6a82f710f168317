//! User wishlist operations.

use serde_json::{Value, json};

use listings::WishlistItem;

use crate::api::{ApiClient, ApiRequest, decode};
use crate::error::ApiError;

#[must_use]
pub fn add_wishlist_request(token: &str, property_id: &str, user_id: &str) -> ApiRequest {
    ApiRequest::new(reqwest::Method::POST, "/users/wishlist")
        .bearer(token)
        .body(json!({ "property_id": property_id, "user_id": user_id }))
}

/// A user's saved properties.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn user_wishlist(
    api: &ApiClient,
    token: &str,
    user_id: &str,
) -> Result<Vec<WishlistItem>, ApiError> {
    let request =
        ApiRequest::new(reqwest::Method::GET, format!("/users/{user_id}/wishlist")).bearer(token);
    decode(api.send(request).await?)
}

/// Save a property to the acting identity's wishlist.
///
/// # Errors
///
/// Returns [`ApiError::Api`] as usual.
pub async fn add_to_wishlist(
    api: &ApiClient,
    token: &str,
    property_id: &str,
    user_id: &str,
) -> Result<Value, ApiError> {
    api.send(add_wishlist_request(token, property_id, user_id)).await
}

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod tests;
