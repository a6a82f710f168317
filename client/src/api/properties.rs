//! `/properties` operations — listing search, detail, agent CRUD, image
//! upload, purchase, and the browse merge.

use futures::try_join;
use serde_json::{Value, json};

use listings::{MarketStatus, NewProperty, Property};

use crate::api::{ApiClient, ApiRequest, decode, file_form, users};
use crate::error::ApiError;

/// Server-side listing filter. Only set fields become query parameters.
#[derive(Debug, Clone, Default)]
pub struct PropertyQuery {
    /// Managing agent id.
    pub agent: Option<String>,
    /// Owning merchant id.
    pub merchant: Option<String>,
    pub verified: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[must_use]
pub fn list_properties_request(token: &str, query: &PropertyQuery) -> ApiRequest {
    let mut request = ApiRequest::new(reqwest::Method::GET, "/properties").bearer(token);
    if let Some(agent) = &query.agent {
        request = request.query("agent", agent);
    }
    if let Some(merchant) = &query.merchant {
        request = request.query("merchant", merchant);
    }
    if let Some(verified) = query.verified {
        request = request.query("verified", verified);
    }
    if let Some(page) = query.page {
        request = request.query("page", page);
    }
    if let Some(limit) = query.limit {
        request = request.query("limit", limit);
    }
    request
}

#[must_use]
pub fn buy_request(token: &str, property_id: &str, user_id: &str) -> ApiRequest {
    ApiRequest::new(reqwest::Method::POST, "/properties/buy")
        .bearer(token)
        .body(json!({ "property_id": property_id, "user_id": user_id }))
}

/// List properties matching a filter.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn list_properties(
    api: &ApiClient,
    token: &str,
    query: &PropertyQuery,
) -> Result<Vec<Property>, ApiError> {
    decode(api.send(list_properties_request(token, query)).await?)
}

/// Fetch one listing by id.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn get_property(api: &ApiClient, token: &str, id: &str) -> Result<Property, ApiError> {
    let request = ApiRequest::new(reqwest::Method::GET, format!("/properties/{id}")).bearer(token);
    decode(api.send(request).await?)
}

/// Create a listing.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn create_property(
    api: &ApiClient,
    token: &str,
    listing: &NewProperty,
) -> Result<Property, ApiError> {
    let request = ApiRequest::new(reqwest::Method::POST, "/properties")
        .bearer(token)
        .body(serde_json::to_value(listing).unwrap_or(Value::Null));
    decode(api.send(request).await?)
}

/// Update a listing with a partial JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn update_property(
    api: &ApiClient,
    token: &str,
    id: &str,
    fields: Value,
) -> Result<Property, ApiError> {
    let request = ApiRequest::new(reqwest::Method::PUT, format!("/properties/{id}"))
        .bearer(token)
        .body(fields);
    decode(api.send(request).await?)
}

/// Delete a listing.
///
/// # Errors
///
/// Returns [`ApiError::Api`] as usual.
pub async fn delete_property(api: &ApiClient, token: &str, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::new(reqwest::Method::DELETE, format!("/properties/{id}")).bearer(token);
    api.send(request).await?;
    Ok(())
}

/// Upload listing photos (`PUT /properties/:id/resource`, repeated field
/// `images`).
///
/// # Errors
///
/// Returns [`ApiError::Io`] for unreadable files and [`ApiError::Api`]
/// when the upload is rejected.
pub async fn upload_images(
    api: &ApiClient,
    token: &str,
    id: &str,
    files: &[impl AsRef<std::path::Path>],
) -> Result<Value, ApiError> {
    let form = file_form("images", files)?;
    api.upload(&format!("/properties/{id}/resource"), token, form).await
}

/// Buy a property on behalf of a user.
///
/// # Errors
///
/// Returns [`ApiError::Api`] as usual.
pub async fn buy_property(
    api: &ApiClient,
    token: &str,
    property_id: &str,
    user_id: &str,
) -> Result<Value, ApiError> {
    api.send(buy_request(token, property_id, user_id)).await
}

/// The browse-screen merge: the agent's verified listings tagged
/// `AVAILABLE`, followed by the user's bought properties tagged `BOUGHT`.
/// Both feeds are fetched together; either failure fails the merge.
///
/// # Errors
///
/// Returns the first fetch error.
pub async fn browse(
    api: &ApiClient,
    agent_id: &str,
    agent_token: &str,
    user_id: &str,
    user_token: &str,
) -> Result<Vec<Property>, ApiError> {
    let query = PropertyQuery {
        agent: Some(agent_id.to_owned()),
        verified: Some(true),
        ..PropertyQuery::default()
    };
    let (available, bought) = try_join!(
        list_properties(api, agent_token, &query),
        users::user_properties(api, user_token, user_id),
    )?;

    Ok(merge_market(available, bought))
}

/// Pure half of [`browse`]: tag and concatenate the two feeds.
#[must_use]
pub fn merge_market(available: Vec<Property>, bought: Vec<Property>) -> Vec<Property> {
    available
        .into_iter()
        .map(|p| p.with_market_status(MarketStatus::Available))
        .chain(bought.into_iter().map(|p| p.with_market_status(MarketStatus::Bought)))
        .collect()
}

#[cfg(test)]
#[path = "properties_test.rs"]
mod tests;
