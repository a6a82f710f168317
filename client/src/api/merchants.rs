//! `/merchants` operations — agent roster, onboarding, verification, and
//! the merchant wishlist.
//!
//! The remote API has no direct agent-by-id lookup, so [`find_agent`]
//! pages through the roster until the record appears.

use serde_json::{Value, json};

use listings::{Agent, Envelope, NewAgent, WishlistItem};

use crate::api::{ApiClient, ApiRequest, decode};
use crate::error::ApiError;

/// Roster page size used by the lookup loop.
const FIND_AGENT_PAGE_LIMIT: u64 = 5;

#[must_use]
pub fn list_agents_request(token: &str, offset: u64, limit: u64) -> ApiRequest {
    ApiRequest::new(reqwest::Method::GET, "/merchants/agents")
        .query("offset", offset)
        .query("limit", limit)
        .bearer(token)
}

#[must_use]
pub fn verify_agent_request(token: &str, agent_id: &str, is_verified: bool) -> ApiRequest {
    ApiRequest::new(reqwest::Method::POST, "/merchants/verify-agent")
        .bearer(token)
        .body(json!({ "agent_id": agent_id, "is_verified": is_verified }))
}

/// List the merchant's agents.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn list_agents(
    api: &ApiClient,
    token: &str,
    offset: u64,
    limit: u64,
) -> Result<Vec<Agent>, ApiError> {
    decode(api.send(list_agents_request(token, offset, limit)).await?)
}

/// Onboard a new agent.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn create_agent(api: &ApiClient, token: &str, form: &NewAgent) -> Result<Agent, ApiError> {
    let request = ApiRequest::new(reqwest::Method::POST, "/merchants/agents")
        .bearer(token)
        .body(serde_json::to_value(form).unwrap_or(Value::Null));
    decode(api.send(request).await?)
}

/// Set or clear an agent's verification flag.
///
/// # Errors
///
/// Returns [`ApiError::Api`] as usual.
pub async fn verify_agent(
    api: &ApiClient,
    token: &str,
    agent_id: &str,
    is_verified: bool,
) -> Result<Value, ApiError> {
    api.send(verify_agent_request(token, agent_id, is_verified)).await
}

/// Remove an agent.
///
/// # Errors
///
/// Returns [`ApiError::Api`] as usual.
pub async fn delete_agent(api: &ApiClient, token: &str, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::new(reqwest::Method::DELETE, format!("/agents/{id}")).bearer(token);
    api.send(request).await?;
    Ok(())
}

/// Find one agent by id by paging through the roster.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when every page has been scanned
/// without a match.
pub async fn find_agent(api: &ApiClient, token: &str, id: &str) -> Result<Agent, ApiError> {
    let mut page = 0_u64;
    loop {
        let body = api
            .send_raw(list_agents_request(token, page, FIND_AGENT_PAGE_LIMIT))
            .await?;
        let envelope: Envelope = decode(body)?;
        let total = envelope.total;
        let agents: Vec<Agent> = match envelope.data {
            Some(data) => decode(data)?,
            None => Vec::new(),
        };

        if let Some(agent) = agents.iter().find(|a| a.id == id) {
            return Ok(agent.clone());
        }
        if !more_pages(agents.len(), page, FIND_AGENT_PAGE_LIMIT, total) {
            return Err(ApiError::NotFound("agent"));
        }
        page += 1;
    }
}

/// Whether another roster page could still contain the record: the page
/// just fetched was non-empty and the next window starts below `total`.
/// A missing `total` stops the scan rather than looping forever.
#[must_use]
pub fn more_pages(fetched: usize, page: u64, limit: u64, total: Option<u64>) -> bool {
    fetched > 0 && total.is_some_and(|total| (page + 1) * limit < total)
}

/// The merchant's saved-properties list (read-only).
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn merchant_wishlist(
    api: &ApiClient,
    token: &str,
    merchant_id: &str,
) -> Result<Vec<WishlistItem>, ApiError> {
    let request = ApiRequest::new(reqwest::Method::GET, format!("/merchants/{merchant_id}/wishlist"))
        .bearer(token);
    decode(api.send(request).await?)
}

/// Upload an agent avatar (`PUT /agents/:id/resource`, field `avatar`).
///
/// # Errors
///
/// Returns [`ApiError::Io`] for an unreadable file and [`ApiError::Api`]
/// when the upload is rejected.
pub async fn upload_agent_avatar(
    api: &ApiClient,
    token: &str,
    agent_id: &str,
    file: &std::path::Path,
) -> Result<Value, ApiError> {
    let form = crate::api::file_form("avatar", &[file])?;
    api.upload(&format!("/agents/{agent_id}/resource"), token, form).await
}

#[cfg(test)]
#[path = "merchants_test.rs"]
mod tests;
