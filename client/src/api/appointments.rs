//! `/appointments` operations — booking, listing, confirmation,
//! completion, cancellation.

use serde_json::{Map, Value, json};

use listings::{Appointment, NewAppointment};

use crate::api::{ApiClient, ApiRequest, decode};
use crate::error::ApiError;

/// Appointment listing filter. The dashboards always scope to an agent
/// and exclude completed appointments.
#[derive(Debug, Clone)]
pub struct AppointmentQuery {
    pub agent: String,
    pub completed: bool,
    pub page: u64,
    pub limit: u64,
}

impl AppointmentQuery {
    /// The dashboard default: open appointments, first page of ten.
    #[must_use]
    pub fn open_for(agent: &str) -> Self {
        Self { agent: agent.to_owned(), completed: false, page: 0, limit: 10 }
    }
}

#[must_use]
pub fn list_appointments_request(token: &str, query: &AppointmentQuery) -> ApiRequest {
    ApiRequest::new(reqwest::Method::GET, "/appointments")
        .query("agent", &query.agent)
        .query("completed", query.completed)
        .query("page", query.page)
        .query("limit", query.limit)
        .bearer(token)
}

#[must_use]
pub fn book_request(token: &str, booking: &NewAppointment) -> ApiRequest {
    ApiRequest::new(reqwest::Method::POST, "/appointments")
        .bearer(token)
        .body(serde_json::to_value(booking).unwrap_or(Value::Null))
}

/// List appointments for an agent.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn list_appointments(
    api: &ApiClient,
    token: &str,
    query: &AppointmentQuery,
) -> Result<Vec<Appointment>, ApiError> {
    decode(api.send(list_appointments_request(token, query)).await?)
}

/// Book a viewing appointment.
///
/// # Errors
///
/// Returns [`ApiError::Api`] / [`ApiError::Decode`] as usual.
pub async fn book_appointment(
    api: &ApiClient,
    token: &str,
    booking: &NewAppointment,
) -> Result<Appointment, ApiError> {
    decode(api.send(book_request(token, booking)).await?)
}

/// Agent-side meeting confirmation (`PUT .../confirm-meeting`, empty body).
///
/// # Errors
///
/// Returns [`ApiError::Api`] as usual.
pub async fn confirm_meeting(api: &ApiClient, token: &str, id: &str) -> Result<Value, ApiError> {
    let request = ApiRequest::new(reqwest::Method::PUT, format!("/appointments/{id}/confirm-meeting"))
        .bearer(token)
        .body(Value::Object(Map::new()));
    api.send(request).await
}

/// User-side completion (`PUT .../set-user-appointment-completion`,
/// empty body).
///
/// # Errors
///
/// Returns [`ApiError::Api`] as usual.
pub async fn complete_appointment(api: &ApiClient, token: &str, id: &str) -> Result<Value, ApiError> {
    let request = ApiRequest::new(
        reqwest::Method::PUT,
        format!("/appointments/{id}/set-user-appointment-completion"),
    )
    .bearer(token)
    .body(json!({}));
    api.send(request).await
}

/// Cancel (delete) an appointment.
///
/// # Errors
///
/// Returns [`ApiError::Api`] as usual.
pub async fn cancel_appointment(api: &ApiClient, token: &str, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::new(reqwest::Method::DELETE, format!("/appointments/{id}")).bearer(token);
    api.send(request).await?;
    Ok(())
}

#[cfg(test)]
#[path = "appointments_test.rs"]
mod tests;
