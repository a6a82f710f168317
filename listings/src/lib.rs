//! Shared domain records for the Hearth marketplace client.
//!
//! This crate owns the JSON shapes exchanged with the remote marketplace
//! API. The API is external and MongoDB-backed: record identifiers arrive
//! as either `id` or `_id`, numbers are sometimes strings, and list
//! responses are wrapped in a `{ data, msg, total }` envelope. Every type
//! here is deliberately lenient — unknown fields are ignored and missing
//! fields default — because the contract is observed, not owned.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Error returned when a payload cannot be read as the expected record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The JSON payload did not match the record shape.
    #[error("failed to decode record: {0}")]
    Decode(#[from] serde_json::Error),
    /// A role string outside `USER` / `AGENT` / `MERCHANT`.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

// =============================================================================
// ROLES
// =============================================================================

/// Marketplace role. Each role authenticates separately and holds its own
/// bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Prospective buyer/browser of listings.
    User,
    /// Real-estate agent managing listed properties.
    Agent,
    /// Organization that onboards and verifies agents.
    Merchant,
}

impl Role {
    /// Uppercase wire name, e.g. `"AGENT"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Agent => "AGENT",
            Self::Merchant => "MERCHANT",
        }
    }

    /// Map a role string from a login response onto a role slot.
    ///
    /// Matching is case-insensitive and anything unrecognized falls back to
    /// [`Role::User`], which is how the login flow treats responses without
    /// a usable role.
    #[must_use]
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_uppercase).as_deref() {
            Some("AGENT") => Self::Agent,
            Some("MERCHANT") => Self::Merchant,
            _ => Self::User,
        }
    }

    /// All roles, in the precedence order used for token fallbacks.
    #[must_use]
    pub fn fallback_order() -> [Self; 3] {
        [Self::Agent, Self::User, Self::Merchant]
    }
}

impl std::str::FromStr for Role {
    type Err = RecordError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "AGENT" => Ok(Self::Agent),
            "MERCHANT" => Ok(Self::Merchant),
            _ => Err(RecordError::UnknownRole(raw.to_owned())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// The remote API's response wrapper: `{ "data": ..., "msg": ..., "total": n }`.
///
/// Single records sometimes arrive bare, so [`Envelope::unwrap_data`] works
/// on any JSON value rather than requiring the wrapper.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Envelope {
    /// Payload — a record or a list of records.
    #[serde(default)]
    pub data: Option<Value>,
    /// Human-readable status or error message.
    #[serde(default)]
    pub msg: Option<String>,
    /// Total matching records, for paginated lists.
    #[serde(default)]
    pub total: Option<u64>,
}

impl Envelope {
    /// Extract the payload from a response body: the `data` field when it is
    /// present and non-null, otherwise the body itself.
    #[must_use]
    pub fn unwrap_data(body: Value) -> Value {
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) if !data.is_null() => data,
                _ => Value::Object(map),
            },
            other => other,
        }
    }

    /// Server-provided message from a response body, if any.
    #[must_use]
    pub fn message(body: &Value) -> Option<&str> {
        body.get("msg").and_then(Value::as_str)
    }

    /// `total` count from a response body, for pagination loops.
    #[must_use]
    pub fn total(body: &Value) -> Option<u64> {
        body.get("total").and_then(Value::as_u64)
    }
}

// =============================================================================
// IDENTITY RECORDS
// =============================================================================

/// A registered end user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Avatar image URL, set via the resource upload endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Fields required to register a user account.
#[derive(Clone, Debug, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl NewUser {
    /// Required-field check performed before submission.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !(self.first_name.is_empty()
            || self.last_name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.password.is_empty())
    }
}

/// A real-estate agent managed by a merchant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Set by the merchant through the verify-agent operation.
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Fields required to onboard an agent.
#[derive(Clone, Debug, Serialize)]
pub struct NewAgent {
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl NewAgent {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !(self.full_name.is_empty()
            || self.company.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.password.is_empty())
    }
}

/// A merchant organization. Only displayed fields are mirrored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

// =============================================================================
// PROPERTIES
// =============================================================================

/// Client-side market status, derived by merging the verified listings
/// feed with the user's bought properties. Never sent to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketStatus {
    Available,
    Bought,
}

/// A property listing.
///
/// `type` is a reserved word in Rust; the wire field is mapped to
/// `listing_type`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub price: Option<f64>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    /// e.g. `"FLAT"`, `"DUPLEX"`.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub total_area: String,
    /// e.g. `"RESIDENTIAL"`, `"COMMERCIAL"`.
    #[serde(default)]
    pub property_use: String,
    /// e.g. `"PER_ANNUM"`.
    #[serde(default)]
    pub payment_plan: String,
    /// `"RENT"` or `"SALE"`.
    #[serde(rename = "type", default)]
    pub listing_type: String,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub bedroom: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub bathroom: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub toilet: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub parking_space: Option<i64>,
    #[serde(default)]
    pub furnishing: String,
    #[serde(default)]
    pub disclaimer: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Primary image URL or uploaded resource name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the listing passed merchant verification.
    #[serde(default)]
    pub verified: bool,
    /// Owning merchant id.
    #[serde(default)]
    pub merchant: String,
    /// Managing agent id.
    #[serde(default)]
    pub agent: String,
    /// Derived client-side; absent on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_status: Option<MarketStatus>,
}

impl Property {
    /// Tag this record with a derived market status.
    #[must_use]
    pub fn with_market_status(mut self, status: MarketStatus) -> Self {
        self.market_status = Some(status);
        self
    }
}

/// Submission payload for creating a property listing. Field names match
/// the remote API, so this serializes directly as the request body.
#[derive(Clone, Debug, Serialize)]
pub struct NewProperty {
    pub name: String,
    pub price: f64,
    pub country: String,
    pub state: String,
    pub city: String,
    pub lat: String,
    pub lng: String,
    pub address: String,
    pub description: String,
    pub category: String,
    pub total_area: String,
    pub property_use: String,
    pub payment_plan: String,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub bedroom: i64,
    pub bathroom: i64,
    pub toilet: i64,
    pub parking_space: i64,
    pub furnishing: String,
    pub disclaimer: String,
    pub amenities: Vec<String>,
    pub merchant: String,
    pub agent: String,
}

impl NewProperty {
    /// Split a comma-separated amenities string: trimmed, empty entries
    /// dropped.
    #[must_use]
    pub fn split_amenities(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

/// A viewing window within a day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

/// A property-viewing appointment between a user and an agent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub property_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: TimeSlot,
    #[serde(default)]
    pub msg: String,
    /// Agent confirmed the meeting.
    #[serde(default)]
    pub confirmed: bool,
    /// User marked the appointment completed.
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Booking payload for a new appointment.
#[derive(Clone, Debug, Serialize)]
pub struct NewAppointment {
    pub property_id: String,
    pub user_id: String,
    pub date: String,
    pub msg: String,
    pub time: TimeSlot,
}

impl NewAppointment {
    /// Required-field check before submission: the message is optional,
    /// everything else must be present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !(self.property_id.is_empty()
            || self.user_id.is_empty()
            || self.date.is_empty()
            || self.time.from.is_empty()
            || self.time.to.is_empty())
    }
}

// =============================================================================
// REVIEWS AND WISHLISTS
// =============================================================================

/// A property review.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub property_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
}

/// A saved-properties entry. The API returns the property record inline,
/// sometimes with a separate reference id alongside it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(flatten)]
    pub property: Property,
}

// =============================================================================
// AUTH
// =============================================================================

/// Payload of a successful `/auth/login` response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default)]
    pub agent: Option<Value>,
    #[serde(default)]
    pub merchant: Option<Value>,
}

impl LoginData {
    /// Role slot this login belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_wire(self.role.as_deref())
    }

    /// The embedded profile record: whichever of `user` / `agent` /
    /// `merchant` is present, else an empty object.
    #[must_use]
    pub fn profile(&self) -> Value {
        self.user
            .clone()
            .or_else(|| self.agent.clone())
            .or_else(|| self.merchant.clone())
            .unwrap_or_else(|| Value::Object(Map::new()))
    }
}

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================

fn de_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        Value::String(raw) => match raw.trim() {
            "" => Ok(None),
            trimmed => trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected integer, got {raw:?}"))),
        },
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}

fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => Ok(number.as_f64()),
        Value::String(raw) => {
            // Prices occasionally arrive formatted ("2,500,000").
            let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != ' ').collect();
            if cleaned.is_empty() {
                return Ok(None);
            }
            cleaned
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected numeric price, got {raw:?}")))
        }
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
