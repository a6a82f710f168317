//! API client for the Hearth marketplace.
//!
//! ARCHITECTURE
//! ============
//! The remote REST API is the single collaborator: every operation here is
//! an HTTP request with a role-scoped bearer token attached. Request
//! building and response parsing are pure functions so the interesting
//! behavior is testable without a network; `ApiClient::send` is the one
//! I/O seam.
//!
//! Session state (the three role-scoped credential slots) lives in
//! [`session`] and is persisted to a single JSON file so sign-ins survive
//! across invocations.

pub mod api;
pub mod config;
pub mod error;
pub mod session;

pub use api::{ApiClient, ApiRequest};
pub use config::ClientConfig;
pub use error::ApiError;
pub use session::{Credentials, Session, SessionStore};
