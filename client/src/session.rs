//! Role-scoped session state and its on-disk store.
//!
//! DESIGN
//! ======
//! Each role (user, agent, merchant) signs in separately against the same
//! API, so the session holds three parallel credential slots in one JSON
//! document. State transitions are pure methods on [`Session`] so
//! login/logout behavior is unit-testable; [`SessionStore`] only reads
//! and writes the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use listings::{LoginData, Role};

use crate::error::ApiError;

/// Stored credentials for one role slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// Record id from the login response (`id` or `_id`).
    pub id: String,
    pub role: Role,
    /// The embedded profile record, kept opaque.
    pub profile: Value,
    pub token: String,
}

/// The three role slots. A missing slot means that role is signed out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Credentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Credentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<Credentials>,
}

impl Session {
    /// Store credentials from a login response in the slot selected by the
    /// response's role string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingLoginToken`] when the response carries no
    /// token; the session is left unchanged in that case.
    pub fn apply_login(&mut self, data: &LoginData) -> Result<Role, ApiError> {
        let Some(token) = data.token.as_deref().filter(|t| !t.is_empty()) else {
            return Err(ApiError::MissingLoginToken);
        };

        let role = data.role();
        let credentials = Credentials {
            id: data.id.clone().unwrap_or_default(),
            role,
            profile: data.profile(),
            token: token.to_owned(),
        };
        *self.slot_mut(role) = Some(credentials);
        Ok(role)
    }

    /// Clear one slot, or every slot when `role` is `None`.
    pub fn clear(&mut self, role: Option<Role>) {
        match role {
            Some(role) => *self.slot_mut(role) = None,
            None => {
                self.user = None;
                self.agent = None;
                self.merchant = None;
            }
        }
    }

    #[must_use]
    pub fn credentials(&self, role: Role) -> Option<&Credentials> {
        match role {
            Role::User => self.user.as_ref(),
            Role::Agent => self.agent.as_ref(),
            Role::Merchant => self.merchant.as_ref(),
        }
    }

    /// Bearer token for an exact role.
    #[must_use]
    pub fn token_for(&self, role: Role) -> Option<&str> {
        self.credentials(role).map(|c| c.token.as_str())
    }

    /// Bearer token for an exact role, as a hard requirement.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when that role is signed out.
    pub fn require_token(&self, role: Role) -> Result<&str, ApiError> {
        self.token_for(role).ok_or(ApiError::MissingToken { role })
    }

    /// First available token in fallback order (agent, then user, then
    /// merchant) — for screens any signed-in role may use.
    #[must_use]
    pub fn any_token(&self) -> Option<(Role, &str)> {
        Role::fallback_order()
            .into_iter()
            .find_map(|role| self.token_for(role).map(|token| (role, token)))
    }

    /// First signed-in identity in the same fallback order.
    #[must_use]
    pub fn current_identity(&self) -> Option<&Credentials> {
        Role::fallback_order()
            .into_iter()
            .find_map(|role| self.credentials(role))
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<Credentials> {
        match role {
            Role::User => &mut self.user,
            Role::Agent => &mut self.agent,
            Role::Merchant => &mut self.merchant,
        }
    }
}

/// Reads and writes the session file.
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session. A missing file is an empty session; a file that
    /// exists but cannot be parsed is an error rather than a silent reset,
    /// so stored tokens are never dropped by accident.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] on read failure and
    /// [`ApiError::SessionCorrupt`] on parse failure.
    pub fn load(&self) -> Result<Session, ApiError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Session::default());
            }
            Err(error) => return Err(ApiError::Io(error)),
        };

        serde_json::from_str(&raw).map_err(|error| ApiError::SessionCorrupt(error.to_string()))
    }

    /// Persist the session, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] on write failure.
    pub fn save(&self, session: &Session) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let rendered = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
