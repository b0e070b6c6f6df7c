//! Auth-session status for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consumed by route guards to decide between a blank frame, the protected
//! page, or a login redirect. The status is produced from the persisted
//! session once the client has mounted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::state::session::SessionStore;
use crate::state::users::UserStore;

/// Authentication status reported by the auth provider.
///
/// `Unknown` collects any value outside the three known states so callers can
/// handle it explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
    #[serde(other)]
    Unknown,
}

impl AuthStatus {
    /// Parse the provider's string form.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "loading" => Self::Loading,
            "authenticated" => Self::Authenticated,
            "unauthenticated" => Self::Unauthenticated,
            _ => Self::Unknown,
        }
    }

    /// Resolve the status from the persisted session: authenticated only when
    /// the referenced account exists.
    #[must_use]
    pub fn resolve(session: &SessionStore, users: &UserStore) -> Self {
        match session.user_id() {
            Some(id) if users.get_by_id(id).is_some() => Self::Authenticated,
            _ => Self::Unauthenticated,
        }
    }
}

/// Authentication state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user_id: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn resolved(session: &SessionStore, users: &UserStore) -> Self {
        let status = AuthStatus::resolve(session, users);
        let user_id = match status {
            AuthStatus::Authenticated => session.user_id().map(str::to_owned),
            _ => None,
        };
        Self { status, user_id }
    }
}
