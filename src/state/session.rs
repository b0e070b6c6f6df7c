//! Persisted reference to the signed-in account.
//!
//! The session stores only an account id. It says nothing about whether that
//! account still exists; see `services::integrity`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{self, SharedStorage, Storage};

/// Storage key holding the serialized session.
pub const SESSION_KEY: &str = "taskgate_session";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedSession {
    user_id: Option<String>,
}

#[derive(Clone)]
pub struct SessionStore {
    user_id: Option<String>,
    storage: SharedStorage,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("user_id", &self.user_id).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Read the session from storage. Missing or unreadable data yields an
    /// empty session.
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        let user_id = match storage::load_json::<PersistedSession>(storage.as_ref(), SESSION_KEY) {
            Ok(persisted) => persisted.and_then(|p| p.user_id),
            Err(e) => {
                log::warn!("ignoring stored session: {e}");
                None
            }
        };
        Self { user_id, storage }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Point the session at `user_id` and persist it.
    pub fn sign_in(&mut self, user_id: &str) {
        self.user_id = Some(user_id.to_owned());
        let persisted = PersistedSession { user_id: self.user_id.clone() };
        if let Err(e) = storage::save_json(self.storage.as_ref(), SESSION_KEY, &persisted) {
            log::error!("failed to persist session: {e}");
        }
    }

    /// Drop the reference, in memory and in storage.
    pub fn clear(&mut self) {
        self.user_id = None;
        self.storage.remove(SESSION_KEY);
    }
}
