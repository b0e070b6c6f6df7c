//! Account records and the bulk customer-pruning operation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accounts live in a single JSON document in client storage. Sessions hold
//! only an account id, so every destructive operation here can leave a
//! session dangling; `services::integrity` repairs that afterwards.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{self, SharedStorage, StorageError};

/// Storage key holding the serialized account list.
pub const USERS_KEY: &str = "taskgate_users";

/// Account classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Staff,
    Admin,
}

/// An account record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }
}

/// Outcome of [`UserStore::prune_customers_except_email`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    /// Number of customer accounts deleted.
    pub removed: usize,
    /// Id of the customer whose email matched, if any.
    pub kept_user_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UserStoreError {
    #[error("invalid email: {0:?}")]
    InvalidEmail(String),
    #[error("an account with email {0} already exists")]
    DuplicateEmail(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// In-memory account list mirrored to storage on every mutation.
#[derive(Clone)]
pub struct UserStore {
    users: Vec<User>,
    storage: SharedStorage,
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore").field("users", &self.users).finish_non_exhaustive()
    }
}

impl UserStore {
    /// Build a store over an explicit account list without touching storage.
    #[must_use]
    pub fn from_users(storage: SharedStorage, users: Vec<User>) -> Self {
        Self { users, storage }
    }

    /// Load accounts from storage, installing the demo accounts when nothing
    /// has been stored yet. A corrupt document loads as an empty list.
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        match storage::load_json::<Vec<User>>(storage.as_ref(), USERS_KEY) {
            Ok(Some(users)) => Self { users, storage },
            Ok(None) => {
                let store = Self { users: demo_users(), storage };
                store.persist_logged();
                store
            }
            Err(e) => {
                log::warn!("ignoring stored accounts: {e}");
                Self { users: Vec::new(), storage }
            }
        }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    #[must_use]
    pub fn customer_count(&self) -> usize {
        self.users.iter().filter(|u| u.is_customer()).count()
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::InvalidEmail`] for an empty or `@`-less
    /// address, [`UserStoreError::DuplicateEmail`] when the address is taken,
    /// and [`UserStoreError::Storage`] when the list cannot be persisted.
    pub fn register(&mut self, email: &str, name: &str, role: Role) -> Result<User, UserStoreError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(UserStoreError::InvalidEmail(email.to_owned()));
        }
        if self.find_by_email(email).is_some() {
            return Err(UserStoreError::DuplicateEmail(email.to_owned()));
        }
        let name = match name.trim() {
            "" => email.split('@').next().unwrap_or(email).to_owned(),
            trimmed => trimmed.to_owned(),
        };
        let user = User { id: uuid::Uuid::new_v4().to_string(), email: email.to_owned(), name, role };
        self.users.push(user.clone());
        self.persist()?;
        Ok(user)
    }

    /// Delete every customer account except the one whose stored email equals
    /// `email_to_keep` exactly. Other roles are never touched.
    pub fn prune_customers_except_email(&mut self, email_to_keep: &str) -> PruneReport {
        let before = self.users.len();
        let mut kept_user_id = None;
        self.users.retain(|user| {
            if !user.is_customer() {
                return true;
            }
            if user.email == email_to_keep {
                kept_user_id.get_or_insert_with(|| user.id.clone());
                return true;
            }
            false
        });
        let removed = before - self.users.len();
        log::info!("pruned {removed} customer account(s), kept {kept_user_id:?}");
        if removed > 0 {
            self.persist_logged();
        }
        PruneReport { removed, kept_user_id }
    }

    /// Write the account list to storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] when serialization fails.
    pub fn persist(&self) -> Result<(), StorageError> {
        storage::save_json(self.storage.as_ref(), USERS_KEY, &self.users)
    }

    fn persist_logged(&self) {
        if let Err(e) = self.persist() {
            log::error!("failed to persist accounts: {e}");
        }
    }
}

/// Accounts installed on a fresh client.
#[must_use]
pub fn demo_users() -> Vec<User> {
    let seed = [
        ("u-admin", "admin@taskgate.dev", "Admin", Role::Admin),
        ("u-staff", "staff@taskgate.dev", "Staff", Role::Staff),
        ("u-ada", "ada@example.com", "Ada", Role::Customer),
        ("u-grace", "grace@example.com", "Grace", Role::Customer),
    ];
    seed.into_iter()
        .map(|(id, email, name, role)| User { id: id.to_owned(), email: email.to_owned(), name: name.to_owned(), role })
        .collect()
}
