//! Session referential-integrity repair.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session holds only an account id. Anything that deletes accounts can
//! leave the session pointing at nothing, so callers that mutate the account
//! list run [`ensure_session_valid`] afterwards. A dangling reference is
//! repaired silently by clearing the session.

#[cfg(test)]
#[path = "integrity_test.rs"]
mod integrity_test;

use std::cell::RefCell;

use leptos::prelude::*;
use serde::Serialize;

use crate::state::session::SessionStore;
use crate::state::users::{PruneReport, User, UserStore};

/// Account lookups and bulk deletion.
pub trait UserRepository {
    fn get_by_id(&self, id: &str) -> Option<User>;
    fn prune_customers_except_email(&self, email_to_keep: &str) -> PruneReport;
}

/// The persisted session reference.
pub trait SessionRepository {
    fn user_id(&self) -> Option<String>;
    fn clear(&self);
}

/// Result of an integrity check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityOutcome {
    NoSession,
    Valid,
    /// The referenced account was missing and the session was cleared.
    Cleared,
}

/// Clear the session if it references an account that no longer exists.
pub fn ensure_session_valid(session: &impl SessionRepository, users: &impl UserRepository) -> IntegrityOutcome {
    let Some(user_id) = session.user_id() else {
        return IntegrityOutcome::NoSession;
    };
    if users.get_by_id(&user_id).is_some() {
        return IntegrityOutcome::Valid;
    }
    log::info!("clearing session for missing account {user_id}");
    session.clear();
    IntegrityOutcome::Cleared
}

impl UserRepository for RefCell<UserStore> {
    fn get_by_id(&self, id: &str) -> Option<User> {
        self.borrow().get_by_id(id).cloned()
    }

    fn prune_customers_except_email(&self, email_to_keep: &str) -> PruneReport {
        self.borrow_mut().prune_customers_except_email(email_to_keep)
    }
}

impl SessionRepository for RefCell<SessionStore> {
    fn user_id(&self) -> Option<String> {
        self.borrow().user_id().map(str::to_owned)
    }

    fn clear(&self) {
        self.borrow_mut().clear();
    }
}

impl UserRepository for RwSignal<UserStore> {
    fn get_by_id(&self, id: &str) -> Option<User> {
        self.with_untracked(|store| store.get_by_id(id).cloned())
    }

    fn prune_customers_except_email(&self, email_to_keep: &str) -> PruneReport {
        self.try_update(|store| store.prune_customers_except_email(email_to_keep))
            .unwrap_or_else(|| {
                log::warn!("account store disposed, prune skipped");
                PruneReport::default()
            })
    }
}

impl SessionRepository for RwSignal<SessionStore> {
    fn user_id(&self) -> Option<String> {
        self.with_untracked(|session| session.user_id().map(str::to_owned))
    }

    fn clear(&self) {
        self.update(SessionStore::clear);
    }
}
