//! Administrative operations reachable outside the normal page flow.
//!
//! ARCHITECTURE
//! ============
//! `AdminService` is built once when the app starts and handed to privileged
//! callers (the `/admin` page) through context. It owns handles to the user
//! and session stores and is the only place that runs the customer prune.
//!
//! TRADE-OFFS
//! ==========
//! The prune and the session check always run together in one synchronous
//! call. Nothing else touches the stores in between, so no reactive observer
//! can see accounts pruned while a dangling session is still in place.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::RwSignal;
use serde::Serialize;

use super::integrity::{self, IntegrityOutcome, SessionRepository, UserRepository};
use crate::state::session::SessionStore;
use crate::state::users::{PruneReport, UserStore};

/// Combined report of a prune-and-validate run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdminReport {
    pub prune: PruneReport,
    pub session: IntegrityOutcome,
}

#[derive(Clone, Copy, Debug)]
pub struct AdminService<U, S> {
    users: U,
    session: S,
}

/// The service as wired into the running app.
pub type AppAdminService = AdminService<RwSignal<UserStore>, RwSignal<SessionStore>>;

impl<U, S> AdminService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(users: U, session: S) -> Self {
        Self { users, session }
    }

    /// Remove every customer except `email_to_keep`, then re-validate the
    /// session. The check runs whether or not the session's account was among
    /// those removed.
    pub fn prune_customers_except_email(&self, email_to_keep: &str) -> AdminReport {
        let prune = self.users.prune_customers_except_email(email_to_keep);
        let session = integrity::ensure_session_valid(&self.session, &self.users);
        log::info!(
            "admin prune removed {} account(s), session {:?}",
            prune.removed,
            session
        );
        AdminReport { prune, session }
    }

    pub fn ensure_session_valid(&self) -> IntegrityOutcome {
        integrity::ensure_session_valid(&self.session, &self.users)
    }

    pub fn users(&self) -> &U {
        &self.users
    }

    pub fn session(&self) -> &S {
        &self.session
    }
}
