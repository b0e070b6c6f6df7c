//! Route-protection decisions shared by guarded routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical behavior: a blank frame while the
//! auth status is loading, the page once authenticated, and otherwise a
//! history-replacing redirect to `/login` that remembers where the visitor
//! was headed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::state::auth::AuthStatus;

pub const LOGIN_PATH: &str = "/login";
pub const BACK_TO_PARAM: &str = "backTo";

/// Redirect issued for visitors who may not see the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRedirect {
    pub to: String,
    pub replace: bool,
}

impl LoginRedirect {
    #[must_use]
    pub fn navigate_options(&self) -> NavigateOptions {
        NavigateOptions { replace: self.replace, ..NavigateOptions::default() }
    }
}

/// Exactly one of these is produced per evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthGateOutcome {
    /// Nothing is rendered until the status resolves.
    Blank,
    Render,
    Redirect(LoginRedirect),
}

/// Decide what a protected route shows for `status` at `path` + `query`.
#[must_use]
pub fn evaluate(status: AuthStatus, path: &str, query: &str) -> AuthGateOutcome {
    match status {
        AuthStatus::Loading => AuthGateOutcome::Blank,
        AuthStatus::Authenticated => AuthGateOutcome::Render,
        AuthStatus::Unauthenticated => AuthGateOutcome::Redirect(login_redirect(path, query)),
        // Fail closed.
        AuthStatus::Unknown => {
            log::warn!("unrecognized auth status, treating as unauthenticated");
            AuthGateOutcome::Redirect(login_redirect(path, query))
        }
    }
}

/// The location to come back to: path plus query string, if any.
#[must_use]
pub fn back_to(path: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() { path.to_owned() } else { format!("{path}?{query}") }
}

/// Build the login redirect, percent-encoding the return location.
#[must_use]
pub fn login_redirect(path: &str, query: &str) -> LoginRedirect {
    let target = back_to(path, query);
    log::debug!("redirecting {target} to login");
    LoginRedirect { to: format!("{LOGIN_PATH}?{BACK_TO_PARAM}={}", urlencoding::encode(&target)), replace: true }
}

/// Accept a decoded `backTo` value only when it is a same-origin path.
#[must_use]
pub fn sanitize_back_to(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") => path.to_owned(),
        _ => "/".to_owned(),
    }
}
