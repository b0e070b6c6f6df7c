//! Route guard for pages that need a signed-in account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route view. While auth is loading nothing renders (no login
//! flash); once resolved, the wrapped view renders for authenticated visitors
//! and everyone else is sent to `/login` with the current location in
//! `backTo`, replacing the history entry.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{self as auth_util, AuthGateOutcome};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        auth_util::evaluate(auth.get().status, &location.pathname.get(), &location.search.get())
    });

    Effect::new(move || {
        if let AuthGateOutcome::Redirect(redirect) = outcome.get() {
            navigate(&redirect.to, redirect.navigate_options());
        }
    });

    move || match outcome.get() {
        AuthGateOutcome::Render => children().into_any(),
        AuthGateOutcome::Blank | AuthGateOutcome::Redirect(_) => ().into_any(),
    }
}
