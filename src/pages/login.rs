//! Login page: email sign-in and customer signup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards send visitors here with `backTo` naming the page they asked for.
//! After signing in the visitor is returned there, replacing the login entry
//! in history.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::SessionStore;
use crate::state::users::{Role, UserStore};
use crate::util::auth::{BACK_TO_PARAM, sanitize_back_to};

fn validate_email_input(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    if !email.contains('@') {
        return Err("That does not look like an email address.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let users = expect_context::<RwSignal<UserStore>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let return_target = move || sanitize_back_to(query.with_untracked(|q| q.get(BACK_TO_PARAM)).as_deref());

    let finish = {
        let navigate = navigate.clone();
        move |user_id: String| {
            session.update(|s| s.sign_in(&user_id));
            navigate(&return_target(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    };

    let on_sign_in = {
        let finish = finish.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let email_value = match validate_email_input(&email.get_untracked()) {
                Ok(value) => value,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
            match users.with_untracked(|u| u.find_by_email(&email_value).map(|user| user.id.clone())) {
                Some(user_id) => finish(user_id),
                None => info.set("No account for that email.".to_owned()),
            }
        }
    };

    let on_sign_up = move |_| {
        let email_value = match validate_email_input(&email.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let created = users.try_update(|u| u.register(&email_value, "", Role::Customer));
        match created {
            Some(Ok(user)) => finish(user.id),
            Some(Err(e)) => info.set(format!("Signup failed: {e}")),
            None => {}
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Taskgate"</h1>
                <p class="login-card__subtitle">"Sign in with your email"</p>
                <form class="login-form" on:submit=on_sign_in>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                    <button class="login-button login-button--secondary" type="button" on:click=on_sign_up>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
