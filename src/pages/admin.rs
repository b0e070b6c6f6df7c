//! Administrative page exposing the prune-and-validate operation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Developer-facing, not part of the normal user journey. The page holds no
//! store logic itself; it calls the `AdminService` built at app start.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::services::admin::{AdminReport, AppAdminService};
use crate::services::integrity::IntegrityOutcome;

fn describe_report(report: &AdminReport) -> String {
    let kept = match &report.prune.kept_user_id {
        Some(id) => format!("kept account {id}"),
        None => "no customer matched".to_owned(),
    };
    let session = match report.session {
        IntegrityOutcome::NoSession => "no active session",
        IntegrityOutcome::Valid => "session still valid",
        IntegrityOutcome::Cleared => "session cleared",
    };
    format!("Removed {} customer account(s); {kept}; {session}.", report.prune.removed)
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let admin = expect_context::<AppAdminService>();
    let email = RwSignal::new(String::new());
    let result = RwSignal::new(None::<String>);

    let on_prune = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let report = admin.prune_customers_except_email(&email.get_untracked());
        result.set(Some(describe_report(&report)));
    };

    view! {
        <div class="admin-page">
            <h1>"Admin"</h1>
            <form class="admin-form" on:submit=on_prune>
                <label>
                    "Keep customer with email"
                    <input
                        class="admin-input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--danger" type="submit">"Prune Customers"</button>
            </form>
            <Show when=move || result.get().is_some()>
                <p class="admin-result">{move || result.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
