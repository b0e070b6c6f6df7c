//! Placeholder shown while guarded data is not ready.

use leptos::prelude::*;

#[component]
pub fn LoadingPlaceholder(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading-placeholder" role="status" aria-live="polite">
            <span class="loading-placeholder__spinner" aria-hidden="true"></span>
            <span class="loading-placeholder__label">{label}</span>
        </div>
    }
}
