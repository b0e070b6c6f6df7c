//! Guard for views that need the task collection loaded.

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::config::AppConfig;
use crate::net::api::spawn_fetch_tasks;
use crate::state::tasks::TasksState;
use crate::util::readiness::{DataReadinessGate, ReadinessOutcome};

/// Shows a placeholder until tasks are loaded when the source is remote.
/// The gate requests the fetch at most once per mount.
#[component]
pub fn RequireData(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let gate = DataReadinessGate::new(config.data_source);
    let tasks_url = config.tasks_url;

    // Children rebuild only when the outcome changes, not on every task update.
    let outcome = Memo::new(move |_| {
        let url = tasks_url.clone();
        gate.evaluate(|| tasks.with(|t| t.meta().loaded()), move || spawn_fetch_tasks(url, tasks))
    });

    move || match outcome.get() {
        ReadinessOutcome::Render => children().into_any(),
        ReadinessOutcome::Placeholder => view! { <LoadingPlaceholder label="Loading tasks..."/> }.into_any(),
    }
}
