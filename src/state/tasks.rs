//! Task collection and its readiness latch.
//!
//! DESIGN
//! ======
//! `TasksMeta::loaded` only ever moves from `false` to `true`. The state
//! exposes no operation that clears it, so a later failed refresh cannot hide
//! data that already rendered.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use serde::{Deserialize, Serialize};

/// A single task card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// Readiness of the task collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TasksMeta {
    loaded: bool,
}

impl TasksMeta {
    #[must_use]
    pub fn loaded(self) -> bool {
        self.loaded
    }
}

#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    /// Last fetch failure, kept for diagnostics only.
    pub error: Option<String>,
    meta: TasksMeta,
}

impl TasksState {
    #[must_use]
    pub fn meta(&self) -> TasksMeta {
        self.meta
    }

    /// Install a locally sourced collection.
    pub fn load_local(&mut self, items: Vec<Task>) {
        self.items = items;
        self.error = None;
        self.meta.loaded = true;
    }

    /// Apply the outcome of a remote fetch. Failures leave readiness unchanged.
    pub fn apply_fetched(&mut self, result: Result<Vec<Task>, String>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.meta.loaded = true;
            }
            Err(e) => {
                log::warn!("task fetch failed: {e}");
                self.error = Some(e);
            }
        }
    }
}

/// Tasks shown when the data source is local.
#[must_use]
pub fn local_tasks() -> Vec<Task> {
    [("t-1", "Triage inbox"), ("t-2", "Review open pull requests"), ("t-3", "Plan sprint")]
        .into_iter()
        .map(|(id, title)| Task { id: id.to_owned(), title: title.to_owned(), done: false })
        .collect()
}
