//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! task list is read once at startup and served read-only.

use std::sync::Arc;

use taskgate::state::tasks::Task;

#[derive(Clone, Default)]
pub struct AppState {
    pub tasks: Arc<Vec<Task>>,
}

impl AppState {
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks: Arc::new(tasks) }
    }
}
