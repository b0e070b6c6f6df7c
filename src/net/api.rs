//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. The task fetch reports its
//! failure into `TasksState::error`; guards only ever see the readiness flag.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

use crate::state::tasks::{Task, TasksState};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("tasks request failed: {0}")]
    Status(u16),
    #[error("invalid tasks payload: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Fetch the task collection from `url`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails, the server answers with a
/// non-success status, or the body is not a task list.
pub async fn fetch_tasks(url: &str) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Vec<Task>>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Fire-and-forget fetch whose only effect is updating `tasks`.
pub fn spawn_fetch_tasks(url: String, tasks: RwSignal<TasksState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch_tasks(&url).await.map_err(|e| e.to_string());
        tasks.update(|state| state.apply_fetched(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, tasks);
    }
}
