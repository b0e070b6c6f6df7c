//! Network helpers for the browser client.

pub mod api;
