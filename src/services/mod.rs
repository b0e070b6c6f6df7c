//! Client-side services that mutate stores on behalf of privileged callers.

pub mod admin;
pub mod integrity;
