//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `users`, `tasks`) so guards
//! and pages can depend on small focused models.

pub mod auth;
pub mod session;
pub mod tasks;
pub mod users;
