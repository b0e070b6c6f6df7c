//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control is applied by
//! wrapping the page in guard components at the route, not inside the page.

pub mod admin;
pub mod board;
pub mod login;
