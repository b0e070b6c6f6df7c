//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Guard components wrap route views and delegate their decisions to
//! `util::auth` and `util::readiness`; they only translate outcomes into
//! views and navigation.

pub mod loading;
pub mod require_auth;
pub mod require_data;
