//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate guard decisions and browser storage from page and
//! component logic so they can be tested without a DOM.

pub mod auth;
pub mod readiness;
pub mod storage;
