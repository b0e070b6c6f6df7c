//! Data-readiness gating for views that need the task collection.
//!
//! DESIGN
//! ======
//! The one-fetch-per-mount rule is a latch owned by each gate instance rather
//! than by the task store, so remounting a gate requests data again while
//! re-renders of the same mount never do.

#[cfg(test)]
#[path = "readiness_test.rs"]
mod readiness_test;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::DataSource;

/// A flag that can be acquired exactly once.
#[derive(Debug, Default)]
pub struct FetchLatch(AtomicBool);

impl FetchLatch {
    /// Returns `true` only for the first caller.
    pub fn try_acquire(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadinessOutcome {
    Render,
    Placeholder,
}

/// Per-mount gate state.
#[derive(Debug)]
pub struct DataReadinessGate {
    source: DataSource,
    latch: FetchLatch,
}

impl DataReadinessGate {
    #[must_use]
    pub fn new(source: DataSource) -> Self {
        Self { source, latch: FetchLatch::default() }
    }

    /// Decide what to show given the readiness flag.
    ///
    /// For a remote source the first call runs `fetch` before `loaded` is
    /// read; later calls never run it. The fetch outcome is not observed
    /// here, only the flag it eventually flips.
    pub fn evaluate(&self, loaded: impl FnOnce() -> bool, fetch: impl FnOnce()) -> ReadinessOutcome {
        match self.source {
            DataSource::Local => ReadinessOutcome::Render,
            DataSource::Remote => {
                if self.latch.try_acquire() {
                    log::debug!("requesting remote task fetch");
                    fetch();
                }
                if loaded() { ReadinessOutcome::Render } else { ReadinessOutcome::Placeholder }
            }
        }
    }

    #[must_use]
    pub fn fetch_requested(&self) -> bool {
        self.latch.is_set()
    }
}
