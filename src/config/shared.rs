use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::RwLock;

use crate::config::settings::TrailConfig;

/// Configuration cell shared between the settings layer (single writer) and the render tick
/// (reader).
///
/// Every write normalizes the value and bumps a revision counter, so the reader can skip
/// re-applying an unchanged snapshot.
#[derive(Clone, Debug, Default)]
pub struct SharedConfig {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    config: RwLock<TrailConfig>,
    revision: AtomicU64,
}

impl SharedConfig {
    /// Create a cell holding `config` (normalized).
    pub fn new(config: TrailConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                config: RwLock::new(config.normalized()),
                revision: AtomicU64::new(0),
            }),
        }
    }

    /// Copy out the current configuration.
    pub fn snapshot(&self) -> TrailConfig {
        *self.inner.config.read()
    }

    /// Current revision; increments on every write.
    pub fn revision(&self) -> u64 {
        self.inner.revision.load(Ordering::Acquire)
    }

    /// Snapshot and revision read under the same lock.
    pub fn snapshot_with_revision(&self) -> (TrailConfig, u64) {
        let guard = self.inner.config.read();
        (*guard, self.inner.revision.load(Ordering::Acquire))
    }

    /// Edit the configuration in place; the result is normalized and returned.
    pub fn update(&self, edit: impl FnOnce(&mut TrailConfig)) -> TrailConfig {
        let mut guard = self.inner.config.write();
        let mut next = *guard;
        edit(&mut next);
        *guard = next.normalized();
        self.inner.revision.fetch_add(1, Ordering::AcqRel);
        *guard
    }

    /// Replace the whole configuration.
    pub fn replace(&self, config: TrailConfig) -> TrailConfig {
        self.update(|c| *c = config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/shared.rs"]
mod tests;
