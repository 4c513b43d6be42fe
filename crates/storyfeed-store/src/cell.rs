//! Persisted single-value cell.
//!
//! Wraps one named string: seeded from the durable store at creation,
//! written through on every change. Writes are best-effort; a failed write
//! leaves the in-memory value authoritative for the session.

use crate::kv::StoreHandle;

/// A single named value kept in sync with a durable store.
#[derive(Debug, Clone)]
pub struct PersistedCell {
    store: StoreHandle,
    key: String,
    value: String,
}

impl PersistedCell {
    /// Create a cell for `key`, adopting the stored value when present and
    /// `fallback` otherwise.
    #[must_use]
    pub fn new(store: StoreHandle, key: impl Into<String>, fallback: impl Into<String>) -> Self {
        let key = key.into();
        let value = store.get(&key).unwrap_or_else(|| fallback.into());
        Self { store, key, value }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Key the cell persists under.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the value and write it through to the store.
    ///
    /// Exactly one write is attempted per call; a failure is logged and
    /// dropped, never surfaced to the caller.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Err(err) = self.store.set(&self.key, &self.value) {
            tracing::warn!(key = %self.key, %err, "dropping failed store write");
        }
    }
}
