//! Listener capability for observing data store changes.

use crate::error::StoreResult;
use crate::store::StoreValue;

/// Callback invoked for every write and removal across all components.
///
/// Listeners are invoked synchronously on the thread that called
/// [`put`](crate::store::DataStore::put) or
/// [`remove`](crate::store::DataStore::remove), so a slow listener directly
/// stalls that caller. No ordering is guaranteed among listeners; each one
/// is invoked exactly once per event.
///
/// Registration is one-way: once added to a store, a listener stays
/// registered for the lifetime of the store.
pub trait DataStoreUpdateListener: Send + Sync {
    /// Handles a single update event.
    ///
    /// # Arguments
    /// * `component` - The component namespace the event occurred in
    /// * `key` - The key that was written or removed
    /// * `value` - `Some` with the stored value for writes, `None` for
    ///   removals (including attempted removals of an absent key)
    ///
    /// # Errors
    /// Any returned error is logged by the store and contained; it never
    /// reaches the caller of `put`/`remove` and never prevents the other
    /// listeners from being notified.
    fn on_update(&self, component: &str, key: &str, value: Option<&StoreValue>)
        -> StoreResult<()>;
}
