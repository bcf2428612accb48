//! Component-scoped key-value storage with change notification.
//!
//! This module provides the [`DataStore`] capability trait and its in-memory
//! reference implementation, [`SimpleDataStore`]. The store is a two-level
//! associative structure (component name to key to value) shared by the
//! components of a larger framework. Any number of threads may read and
//! write concurrently without external locking.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use component_store::{DataStore, SimpleDataStore};
//!
//! let store = SimpleDataStore::new();
//! store.put("connector", "port", Arc::new(8080u16));
//!
//! let port = store.get("connector", "port").unwrap();
//! assert_eq!(port.downcast_ref::<u16>(), Some(&8080));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use tracing::warn;

use crate::listener::DataStoreUpdateListener;

/// Opaque value held by the store.
///
/// The store never inspects a value; it only stores it, returns clones of
/// the shared handle, and forwards it to listeners. Callers downcast with
/// [`Any`] when they need the concrete type back.
pub type StoreValue = Arc<dyn Any + Send + Sync>;

/// Capability for sharing named values between framework components.
///
/// Values live under a two-level addressing scheme: a component name (the
/// namespace) and a key within it. All operations are safe under concurrent
/// use from any number of threads.
pub trait DataStore: Send + Sync {
    /// Returns a point-in-time copy of every key-value pair stored under
    /// `component`.
    ///
    /// The returned map is a snapshot: later writes and removals never
    /// affect it. A component that has never been written yields an empty
    /// map, never an error.
    fn get_all(&self, component: &str) -> HashMap<String, StoreValue>;

    /// Returns the current value for `(component, key)`, or `None` when
    /// either the component or the key does not exist.
    fn get(&self, component: &str, key: &str) -> Option<StoreValue>;

    /// Inserts or overwrites the value for `(component, key)`, creating the
    /// component's container on first write.
    ///
    /// After the value is stored, every registered listener is notified
    /// synchronously on the calling thread with `(component, key,
    /// Some(value))`. Listener failures are logged and contained; they never
    /// surface to the caller and never roll back the write.
    fn put(&self, component: &str, key: &str, value: StoreValue);

    /// Removes `key` from `component` if present.
    ///
    /// When the component has never been written this is a silent no-op.
    /// Otherwise every registered listener is notified with `(component,
    /// key, None)`, whether or not the key actually existed: an attempted
    /// removal is still an event.
    fn remove(&self, component: &str, key: &str);

    /// Registers a listener for all future `put`/`remove` events across all
    /// components.
    ///
    /// Registering the same listener handle (the same `Arc`) twice is a
    /// no-op. There is no way to unregister; listeners live as long as the
    /// store.
    fn add_listener(&self, listener: Arc<dyn DataStoreUpdateListener>);
}

/// In-memory [`DataStore`] implementation backed by [`DashMap`].
///
/// # Thread Safety
///
/// Both levels of the structure are concurrent maps, so operations on
/// different components never contend on a shared lock. The inner container
/// for a component is created lazily on first write through the map's entry
/// API, which guarantees a single winner when multiple threads race to
/// create it.
///
/// # Notification Cost
///
/// Listeners run synchronously inside `put` and `remove` on the calling
/// thread. A slow or blocking listener stalls that caller; this is a
/// documented cost of the synchronous notification contract, not a hidden
/// async hop.
pub struct SimpleDataStore {
    /// component name -> (key -> value)
    data: DashMap<String, Arc<DashMap<String, StoreValue>>>,
    /// Append-only listener set, deduplicated by `Arc` identity.
    listeners: RwLock<Vec<Arc<dyn DataStoreUpdateListener>>>,
}

impl SimpleDataStore {
    /// Creates an empty store with no registered listeners.
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
            listeners: RwLock::new(Vec::new()),
        }
    }

    fn notify_listeners(&self, component: &str, key: &str, value: Option<&StoreValue>) {
        // A poisoned lock still holds valid data: the listener set is
        // append-only, so recovery is always safe.
        //
        // The set is snapshotted before any callback runs so the lock is
        // never held across listener code; a listener may re-enter the
        // store (including add_listener) without blocking its caller.
        let listeners: Vec<_> = self
            .listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for listener in listeners.iter() {
            if let Err(e) = listener.on_update(component, key, value) {
                warn!(
                    "Failed to notify data store update listener. component: {}, key: {}, error: {}",
                    component, key, e
                );
            }
        }
    }
}

impl Default for SimpleDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore for SimpleDataStore {
    fn get_all(&self, component: &str) -> HashMap<String, StoreValue> {
        match self.data.get(component) {
            Some(entries) => entries
                .iter()
                .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
                .collect(),
            None => HashMap::new(),
        }
    }

    fn get(&self, component: &str, key: &str) -> Option<StoreValue> {
        self.data
            .get(component)
            .and_then(|entries| entries.get(key).map(|value| Arc::clone(value.value())))
    }

    fn put(&self, component: &str, key: &str, value: StoreValue) {
        let entries = Arc::clone(&self.data.entry(component.to_string()).or_default());
        entries.insert(key.to_string(), Arc::clone(&value));
        self.notify_listeners(component, key, Some(&value));
    }

    fn remove(&self, component: &str, key: &str) {
        let entries = match self.data.get(component) {
            Some(entry) => Arc::clone(entry.value()),
            None => return,
        };
        entries.remove(key);
        // Notified even when the key was absent: removal of a missing key
        // within a known component is an "attempted removal" event.
        self.notify_listeners(component, key, None);
    }

    fn add_listener(&self, listener: Arc<dyn DataStoreUpdateListener>) {
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        if listeners.iter().any(|existing| Arc::ptr_eq(existing, &listener)) {
            return;
        }
        listeners.push(listener);
    }
}
