//! # Component Store
//!
//! A process-wide, two-level key-value store that lets independent
//! components of a larger framework publish and retrieve arbitrary named
//! values under a component namespace, with registered listeners notified
//! synchronously on every change.
//!
//! ## Structure
//!
//! - Storage capability and in-memory implementation ([`store`])
//! - Update listener capability ([`listener`])
//! - Error types ([`error`])
//!
//! ## Concurrency
//!
//! All operations are safe under concurrent, unsynchronized use by any
//! number of readers and writers. Both levels of the store are concurrent
//! maps, so operations on different components never serialize on a global
//! lock. Listener callbacks run synchronously on the caller's thread during
//! `put` and `remove`.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use component_store::{DataStore, SimpleDataStore};
//!
//! let store = SimpleDataStore::new();
//! store.put("connector", "port", Arc::new(8080u16));
//! assert!(store.get("connector", "port").is_some());
//!
//! store.remove("connector", "port");
//! assert!(store.get("connector", "port").is_none());
//! ```

pub mod error;
pub mod listener;
pub mod store;

// Re-exports
pub use error::*;
pub use listener::*;
pub use store::*;
