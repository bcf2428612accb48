//! End-to-end tests for the component data store.
//!
//! These exercise the full contract through the public API: storage
//! visibility, snapshot isolation, and the listener notification protocol.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use component_store::{
    DataStore, DataStoreUpdateListener, SimpleDataStore, StoreResult, StoreValue,
};

/// Collects every observed event, downcasting values to u16.
struct EventCollector {
    events: Mutex<Vec<(String, String, Option<u16>)>>,
}

impl EventCollector {
    fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn events(&self) -> Vec<(String, String, Option<u16>)> {
        self.events.lock().unwrap().clone()
    }
}

impl DataStoreUpdateListener for EventCollector {
    fn on_update(
        &self,
        component: &str,
        key: &str,
        value: Option<&StoreValue>,
    ) -> StoreResult<()> {
        let value = value.and_then(|v| v.downcast_ref::<u16>().copied());
        self.events
            .lock()
            .unwrap()
            .push((component.to_string(), key.to_string(), value));
        Ok(())
    }
}

#[test]
fn test_connector_port_lifecycle() {
    let store = SimpleDataStore::new();
    let collector = Arc::new(EventCollector::new());
    store.add_listener(collector.clone());

    store.put("connector", "port", Arc::new(8080u16));

    let port = store.get("connector", "port").unwrap();
    assert_eq!(port.downcast_ref::<u16>(), Some(&8080));

    let all = store.get_all("connector");
    assert_eq!(all.len(), 1);
    assert_eq!(all["port"].downcast_ref::<u16>(), Some(&8080));

    store.remove("connector", "port");
    assert!(store.get("connector", "port").is_none());

    assert_eq!(
        collector.events(),
        vec![
            ("connector".to_string(), "port".to_string(), Some(8080)),
            ("connector".to_string(), "port".to_string(), None),
        ]
    );
}

#[test]
fn test_components_are_independent() {
    let store = SimpleDataStore::new();

    store.put("connector", "port", Arc::new(8080u16));
    store.put("executor", "port", Arc::new(9090u16));

    let connector = store.get("connector", "port").unwrap();
    let executor = store.get("executor", "port").unwrap();
    assert_eq!(connector.downcast_ref::<u16>(), Some(&8080));
    assert_eq!(executor.downcast_ref::<u16>(), Some(&9090));

    store.remove("connector", "port");
    assert!(store.get("connector", "port").is_none());
    assert!(store.get("executor", "port").is_some());
}

#[test]
fn test_snapshot_is_unaffected_by_later_mutation() {
    let store = SimpleDataStore::new();

    store.put("connector", "port", Arc::new(8080u16));
    store.put("connector", "backlog", Arc::new(128u16));

    let snapshot = store.get_all("connector");

    store.remove("connector", "port");
    store.put("connector", "backlog", Arc::new(256u16));

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot["port"].downcast_ref::<u16>(), Some(&8080));
    assert_eq!(snapshot["backlog"].downcast_ref::<u16>(), Some(&128));
}

#[test]
fn test_removal_notification_asymmetry() {
    let store = SimpleDataStore::new();
    let collector = Arc::new(EventCollector::new());
    store.add_listener(collector.clone());

    // Component never written: silent no-op.
    store.remove("ghost", "key");
    assert_eq!(collector.events().len(), 0);

    // Component exists but key does not: still an event.
    store.put("connector", "port", Arc::new(8080u16));
    store.remove("connector", "no-such-key");

    assert_eq!(
        collector.events(),
        vec![
            ("connector".to_string(), "port".to_string(), Some(8080)),
            ("connector".to_string(), "no-such-key".to_string(), None),
        ]
    );
}

#[test]
fn test_listener_sees_events_from_all_components() {
    let store = SimpleDataStore::new();
    let collector = Arc::new(EventCollector::new());
    store.add_listener(collector.clone());

    store.put("connector", "port", Arc::new(1u16));
    store.put("executor", "threads", Arc::new(2u16));
    store.put("registry", "retries", Arc::new(3u16));

    assert_eq!(collector.events().len(), 3);
}

#[test]
fn test_store_behind_trait_object() {
    let store: Arc<dyn DataStore> = Arc::new(SimpleDataStore::new());

    store.put("connector", "port", Arc::new(8080u16));
    let port = store.get("connector", "port").unwrap();
    assert_eq!(port.downcast_ref::<u16>(), Some(&8080));
}
