//! Store health probe tests

use crate::test_stores::{ForgetfulStore, RecordingStore, UnreachableStore};
use keylock_domain::value_objects::KeyNamespace;
use keylock_infrastructure::constants::HEALTH_CHECK_STORE;
use keylock_infrastructure::health::{HealthStatus, StoreHealthChecker};
use keylock_providers::store::InMemoryStore;
use std::sync::Arc;

#[tokio::test]
async fn test_probe_up_on_memory_store() {
    let store = InMemoryStore::new();
    let checker = StoreHealthChecker::new(Arc::new(store.clone()), KeyNamespace::new());

    let check = checker.check().await;

    assert_eq!(check.name, HEALTH_CHECK_STORE);
    assert_eq!(check.status, HealthStatus::Up);
    assert!(check.error.is_none());
    assert!(store.is_empty(), "probe entry must be deleted after the check");
}

#[tokio::test]
async fn test_probe_down_when_store_unreachable() {
    let checker = StoreHealthChecker::new(Arc::new(UnreachableStore), KeyNamespace::new());

    let check = checker.check().await;

    assert_eq!(check.status, HealthStatus::Down);
    assert!(!check.status.is_healthy());
    assert!(
        check
            .error
            .as_deref()
            .is_some_and(|e| e.contains("connection refused"))
    );
}

#[tokio::test]
async fn test_probe_degraded_on_read_back_mismatch() {
    let checker = StoreHealthChecker::new(Arc::new(ForgetfulStore), KeyNamespace::new());

    let check = checker.check().await;

    assert_eq!(check.status, HealthStatus::Degraded);
    assert!(!check.status.is_healthy());
    assert!(check.error.is_some());
}

#[tokio::test]
async fn test_probe_key_is_namespaced() {
    let store = Arc::new(RecordingStore::default());
    let checker = StoreHealthChecker::new(store.clone(), KeyNamespace::with_prefix("orders"));

    assert_eq!(checker.check().await.status, HealthStatus::Up);

    let keys = store.written_keys();
    assert_eq!(keys.len(), 1);
    assert!(
        keys[0].starts_with("orders:health:probe:"),
        "unexpected probe key {}",
        keys[0]
    );
}

#[tokio::test]
async fn test_probe_keys_differ_between_checks() {
    let store = Arc::new(RecordingStore::default());
    let checker = StoreHealthChecker::new(store.clone(), KeyNamespace::new());

    checker.check().await;
    checker.check().await;

    let keys = store.written_keys();
    assert_eq!(keys.len(), 2);
    assert_ne!(keys[0], keys[1]);
    assert!(keys.iter().all(|k| k.starts_with("health:probe:")));
}
