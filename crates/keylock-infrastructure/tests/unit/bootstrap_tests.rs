//! Application context tests

use keylock_domain::ports::LockProvider;
use keylock_infrastructure::AppContext;
use keylock_infrastructure::config::AppConfig;
use keylock_infrastructure::health::HealthStatus;
use keylock_providers::store::InMemoryStore;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const TTL: Duration = Duration::from_secs(30);

fn prefixed_config(prefix: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.store.key_prefix = Some(prefix.to_string());
    config
}

#[tokio::test]
async fn test_init_with_memory_store() {
    let context = AppContext::init(AppConfig::default()).await.unwrap();
    let cancel = CancellationToken::new();

    assert_eq!(context.store().provider_name(), "memory");

    let locks = context.lock_provider();
    let token = locks
        .acquire("inventory:42", TTL, &cancel)
        .await
        .unwrap()
        .expect("lock should be free");
    assert!(locks.acquire("inventory:42", TTL, &cancel).await.unwrap().is_none());
    assert!(locks.release("inventory:42", token.as_str(), &cancel).await.unwrap());

    context.shutdown();
}

#[tokio::test]
async fn test_init_rejects_invalid_config() {
    let mut config = AppConfig::default();
    config.cache.default_ttl_secs = 0;

    assert!(AppContext::init(config).await.is_err());
}

#[tokio::test]
async fn test_services_share_one_store() {
    let store = InMemoryStore::new();
    let context =
        AppContext::with_store(prefixed_config("orders"), Arc::new(store.clone())).unwrap();
    let cancel = CancellationToken::new();

    let token = context
        .locks()
        .acquire("job", TTL, &cancel)
        .await
        .unwrap()
        .unwrap();
    context
        .cache()
        .set("job", &"cached", None, &cancel)
        .await
        .unwrap();

    let lock_value = keylock_domain::ports::KeyValueStore::get(&store, "orders:lock:job")
        .await
        .unwrap();
    assert_eq!(lock_value.as_deref(), Some(token.as_bytes()));
    assert!(store.ttl("orders:job").is_some());
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_cache_uses_configured_default_ttl() {
    let store = InMemoryStore::new();
    let mut config = AppConfig::default();
    config.cache.default_ttl_secs = 90;
    let context = AppContext::with_store(config, Arc::new(store.clone())).unwrap();
    let cancel = CancellationToken::new();

    assert_eq!(context.cache().default_ttl(), Duration::from_secs(90));
    context
        .cache()
        .set("k", &1u32, None, &cancel)
        .await
        .unwrap();

    let remaining = store.ttl("k").expect("entry should carry a TTL");
    assert!(remaining <= Duration::from_secs(90));
    assert!(remaining > Duration::from_secs(80));
}

#[tokio::test]
async fn test_health_check_through_context() {
    let context = AppContext::init(prefixed_config("svc")).await.unwrap();

    let check = context.health_check().await;
    assert_eq!(check.status, HealthStatus::Up);
    assert!(check.status.is_healthy());
}

#[tokio::test]
async fn test_handles_outlive_shutdown() {
    let context = AppContext::init(AppConfig::default()).await.unwrap();
    let cancel = CancellationToken::new();
    let locks = context.lock_provider();
    let config = context.config();

    context.shutdown();

    assert_eq!(config.store.operation_timeout_ms, 5000);
    assert!(locks.acquire("after", TTL, &cancel).await.unwrap().is_some());
}
