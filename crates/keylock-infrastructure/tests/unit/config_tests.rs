//! Configuration loading tests
//!
//! Environment overrides run inside `figment::Jail`, which restores the
//! process environment and working directory afterwards.

use figment::Jail;
use keylock_infrastructure::config::{
    AppConfig, ConfigLoader, StoreProvider, validate_app_config,
};
use keylock_infrastructure::constants::CACHE_DEFAULT_TTL_SECS;
use keylock_providers::constants::STORE_DEFAULT_OPERATION_TIMEOUT_MS;
use std::time::Duration;

const MISSING_FILE: &str = "does-not-exist.toml";

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert_eq!(config.store.provider, StoreProvider::Memory);
    assert!(config.store.redis_url.is_none());
    assert!(config.store.namespace().prefix().is_none());
    assert_eq!(
        config.store.operation_timeout(),
        Duration::from_millis(STORE_DEFAULT_OPERATION_TIMEOUT_MS)
    );
    assert_eq!(
        config.cache.default_ttl(),
        Duration::from_secs(CACHE_DEFAULT_TTL_SECS)
    );
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_load_without_file_uses_defaults() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_config_path(MISSING_FILE)
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_load_from_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "keylock.toml",
            r#"
                [store]
                provider = "redis"
                redis_url = "redis://127.0.0.1:6379"
                key_prefix = "orders"
                operation_timeout_ms = 250

                [cache]
                default_ttl_secs = 60

                [logging]
                level = "debug"
                json_format = true
            "#,
        )?;

        let config = ConfigLoader::new()
            .with_config_path("keylock.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.store.provider, StoreProvider::Redis);
        assert_eq!(
            config.store.redis_url.as_deref(),
            Some("redis://127.0.0.1:6379")
        );
        assert_eq!(config.store.namespace().prefix(), Some("orders"));
        assert_eq!(config.store.operation_timeout(), Duration::from_millis(250));
        assert_eq!(config.cache.default_ttl(), Duration::from_secs(60));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_default_config_file_discovered_in_working_dir() {
    Jail::expect_with(|jail| {
        jail.create_file("keylock.toml", "[store]\nkey_prefix = \"found\"\n")?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.store.namespace().prefix(), Some("found"));
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("keylock.toml", "[cache]\ndefault_ttl_secs = 60\n")?;
        jail.set_env("KEYLOCK__CACHE__DEFAULT_TTL_SECS", "120");
        jail.set_env("KEYLOCK__STORE__KEY_PREFIX", "env-prefix");

        let config = ConfigLoader::new()
            .with_config_path("keylock.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.cache.default_ttl_secs, 120);
        assert_eq!(config.store.namespace().prefix(), Some("env-prefix"));
        Ok(())
    });
}

#[test]
fn test_env_selects_redis_provider() {
    Jail::expect_with(|jail| {
        jail.set_env("KEYLOCK__STORE__PROVIDER", "redis");
        jail.set_env("KEYLOCK__STORE__REDIS_URL", "redis://cache.internal:6379");

        let config = ConfigLoader::new()
            .with_config_path(MISSING_FILE)
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.store.provider, StoreProvider::Redis);
        assert_eq!(
            config.store.redis_url.as_deref(),
            Some("redis://cache.internal:6379")
        );
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("LOCKS__STORE__KEY_PREFIX", "custom");
        jail.set_env("KEYLOCK__STORE__KEY_PREFIX", "ignored");

        let loader = ConfigLoader::new()
            .with_config_path(MISSING_FILE)
            .with_env_prefix("LOCKS");
        let config = loader.load().map_err(|e| e.to_string())?;

        assert_eq!(config.store.namespace().prefix(), Some("custom"));
        Ok(())
    });
}

#[test]
fn test_redis_provider_requires_url() {
    Jail::expect_with(|jail| {
        jail.set_env("KEYLOCK__STORE__PROVIDER", "redis");

        let err = ConfigLoader::new()
            .with_config_path(MISSING_FILE)
            .load()
            .expect_err("redis without a URL must be rejected");
        assert!(err.to_string().contains("redis_url"));
        Ok(())
    });
}

#[test]
fn test_unknown_provider_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("KEYLOCK__STORE__PROVIDER", "etcd");

        let result = ConfigLoader::new().with_config_path(MISSING_FILE).load();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_validation_rejects_zero_values() {
    let mut config = AppConfig::default();
    config.store.operation_timeout_ms = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.cache.default_ttl_secs = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validation_rejects_bad_log_level() {
    let mut config = AppConfig::default();
    config.logging.level = "verbose".to_string();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validation_rejects_blank_redis_url() {
    let mut config = AppConfig::default();
    config.store.provider = StoreProvider::Redis;
    config.store.redis_url = Some("   ".to_string());
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_blank_prefix_is_no_prefix() {
    let mut config = AppConfig::default();
    config.store.key_prefix = Some("  ".to_string());
    assert!(config.store.namespace().prefix().is_none());
    assert_eq!(config.store.namespace().lock_key("foo"), "lock:foo");
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.store.key_prefix = Some("saved".to_string());
    config.cache.default_ttl_secs = 42;

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    assert_eq!(loader.config_path(), Some(path.as_path()));

    let reloaded = loader.load().unwrap();
    assert_eq!(reloaded.store.namespace().prefix(), Some("saved"));
    assert_eq!(reloaded.cache.default_ttl_secs, 42);
}
