//! Configuration
//!
//! Sources are merged in order: defaults, TOML file, `KEYLOCK__` environment
//! variables. See [`loader::ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{AppConfig, CacheConfig, LoggingConfig, StoreConfig, StoreProvider};
