//! Use cases

pub mod cache_service;
pub mod lock_service;

pub use cache_service::{CacheService, CacheStats};
pub use lock_service::LockService;
