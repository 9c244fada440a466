//! Key-Value Store Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InMemoryStore`] | Local | DashMap-backed, per-key atomic, lazy expiry |
//! | [`RedisStore`] | Distributed | Redis-backed for multi-instance locking |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `InMemoryStore`
//! - **Single Instance**: `InMemoryStore` locks only coordinate within one process
//! - **Multi Instance**: Use `RedisStore`

pub mod memory;
#[cfg(feature = "store-redis")]
pub mod redis;

// Re-export for convenience
pub use memory::InMemoryStore;
#[cfg(feature = "store-redis")]
pub use redis::RedisStore;
