//! # keylock - Provider Implementations
//!
//! Adapters for the ports defined in `keylock-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Store | `KeyValueStore` | Redis, InMemory |
//! | Serialization | `PayloadSerializer` | Json |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! keylock-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Disabling `store-redis` leaves only the in-memory store.

// Re-export keylock-domain types commonly used with providers
pub use keylock_domain::error::{Error, Result};
pub use keylock_domain::ports::{KeyValueStore, PayloadSerializer};

/// Provider-specific constants
pub mod constants;

/// Key-value store implementations
///
/// Implements `KeyValueStore` for storage backends.
pub mod store;

/// Payload serializer implementations
pub mod serialization;
