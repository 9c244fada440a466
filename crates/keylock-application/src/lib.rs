//! Application Layer - keylock
//!
//! Use cases built on the domain ports:
//!
//! - [`LockService`]: acquire/release of auto-expiring, token-gated locks
//! - [`CacheService`]: typed get/set/remove of namespaced cache entries
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `keylock-domain`: For ports, value objects and the error taxonomy
//! - Pure Rust libraries for async, cancellation, logging and randomness
//!
//! Store adapters are injected as `Arc<dyn KeyValueStore>`.

pub mod cancellation;
pub mod token;
pub mod use_cases;

pub use token::RandomTokenGenerator;
pub use use_cases::*;
