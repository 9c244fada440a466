//! Ports (contracts) implemented by adapters and use cases
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`KeyValueStore`] | `RedisStore`, `InMemoryStore` (keylock-providers) |
//! | [`LockProvider`] | `LockService` (keylock-application) |
//! | [`TokenGenerator`] | `RandomTokenGenerator` (keylock-application) |
//! | [`PayloadSerializer`] | `JsonSerializer` (keylock-providers) |

pub mod lock;
pub mod serializer;
pub mod store;
pub mod token;

pub use lock::LockProvider;
pub use serializer::PayloadSerializer;
pub use store::KeyValueStore;
pub use token::TokenGenerator;
