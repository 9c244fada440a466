//! # keylock Domain Layer
//!
//! Core types and contracts for the lock and cache facades.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Key segments, token sizing |
//! | [`value_objects`] | `LockToken`, `KeyNamespace`, argument validation |
//! | [`ports`] | Store, lock, token and serializer contracts |
//!
//! The domain layer has no knowledge of Redis, configuration files or logging.
//! Adapters live in `keylock-providers`, wiring in `keylock-infrastructure`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{KeyNamespace, LockToken};
