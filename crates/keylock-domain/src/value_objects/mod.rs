//! Value objects
//!
//! Immutable types that carry lock ownership, key layout and argument rules.

pub mod namespace;
pub mod token;
pub mod validation;

pub use namespace::KeyNamespace;
pub use token::LockToken;
pub use validation::{require_non_blank, require_valid_ttl};
