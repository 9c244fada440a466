//! Lock token generation port

use crate::value_objects::LockToken;

/// Source of fresh, unguessable lock tokens
pub trait TokenGenerator: Send + Sync + std::fmt::Debug {
    /// Generate a token distinct from every previously issued one
    fn generate(&self) -> LockToken;
}
