//! Random lock token generation

use keylock_domain::constants::LOCK_TOKEN_BYTES;
use keylock_domain::ports::TokenGenerator;
use keylock_domain::value_objects::LockToken;
use rand::RngCore;

/// Generates 128-bit tokens from the thread-local CSPRNG, rendered as lowercase hex
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> LockToken {
        let mut bytes = [0u8; LOCK_TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        LockToken::new(hex::encode(bytes))
    }
}
