//! Lock ownership token

use crate::constants::LOCK_TOKEN_HEX_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ownership credential returned by a successful lock acquisition
///
/// The token is stored as the value of the lock key and must be presented
/// verbatim to release the lock. It carries no meaning beyond equality.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockToken(String);

impl LockToken {
    /// Wrap an already rendered token
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    /// Token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token bytes as stored in the backing store
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consume the token and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the token has the canonical shape: 32 lowercase hex characters
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == LOCK_TOKEN_HEX_LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}

impl fmt::Display for LockToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Tokens are credentials; keep them out of debug output.
impl fmt::Debug for LockToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LockToken").field(&"<redacted>").finish()
    }
}

impl AsRef<str> for LockToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<LockToken> for String {
    fn from(token: LockToken) -> Self {
        token.0
    }
}
