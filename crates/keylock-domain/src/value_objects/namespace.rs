//! Key namespacing
//!
//! Lock keys take the form `prefix:lock:key` (or `lock:key` without a prefix),
//! cache keys take the form `prefix:key` (or bare `key`). The application key
//! is appended verbatim so that, for a fixed prefix, distinct application keys
//! never map to the same store key.

use crate::constants::{KEY_SEPARATOR, LOCK_SEGMENT};

/// Maps application keys onto store keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyNamespace {
    prefix: Option<String>,
}

impl KeyNamespace {
    /// Namespace without a prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace with the given prefix
    ///
    /// A blank prefix is treated as no prefix.
    pub fn with_prefix<S: Into<String>>(prefix: S) -> Self {
        Self::from_option(Some(prefix.into()))
    }

    /// Namespace from an optional configured prefix
    pub fn from_option(prefix: Option<String>) -> Self {
        let prefix = prefix
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        Self { prefix }
    }

    /// The configured prefix, if any
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Store key for a lock on `key`
    pub fn lock_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => {
                format!("{prefix}{KEY_SEPARATOR}{LOCK_SEGMENT}{KEY_SEPARATOR}{key}")
            }
            None => format!("{LOCK_SEGMENT}{KEY_SEPARATOR}{key}"),
        }
    }

    /// Store key for a cache entry on `key`
    pub fn cache_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{KEY_SEPARATOR}{key}"),
            None => key.to_string(),
        }
    }
}
