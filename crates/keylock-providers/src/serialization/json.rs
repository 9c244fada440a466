//! JSON payload serializer

use keylock_domain::error::{Error, Result};
use keylock_domain::ports::PayloadSerializer;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encodes cache values as UTF-8 JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    /// Create a new JSON serializer
    pub fn new() -> Self {
        Self
    }
}

impl PayloadSerializer for JsonSerializer {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_vec(value).map_err(|e| {
            Error::serialization_with_source(format!("Failed to serialize value for cache: {e}"), e)
        })
    }

    fn deserialize<T>(&self, payload: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(payload).map_err(|e| {
            Error::serialization_with_source(format!("Failed to deserialize cached value: {e}"), e)
        })
    }

    fn format_name(&self) -> &str {
        "json"
    }
}
