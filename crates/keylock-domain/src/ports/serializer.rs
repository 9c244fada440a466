//! Payload serializer port
//!
//! Converts typed cache values to and from the byte payloads held by the store.
//! Malformed payloads are reported as
//! [`Error::Serialization`](crate::error::Error::Serialization).

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed value <-> byte payload transform
pub trait PayloadSerializer: Send + Sync + std::fmt::Debug {
    /// Encode a value into a store payload
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized;

    /// Decode a store payload into a value
    fn deserialize<T>(&self, payload: &[u8]) -> Result<T>
    where
        T: DeserializeOwned;

    /// Name of the wire format (e.g. "json")
    fn format_name(&self) -> &str;
}
