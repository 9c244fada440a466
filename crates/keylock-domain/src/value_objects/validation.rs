//! Argument validation shared by the lock and cache facades

use crate::constants::MAX_TTL_SECS;
use crate::error::{Error, Result};
use std::time::Duration;

/// Reject empty or whitespace-only arguments
pub fn require_non_blank(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!(
            "{name} cannot be empty or whitespace"
        )));
    }
    Ok(())
}

/// Reject zero TTLs and TTLs above [`MAX_TTL_SECS`]
pub fn require_valid_ttl(ttl: Duration) -> Result<()> {
    if ttl.is_zero() {
        return Err(Error::invalid_argument("ttl must be greater than zero"));
    }
    if ttl > Duration::from_secs(MAX_TTL_SECS) {
        return Err(Error::invalid_argument(format!(
            "ttl {ttl:?} exceeds the maximum of {MAX_TTL_SECS}s"
        )));
    }
    Ok(())
}
