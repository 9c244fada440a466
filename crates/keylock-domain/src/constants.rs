//! Domain layer constants
//!
//! Key layout and token sizing shared by the lock and cache facades.

/// Separator between key segments
pub const KEY_SEPARATOR: &str = ":";

/// Fixed segment placed between the prefix and the application key of a lock
pub const LOCK_SEGMENT: &str = "lock";

/// Longest accepted lock or cache TTL, in seconds (100 years)
///
/// Keeps `now + ttl` representable for both `Instant` and Redis `PX`.
pub const MAX_TTL_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// Number of random bytes in a lock token (128 bits)
pub const LOCK_TOKEN_BYTES: usize = 16;

/// Length of a rendered lock token (lowercase hex)
pub const LOCK_TOKEN_HEX_LEN: usize = LOCK_TOKEN_BYTES * 2;
