//! Provider-specific constants

/// Default Redis connection URL
pub const REDIS_DEFAULT_URL: &str = "redis://127.0.0.1:6379";

/// Default timeout for a single store round trip, in milliseconds
pub const STORE_DEFAULT_OPERATION_TIMEOUT_MS: u64 = 5_000;

/// Atomic compare-and-delete: delete KEYS[1] only if it holds ARGV[1]
///
/// Returns 1 when the key was deleted, 0 otherwise.
pub const REDIS_COMPARE_AND_DELETE_SCRIPT: &str = r#"
if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("DEL", KEYS[1])
else
    return 0
end
"#;
