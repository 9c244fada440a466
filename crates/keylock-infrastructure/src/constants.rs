//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `keylock_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "keylock.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "keylock";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "KEYLOCK";

/// Separator for nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default cache TTL in seconds (1 hour)
pub const CACHE_DEFAULT_TTL_SECS: u64 = 3600;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "KEYLOCK_LOG";

// ============================================================================
// HEALTH CONSTANTS
// ============================================================================

/// Name reported by the store health check
pub const HEALTH_CHECK_STORE: &str = "store";

/// Key segment for health probe entries
pub const HEALTH_PROBE_SEGMENT: &str = "health:probe";

/// TTL of a health probe entry in seconds
pub const HEALTH_PROBE_TTL_SECS: u64 = 10;
