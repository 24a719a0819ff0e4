//! Infrastructure layer constants
//!
//! Build status messages live in `tale_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tale.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tale";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TALE";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TALE_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "tale";
