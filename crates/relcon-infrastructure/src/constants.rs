//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "relcon.toml";

/// Directory under the user config dir that may hold the config file
pub const DEFAULT_CONFIG_DIR: &str = "relcon";

/// Environment variable prefix; nested keys are split on `__`
pub const CONFIG_ENV_PREFIX: &str = "RELCON_";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Variable consulted when no OpenAI key is configured
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured filter
pub const LOG_FILTER_ENV: &str = "RELCON_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "relcon";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Data directory name under the platform data dir
pub const DEFAULT_DATA_DIR_NAME: &str = "relcon";

/// Fallback data directory when the platform has none
pub const FALLBACK_DATA_DIR: &str = ".relcon";
