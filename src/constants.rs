//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Masthead";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "masthead";

/// Directory name under the platform config dir.
pub const APP_CONFIG_DIR_NAME: &str = "Masthead";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "MASTHEAD_CONFIG_DIR";
