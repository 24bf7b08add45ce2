//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Chromawheel";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "chromawheel";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "chromawheel";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "CHROMAWHEEL_CONFIG_DIR";

/// Log file written while the terminal UI owns the screen.
pub const LOG_FILE_NAME: &str = "chromawheel.log";
