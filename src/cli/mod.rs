//! CLI command handlers for Chromawheel.
//!
//! This module provides headless, scriptable access to the color engine
//! for automation and testing.

pub mod common;
pub mod config;
pub mod convert;
pub mod harmonies;
pub mod palette;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use harmonies::HarmoniesArgs;
pub use palette::PaletteArgs;
