//! Chromawheel Library
//!
//! This library provides the core of the Chromawheel color tool: HSL/RGB
//! color models and parsing, harmony rules that derive palettes from a base
//! color, the polar input mapper behind the hue wheel, configuration, and the
//! terminal picker UI.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod picker;
#[cfg(feature = "ratatui")]
pub mod tui;
