//! Color model: representations, conversions and harmony rules.
//!
//! Everything in this module is pure: no state, no I/O. The input mapper and
//! the UI shells call into it to turn a base color and a harmony choice into
//! displayable swatches.

pub mod harmony;
pub mod hsl;
pub mod parse;
pub mod rgb;
pub mod swatch;

// Re-export all model types
pub use harmony::{
    derive_harmony, derive_harmony_by_name, harmony_offsets, harmony_offsets_by_name, Adjust,
    HarmonyKind, HarmonyRecipe, HarmonySet, ToneStep, UnknownHarmony, IDENTITY_OFFSETS,
};
pub use hsl::{clamp_percent, hsl_to_rgb, normalize_hue, rgb_to_hsl, rgb_to_hsl_precise, HslColor};
pub use parse::{parse_color, ColorParseError};
pub use rgb::{rgb_to_hex, RgbColor};
pub use swatch::{CopyFormat, Swatch};
