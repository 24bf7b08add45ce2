//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::hsl::{hsl_to_rgb, rgb_to_hsl, rgb_to_hsl_precise, HslColor};

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Channels are derived from HSL by rounding, never by truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates an `RgbColor` from wider integers, clamping each into 0-255.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromawheel::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_clamped(-4, 128, 300), RgbColor::new(0, 128, 255));
    /// ```
    #[must_use]
    pub fn from_clamped(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#rrggbb", "rrggbb", "#rgb", "rgb" (any case).
    ///
    /// # Examples
    ///
    /// ```
    /// use chromawheel::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("0f0").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color '{hex}'. Only hex digits 0-9 and a-f are allowed");
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .context(format!("Invalid red channel in hex color '{hex}'"))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .context(format!("Invalid green channel in hex color '{hex}'"))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .context(format!("Invalid blue channel in hex color '{hex}'"))?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                // #rgb expands each digit, so "f" becomes "ff"
                let digit = |i: usize| {
                    u8::from_str_radix(&hex[i..=i], 16)
                        .map(|d| d * 17)
                        .context(format!("Invalid digit in hex color '{hex}'"))
                };
                Ok(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 6 hex digits (rrggbb) or 3 (rgb)"
            ),
        }
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use chromawheel::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        rgb_to_hex(*self)
    }

    /// CSS functional notation, e.g. `rgb(28, 205, 150)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts to HSL with whole-number components. See [`rgb_to_hsl`].
    #[must_use]
    pub fn to_hsl(&self) -> HslColor {
        rgb_to_hsl(*self)
    }

    /// Converts to HSL without rounding. See [`rgb_to_hsl_precise`].
    #[must_use]
    pub fn to_hsl_precise(&self) -> HslColor {
        rgb_to_hsl_precise(*self)
    }

    /// Creates an `RgbColor` from HSL components (hue in degrees,
    /// saturation and lightness in percent; out-of-range values are wrapped
    /// or clamped).
    ///
    /// # Examples
    ///
    /// ```
    /// use chromawheel::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(120.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        hsl_to_rgb(HslColor::new(hue, saturation, lightness))
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Relative luminance (0.0-1.0) using the sRGB transfer curve.
    ///
    /// Used to pick readable text over a swatch.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        let linear = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.040_45 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Returns true when dark text reads better than light text on this color.
    #[must_use]
    pub fn prefers_dark_text(&self) -> bool {
        self.relative_luminance() > 0.179
    }
}

/// Formats a color as `#rrggbb`, each channel two lowercase zero-padded digits.
#[must_use]
pub fn rgb_to_hex(rgb: RgbColor) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
