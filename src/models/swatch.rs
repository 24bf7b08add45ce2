//! Display-ready swatches and the text formats a swatch can be copied as.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{HslColor, RgbColor};

/// Text format used when copying a swatch value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl CopyFormat {
    /// All formats in the order they are shown.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// Short label ("HEX", "RGB", "HSL").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        }
    }

    /// Next format, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Hex => Self::Rgb,
            Self::Rgb => Self::Hsl,
            Self::Hsl => Self::Hex,
        }
    }
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for CopyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(format!(
                "Invalid copy format '{other}'. Must be 'hex', 'rgb', or 'hsl'"
            )),
        }
    }
}

/// One palette entry: a color with every representation the UI shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    /// Canonical HSL value
    pub hsl: HslColor,
    /// Derived RGB value
    pub rgb: RgbColor,
    /// `#rrggbb`
    pub hex: String,
}

impl Swatch {
    /// Builds a swatch, deriving RGB and hex from the HSL value.
    #[must_use]
    pub fn from_hsl(hsl: HslColor) -> Self {
        let rgb = hsl.to_rgb();
        Self {
            hsl,
            rgb,
            hex: rgb.to_hex(),
        }
    }

    /// The text copied for `format`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromawheel::models::{CopyFormat, HslColor, Swatch};
    ///
    /// let swatch = Swatch::from_hsl(HslColor::new(0.0, 100.0, 50.0));
    /// assert_eq!(swatch.value(CopyFormat::Hex), "#ff0000");
    /// assert_eq!(swatch.value(CopyFormat::Rgb), "rgb(255, 0, 0)");
    /// assert_eq!(swatch.value(CopyFormat::Hsl), "hsl(0, 100%, 50%)");
    /// ```
    #[must_use]
    pub fn value(&self, format: CopyFormat) -> String {
        match format {
            CopyFormat::Hex => self.hex.clone(),
            CopyFormat::Rgb => self.rgb.to_css(),
            CopyFormat::Hsl => self.hsl.to_css(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_values() {
        let swatch = Swatch::from_hsl(HslColor::new(160.0, 76.0, 46.0));
        assert_eq!(swatch.rgb, HslColor::new(160.0, 76.0, 46.0).to_rgb());
        assert_eq!(swatch.value(CopyFormat::Hex), swatch.rgb.to_hex());
        assert_eq!(swatch.value(CopyFormat::Hsl), "hsl(160, 76%, 46%)");
        assert!(swatch.value(CopyFormat::Rgb).starts_with("rgb("));
    }

    #[test]
    fn test_fractional_hsl_is_rounded_for_display() {
        let swatch = Swatch::from_hsl(HslColor::new(33.6, 50.4, 49.5));
        assert_eq!(swatch.value(CopyFormat::Hsl), "hsl(34, 50%, 50%)");
    }

    #[test]
    fn test_copy_format_parsing() {
        assert_eq!("HEX".parse(), Ok(CopyFormat::Hex));
        assert_eq!("rgb".parse(), Ok(CopyFormat::Rgb));
        assert_eq!(" hsl ".parse(), Ok(CopyFormat::Hsl));
        assert!("cmyk".parse::<CopyFormat>().is_err());
    }

    #[test]
    fn test_copy_format_cycle() {
        let mut format = CopyFormat::default();
        for expected in [CopyFormat::Rgb, CopyFormat::Hsl, CopyFormat::Hex] {
            format = format.next();
            assert_eq!(format, expected);
        }
        assert_eq!(CopyFormat::Rgb.to_string(), "rgb");
    }
}
