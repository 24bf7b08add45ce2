//! HSL color values and conversion to and from RGB.
//!
//! HSL is the canonical in-engine representation: every harmony computation
//! runs in this space and RGB/hex are derived from it for display.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Channel comparisons pick which component is the maximum (exact by construction)
#![allow(clippy::float_cmp)]

use serde::Serialize;
use std::fmt;

use super::RgbColor;

/// Wraps any hue (negative, above 360, or non-finite) into `[0, 360)`.
///
/// # Examples
///
/// ```
/// use chromawheel::models::normalize_hue;
///
/// assert_eq!(normalize_hue(-30.0), 330.0);
/// assert_eq!(normalize_hue(720.0), 0.0);
/// ```
#[must_use]
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        // folds -0.0 into 0.0
        wrapped + 0.0
    }
}

/// Clamps a saturation or lightness percentage into `[0, 100]`.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0) + 0.0
    }
}

/// Color in the HSL model.
///
/// Hue is always in `[0, 360)`, saturation and lightness always in `[0, 100]`.
/// The constructor normalizes and clamps, so no value outside those ranges
/// can be observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslColor {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl HslColor {
    /// Creates a color, wrapping the hue and clamping saturation/lightness.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: clamp_percent(saturation),
            lightness: clamp_percent(lightness),
        }
    }

    /// Hue angle in degrees, `[0, 360)`.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation percentage, `[0, 100]`.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Lightness percentage, `[0, 100]`.
    #[must_use]
    pub const fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Returns a copy with a different hue.
    #[must_use]
    pub fn with_hue(self, hue: f64) -> Self {
        Self::new(hue, self.saturation, self.lightness)
    }

    /// Returns a copy with different saturation and lightness.
    #[must_use]
    pub fn with_saturation_lightness(self, saturation: f64, lightness: f64) -> Self {
        Self::new(self.hue, saturation, lightness)
    }

    /// Converts to RGB. See [`hsl_to_rgb`].
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        hsl_to_rgb(*self)
    }

    /// CSS functional notation with every component rounded,
    /// e.g. `hsl(160, 76%, 46%)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue.round(),
            self.saturation.round(),
            self.lightness.round()
        )
    }
}

impl Default for HslColor {
    /// Pure red at full saturation, the wheel's starting color.
    fn default() -> Self {
        Self::new(0.0, 100.0, 50.0)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Converts an RGB color to HSL, rounding each component to a whole number.
///
/// Hue is rounded to the nearest degree, saturation and lightness to the
/// nearest percent. A hue that rounds up to 360 wraps to 0.
///
/// # Examples
///
/// ```
/// use chromawheel::models::{rgb_to_hsl, RgbColor};
///
/// let hsl = rgb_to_hsl(RgbColor::new(255, 0, 0));
/// assert_eq!((hsl.hue(), hsl.saturation(), hsl.lightness()), (0.0, 100.0, 50.0));
/// ```
#[must_use]
pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    let (h, s, l) = rgb_to_hsl_components(rgb);
    HslColor::new(h.round(), s.round(), l.round())
}

/// Converts an RGB color to HSL without rounding.
///
/// Feeding the result back through [`hsl_to_rgb`] reproduces the original
/// channels exactly, which the rounded [`rgb_to_hsl`] cannot guarantee.
#[must_use]
pub fn rgb_to_hsl_precise(rgb: RgbColor) -> HslColor {
    let (h, s, l) = rgb_to_hsl_components(rgb);
    HslColor::new(h, s, l)
}

#[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
fn rgb_to_hsl_components(rgb: RgbColor) -> (f64, f64, f64) {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return (0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Converts an HSL color to RGB, rounding each channel to the nearest integer.
///
/// With zero saturation the result is a gray of `round(l / 100 * 255)`
/// regardless of hue.
///
/// # Examples
///
/// ```
/// use chromawheel::models::{hsl_to_rgb, HslColor, RgbColor};
///
/// assert_eq!(hsl_to_rgb(HslColor::new(0.0, 100.0, 50.0)), RgbColor::new(255, 0, 0));
/// ```
#[must_use]
#[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let h = hsl.hue / 360.0;
    let s = hsl.saturation / 100.0;
    let l = hsl.lightness / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    RgbColor::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Piecewise-linear channel ramp evaluated at `t` (wrapped once into `[0, 1]`).
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(hsl: HslColor) -> (f64, f64, f64) {
        (hsl.hue(), hsl.saturation(), hsl.lightness())
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(359.5), 359.5);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(-390.0), 330.0);
        assert_eq!(normalize_hue(1080.0 + 45.0), 45.0);
        assert_eq!(normalize_hue(f64::NAN), 0.0);
        assert_eq!(normalize_hue(f64::INFINITY), 0.0);

        let tiny = normalize_hue(-1e-15);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_new_clamps_and_wraps() {
        let color = HslColor::new(-90.0, 150.0, -20.0);
        assert_eq!(components(color), (270.0, 100.0, 0.0));

        let color = HslColor::new(400.0, f64::NAN, 55.5);
        assert_eq!(components(color), (40.0, 0.0, 55.5));
    }

    #[test]
    fn test_rgb_to_hsl_primary_colors() {
        assert_eq!(components(rgb_to_hsl(RgbColor::new(255, 0, 0))), (0.0, 100.0, 50.0));
        assert_eq!(components(rgb_to_hsl(RgbColor::new(0, 255, 0))), (120.0, 100.0, 50.0));
        assert_eq!(components(rgb_to_hsl(RgbColor::new(0, 0, 255))), (240.0, 100.0, 50.0));
    }

    #[test]
    fn test_rgb_to_hsl_grayscale() {
        assert_eq!(components(rgb_to_hsl(RgbColor::new(0, 0, 0))), (0.0, 0.0, 0.0));
        assert_eq!(components(rgb_to_hsl(RgbColor::new(255, 255, 255))), (0.0, 0.0, 100.0));
        assert_eq!(components(rgb_to_hsl(RgbColor::new(128, 128, 128))), (0.0, 0.0, 50.0));
    }

    #[test]
    fn test_rgb_to_hsl_teal_example() {
        let (h, s, l) = components(rgb_to_hsl(RgbColor::new(28, 205, 150)));
        assert!((h - 160.0).abs() <= 1.0, "hue was {h}");
        assert!((s - 76.0).abs() <= 1.0, "saturation was {s}");
        assert!((l - 46.0).abs() <= 1.0, "lightness was {l}");
    }

    #[test]
    fn test_rgb_to_hsl_hue_rounding_wraps() {
        // Hue is 359.76 before rounding
        let hsl = rgb_to_hsl(RgbColor::new(255, 0, 1));
        assert_eq!(hsl.hue(), 0.0);
    }

    #[test]
    fn test_hsl_to_rgb_primary_colors() {
        assert_eq!(hsl_to_rgb(HslColor::new(0.0, 100.0, 50.0)), RgbColor::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(HslColor::new(120.0, 100.0, 50.0)), RgbColor::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(HslColor::new(240.0, 100.0, 50.0)), RgbColor::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(HslColor::new(60.0, 100.0, 50.0)), RgbColor::new(255, 255, 0));
    }

    #[test]
    fn test_hsl_to_rgb_achromatic_ignores_hue() {
        for lightness in 0..=100 {
            let l = f64::from(lightness);
            let expected = (l / 100.0 * 255.0).round() as u8;
            for hue in [0.0, 45.0, 180.0, 359.0] {
                let rgb = hsl_to_rgb(HslColor::new(hue, 0.0, l));
                assert_eq!(rgb, RgbColor::new(expected, expected, expected));
            }
        }
    }

    #[test]
    fn test_hsl_to_rgb_wraps_hue() {
        assert_eq!(
            hsl_to_rgb(HslColor::new(480.0, 100.0, 50.0)),
            hsl_to_rgb(HslColor::new(120.0, 100.0, 50.0))
        );
        assert_eq!(
            hsl_to_rgb(HslColor::new(-120.0, 100.0, 50.0)),
            hsl_to_rgb(HslColor::new(240.0, 100.0, 50.0))
        );
    }

    #[test]
    fn test_precise_roundtrip_is_exact() {
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(7) {
                    let original = RgbColor::new(r, g, b);
                    let back = hsl_to_rgb(rgb_to_hsl_precise(original));
                    assert_eq!(back, original, "roundtrip failed for {original}");
                }
            }
        }
    }

    #[test]
    fn test_rounded_roundtrip_common_colors() {
        let colors = [
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
            RgbColor::new(0, 0, 255),
            RgbColor::new(255, 255, 0),
            RgbColor::new(255, 0, 255),
            RgbColor::new(0, 255, 255),
            RgbColor::new(0, 0, 0),
            RgbColor::new(255, 255, 255),
            RgbColor::new(128, 128, 128),
        ];

        for color in colors {
            let back = hsl_to_rgb(rgb_to_hsl(color));
            assert!((i16::from(color.r) - i16::from(back.r)).abs() <= 1);
            assert!((i16::from(color.g) - i16::from(back.g)).abs() <= 1);
            assert!((i16::from(color.b) - i16::from(back.b)).abs() <= 1);
        }
    }

    #[test]
    fn test_to_css() {
        assert_eq!(HslColor::new(160.4, 75.6, 45.5).to_css(), "hsl(160, 76%, 46%)");
        assert_eq!(HslColor::default().to_string(), "hsl(0, 100%, 50%)");
    }
}
