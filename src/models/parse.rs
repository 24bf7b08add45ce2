//! Parsing color strings typed by the user.
//!
//! Accepted forms:
//! * `#rgb`, `#rrggbb` (the `#` is optional)
//! * `rgb(r, g, b)` with integer channels 0-255
//! * `hsl(h, s%, l%)` with the percent signs optional

use std::fmt;

use super::{HslColor, RgbColor};

/// Reason a color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Nothing but whitespace
    Empty,
    /// Hex string with the wrong number of digits or a non-hex digit
    InvalidHex,
    /// Malformed `rgb()`/`hsl()` call
    InvalidFunc,
    /// A component that parsed but lies outside its range
    OutOfRange,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "empty color string",
            Self::InvalidHex => "invalid hex color (expected #rgb or #rrggbb)",
            Self::InvalidFunc => "invalid rgb()/hsl() function",
            Self::OutOfRange => "component out of range",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColorParseError {}

/// Parses a color string into RGB.
///
/// `hsl()` input is converted through [`HslColor::to_rgb`].
///
/// # Examples
///
/// ```
/// use chromawheel::models::{parse_color, RgbColor};
///
/// assert_eq!(parse_color("#1ccd96").unwrap(), RgbColor::new(28, 205, 150));
/// assert_eq!(parse_color("rgb(255, 0, 0)").unwrap(), RgbColor::new(255, 0, 0));
/// assert_eq!(parse_color("hsl(120, 100%, 50%)").unwrap(), RgbColor::new(0, 255, 0));
/// ```
///
/// # Errors
///
/// Returns a [`ColorParseError`] describing the first problem found.
pub fn parse_color(input: &str) -> Result<RgbColor, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgb") {
        return parse_css_rgb(args);
    }
    if let Some(args) = function_args(&lower, "hsl") {
        return parse_css_hsl(args).map(|hsl| hsl.to_rgb());
    }
    if lower.starts_with("rgb") || lower.starts_with("hsl") {
        return Err(ColorParseError::InvalidFunc);
    }

    RgbColor::from_hex(trimmed).map_err(|_| ColorParseError::InvalidHex)
}

/// Returns the text between the parentheses of `name(...)`.
fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args(args: &str) -> Result<[&str; 3], ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(ColorParseError::InvalidFunc),
    }
}

fn parse_css_rgb(args: &str) -> Result<RgbColor, ColorParseError> {
    let [r, g, b] = split_args(args)?;
    let channel = |s: &str| -> Result<u8, ColorParseError> {
        let value: i64 = s.parse().map_err(|_| ColorParseError::InvalidFunc)?;
        u8::try_from(value).map_err(|_| ColorParseError::OutOfRange)
    };
    Ok(RgbColor::new(channel(r)?, channel(g)?, channel(b)?))
}

fn parse_css_hsl(args: &str) -> Result<HslColor, ColorParseError> {
    let [h, s, l] = split_args(args)?;
    let number = |s: &str| -> Result<f64, ColorParseError> {
        let value: f64 = s
            .trim_end_matches('%')
            .trim()
            .parse()
            .map_err(|_| ColorParseError::InvalidFunc)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ColorParseError::InvalidFunc)
        }
    };
    let percent = |s: &str| -> Result<f64, ColorParseError> {
        let value = number(s)?;
        if (0.0..=100.0).contains(&value) {
            Ok(value)
        } else {
            Err(ColorParseError::OutOfRange)
        }
    };

    // Hue wraps like any other angle; only S and L are range-checked
    let hue = number(h.trim_end_matches("deg"))?;
    Ok(HslColor::new(hue, percent(s)?, percent(l)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_color("#ff0000"), Ok(RgbColor::new(255, 0, 0)));
        assert_eq!(parse_color("FF0000"), Ok(RgbColor::new(255, 0, 0)));
        assert_eq!(parse_color("  #0f0 "), Ok(RgbColor::new(0, 255, 0)));
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(parse_color("rgb(28, 205, 150)"), Ok(RgbColor::new(28, 205, 150)));
        assert_eq!(parse_color("RGB(1,2,3)"), Ok(RgbColor::new(1, 2, 3)));
        assert_eq!(parse_color("rgb (1, 2, 3)"), Ok(RgbColor::new(1, 2, 3)));
    }

    #[test]
    fn test_parse_hsl_function() {
        assert_eq!(parse_color("hsl(0, 100%, 50%)"), Ok(RgbColor::new(255, 0, 0)));
        assert_eq!(parse_color("hsl(240, 100, 50)"), Ok(RgbColor::new(0, 0, 255)));
        assert_eq!(parse_color("hsl(480deg, 100%, 50%)"), Ok(RgbColor::new(0, 255, 0)));
        assert_eq!(parse_color("hsl(-120, 100%, 50%)"), Ok(RgbColor::new(0, 0, 255)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_color(""), Err(ColorParseError::Empty));
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert_eq!(parse_color("#12345"), Err(ColorParseError::InvalidHex));
        assert_eq!(parse_color("banana"), Err(ColorParseError::InvalidHex));
        assert_eq!(parse_color("rgb(1, 2)"), Err(ColorParseError::InvalidFunc));
        assert_eq!(parse_color("rgb(1, 2, x)"), Err(ColorParseError::InvalidFunc));
        assert_eq!(parse_color("rgb(1, 2, 300)"), Err(ColorParseError::OutOfRange));
        assert_eq!(parse_color("rgb(-1, 2, 3)"), Err(ColorParseError::OutOfRange));
        assert_eq!(parse_color("hsl(10, 120%, 50%)"), Err(ColorParseError::OutOfRange));
        assert_eq!(parse_color("hsl(10, 50%"), Err(ColorParseError::InvalidFunc));
    }
}
