//! Shapes of the interactive region and the pure math that maps between
//! positions and hues.
//!
//! Coordinates are screen-style: `x` grows to the right and `y` grows
//! downward. Hue 0 sits straight above the center and increases clockwise.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::normalize_hue;

/// Fraction of the radius used for indicator dots on a full disk.
pub const FULL_DISK_INDICATOR_FRACTION: f64 = 0.875;

/// Default inner radius of the annulus, as a fraction of the outer radius.
pub const DEFAULT_INNER_FRACTION: f64 = 0.75;

/// A point in the caller's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downward)
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Rectangle occupied by the interactive region.
///
/// Re-supplied by the caller whenever the surface is resized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Bounds {
    /// Creates bounds from origin and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Middle of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Radius of the largest circle that fits the rectangle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.width.min(self.height) / 2.0).max(0.0)
    }

    /// True when the rectangle has no usable area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Shape of the interactive region, chosen when the mapper is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Solid disk; the whole circle picks hue
    FullDisk,
    /// Ring between `inner_fraction * radius` and the outer radius
    Annulus {
        /// Inner radius as a fraction of the outer radius, in `[0, 1)`
        inner_fraction: f64,
    },
    /// Saturation/lightness rectangle with a separate hue slider
    RectanglePicker,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::Annulus {
            inner_fraction: DEFAULT_INNER_FRACTION,
        }
    }
}

impl Geometry {
    /// Builds a geometry from its configured kind.
    ///
    /// `inner_fraction` only matters for [`GeometryKind::Annulus`]; it is
    /// clamped into `[0, 1)`.
    #[must_use]
    pub fn from_kind(kind: GeometryKind, inner_fraction: f64) -> Self {
        match kind {
            GeometryKind::FullDisk => Self::FullDisk,
            GeometryKind::Annulus => Self::Annulus {
                inner_fraction: if inner_fraction.is_finite() {
                    inner_fraction.clamp(0.0, 0.99)
                } else {
                    DEFAULT_INNER_FRACTION
                },
            },
            GeometryKind::Rectangle => Self::RectanglePicker,
        }
    }

    /// The configuration name of this geometry.
    #[must_use]
    pub const fn kind(&self) -> GeometryKind {
        match self {
            Self::FullDisk => GeometryKind::FullDisk,
            Self::Annulus { .. } => GeometryKind::Annulus,
            Self::RectanglePicker => GeometryKind::Rectangle,
        }
    }

    /// True for the circular geometries where angle encodes hue.
    #[must_use]
    pub const fn is_wheel(&self) -> bool {
        matches!(self, Self::FullDisk | Self::Annulus { .. })
    }

    /// Inner radius fraction (0 for the full disk).
    #[must_use]
    pub const fn inner_fraction(&self) -> f64 {
        match self {
            Self::Annulus { inner_fraction } => *inner_fraction,
            Self::FullDisk | Self::RectanglePicker => 0.0,
        }
    }

    /// Radius fraction at which harmony indicator dots are placed.
    ///
    /// On the annulus the dots sit in the middle of the ring.
    #[must_use]
    pub fn indicator_fraction(&self) -> f64 {
        match self {
            Self::Annulus { inner_fraction } => (1.0 + inner_fraction) / 2.0,
            Self::FullDisk | Self::RectanglePicker => FULL_DISK_INDICATOR_FRACTION,
        }
    }
}

/// Geometry names as they appear in configuration and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeometryKind {
    /// Ring-shaped wheel
    #[default]
    Annulus,
    /// Solid wheel
    FullDisk,
    /// Saturation/lightness rectangle plus hue slider
    Rectangle,
}

impl GeometryKind {
    /// Configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Annulus => "annulus",
            Self::FullDisk => "full-disk",
            Self::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "annulus" | "ring" => Ok(Self::Annulus),
            "full-disk" | "disk" => Ok(Self::FullDisk),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            other => Err(format!(
                "Invalid geometry '{other}'. Must be 'annulus', 'full-disk', or 'rectangle'"
            )),
        }
    }
}

/// When pointer movement is allowed to change the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivationPolicy {
    /// Positions are applied only between begin and end of a capture
    #[default]
    DragOnly,
    /// Every position is applied, captured or not
    Click,
}

impl ActivationPolicy {
    /// Configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DragOnly => "drag-only",
            Self::Click => "click",
        }
    }
}

impl fmt::Display for ActivationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "drag-only" | "drag" => Ok(Self::DragOnly),
            "click" => Ok(Self::Click),
            other => Err(format!(
                "Invalid activation '{other}'. Must be 'drag-only' or 'click'"
            )),
        }
    }
}

/// Arrow keys that step the hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueKey {
    /// -1 degree
    Left,
    /// +1 degree
    Right,
    /// -10 degrees
    Up,
    /// +10 degrees
    Down,
}

impl HueKey {
    /// Signed hue change in degrees.
    ///
    /// Up decreases and Down increases; this mirrors long-standing behavior
    /// and is kept as is.
    #[must_use]
    pub const fn delta(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
            Self::Up => -10.0,
            Self::Down => 10.0,
        }
    }
}

/// Hue for an offset from the wheel center.
///
/// # Examples
///
/// ```
/// use chromawheel::picker::hue_for_offset;
///
/// let near = |a: f64, b: f64| (a - b).abs() < 1e-9;
/// assert!(near(hue_for_offset(0.0, -10.0), 0.0)); // straight up
/// assert!(near(hue_for_offset(10.0, 0.0), 90.0)); // right
/// assert!(near(hue_for_offset(0.0, 10.0), 180.0)); // down
/// assert!(near(hue_for_offset(-10.0, 0.0), 270.0)); // left
/// ```
#[must_use]
pub fn hue_for_offset(dx: f64, dy: f64) -> f64 {
    normalize_hue(dy.atan2(dx).to_degrees() + 90.0)
}

/// Offset from the wheel center at which `hue` sits, `radius` away.
///
/// Inverse of [`hue_for_offset`].
#[must_use]
pub fn offset_for_hue(hue: f64, radius: f64) -> (f64, f64) {
    let angle = normalize_hue(hue - 90.0).to_radians();
    (angle.cos() * radius, angle.sin() * radius)
}
