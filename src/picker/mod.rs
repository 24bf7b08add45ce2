//! Input mapping for the color picker surface.
//!
//! [`PolarInputMapper`] turns pointer, keyboard and slider input over a
//! wheel or rectangle into HSL state, and maps hues back to positions for
//! drawing cursors and harmony dots.

pub mod geometry;
pub mod mapper;

pub use geometry::{
    hue_for_offset, offset_for_hue, ActivationPolicy, Bounds, Geometry, GeometryKind, HueKey,
    Point, DEFAULT_INNER_FRACTION, FULL_DISK_INDICATOR_FRACTION,
};
pub use mapper::{PointerInputState, PolarInputMapper};
