//! Stateful pointer and keyboard input over the picker region.
//!
//! The mapper owns the current HSL value and a two-state capture machine
//! (idle / capturing). The surface that owns it feeds it positions, key
//! steps and slider values; every accepted change is reported to the
//! registered listener so the caller can re-derive its palette.

use std::fmt;

use crate::models::{derive_harmony, HarmonyKind, HslColor, IDENTITY_OFFSETS};

use super::geometry::{
    hue_for_offset, offset_for_hue, ActivationPolicy, Bounds, Geometry, HueKey, Point,
};

type ChangeListener = Box<dyn FnMut(HslColor)>;

/// Read-only snapshot of the mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInputState {
    /// Hue in `[0, 360)`
    pub hue: f64,
    /// Saturation in `[0, 100]`
    pub saturation: f64,
    /// Lightness in `[0, 100]`
    pub lightness: f64,
    /// True while a drag gesture is in progress
    pub capturing: bool,
}

/// Converts gestures over a wheel or rectangle into HSL state.
///
/// # Examples
///
/// ```
/// use chromawheel::picker::{ActivationPolicy, Bounds, Geometry, Point, PolarInputMapper};
///
/// let mut mapper = PolarInputMapper::new(Geometry::FullDisk, ActivationPolicy::DragOnly)
///     .with_bounds(Bounds::new(0.0, 0.0, 100.0, 100.0));
///
/// // Straight right of the center is hue 90
/// assert!(mapper.begin_capture(Point::new(90.0, 50.0)));
/// assert!((mapper.current_state().hue - 90.0).abs() < 1e-9);
///
/// // Outside the wheel: ignored
/// assert!(!mapper.update_from_position(Point::new(200.0, 50.0)));
/// mapper.end_capture();
/// ```
pub struct PolarInputMapper {
    geometry: Geometry,
    activation: ActivationPolicy,
    bounds: Bounds,
    color: HslColor,
    capturing: bool,
    harmony: Option<HarmonyKind>,
    dot_hit_radius: Option<f64>,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for PolarInputMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolarInputMapper")
            .field("geometry", &self.geometry)
            .field("activation", &self.activation)
            .field("bounds", &self.bounds)
            .field("color", &self.color)
            .field("capturing", &self.capturing)
            .field("harmony", &self.harmony)
            .field("dot_hit_radius", &self.dot_hit_radius)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl PolarInputMapper {
    /// Creates an idle mapper with the default color and empty bounds.
    #[must_use]
    pub fn new(geometry: Geometry, activation: ActivationPolicy) -> Self {
        Self {
            geometry,
            activation,
            bounds: Bounds::default(),
            color: HslColor::default(),
            capturing: false,
            harmony: Some(HarmonyKind::default()),
            dot_hit_radius: None,
            listener: None,
        }
    }

    /// Sets the region the mapper covers.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the starting color without notifying.
    #[must_use]
    pub fn with_color(mut self, color: HslColor) -> Self {
        self.color = color;
        self
    }

    /// Enables the harmony dot guard with the given hit radius.
    ///
    /// With the guard on, a capture that starts on one of the harmony
    /// indicator dots does not move the hue until the pointer moves.
    #[must_use]
    pub fn with_dot_hit_radius(mut self, radius: Option<f64>) -> Self {
        self.dot_hit_radius = radius.filter(|r| r.is_finite() && *r > 0.0);
        self
    }

    /// Sets the harmony whose dots the guard checks against.
    ///
    /// `None` stands for an unrecognized harmony: only the base dot is shown.
    #[must_use]
    pub fn with_harmony(mut self, kind: impl Into<Option<HarmonyKind>>) -> Self {
        self.harmony = kind.into();
        self
    }

    /// Registers the callback fired after every accepted change.
    ///
    /// Replaces any previous listener.
    pub fn set_change_listener(&mut self, listener: impl FnMut(HslColor) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the change listener.
    pub fn clear_change_listener(&mut self) {
        self.listener = None;
    }

    /// Re-supplies the region after a resize.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Selects the harmony shown as indicator dots.
    pub fn set_harmony(&mut self, kind: impl Into<Option<HarmonyKind>>) {
        self.harmony = kind.into();
    }

    /// The configured geometry.
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The configured activation policy.
    #[must_use]
    pub const fn activation(&self) -> ActivationPolicy {
        self.activation
    }

    /// The current region.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The harmony used for indicator dots, `None` when unrecognized.
    #[must_use]
    pub const fn harmony(&self) -> Option<HarmonyKind> {
        self.harmony
    }

    /// The current color.
    #[must_use]
    pub const fn color(&self) -> HslColor {
        self.color
    }

    /// Snapshot of color and capture state.
    #[must_use]
    pub const fn current_state(&self) -> PointerInputState {
        PointerInputState {
            hue: self.color.hue(),
            saturation: self.color.saturation(),
            lightness: self.color.lightness(),
            capturing: self.capturing,
        }
    }

    /// Starts a drag gesture at `point` and applies the position.
    ///
    /// Returns true if the color changed. The capture starts even when the
    /// position itself is rejected.
    pub fn begin_capture(&mut self, point: Point) -> bool {
        self.capturing = true;
        if self.hits_indicator_dot(point) {
            tracing::debug!(x = point.x, y = point.y, "capture started on harmony dot");
            return false;
        }
        self.update_from_position(point)
    }

    /// Applies a pointer position.
    ///
    /// Wheel geometries reject positions beyond the outer radius. The
    /// rectangle clamps positions onto its edges. With
    /// [`ActivationPolicy::DragOnly`] positions are ignored while idle.
    ///
    /// Returns true if the position was accepted.
    pub fn update_from_position(&mut self, point: Point) -> bool {
        if self.activation == ActivationPolicy::DragOnly && !self.capturing {
            return false;
        }

        match self.geometry {
            Geometry::FullDisk | Geometry::Annulus { .. } => {
                let Some(hue) = self.hue_at(point) else {
                    return false;
                };
                self.color = self.color.with_hue(hue);
                tracing::debug!(hue = self.color.hue(), "hue set from pointer");
            }
            Geometry::RectanglePicker => {
                let Some((saturation, lightness)) = self.saturation_lightness_at(point) else {
                    return false;
                };
                self.color = self.color.with_saturation_lightness(saturation, lightness);
                tracing::debug!(
                    saturation = self.color.saturation(),
                    lightness = self.color.lightness(),
                    "saturation/lightness set from pointer"
                );
            }
        }
        self.notify();
        true
    }

    /// Ends the drag gesture. Returns true if a capture was in progress.
    pub fn end_capture(&mut self) -> bool {
        std::mem::replace(&mut self.capturing, false)
    }

    /// Adds `delta` degrees to the hue, wrapping into `[0, 360)`.
    ///
    /// Accepted in either capture state. Non-finite deltas are rejected.
    pub fn step_hue(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        self.color = self.color.with_hue(self.color.hue() + delta);
        tracing::debug!(delta, hue = self.color.hue(), "hue stepped");
        self.notify();
        true
    }

    /// Steps the hue by the amount bound to an arrow key.
    pub fn step_key(&mut self, key: HueKey) -> bool {
        self.step_hue(key.delta())
    }

    /// Sets the hue directly, as the rectangle geometry's hue slider does.
    pub fn set_hue(&mut self, hue: f64) -> bool {
        if !hue.is_finite() {
            return false;
        }
        self.color = self.color.with_hue(hue);
        tracing::debug!(hue = self.color.hue(), "hue set");
        self.notify();
        true
    }

    /// Sets saturation and lightness from external sliders, clamped into
    /// `[0, 100]`.
    pub fn set_saturation_lightness(&mut self, saturation: f64, lightness: f64) -> bool {
        self.color = self.color.with_saturation_lightness(saturation, lightness);
        tracing::debug!(
            saturation = self.color.saturation(),
            lightness = self.color.lightness(),
            "saturation/lightness set"
        );
        self.notify();
        true
    }

    /// Hue under `point`, or `None` when the point is outside the wheel.
    ///
    /// Always `None` for the rectangle geometry, where position does not
    /// encode hue.
    #[must_use]
    pub fn hue_at(&self, point: Point) -> Option<f64> {
        if !self.geometry.is_wheel() || !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        let radius = self.bounds.radius();
        let center = self.bounds.center();
        if radius <= 0.0 || point.distance_to(center) > radius {
            return None;
        }
        Some(hue_for_offset(point.x - center.x, point.y - center.y))
    }

    /// Distance of `point` from the center as a fraction of the radius.
    #[must_use]
    pub fn radial_fraction(&self, point: Point) -> f64 {
        let radius = self.bounds.radius();
        if radius <= 0.0 {
            return f64::INFINITY;
        }
        point.distance_to(self.bounds.center()) / radius
    }

    /// Saturation and lightness for `point` over the rectangle.
    ///
    /// The position is clamped into the bounds first. Left to right maps
    /// saturation 0 to 100; bottom to top maps lightness 0 to 100.
    #[must_use]
    pub fn saturation_lightness_at(&self, point: Point) -> Option<(f64, f64)> {
        if self.bounds.is_degenerate() {
            return None;
        }
        let fx = ((point.x - self.bounds.x) / self.bounds.width).clamp(0.0, 1.0);
        let fy = ((point.y - self.bounds.y) / self.bounds.height).clamp(0.0, 1.0);
        if fx.is_nan() || fy.is_nan() {
            return None;
        }
        Some((fx * 100.0, (1.0 - fy) * 100.0))
    }

    /// Offset from the center at which `hue` is drawn, at
    /// `radius_fraction` of the outer radius.
    #[must_use]
    pub fn position_for_hue(&self, hue: f64, radius_fraction: f64) -> (f64, f64) {
        offset_for_hue(hue, self.bounds.radius() * radius_fraction)
    }

    /// Offsets of the indicator dots for each color of `kind`'s harmony
    /// around the current color, in harmony order.
    #[must_use]
    pub fn indicator_positions(&self, kind: HarmonyKind) -> Vec<(f64, f64)> {
        let fraction = self.geometry.indicator_fraction();
        derive_harmony(self.color, kind)
            .iter()
            .map(|color| self.position_for_hue(color.hue(), fraction))
            .collect()
    }

    /// Offsets of the dots for the selected harmony. An unrecognized
    /// harmony has the base dot only.
    #[must_use]
    pub fn harmony_dots(&self) -> Vec<(f64, f64)> {
        match self.harmony {
            Some(kind) => self.indicator_positions(kind),
            None => {
                let fraction = self.geometry.indicator_fraction();
                IDENTITY_OFFSETS
                    .iter()
                    .map(|offset| self.position_for_hue(self.color.hue() + offset, fraction))
                    .collect()
            }
        }
    }

    fn hits_indicator_dot(&self, point: Point) -> bool {
        let Some(hit_radius) = self.dot_hit_radius else {
            return false;
        };
        if !self.geometry.is_wheel() {
            return false;
        }
        let center = self.bounds.center();
        self.harmony_dots()
            .into_iter()
            .any(|(dx, dy)| point.distance_to(Point::new(center.x + dx, center.y + dy)) <= hit_radius)
    }

    fn notify(&mut self) {
        let color = self.color;
        if let Some(listener) = self.listener.as_mut() {
            listener(color);
        }
    }
}
