//! Picker panel: the hue wheel (annulus or full disk), or the
//! saturation/lightness rectangle with its hue slider.
//!
//! Terminal cells are about twice as tall as they are wide, so the panel
//! works in units where one row is [`ROW_SCALE`] columns tall. The mapper's
//! bounds are expressed in those units, which keeps the wheel round.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
    Frame,
};

use crate::models::{HslColor, RgbColor};
use crate::picker::{Bounds, Geometry, Point};

use super::AppState;

/// Height of one terminal row in column units.
pub const ROW_SCALE: f64 = 2.0;

/// Fraction of the inner radius filled with the current color.
const CENTER_PREVIEW_FRACTION: f64 = 0.55;

/// Screen areas of the picker panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerAreas {
    /// Region handed to the input mapper
    pub surface: Rect,
    /// Hue slider row (rectangle geometry only)
    pub hue_slider: Option<Rect>,
}

impl PickerAreas {
    /// Splits the panel's inner area for `geometry`.
    #[must_use]
    pub fn for_geometry(inner: Rect, geometry: Geometry) -> Self {
        match geometry {
            Geometry::RectanglePicker if inner.height >= 3 => Self {
                surface: Rect::new(inner.x, inner.y, inner.width, inner.height - 2),
                hue_slider: Some(Rect::new(
                    inner.x,
                    inner.y + inner.height - 1,
                    inner.width,
                    1,
                )),
            },
            _ => Self {
                surface: inner,
                hue_slider: None,
            },
        }
    }

    /// Mapper bounds for the surface, in panel units.
    ///
    /// The rectangle's bounds run from the center of its first cell to the
    /// center of its last, so the edge cells reach 0 and 100 exactly.
    #[must_use]
    pub fn bounds(&self, geometry: Geometry) -> Bounds {
        let width = f64::from(self.surface.width);
        let height = f64::from(self.surface.height);
        if geometry.is_wheel() {
            Bounds::new(0.0, 0.0, width, height * ROW_SCALE)
        } else {
            Bounds::new(
                0.5,
                ROW_SCALE / 2.0,
                (width - 1.0).max(0.0),
                (height - 1.0).max(0.0) * ROW_SCALE,
            )
        }
    }
}

/// Center of the cell at (`column`, `row`) in panel units relative to
/// `area`. Cells outside `area` map to points outside the bounds.
#[must_use]
pub fn cell_center(area: Rect, column: u16, row: u16) -> Point {
    Point::new(
        f64::from(column) - f64::from(area.x) + 0.5,
        (f64::from(row) - f64::from(area.y)) * ROW_SCALE + ROW_SCALE / 2.0,
    )
}

/// Cell containing the panel-unit point, if it lies inside `area`.
#[must_use]
pub fn cell_at(area: Rect, point: Point) -> Option<(u16, u16)> {
    let column = point.x.floor();
    let row = (point.y / ROW_SCALE).floor();
    if column < 0.0 || row < 0.0 || column >= f64::from(area.width) || row >= f64::from(area.height)
    {
        return None;
    }
    Some((area.x + column as u16, area.y + row as u16))
}

/// Hue under `column` of the hue slider, in `[0, 360)`.
#[must_use]
pub fn slider_hue(slider: Rect, column: u16) -> f64 {
    if slider.width == 0 {
        return 0.0;
    }
    let offset = column
        .saturating_sub(slider.x)
        .min(slider.width.saturating_sub(1));
    f64::from(offset) / f64::from(slider.width) * 360.0
}

/// Picker panel widget
pub struct PickerPanel;

impl PickerPanel {
    /// Render the picker panel into `area`
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let geometry = state.mapper.geometry();
        let title = match geometry {
            Geometry::Annulus { .. } => " Hue Ring ",
            Geometry::FullDisk => " Hue Wheel ",
            Geometry::RectanglePicker => " Saturation / Lightness ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title))
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let areas = PickerAreas::for_geometry(inner, geometry);
        let buf = f.buffer_mut();
        match geometry {
            Geometry::FullDisk | Geometry::Annulus { .. } => {
                draw_wheel(buf, areas.surface, state);
                draw_dots(buf, areas.surface, state);
            }
            Geometry::RectanglePicker => {
                draw_rectangle(buf, areas.surface, state);
                if let Some(slider) = areas.hue_slider {
                    draw_hue_slider(buf, slider, state);
                }
            }
        }
    }
}

fn to_color(rgb: RgbColor) -> Color {
    rgb.to_ratatui_color()
}

fn contrast(rgb: RgbColor) -> Color {
    if rgb.prefers_dark_text() {
        Color::Black
    } else {
        Color::White
    }
}

fn paint(buf: &mut Buffer, column: u16, row: u16, symbol: &str, fg: Color, bg: Color) {
    if let Some(cell) = buf.cell_mut((column, row)) {
        cell.set_symbol(symbol).set_fg(fg).set_bg(bg);
    }
}

fn draw_wheel(buf: &mut Buffer, area: Rect, state: &AppState) {
    let mapper = &state.mapper;
    let color = mapper.color();
    let inner_fraction = mapper.geometry().inner_fraction();
    let is_disk = matches!(mapper.geometry(), Geometry::FullDisk);

    for row in area.top()..area.bottom() {
        for column in area.left()..area.right() {
            let point = cell_center(area, column, row);
            let fraction = mapper.radial_fraction(point);
            let fill = match mapper.hue_at(point) {
                Some(hue) if is_disk => Some(HslColor::new(
                    hue,
                    color.saturation() * fraction,
                    color.lightness(),
                )),
                Some(hue) if fraction >= inner_fraction => {
                    Some(color.with_hue(hue))
                }
                Some(_) if fraction <= inner_fraction * CENTER_PREVIEW_FRACTION => Some(color),
                _ => None,
            };
            if let Some(fill) = fill {
                let rgb = fill.to_rgb();
                paint(buf, column, row, " ", contrast(rgb), to_color(rgb));
            }
        }
    }
}

fn draw_dots(buf: &mut Buffer, area: Rect, state: &AppState) {
    let center = state.mapper.bounds().center();
    for (index, ((dx, dy), swatch)) in state
        .indicator_offsets()
        .into_iter()
        .zip(&state.palette)
        .enumerate()
    {
        let Some((column, row)) = cell_at(area, Point::new(center.x + dx, center.y + dy)) else {
            continue;
        };
        let symbol = if index == state.selected { "◆" } else { "●" };
        let bg = buf
            .cell((column, row))
            .map_or(state.theme.background, |cell| cell.bg);
        paint(buf, column, row, symbol, contrast(swatch.rgb), bg);
    }
}

fn draw_rectangle(buf: &mut Buffer, area: Rect, state: &AppState) {
    let mapper = &state.mapper;
    let color = mapper.color();

    for row in area.top()..area.bottom() {
        for column in area.left()..area.right() {
            let point = cell_center(area, column, row);
            let Some((saturation, lightness)) = mapper.saturation_lightness_at(point) else {
                continue;
            };
            let rgb = color.with_saturation_lightness(saturation, lightness).to_rgb();
            paint(buf, column, row, " ", contrast(rgb), to_color(rgb));
        }
    }

    // Cursor at the current saturation/lightness
    let bounds = mapper.bounds();
    let cursor = Point::new(
        bounds.x + color.saturation() / 100.0 * bounds.width,
        bounds.y + (1.0 - color.lightness() / 100.0) * bounds.height,
    );
    if let Some((column, row)) = cell_at(area, cursor) {
        paint(buf, column, row, "┼", contrast(color.to_rgb()), to_color(color.to_rgb()));
    }
}

fn draw_hue_slider(buf: &mut Buffer, slider: Rect, state: &AppState) {
    let hue = state.mapper.color().hue();
    let width = f64::from(slider.width);
    let marker = slider.x + ((hue / 360.0 * width).floor() as u16).min(slider.width.saturating_sub(1));

    for column in slider.left()..slider.right() {
        let rgb = HslColor::new(slider_hue(slider, column), 100.0, 50.0).to_rgb();
        let symbol = if column == marker { "▲" } else { " " };
        paint(buf, column, slider.y, symbol, contrast(rgb), to_color(rgb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_center_uses_row_scale() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(cell_center(area, 10, 5), Point::new(0.5, 1.0));
        assert_eq!(cell_center(area, 12, 7), Point::new(2.5, 5.0));
        assert_eq!(cell_center(area, 8, 5), Point::new(-1.5, 1.0));
    }

    #[test]
    fn test_cell_at_inverts_cell_center() {
        let area = Rect::new(3, 2, 8, 4);
        for row in area.top()..area.bottom() {
            for column in area.left()..area.right() {
                assert_eq!(cell_at(area, cell_center(area, column, row)), Some((column, row)));
            }
        }
        assert_eq!(cell_at(area, Point::new(-0.5, 1.0)), None);
        assert_eq!(cell_at(area, Point::new(8.5, 1.0)), None);
        assert_eq!(cell_at(area, Point::new(1.0, 8.5)), None);
    }

    #[test]
    fn test_wheel_bounds_are_round() {
        let areas = PickerAreas::for_geometry(Rect::new(0, 0, 40, 20), Geometry::FullDisk);
        assert_eq!(areas.hue_slider, None);
        let bounds = areas.bounds(Geometry::FullDisk);
        assert!((bounds.width - 40.0).abs() < f64::EPSILON);
        assert!((bounds.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rectangle_areas_and_bounds() {
        let inner = Rect::new(1, 1, 21, 12);
        let areas = PickerAreas::for_geometry(inner, Geometry::RectanglePicker);
        assert_eq!(areas.surface, Rect::new(1, 1, 21, 10));
        assert_eq!(areas.hue_slider, Some(Rect::new(1, 12, 21, 1)));

        let bounds = areas.bounds(Geometry::RectanglePicker);
        // First cell center is the origin, last cell center is the far corner
        let first = cell_center(areas.surface, 1, 1);
        let last = cell_center(areas.surface, 21, 10);
        assert!((first.x - bounds.x).abs() < f64::EPSILON);
        assert!((first.y - bounds.y).abs() < f64::EPSILON);
        assert!((last.x - (bounds.x + bounds.width)).abs() < f64::EPSILON);
        assert!((last.y - (bounds.y + bounds.height)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_slider_hue_range() {
        let slider = Rect::new(4, 0, 36, 1);
        assert!(slider_hue(slider, 4).abs() < f64::EPSILON);
        assert!((slider_hue(slider, 13) - 90.0).abs() < 1e-9);
        assert!((slider_hue(slider, 39) - 350.0).abs() < 1e-9);
        // Clamped at both ends
        assert!(slider_hue(slider, 0).abs() < f64::EPSILON);
        assert!((slider_hue(slider, 200) - 350.0).abs() < 1e-9);
    }
}
