//! Swatch list and saturation/lightness gauges.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::CopyFormat;

use super::AppState;

/// Width of the color sample in front of each swatch row.
const SAMPLE_WIDTH: usize = 6;

/// Swatch list widget
pub struct SwatchList;

impl SwatchList {
    /// Render the harmony swatches, one per row
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let title = format!(
            " {} · copy as {} ",
            state.harmony_label(),
            state.copy_format.label()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        let lines: Vec<Line> = state
            .palette
            .iter()
            .enumerate()
            .map(|(index, swatch)| {
                let selected = index == state.selected;
                let marker = if selected { "▶ " } else { "  " };
                let text_style = if selected {
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                let value_style = |format: CopyFormat| {
                    if format == state.copy_format {
                        text_style.add_modifier(Modifier::UNDERLINED)
                    } else {
                        text_style
                    }
                };

                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    Span::styled(
                        " ".repeat(SAMPLE_WIDTH),
                        Style::default().bg(swatch.rgb.to_ratatui_color()),
                    ),
                    Span::raw(" "),
                    Span::styled(format!("{:<8}", swatch.hex), value_style(CopyFormat::Hex)),
                    Span::raw(" "),
                    Span::styled(
                        format!("{:<19}", swatch.rgb.to_css()),
                        value_style(CopyFormat::Rgb),
                    ),
                    Span::raw(" "),
                    Span::styled(swatch.hsl.to_css(), value_style(CopyFormat::Hsl)),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Saturation and lightness gauges
pub struct SliderGauges;

impl SliderGauges {
    /// Render one gauge per component, stacked vertically
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let color = state.mapper.color();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(area);

        for (slot, (label, value, keys)) in rows.iter().zip([
            ("Saturation", color.saturation(), "s/S"),
            ("Lightness", color.lightness(), "l/L"),
        ]) {
            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {label} ({keys}) "))
                        .border_style(Style::default().fg(theme.primary)),
                )
                .gauge_style(Style::default().fg(gauge_fill(state)).bg(theme.surface))
                .ratio((value / 100.0).clamp(0.0, 1.0))
                .label(format!("{}%", value.round()));
            f.render_widget(gauge, *slot);
        }
    }
}

fn gauge_fill(state: &AppState) -> Color {
    state.mapper.color().to_rgb().to_ratatui_color()
}
