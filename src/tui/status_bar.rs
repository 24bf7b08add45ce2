//! Status bar widget for displaying status messages and key help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Key bindings shown in the help line.
const HELP: &[(&str, &str)] = &[
    ("←→", "hue ±1"),
    ("↑↓", "hue ∓10"),
    ("s/S l/L", "sat/light"),
    ("Tab", "harmony"),
    ("j/k", "select"),
    ("f", "format"),
    ("y", "copy"),
    ("t", "theme"),
    ("q", "quit"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with key help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let status_line = state.error_message.as_ref().map_or_else(
            || {
                Line::from(vec![
                    Span::styled("Status: ", Style::default().fg(theme.primary)),
                    Span::styled(state.status_message.clone(), Style::default().fg(theme.success)),
                ])
            },
            |error| {
                Line::from(vec![
                    Span::styled(
                        "Error: ",
                        Style::default()
                            .fg(theme.error)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(error.clone(), Style::default().fg(theme.error)),
                ])
            },
        );

        let mut help_spans = Vec::with_capacity(HELP.len() * 2);
        for (key, action) in HELP {
            help_spans.push(Span::styled(
                format!("{key} "),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            help_spans.push(Span::styled(
                format!("{action}  "),
                Style::default().fg(theme.text_muted),
            ));
        }

        let paragraph = Paragraph::new(vec![status_line, Line::from(help_spans)]).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(paragraph, area);
    }
}
