//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod clipboard;
pub mod palette_view;
pub mod status_bar;
pub mod theme;
pub mod wheel;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crate::config::{Config, FileStore, KeyValueStore, MemoryStore, ThemeVariant};
use crate::constants::APP_NAME;
use crate::models::{derive_harmony, CopyFormat, HarmonyKind, Swatch, IDENTITY_OFFSETS};
use crate::picker::{ActivationPolicy, Geometry, HueKey, PolarInputMapper};

// Re-export TUI components
pub use clipboard::SwatchClipboard;
pub use palette_view::{SliderGauges, SwatchList};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use wheel::{PickerAreas, PickerPanel};

/// Saturation/lightness change per key press, in percent.
pub const PERCENT_STEP: f64 = 5.0;

/// Where a mouse drag started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// The wheel or saturation/lightness rectangle
    Surface,
    /// The hue slider under the rectangle
    HueSlider,
}

/// Screen regions, recomputed whenever the terminal size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title bar
    pub title: Rect,
    /// Picker panel including its border
    pub picker_panel: Rect,
    /// Interactive parts of the picker panel
    pub picker: PickerAreas,
    /// Swatch list including its border
    pub swatches: Rect,
    /// Saturation/lightness gauges
    pub gauges: Rect,
    /// Status bar
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits the screen for the given picker geometry.
    #[must_use]
    pub fn compute(screen: Rect, geometry: Geometry) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Main content
                Constraint::Length(4), // Status + help
            ])
            .split(screen);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(7), Constraint::Length(6)])
            .split(columns[1]);

        let picker_panel = columns[0];
        Self {
            title: rows[0],
            picker_panel,
            picker: PickerAreas::for_geometry(picker_panel.inner(Margin::new(1, 1)), geometry),
            swatches: right[0],
            gauges: right[1],
            status: rows[2],
        }
    }
}

/// Application state for the picker UI.
pub struct AppState {
    /// Input mapper owning the current color
    pub mapper: PolarInputMapper,
    /// Selected harmony; `None` when the configured name is unknown
    pub harmony: Option<HarmonyKind>,
    /// Harmony name as configured
    pub harmony_name: String,
    /// Swatches derived from the current color
    pub palette: Vec<Swatch>,
    /// Index of the selected swatch
    pub selected: usize,
    /// Format used when copying
    pub copy_format: CopyFormat,
    /// Current UI theme
    pub theme: Theme,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Clipboard access
    pub clipboard: SwatchClipboard,
    /// Screen regions from the last resize
    pub layout: ScreenLayout,
    /// Active mouse drag
    pub drag: Option<DragTarget>,
    /// Whether application should exit
    pub should_quit: bool,
    store: Box<dyn KeyValueStore>,
    changed: Rc<Cell<bool>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("mapper", &self.mapper)
            .field("harmony", &self.harmony)
            .field("selected", &self.selected)
            .field("copy_format", &self.copy_format)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Creates the UI state from configuration and the preference store.
    #[must_use]
    pub fn new(config: &Config, store: Box<dyn KeyValueStore>) -> Self {
        let harmony = config.palette.harmony_kind();
        let theme = Theme::resolve(config.ui.theme_mode, store.as_ref());

        let mut mapper = config
            .picker
            .build_mapper(config.palette.base_color(), harmony);
        let changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&changed);
        mapper.set_change_listener(move |_| flag.set(true));

        let mut state = Self {
            mapper,
            harmony,
            harmony_name: config.palette.harmony.clone(),
            palette: Vec::new(),
            selected: 0,
            copy_format: config.palette.copy_format,
            theme,
            status_message: "Drag on the wheel or use the arrow keys".to_string(),
            error_message: None,
            clipboard: SwatchClipboard::new(),
            layout: ScreenLayout::default(),
            drag: None,
            should_quit: false,
            store,
            changed,
        };
        state.refresh_palette();
        state
    }

    /// Label of the current harmony for titles.
    #[must_use]
    pub fn harmony_label(&self) -> String {
        self.harmony.map_or_else(
            || format!("Unknown harmony '{}'", self.harmony_name),
            |kind| kind.label().to_string(),
        )
    }

    /// Offsets of the harmony indicator dots from the wheel center, one per
    /// swatch.
    #[must_use]
    pub fn indicator_offsets(&self) -> Vec<(f64, f64)> {
        self.mapper.harmony_dots()
    }

    /// Re-derives the swatches from the mapper's color.
    pub fn refresh_palette(&mut self) {
        let base = self.mapper.color();
        self.palette = match self.harmony {
            Some(kind) => derive_harmony(base, kind).swatches(),
            None => IDENTITY_OFFSETS
                .iter()
                .map(|offset| Swatch::from_hsl(base.with_hue(base.hue() + offset)))
                .collect(),
        };
        self.selected = self.selected.min(self.palette.len().saturating_sub(1));
        self.changed.set(false);
    }

    /// Refreshes the palette if the mapper reported a change.
    pub fn sync_changes(&mut self) {
        if self.changed.get() {
            self.refresh_palette();
        }
    }

    /// Recomputes the layout and hands the new bounds to the mapper.
    pub fn resize(&mut self, screen: Rect) {
        let geometry = self.mapper.geometry();
        self.layout = ScreenLayout::compute(screen, geometry);
        self.mapper.set_bounds(self.layout.picker.bounds(geometry));
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Selects the next or previous harmony kind.
    pub fn cycle_harmony(&mut self, forward: bool) {
        let kind = match (self.harmony, forward) {
            (Some(kind), true) => kind.next(),
            (Some(kind), false) => kind.previous(),
            (None, true) => HarmonyKind::ALL[0],
            (None, false) => HarmonyKind::ALL[HarmonyKind::ALL.len() - 1],
        };
        self.harmony = Some(kind);
        self.harmony_name = kind.name().to_string();
        self.mapper.set_harmony(kind);
        self.refresh_palette();
        self.set_status(format!("{}: {}", kind.label(), kind.description()));
    }

    /// Switches between the dark and light theme and remembers the choice.
    pub fn toggle_theme(&mut self) {
        let variant = self.theme.variant().toggled();
        self.theme = Theme::from_variant(variant);
        match variant.store(self.store.as_mut()) {
            Ok(()) => self.set_status(format!("Theme: {}", variant.as_str())),
            Err(e) => {
                tracing::warn!("Failed to store theme: {e:#}");
                self.set_error(format!("Failed to store theme: {e}"));
            }
        }
    }

    /// Copies the selected swatch in the current format.
    pub fn copy_selected(&mut self) {
        let Some(swatch) = self.palette.get(self.selected) else {
            return;
        };
        let value = swatch.value(self.copy_format);
        match self.clipboard.copy(&value) {
            Ok(message) => self.set_status(message),
            Err(e) => self.set_error(format!("{e:#}")),
        }
    }

    /// Theme variant currently shown.
    #[must_use]
    pub const fn theme_variant(&self) -> ThemeVariant {
        self.theme.variant()
    }

    /// Handles a key press. Returns true when the application should quit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let color = self.mapper.color();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.mapper.step_key(HueKey::Left);
            }
            KeyCode::Right => {
                self.mapper.step_key(HueKey::Right);
            }
            KeyCode::Up => {
                self.mapper.step_key(HueKey::Up);
            }
            KeyCode::Down => {
                self.mapper.step_key(HueKey::Down);
            }
            KeyCode::Char('s') => {
                self.mapper
                    .set_saturation_lightness(color.saturation() - PERCENT_STEP, color.lightness());
            }
            KeyCode::Char('S') => {
                self.mapper
                    .set_saturation_lightness(color.saturation() + PERCENT_STEP, color.lightness());
            }
            KeyCode::Char('l') => {
                self.mapper
                    .set_saturation_lightness(color.saturation(), color.lightness() - PERCENT_STEP);
            }
            KeyCode::Char('L') => {
                self.mapper
                    .set_saturation_lightness(color.saturation(), color.lightness() + PERCENT_STEP);
            }
            KeyCode::Tab => self.cycle_harmony(true),
            KeyCode::BackTab => self.cycle_harmony(false),
            KeyCode::Char('j') => {
                if self.selected + 1 < self.palette.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Char('f') => {
                self.copy_format = self.copy_format.next();
                self.set_status(format!("Copy format: {}", self.copy_format.label()));
            }
            KeyCode::Char('y') | KeyCode::Enter => self.copy_selected(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }

        self.sync_changes();
        Ok(self.should_quit)
    }

    /// Handles a mouse event over the picker, slider or swatch list.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let at = Position::new(mouse.column, mouse.row);
        let surface = self.layout.picker.surface;
        let point = wheel::cell_center(surface, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(slider) = self.layout.picker.hue_slider.filter(|s| s.contains(at)) {
                    self.drag = Some(DragTarget::HueSlider);
                    self.mapper.set_hue(wheel::slider_hue(slider, mouse.column));
                } else if surface.contains(at) {
                    self.drag = Some(DragTarget::Surface);
                    self.mapper.begin_capture(point);
                } else if self.layout.swatches.contains(at) {
                    let row = usize::from(mouse.row.saturating_sub(self.layout.swatches.y + 1));
                    if row < self.palette.len() {
                        self.selected = row;
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.drag {
                Some(DragTarget::Surface) => {
                    self.mapper.update_from_position(point);
                }
                Some(DragTarget::HueSlider) => {
                    if let Some(slider) = self.layout.picker.hue_slider {
                        self.mapper.set_hue(wheel::slider_hue(slider, mouse.column));
                    }
                }
                None => {}
            },
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag.take() == Some(DragTarget::Surface) {
                    self.mapper.end_capture();
                }
            }
            // With click activation the surface follows the pointer
            MouseEventKind::Moved
                if self.drag.is_none()
                    && self.mapper.activation() == ActivationPolicy::Click
                    && surface.contains(at) =>
            {
                self.mapper.update_from_position(point);
            }
            MouseEventKind::ScrollUp => {
                self.mapper.step_key(HueKey::Left);
            }
            MouseEventKind::ScrollDown => {
                self.mapper.step_key(HueKey::Right);
            }
            _ => {}
        }

        self.sync_changes();
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Opens the preference store, falling back to memory when the state file
/// cannot be read.
fn open_store() -> Box<dyn KeyValueStore> {
    match FileStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("Preferences unavailable, using defaults: {e:#}");
            Box::new(MemoryStore::new())
        }
    }
}

/// Runs the picker UI until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let mut state = AppState::new(config, open_store());
    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;
    result
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let mut last_screen = None;
    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        let screen = Rect::new(0, 0, size.width, size.height);
        if last_screen != Some(screen) {
            state.resize(screen);
            last_screen = Some(screen);
        }
        state.sync_changes();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if state.handle_key_event(key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => state.handle_mouse_event(mouse),
                // Terminal resized, layout is recomputed on the next pass
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = &state.layout;
    render_title_bar(f, layout.title, state);
    PickerPanel::render(f, layout.picker_panel, state);
    SwatchList::render(f, layout.swatches, state);
    SliderGauges::render(f, layout.gauges, state);
    StatusBar::render(f, layout.status, state);
}

/// Render title bar with the current color
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let color = state.mapper.color();
    let rgb = color.to_rgb();
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(rgb.to_ratatui_color())),
        Span::styled(
            format!(" {}  {}", rgb.to_hex(), color.to_css()),
            Style::default().fg(state.theme.text),
        ),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.theme.primary))
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(title_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HslColor;
    use crate::picker::GeometryKind;
    use ratatui::backend::TestBackend;

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn state_with(config: &Config) -> AppState {
        let mut state = AppState::new(config, Box::new(MemoryStore::new()));
        state.resize(screen());
        state
    }

    fn default_state() -> AppState {
        let mut config = Config::default();
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        state_with(&config)
    }

    #[test]
    fn test_initial_palette_follows_config() {
        let mut config = Config::default();
        config.palette.harmony = "triadic".to_string();
        config.palette.saturation = 50.0;
        let state = state_with(&config);
        assert_eq!(state.harmony, Some(HarmonyKind::Triadic));
        assert_eq!(state.palette.len(), 3);
        assert_eq!(state.palette[1].hsl, HslColor::new(120.0, 50.0, 50.0));
    }

    #[test]
    fn test_unknown_harmony_shows_base_only() {
        let mut config = Config::default();
        config.palette.harmony = "pentagram".to_string();
        let mut state = state_with(&config);
        assert_eq!(state.harmony, None);
        assert_eq!(state.palette.len(), 1);
        assert_eq!(state.indicator_offsets().len(), 1);
        assert!(state.harmony_label().contains("pentagram"));

        state.handle_key_event(press(KeyCode::Tab)).unwrap();
        assert_eq!(state.harmony, Some(HarmonyKind::Analogous));
        assert_eq!(state.palette.len(), 3);
    }

    #[test]
    fn test_unknown_harmony_guards_only_the_drawn_dot() {
        let mut config = Config::default();
        config.palette.harmony = "pentagram".to_string();
        config.picker.dot_hit_radius = Some(2.0);
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        let mut state = state_with(&config);

        // Where the first analogous dot would sit; nothing is drawn there
        let center = state.mapper.bounds().center();
        let (dx, dy) = state.mapper.indicator_positions(HarmonyKind::Analogous)[0];
        let point = crate::picker::Point::new(center.x + dx, center.y + dy);

        assert!(state.mapper.begin_capture(point));
        let hue = state.mapper.color().hue();
        assert!((hue - 330.0).abs() < 1e-6, "hue was {hue}");
        state.sync_changes();
        assert_eq!(state.palette.len(), 1);
        assert_eq!(state.palette[0].hsl.hue(), hue);
    }

    #[test]
    fn test_arrow_keys_step_hue_and_refresh_palette() {
        let mut state = default_state();
        state.handle_key_event(press(KeyCode::Down)).unwrap();
        assert!((state.mapper.color().hue() - 10.0).abs() < 1e-9);
        // Analogous: the base sits in the middle
        assert_eq!(state.palette[1].hsl, state.mapper.color());

        state.handle_key_event(press(KeyCode::Up)).unwrap();
        state.handle_key_event(press(KeyCode::Left)).unwrap();
        assert!((state.mapper.color().hue() - 359.0).abs() < 1e-9);
        assert_eq!(state.palette[1].hsl.hue(), state.mapper.color().hue());
    }

    #[test]
    fn test_saturation_and_lightness_keys_clamp() {
        let mut state = default_state();
        state.handle_key_event(press(KeyCode::Char('S'))).unwrap();
        assert!((state.mapper.color().saturation() - 100.0).abs() < f64::EPSILON);
        state.handle_key_event(press(KeyCode::Char('s'))).unwrap();
        assert!((state.mapper.color().saturation() - 95.0).abs() < f64::EPSILON);
        state.handle_key_event(press(KeyCode::Char('L'))).unwrap();
        assert!((state.mapper.color().lightness() - 55.0).abs() < f64::EPSILON);
        assert!((state.palette[1].hsl.lightness() - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_selection_and_format_keys() {
        let mut state = default_state();
        state.handle_key_event(press(KeyCode::Char('k'))).unwrap();
        assert_eq!(state.selected, 0);
        for _ in 0..5 {
            state.handle_key_event(press(KeyCode::Char('j'))).unwrap();
        }
        assert_eq!(state.selected, 2);

        // Switching to a two-color harmony keeps the selection in range
        state.handle_key_event(press(KeyCode::Tab)).unwrap();
        assert_eq!(state.harmony, Some(HarmonyKind::Complementary));
        assert_eq!(state.selected, 1);

        state.handle_key_event(press(KeyCode::Char('f'))).unwrap();
        assert_eq!(state.copy_format, CopyFormat::Rgb);
    }

    #[test]
    fn test_theme_toggle_is_stored() {
        let mut state = default_state();
        assert_eq!(state.theme_variant(), ThemeVariant::Dark);
        state.handle_key_event(press(KeyCode::Char('t'))).unwrap();
        assert_eq!(state.theme_variant(), ThemeVariant::Light);
        assert_eq!(state.store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_quit_keys() {
        let mut state = default_state();
        assert!(!state.handle_key_event(press(KeyCode::Char('x'))).unwrap());
        assert!(state.handle_key_event(press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_mouse_drag_on_wheel() {
        let mut state = default_state();
        let surface = state.layout.picker.surface;
        let bounds = state.mapper.bounds();
        let center = bounds.center();
        let radius = bounds.radius();

        // A cell straight right of the center, inside the ring
        let column = surface.x + (center.x + radius * 0.85).floor() as u16;
        let row = surface.y + (center.y / wheel::ROW_SCALE).floor() as u16;

        state.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
        assert_eq!(state.drag, Some(DragTarget::Surface));
        assert!(state.mapper.current_state().capturing);
        let hue = state.mapper.color().hue();
        assert!((hue - 90.0).abs() < 10.0, "hue was {hue}");
        assert_eq!(state.palette[1].hsl.hue(), hue);

        state.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), column, row));
        assert_eq!(state.drag, None);
        assert!(!state.mapper.current_state().capturing);
    }

    #[test]
    fn test_idle_hover_ignored_with_drag_only() {
        let mut state = default_state();
        let surface = state.layout.picker.surface;
        let before = state.mapper.color();
        state.handle_mouse_event(mouse(MouseEventKind::Moved, surface.x + 1, surface.y + 1));
        assert_eq!(state.mapper.color(), before);
    }

    #[test]
    fn test_rectangle_geometry_slider_sets_hue() {
        let mut config = Config::default();
        config.picker.geometry = GeometryKind::Rectangle;
        config.ui.theme_mode = crate::config::ThemeMode::Light;
        let mut state = state_with(&config);
        let slider = state.layout.picker.hue_slider.unwrap();

        let column = slider.x + slider.width / 2;
        state.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), column, slider.y));
        assert_eq!(state.drag, Some(DragTarget::HueSlider));
        let expected = wheel::slider_hue(slider, column);
        assert!((state.mapper.color().hue() - expected).abs() < 1e-9);

        // Bottom-left corner of the rectangle: no saturation, no lightness
        let surface = state.layout.picker.surface;
        state.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), column, slider.y));
        state.handle_mouse_event(mouse(
            MouseEventKind::Down(MouseButton::Left),
            surface.x,
            surface.y + surface.height - 1,
        ));
        assert!(state.mapper.color().saturation().abs() < 1e-9);
        assert!(state.mapper.color().lightness().abs() < 1e-9);
    }

    #[test]
    fn test_render_smoke() {
        for geometry in [GeometryKind::Annulus, GeometryKind::FullDisk, GeometryKind::Rectangle] {
            let mut config = Config::default();
            config.picker.geometry = geometry;
            config.ui.theme_mode = crate::config::ThemeMode::Dark;
            let state = state_with(&config);

            let mut terminal = Terminal::new(TestBackend::new(screen().width, screen().height)).unwrap();
            terminal.draw(|f| render(f, &state)).unwrap();

            let buffer = terminal.backend().buffer();
            let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
            assert!(text.contains(APP_NAME));
            assert!(text.contains("#ff0000"));
        }
    }
}
