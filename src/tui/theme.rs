//! Theme system for consistent UI colors across dark and light modes.
//!
//! The theme is picked from the configured mode first, then from the
//! variant remembered in the preference store, then from the OS setting.

use ratatui::style::Color;

use crate::config::{KeyValueStore, ThemeMode, ThemeVariant};

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations and success messages
    pub success: Color,
    /// Error state color for errors and destructive actions
    pub error: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and gauge tracks
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Picks the theme for a configured mode.
    ///
    /// `Dark` and `Light` are explicit. `Auto` uses the variant remembered
    /// under the `"theme"` key and falls back to OS detection when nothing
    /// has been stored yet.
    #[must_use]
    pub fn resolve(mode: ThemeMode, store: &dyn KeyValueStore) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
            ThemeMode::Auto => {
                ThemeVariant::stored(store).map_or_else(Self::detect, Self::from_variant)
            }
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// All colors meet WCAG AA contrast requirements (4.5:1 minimum).
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
        }
    }

    /// Creates a theme from a variant enum.
    #[must_use]
    pub const fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Returns the theme variant for the current theme.
    ///
    /// This is determined by checking the background color.
    #[must_use]
    pub const fn variant(&self) -> ThemeVariant {
        match self.background {
            Color::White | Color::Rgb(255, 255, 255) | Color::Rgb(245, 245, 245) => {
                ThemeVariant::Light
            }
            _ => ThemeVariant::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow is too bright on a light background
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_variant_roundtrip() {
        for variant in [ThemeVariant::Dark, ThemeVariant::Light] {
            assert_eq!(Theme::from_variant(variant).variant(), variant);
        }
    }

    #[test]
    fn test_explicit_mode_beats_store() {
        let mut store = MemoryStore::new();
        ThemeVariant::Light.store(&mut store).unwrap();
        assert_eq!(Theme::resolve(ThemeMode::Dark, &store), Theme::dark());

        ThemeVariant::Dark.store(&mut store).unwrap();
        assert_eq!(Theme::resolve(ThemeMode::Light, &store), Theme::light());
    }

    #[test]
    fn test_auto_mode_uses_stored_variant() {
        let mut store = MemoryStore::new();
        ThemeVariant::Dark.store(&mut store).unwrap();
        assert_eq!(Theme::resolve(ThemeMode::Auto, &store), Theme::dark());

        ThemeVariant::Light.store(&mut store).unwrap();
        assert_eq!(Theme::resolve(ThemeMode::Auto, &store), Theme::light());
    }

    #[test]
    fn test_theme_detect() {
        // Just verify detect() returns a valid theme without panicking
        let theme = Theme::detect();
        assert!(theme.variant() == ThemeVariant::Dark || theme.variant() == ThemeVariant::Light);
    }
}
