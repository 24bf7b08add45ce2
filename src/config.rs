//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution, plus the small
//! key-value store used for preferences the UI remembers between runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::models::{CopyFormat, HarmonyKind, HslColor};
use crate::picker::{
    ActivationPolicy, Geometry, GeometryKind, PolarInputMapper, DEFAULT_INNER_FRACTION,
};

/// Key under which the last used theme variant is stored.
pub const THEME_KEY: &str = "theme";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Use the remembered variant, or detect the OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!(
                "Invalid theme '{other}'. Must be 'auto', 'dark', or 'light'"
            )),
        }
    }
}

/// Concrete theme variant, as remembered in the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    /// Dark theme optimized for dark terminal backgrounds
    Dark,
    /// Light theme optimized for light terminal backgrounds
    #[default]
    Light,
}

impl ThemeVariant {
    /// Stored string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other variant.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Reads the remembered variant, if one was stored.
    ///
    /// Values other than `"dark"` read as light.
    #[must_use]
    pub fn stored(store: &dyn KeyValueStore) -> Option<Self> {
        store.get(THEME_KEY).map(|value| {
            if value.trim() == "dark" {
                Self::Dark
            } else {
                Self::Light
            }
        })
    }

    /// Reads the remembered variant, defaulting to light.
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::stored(store).unwrap_or_default()
    }

    /// Remembers this variant.
    pub fn store(self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(THEME_KEY, self.as_str())
    }
}

/// String preferences that survive restarts.
///
/// The color engine never touches this directly; the UI shell reads and
/// writes through it.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used when nothing should reach the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat TOML table (`state.toml` in the config directory).
///
/// Every `set` rewrites the file atomically.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// File name inside the config directory.
    pub const FILE_NAME: &'static str = "state.toml";

    /// Opens the store in the default config directory.
    pub fn open_default() -> Result<Self> {
        Self::open(Config::config_dir()?.join(Self::FILE_NAME))
    }

    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .context(format!("Failed to read state file: {}", path.display()))?;
            toml::from_str(&content)
                .context(format!("Failed to parse state file: {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        let content =
            toml::to_string_pretty(&self.values).context("Failed to serialize state")?;
        write_atomic(&self.path, &content)
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Picker surface configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Shape of the interactive region
    #[serde(default)]
    pub geometry: GeometryKind,
    /// Inner radius of the annulus as a fraction of the outer radius
    #[serde(default = "default_inner_radius_fraction")]
    pub inner_radius_fraction: f64,
    /// Whether pointer moves need an active drag to change the color
    #[serde(default)]
    pub activation: ActivationPolicy,
    /// Hit radius (in cells) of the harmony dot guard; off when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_hit_radius: Option<f64>,
}

const fn default_inner_radius_fraction() -> f64 {
    DEFAULT_INNER_FRACTION
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryKind::default(),
            inner_radius_fraction: default_inner_radius_fraction(),
            activation: ActivationPolicy::default(),
            dot_hit_radius: None,
        }
    }
}

impl PickerConfig {
    /// The configured geometry.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry::from_kind(self.geometry, self.inner_radius_fraction)
    }

    /// Builds an idle mapper for this configuration.
    ///
    /// Pass `None` for an unrecognized harmony name.
    #[must_use]
    pub fn build_mapper(
        &self,
        color: HslColor,
        harmony: impl Into<Option<HarmonyKind>>,
    ) -> PolarInputMapper {
        PolarInputMapper::new(self.geometry(), self.activation)
            .with_color(color)
            .with_harmony(harmony)
            .with_dot_hit_radius(self.dot_hit_radius)
    }
}

/// Starting palette configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Harmony name; unknown names fall back to the base color only
    #[serde(default = "default_harmony")]
    pub harmony: String,
    /// Base hue in degrees
    #[serde(default)]
    pub hue: f64,
    /// Base saturation in percent
    #[serde(default = "default_saturation")]
    pub saturation: f64,
    /// Base lightness in percent
    #[serde(default = "default_lightness")]
    pub lightness: f64,
    /// Format used when copying a swatch
    #[serde(default)]
    pub copy_format: CopyFormat,
}

fn default_harmony() -> String {
    HarmonyKind::default().name().to_string()
}

const fn default_saturation() -> f64 {
    100.0
}

const fn default_lightness() -> f64 {
    50.0
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            harmony: default_harmony(),
            hue: 0.0,
            saturation: default_saturation(),
            lightness: default_lightness(),
            copy_format: CopyFormat::default(),
        }
    }
}

impl PaletteConfig {
    /// The configured base color.
    #[must_use]
    pub fn base_color(&self) -> HslColor {
        HslColor::new(self.hue, self.saturation, self.lightness)
    }

    /// The configured harmony, if its name is recognized.
    #[must_use]
    pub fn harmony_kind(&self) -> Option<HarmonyKind> {
        self.harmony.parse().ok()
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/chromawheel/config.toml`
/// - macOS: `~/Library/Application Support/chromawheel/config.toml`
/// - Windows: `%APPDATA%\chromawheel\config.toml`
///
/// Setting `CHROMAWHEEL_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - `inner_radius_fraction` must be in `[0, 1)`
/// - `dot_hit_radius`, when set, must be positive
/// - base hue must be finite, saturation and lightness in `[0, 100]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Picker surface settings
    #[serde(default)]
    pub picker: PickerConfig,
    /// Starting palette
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `CHROMAWHEEL_CONFIG_DIR` wins when set; otherwise:
    /// - Linux: `~/.config/chromawheel/`
    /// - macOS: `~/Library/Application Support/chromawheel/`
    /// - Windows: `%APPDATA%\chromawheel\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Loads configuration from `config.toml` inside `dir`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join("config.toml");

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        if config.palette.harmony_kind().is_none() {
            tracing::warn!(
                harmony = %config.palette.harmony,
                "unknown harmony in config; showing the base color only"
            );
        }

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_dir()?)
    }

    /// Saves configuration to `config.toml` inside `dir`.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        write_atomic(&dir.join("config.toml"), &content)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let fraction = self.picker.inner_radius_fraction;
        if !(0.0..1.0).contains(&fraction) {
            anyhow::bail!("picker.inner_radius_fraction must be in [0, 1), got {fraction}");
        }

        if let Some(radius) = self.picker.dot_hit_radius {
            if !(radius.is_finite() && radius > 0.0) {
                anyhow::bail!("picker.dot_hit_radius must be a positive number, got {radius}");
            }
        }

        if !self.palette.hue.is_finite() {
            anyhow::bail!("palette.hue must be a finite number");
        }

        for (name, value) in [
            ("saturation", self.palette.saturation),
            ("lightness", self.palette.lightness),
        ] {
            if !(0.0..=100.0).contains(&value) {
                anyhow::bail!("palette.{name} must be in [0, 100], got {value}");
            }
        }

        Ok(())
    }
}

/// Writes `content` to `path` through a temp file and rename, creating the
/// parent directory first.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create config directory: {}",
            parent.display()
        ))?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, content).context(format!(
        "Failed to write temp file: {}",
        temp_path.display()
    ))?;

    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp file to: {}",
        path.display()
    ))?;

    Ok(())
}
