//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::{CopyFormat, HarmonyKind};
use crate::picker::{ActivationPolicy, GeometryKind};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Default harmony rule
    #[arg(long, value_name = "NAME")]
    harmony: Option<String>,

    /// Picker geometry (annulus, full-disk, or rectangle)
    #[arg(long, value_name = "SHAPE")]
    geometry: Option<String>,

    /// Pointer activation (drag-only or click)
    #[arg(long, value_name = "POLICY")]
    activation: Option<String>,

    /// Copy format (hex, rgb, or hsl)
    #[arg(long, value_name = "FORMAT")]
    copy_format: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: Option<String>,
    ui: UiOutput,
    picker: PickerOutput,
    palette: PaletteOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

#[derive(Serialize, Debug)]
struct PickerOutput {
    geometry: GeometryKind,
    inner_radius_fraction: f64,
    activation: ActivationPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    dot_hit_radius: Option<f64>,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    harmony: String,
    hue: f64,
    saturation: f64,
    lightness: f64,
    copy_format: CopyFormat,
}

impl From<&Config> for ConfigOutput {
    fn from(config: &Config) -> Self {
        Self {
            path: Config::config_file_path()
                .ok()
                .map(|p| p.to_string_lossy().to_string()),
            ui: UiOutput {
                theme: config.ui.theme_mode.to_string(),
            },
            picker: PickerOutput {
                geometry: config.picker.geometry,
                inner_radius_fraction: config.picker.inner_radius_fraction,
                activation: config.picker.activation,
                dot_hit_radius: config.picker.dot_hit_radius,
            },
            palette: PaletteOutput {
                harmony: config.palette.harmony.clone(),
                hue: config.palette.hue,
                saturation: config.palette.saturation,
                lightness: config.palette.lightness,
                copy_format: config.palette.copy_format,
            },
        }
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let output = ConfigOutput::from(&config);
        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.harmony.is_none()
            && self.geometry.is_none()
            && self.activation.is_none()
            && self.copy_format.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: \
                 --theme, --harmony, --geometry, --activation, or --copy-format",
            ));
        }

        // An unreadable config is replaced rather than blocking the fix
        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable configuration: {e:#}");
            Config::default()
        });

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme.parse::<ThemeMode>().map_err(CliError::validation)?;
        }

        if let Some(harmony) = &self.harmony {
            let kind = harmony
                .parse::<HarmonyKind>()
                .map_err(|e| CliError::validation(e.to_string()))?;
            config.palette.harmony = kind.name().to_string();
        }

        if let Some(geometry) = &self.geometry {
            config.picker.geometry = geometry
                .parse::<GeometryKind>()
                .map_err(CliError::validation)?;
        }

        if let Some(activation) = &self.activation {
            config.picker.activation = activation
                .parse::<ActivationPolicy>()
                .map_err(CliError::validation)?;
        }

        if let Some(format) = &self.copy_format {
            config.palette.copy_format = format
                .parse::<CopyFormat>()
                .map_err(CliError::validation)?;
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("Chromawheel Configuration");
    println!("=========================");
    println!();

    if let Some(path) = &output.path {
        println!("File: {path}");
        println!();
    }

    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme);
    println!();

    println!("Picker:");
    println!("  Geometry: {}", output.picker.geometry);
    println!(
        "  Inner Radius Fraction: {}",
        output.picker.inner_radius_fraction
    );
    println!("  Activation: {}", output.picker.activation);
    match output.picker.dot_hit_radius {
        Some(radius) => println!("  Dot Hit Radius: {radius}"),
        None => println!("  Dot Hit Radius: (off)"),
    }
    println!();

    println!("Palette:");
    println!("  Harmony: {}", output.palette.harmony);
    println!(
        "  Base: hsl({}, {}%, {}%)",
        output.palette.hue, output.palette.saturation, output.palette.lightness
    );
    println!("  Copy Format: {}", output.palette.copy_format);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_args() -> ConfigSetArgs {
        ConfigSetArgs {
            theme: None,
            harmony: None,
            geometry: None,
            activation: None,
            copy_format: None,
        }
    }

    #[test]
    fn test_set_args_empty_detection() {
        assert!(set_args().is_empty());
        let args = ConfigSetArgs {
            geometry: Some("rectangle".to_string()),
            ..set_args()
        };
        assert!(!args.is_empty());
    }

    #[test]
    fn test_output_from_config() {
        let output = ConfigOutput::from(&Config::default());
        assert_eq!(output.ui.theme, "auto");
        assert_eq!(output.picker.geometry, GeometryKind::Annulus);
        assert_eq!(output.palette.harmony, "analogous");

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["picker"]["activation"], "drag-only");
        assert_eq!(json["palette"]["copy_format"], "hex");
        assert!(json["picker"].get("dot_hit_radius").is_none());
    }
}
