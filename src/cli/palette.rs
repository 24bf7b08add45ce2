//! `palette` command: derive a harmony set from a base color.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{derive_harmony_by_name, parse_color, HarmonyKind, HslColor, Swatch};

/// Derive a color harmony from a base color
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Base hue in degrees (wraps around)
    #[arg(long, allow_negative_numbers = true)]
    hue: Option<f64>,

    /// Base saturation in percent (0-100)
    #[arg(long)]
    saturation: Option<f64>,

    /// Base lightness in percent (0-100)
    #[arg(long)]
    lightness: Option<f64>,

    /// Base color as #hex, rgb(...) or hsl(...)
    #[arg(long, value_name = "COLOR", conflicts_with_all = ["hue", "saturation", "lightness"])]
    base: Option<String>,

    /// Harmony rule (analogous, complementary, triadic, split-complementary,
    /// tetradic, monochromatic)
    #[arg(long, value_name = "NAME")]
    harmony: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    harmony: String,
    recognized: bool,
    base: Swatch,
    colors: Vec<Swatch>,
}

impl PaletteArgs {
    /// Execute palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let base = self.base_color(&config)?;
        let name = self
            .harmony
            .clone()
            .unwrap_or_else(|| config.palette.harmony.clone());
        let kind = name.parse::<HarmonyKind>().ok();
        let set = derive_harmony_by_name(base, &name);

        let output = PaletteOutput {
            harmony: kind.map_or_else(|| name.clone(), |k| k.name().to_string()),
            recognized: kind.is_some(),
            base: Swatch::from_hsl(base),
            colors: set.swatches(),
        };

        if self.json {
            print_json(&output)
        } else {
            print_human(&output, kind);
            Ok(())
        }
    }

    fn base_color(&self, config: &Config) -> CliResult<HslColor> {
        if let Some(text) = &self.base {
            let rgb = parse_color(text)
                .map_err(|e| CliError::validation(format!("Invalid color '{text}': {e}")))?;
            return Ok(rgb.to_hsl());
        }

        let hue = self.hue.unwrap_or(config.palette.hue);
        if !hue.is_finite() {
            return Err(CliError::validation("Hue must be a finite number"));
        }
        let saturation = percent("saturation", self.saturation, config.palette.saturation)?;
        let lightness = percent("lightness", self.lightness, config.palette.lightness)?;
        Ok(HslColor::new(hue, saturation, lightness))
    }
}

fn percent(name: &str, given: Option<f64>, fallback: f64) -> CliResult<f64> {
    let value = given.unwrap_or(fallback);
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(CliError::validation(format!(
            "{name} must be between 0 and 100, got {value}"
        )))
    }
}

fn print_human(output: &PaletteOutput, kind: Option<HarmonyKind>) {
    match kind {
        Some(kind) => println!("{} harmony of {}", kind.label(), output.base.hsl),
        None => println!(
            "Unknown harmony '{}', showing the base color {} only",
            output.harmony, output.base.hsl
        ),
    }
    println!();
    for (index, swatch) in output.colors.iter().enumerate() {
        println!(
            "  {:>2}  {}  {:<20}  {}",
            index + 1,
            swatch.hex,
            swatch.rgb.to_css(),
            swatch.hsl
        );
    }
}
