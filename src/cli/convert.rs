//! `convert` command: show a color in every supported notation.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{parse_color, HslColor, RgbColor};

/// Convert a color between hex, RGB and HSL
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Color as #hex, rgb(...) or hsl(...)
    #[arg(value_name = "COLOR", allow_hyphen_values = true)]
    color: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ConvertOutput {
    input: String,
    hex: String,
    rgb: RgbColor,
    hsl: HslColor,
    css_rgb: String,
    css_hsl: String,
}

impl ConvertArgs {
    /// Execute convert command
    pub fn execute(&self) -> CliResult<()> {
        let rgb = parse_color(&self.color)
            .map_err(|e| CliError::validation(format!("Invalid color '{}': {e}", self.color)))?;
        let hsl = rgb.to_hsl();

        let output = ConvertOutput {
            input: self.color.clone(),
            hex: rgb.to_hex(),
            rgb,
            hsl,
            css_rgb: rgb.to_css(),
            css_hsl: hsl.to_css(),
        };

        if self.json {
            print_json(&output)
        } else {
            println!("HEX  {}", output.hex);
            println!("RGB  {}", output.css_rgb);
            println!("HSL  {}", output.css_hsl);
            Ok(())
        }
    }
}
