//! `harmonies` command: list the available harmony rules.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliResult};
use crate::models::{HarmonyKind, HarmonyRecipe};

/// List the available harmony rules
#[derive(Args, Debug)]
pub struct HarmoniesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct HarmonyInfo {
    name: &'static str,
    label: &'static str,
    colors: usize,
    /// Hue offsets in degrees; absent for tonal rules
    #[serde(skip_serializing_if = "Option::is_none")]
    offsets: Option<&'static [f64]>,
    description: &'static str,
}

impl From<HarmonyKind> for HarmonyInfo {
    fn from(kind: HarmonyKind) -> Self {
        let offsets = match kind.recipe() {
            HarmonyRecipe::HueOffsets(offsets) => Some(offsets),
            HarmonyRecipe::Tonal(_) => None,
        };
        Self {
            name: kind.name(),
            label: kind.label(),
            colors: kind.color_count(),
            offsets,
            description: kind.description(),
        }
    }
}

impl HarmoniesArgs {
    /// Execute harmonies command
    pub fn execute(&self) -> CliResult<()> {
        let infos: Vec<HarmonyInfo> = HarmonyKind::ALL.into_iter().map(Into::into).collect();

        if self.json {
            return print_json(&infos);
        }

        for info in &infos {
            let detail = info.offsets.map_or_else(
                || "saturation/lightness steps".to_string(),
                |offsets| {
                    let degrees: Vec<String> = offsets.iter().map(|o| format!("{o:+}°")).collect();
                    degrees.join(" ")
                },
            );
            println!("{:<20} {} colors  {}", info.name, info.colors, detail);
            println!("{:<20} {}", "", info.description);
        }
        Ok(())
    }
}
