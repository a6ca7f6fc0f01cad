//! Contrast command: classify an accent color and show the derived colors.

use crate::cli::common::{CliError, CliResult};
use crate::models::{RgbColor, ThemeConfig};
use crate::render::ContrastPalette;
use clap::Args;
use serde::Serialize;

/// Classify an accent color and derive icon and text colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Accent color (#RRGGBB or #RGB)
    #[arg(value_name = "COLOR")]
    pub primary: String,

    /// Theme text color
    #[arg(long, value_name = "COLOR", default_value = "#000000")]
    pub text: String,

    /// Theme background color
    #[arg(long, value_name = "COLOR", default_value = "#FFFFFF")]
    pub background: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ContrastOutput {
    primary: String,
    luminance: f32,
    #[serde(flatten)]
    palette: ContrastPalette,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let primary = RgbColor::from_hex(&self.primary)
            .map_err(|e| CliError::validation(e.to_string()))?;
        for color in [&self.text, &self.background] {
            RgbColor::from_hex(color).map_err(|e| CliError::validation(e.to_string()))?;
        }

        let theme = ThemeConfig::new(&self.primary, &self.text, &self.background);
        let palette = ContrastPalette::resolve(&theme);

        let output = ContrastOutput {
            primary: primary.to_hex(),
            luminance: primary.luminance(),
            palette,
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("Primary:    {}", output.primary);
            println!("Luminance:  {:.1}", output.luminance);
            println!("Contrast:   {}", output.palette.contrast);
            println!("Icon color: {}", output.palette.icon_color);
            println!("Text color: {}", output.palette.text_color);
        }

        Ok(())
    }
}
