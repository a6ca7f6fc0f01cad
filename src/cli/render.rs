//! Render command: project a resume file into its masthead.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::ResumeDocument;
use crate::render::{Masthead, MastheadProjector, MastheadSnapshot, PassthroughRenderer};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Project a resume document into masthead rows
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path to resume JSON file
    #[arg(short, long, value_name = "FILE")]
    pub resume: PathBuf,

    /// Output the masthead as JSON
    #[arg(long)]
    pub json: bool,

    /// Date pattern (strftime or dayjs-style), overrides config and document
    #[arg(long, value_name = "PATTERN")]
    pub date_format: Option<String>,

    /// Summary tint opacity (0.0-1.0), overrides config
    #[arg(long, value_name = "ALPHA")]
    pub summary_opacity: Option<f32>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        if let Some(opacity) = self.summary_opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(CliError::validation(format!(
                    "Summary opacity must be between 0.0 and 1.0, got {opacity}"
                )));
            }
        }

        if let Some(format) = &self.date_format {
            if format.trim().is_empty() {
                return Err(CliError::validation("Date format cannot be empty"));
            }
        }

        let document = ResumeDocument::load(&self.resume)
            .map_err(|e| CliError::io(format!("Failed to load resume: {e:#}")))?;

        let date_format = self.resolve_date_format(config, &document);
        let mut snapshot = MastheadSnapshot::from_document(&document);
        snapshot.date_format = date_format;

        let opacity = self
            .summary_opacity
            .unwrap_or(config.render.summary_tint_opacity);
        let projector =
            MastheadProjector::new(PassthroughRenderer).with_summary_tint_opacity(opacity);
        let masthead = projector.project(&snapshot);

        info!(
            "Rendered masthead for {} with {} rows",
            self.resume.display(),
            masthead.rows.len()
        );

        if self.json {
            let json = serde_json::to_string_pretty(&masthead)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            print!("{}", format_human_readable(&masthead));
        }

        Ok(())
    }

    /// CLI flag wins over config, config wins over the document.
    fn resolve_date_format<'a>(
        &'a self,
        config: &'a Config,
        document: &'a ResumeDocument,
    ) -> &'a str {
        self.date_format
            .as_deref()
            .or(config.render.date_format.as_deref())
            .unwrap_or(&document.metadata.date.format)
    }
}

/// Plain-text rendering of a masthead for terminals.
pub fn format_human_readable(masthead: &Masthead) -> String {
    let mut lines = Vec::new();
    let identity = &masthead.identity;

    if !identity.name.is_empty() {
        lines.push(identity.name.clone());
    }
    if !identity.headline.is_empty() {
        lines.push(identity.headline.clone());
    }
    lines.push(String::new());

    let palette = &masthead.palette;
    lines.push(format!(
        "Contrast: {} (icons {}, text {})",
        palette.contrast, palette.icon_color, palette.text_color
    ));

    if let Some(photo) = &masthead.photo {
        lines.push(format!("Photo: {} ({}px)", photo.url, photo.size));
    }

    if !masthead.rows.is_empty() {
        lines.push(String::new());
        for row in &masthead.rows {
            let mut line = format!("  [{}]", row.icon);
            if let Some(label) = &row.label {
                line.push(' ');
                line.push_str(label);
            }
            if let Some(link) = &row.link {
                line.push_str(&format!(" <{link}>"));
            }
            lines.push(line);
        }
    }

    if !masthead.summary.content.is_empty() {
        lines.push(String::new());
        lines.push(match &masthead.summary.background {
            Some(background) => format!("Summary (background {background}):"),
            None => "Summary:".to_string(),
        });
        lines.extend(masthead.summary.content.lines().map(|line| format!("  {line}")));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Basics, Profile, ThemeConfig};
    use crate::render::project_masthead;

    fn args(date_format: Option<&str>) -> RenderArgs {
        RenderArgs {
            resume: PathBuf::from("resume.json"),
            json: false,
            date_format: date_format.map(str::to_string),
            summary_opacity: None,
        }
    }

    #[test]
    fn test_date_format_precedence() {
        let mut document = ResumeDocument::default();
        document.metadata.date.format = "doc".to_string();
        let mut config = Config::new();

        assert_eq!(args(None).resolve_date_format(&config, &document), "doc");

        config.render.date_format = Some("config".to_string());
        let no_flag = args(None);
        assert_eq!(no_flag.resolve_date_format(&config, &document), "config");

        let flag = args(Some("flag"));
        assert_eq!(flag.resolve_date_format(&config, &document), "flag");
    }

    #[test]
    fn test_human_readable_output() {
        let basics = Basics {
            name: "Ada Lovelace".to_string(),
            headline: "Analyst".to_string(),
            phone: "555-1234".to_string(),
            summary: "First line\nSecond line".to_string(),
            profiles: vec![Profile::new("1", "GitHub", "", "")],
            ..Basics::default()
        };
        let theme = ThemeConfig::new("#1a1a1a", "#EEEEEE", "#FFFFFF");
        let masthead = project_masthead(&MastheadSnapshot::new(&basics, &theme, "%Y"));

        let text = format_human_readable(&masthead);
        assert!(text.starts_with("Ada Lovelace\nAnalyst\n"));
        assert!(text.contains("Contrast: dark (icons #EEEEEE, text #EEEEEE)"));
        assert!(text.contains("  [phone] 555-1234 <tel:555-1234>\n"));
        assert!(text.contains("  [github]\n"));
        assert!(text.contains("Summary (background rgba(26, 26, 26, 0.15)):"));
        assert!(text.contains("  Second line\n"));
        assert!(!text.contains("Photo:"));
    }
}
