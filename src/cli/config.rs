//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, LOG_LEVELS};
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
    /// Date pattern applied to every rendered document
    #[arg(long, value_name = "PATTERN", conflicts_with = "clear_date_format")]
    date_format: Option<String>,

    /// Remove the configured date pattern (documents use their own)
    #[arg(long)]
    clear_date_format: bool,

    /// Summary tint opacity (0.0-1.0)
    #[arg(long, value_name = "ALPHA")]
    summary_opacity: Option<f32>,

    /// Default log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: Option<String>,
    render: RenderOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct RenderOutput {
    date_format: Option<String>,
    summary_tint_opacity: f32,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    level: String,
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
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.date_format.is_none()
            && !self.clear_date_format
            && self.summary_opacity.is_none()
            && self.log_level.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --date-format, --clear-date-format, --summary-opacity, or --log-level",
            ));
        }

        // A missing file loads as defaults; an unreadable one is left alone
        let mut config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if let Some(format) = &self.date_format {
            if format.trim().is_empty() {
                return Err(CliError::validation("Date format cannot be empty"));
            }
            config.render.date_format = Some(format.clone());
        }

        if self.clear_date_format {
            config.render.date_format = None;
        }

        if let Some(opacity) = self.summary_opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(CliError::validation(format!(
                    "Summary opacity must be between 0.0 and 1.0, got {opacity}"
                )));
            }
            config.render.summary_tint_opacity = opacity;
        }

        if let Some(level) = &self.log_level {
            let level = level.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(CliError::validation(format!(
                    "Invalid log level. Must be one of: {}",
                    LOG_LEVELS.join(", ")
                )));
            }
            config.logging.level = level;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        render: RenderOutput {
            date_format: config.render.date_format.clone(),
            summary_tint_opacity: config.render.summary_tint_opacity,
        },
        logging: LoggingOutput {
            level: config.logging.level.clone(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Masthead Configuration");
    println!("======================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Render:");
    match &config.render.date_format {
        Some(format) => println!("  Date Format: {format}"),
        None => println!("  Date Format: (from document)"),
    }
    println!(
        "  Summary Tint Opacity: {}",
        config.render.summary_tint_opacity
    );
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!();
}
