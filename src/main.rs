//! Masthead - resume header projection from the command line
//!
//! Loads a resume document, resolves contrast-aware colors for its theme and
//! prints the masthead rows a template would draw.

use clap::{Parser, Subcommand};
use masthead::cli::{ConfigArgs, ContrastArgs, ExitCode, RenderArgs};
use masthead::config::Config;
use masthead::constants::APP_BINARY_NAME;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Masthead - contrast-aware resume header projection
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a resume document into masthead rows
    Render(RenderArgs),
    /// Classify an accent color and derive icon and text colors
    Contrast(ContrastArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

/// Installs the stderr tracing subscriber.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the configured
/// level applies.
fn init_tracing(verbose: bool, config: &Config) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        config.logging.level.to_lowercase()
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_tracing(cli.verbose, &config);

    if let Err(e) = &loaded {
        warn!("Failed to load config, using defaults: {e:#}");
    }
    debug!(command = ?cli.command, "Dispatching command");

    let result = match &cli.command {
        Command::Render(args) => args.execute(&config),
        Command::Contrast(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {}", e.message);
            e.code
        }
    };

    std::process::exit(code.code());
}
