//! CLI command handlers for Masthead.
//!
//! Headless, scriptable access to the masthead projection for automation
//! and template previews.

pub mod common;
pub mod config;
pub mod contrast;
pub mod render;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use render::RenderArgs;
