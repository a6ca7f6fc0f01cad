//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use masthead::models::ResumeDocument;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the masthead binary
pub fn masthead_bin() -> &'static str {
    env!("CARGO_BIN_EXE_masthead")
}

/// Creates a Command whose config directory is isolated in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(masthead_bin());
    cmd.env("MASTHEAD_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// A fully populated resume document with a dark accent color.
pub fn sample_resume() -> Value {
    json!({
        "basics": {
            "name": "Ada Lovelace",
            "headline": "Analytical Engine Programmer",
            "summary": "Wrote the **first** published algorithm.",
            "photo": {
                "url": "https://example.com/ada.png",
                "visible": true,
                "filters": { "size": 96, "shape": "circle", "grayscale": false, "border": true }
            },
            "email": "ada@example.com",
            "phone": "555-1234",
            "birthdate": "1815-12-10",
            "website": "ada.dev",
            "location": {
                "address": "",
                "city": "London",
                "region": "",
                "postalCode": "",
                "country": "United Kingdom"
            },
            "profiles": [
                { "id": "gh", "network": "GitHub", "username": "ada", "url": "github.com/ada" },
                { "id": "li", "network": "LinkedIn", "username": "", "url": "" },
                { "id": "ms", "network": "Myspace", "username": "ada1815", "url": "https://myspace.com/ada1815" }
            ]
        },
        "metadata": {
            "date": { "format": "MMMM DD, YYYY" },
            "theme": { "primary": "#1a1a1a", "text": "#222222", "background": "#ffffff" }
        }
    })
}

/// Parses a JSON value into a typed document.
pub fn to_document(value: &Value) -> ResumeDocument {
    serde_json::from_value(value.clone()).expect("Fixture should be a valid document")
}

/// Writes `value` to a temporary resume file.
///
/// The returned TempDir must be kept alive for the file to exist.
pub fn create_temp_resume_file(value: &Value) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("resume.json");
    let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    fs::write(&path, content).expect("Failed to write resume file");
    (path, temp_dir)
}

/// Creates an empty temporary config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}
