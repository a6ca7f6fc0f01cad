//! End-to-end tests for `masthead config` commands.

mod fixtures;
use fixtures::*;

use masthead::config::Config;
use serde_json::Value;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let config_dir = temp_config_dir();
    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Masthead Configuration"));
    assert!(stdout.contains("Date Format: (from document)"));
    assert!(stdout.contains("Summary Tint Opacity: 0.15"));
}

#[test]
fn test_config_show_json_schema() {
    let config_dir = temp_config_dir();
    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let result: Value = serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert!(result["render"].is_object(), "Should have render object");
    assert!(result["render"]["date_format"].is_null());
    assert!(result["render"]["summary_tint_opacity"].is_number());
    assert_eq!(result["logging"]["level"], "warn");
    assert!(result["path"]
        .as_str()
        .unwrap()
        .ends_with("config.toml"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists_values() {
    let config_dir = temp_config_dir();
    let output = isolated_command(
        &[
            "config",
            "set",
            "--date-format",
            "%Y",
            "--summary-opacity",
            "0.4",
            "--log-level",
            "INFO",
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let saved = Config::load_from(&config_dir.path().join("config.toml")).unwrap();
    assert_eq!(saved.render.date_format.as_deref(), Some("%Y"));
    assert!((saved.render.summary_tint_opacity - 0.4).abs() < f32::EPSILON);
    assert_eq!(saved.logging.level, "info");
}

#[test]
fn test_config_set_clear_date_format() {
    let config_dir = temp_config_dir();
    let set = isolated_command(&["config", "set", "--date-format", "%Y"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));

    let clear = isolated_command(&["config", "set", "--clear-date-format"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(clear.status.code(), Some(0));

    let saved = Config::load_from(&config_dir.path().join("config.toml")).unwrap();
    assert_eq!(saved.render.date_format, None);
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = temp_config_dir();
    let output = isolated_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let config_dir = temp_config_dir();

    for args in [
        ["config", "set", "--summary-opacity", "1.5"],
        ["config", "set", "--log-level", "chatty"],
        ["config", "set", "--date-format", "  "],
    ] {
        let output = isolated_command(&args, config_dir.path())
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(2), "args: {args:?}");
    }

    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_show_corrupt_file_fails() {
    let config_dir = temp_config_dir();
    std::fs::write(config_dir.path().join("config.toml"), "render = [").unwrap();

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_keeps_existing_values() {
    let config_dir = temp_config_dir();
    let config_path = config_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[render]\ndate_format = \"%d.%m.%Y\"\nsummary_tint_opacity = 0.3\n",
    )
    .unwrap();

    let output = isolated_command(&["config", "set", "--log-level", "debug"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let saved = Config::load_from(&config_path).unwrap();
    assert_eq!(saved.render.date_format.as_deref(), Some("%d.%m.%Y"));
    assert!((saved.render.summary_tint_opacity - 0.3).abs() < f32::EPSILON);
    assert_eq!(saved.logging.level, "debug");
}

#[test]
fn test_config_set_leaves_invalid_file_untouched() {
    let config_dir = temp_config_dir();
    let config_path = config_dir.path().join("config.toml");
    let original = "[render]\ndate_format = \"%d.%m.%Y\"\nsummary_tint_opacity = 4.0\n";
    std::fs::write(&config_path, original).unwrap();

    let output = isolated_command(&["config", "set", "--log-level", "debug"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), original);
}
