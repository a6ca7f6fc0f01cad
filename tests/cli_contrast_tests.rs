//! End-to-end tests for `masthead contrast`.

mod fixtures;
use fixtures::*;

use serde_json::Value;

#[test]
fn test_contrast_dark_primary() {
    let config_dir = temp_config_dir();
    let output = isolated_command(&["contrast", "#1a1a1a", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["primary"], "#1A1A1A");
    assert_eq!(result["contrast"], "dark");
    assert_eq!(result["icon_color"], "#000000");
    assert_eq!(result["text_color"], "#000000");
}

#[test]
fn test_contrast_light_primary_inverts_text() {
    let config_dir = temp_config_dir();
    let output = isolated_command(
        &["contrast", "#f5f5f5", "--text", "#123456", "--background", "#EEEEEE", "--json"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["contrast"], "light");
    assert_eq!(result["icon_color"], "#EEEEEE");
    assert_eq!(result["text_color"], "#EDCBA9");
}

#[test]
fn test_contrast_human_readable() {
    let config_dir = temp_config_dir();
    let output = isolated_command(&["contrast", "#fff"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Primary:    #FFFFFF"));
    assert!(stdout.contains("Contrast:   light"));
}

#[test]
fn test_contrast_invalid_color_is_validation_error() {
    let config_dir = temp_config_dir();
    let output = isolated_command(&["contrast", "chartreuse"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid color format 'chartreuse'"));
}

#[test]
fn test_contrast_invalid_text_color_is_validation_error() {
    let config_dir = temp_config_dir();
    let output = isolated_command(&["contrast", "#000", "--text", "#12"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
