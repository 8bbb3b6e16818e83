//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_docket_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, docket_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[theme]
background = "#0f0f0f"

[window]
title = "Docket Dev"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.background, "#0f0f0f");
    assert_eq!(config.window.title, "Docket Dev");
    // Defaults preserved
    assert_eq!(config.theme.foreground, "#f5f5f5");
    assert_eq!(config.routes.fragment_root, "pages");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, docket_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[gestures]
double_tap_threshold_ms = 9999
"#,
    )
    .unwrap();

    // Out-of-range values are logged, not rejected
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gestures.double_tap_threshold_ms, 9999);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docket").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.background, "#18222d");
    assert_eq!(config.routes.fragment_root, "pages");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::DocketConfig;

    let content = default_config_toml();
    let config: DocketConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.window.title, "Docket");
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("docket"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn default_data_dir_is_created() {
    if let Ok(dir) = default_data_dir() {
        assert!(dir.exists());
        assert!(dir.to_string_lossy().contains("docket"));
    }
}
