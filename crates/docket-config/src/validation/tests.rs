//! Tests for config validation.

use super::validate;
use crate::schema::DocketConfig;

#[test]
fn default_config_is_valid() {
    let config = DocketConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn invalid_theme_color_is_rejected() {
    let mut config = DocketConfig::default();
    config.theme.background = "not-a-color".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("theme.background"));
}

#[test]
fn shade_out_of_range_is_rejected() {
    let mut config = DocketConfig::default();
    config.theme.surface_shade = 0.9;
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("theme.surface_shade"));
}

#[test]
fn empty_fragment_root_is_rejected() {
    let mut config = DocketConfig::default();
    config.routes.fragment_root = "".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("routes.fragment_root"));
}

#[test]
fn traversal_fragment_root_is_rejected() {
    let mut config = DocketConfig::default();
    config.routes.fragment_root = "../secrets".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("routes.fragment_root"));

    config.routes.fragment_root = "/etc".into();
    assert!(validate(&config).is_err());
}

#[test]
fn non_http_remote_base_is_rejected() {
    let mut config = DocketConfig::default();
    config.routes.remote_base = Some("ftp://example.com".into());
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("routes.remote_base"));
}

#[test]
fn https_remote_base_is_accepted() {
    let mut config = DocketConfig::default();
    config.routes.remote_base = Some("https://app.example.com/docket".into());
    assert!(validate(&config).is_ok());
}

#[test]
fn double_tap_threshold_out_of_range_is_rejected() {
    let mut config = DocketConfig::default();
    config.gestures.double_tap_threshold_ms = 10;
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("gestures.double_tap_threshold_ms"));

    config.gestures.double_tap_threshold_ms = 5000;
    assert!(validate(&config).is_err());
}

#[test]
fn store_file_with_path_separator_is_rejected() {
    let mut config = DocketConfig::default();
    config.persistence.store_file = "../fields.json".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("persistence.store_file"));
}

#[test]
fn window_size_out_of_range_is_rejected() {
    let mut config = DocketConfig::default();
    config.window.width = 50.0;
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("window.width"));
}

#[test]
fn fetch_timeout_out_of_range_is_rejected() {
    let mut config = DocketConfig::default();
    config.fetch.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("fetch.request_timeout_secs"));
}

#[test]
fn multiple_errors_are_collected() {
    let mut config = DocketConfig::default();
    config.theme.background = "bogus".into();
    config.routes.fragment_root = "".into();
    config.gestures.double_tap_threshold_ms = 1;

    let err = validate(&config).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("theme.background"));
    assert!(msg.contains("routes.fragment_root"));
    assert!(msg.contains("gestures.double_tap_threshold_ms"));
    assert!(msg.contains("; "));
}
