//! Full configuration validation.
//!
//! Validates color formats, numeric ranges, and route paths. Errors are
//! collected into a single `ConfigError` so a bad config reports every
//! problem at once.

mod helpers;

#[cfg(test)]
mod tests;

use crate::colors;
use crate::schema::DocketConfig;
use docket_common::ConfigError;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DocketConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_theme(&mut errors, config);
    validate_routes(&mut errors, config);
    validate_gestures(&mut errors, config);
    validate_persistence(&mut errors, config);
    validate_window(&mut errors, config);
    validate_fetch(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Validate theme palette colors and shade factors.
fn validate_theme(errors: &mut Vec<String>, config: &DocketConfig) {
    let palette = [
        ("theme.background", &config.theme.background),
        ("theme.foreground", &config.theme.foreground),
        ("theme.muted", &config.theme.muted),
        ("theme.accent", &config.theme.accent),
    ];
    for (name, value) in palette {
        if !colors::validate_color(value) {
            errors.push(format!("{name} = '{value}' is not a valid color"));
        }
    }

    validate_range_f64(errors, "theme.surface_shade", config.theme.surface_shade, 0.0, 0.5);
    validate_range_f64(errors, "theme.divider_shade", config.theme.divider_shade, 0.0, 0.5);
    validate_range_f64(errors, "theme.control_shade", config.theme.control_shade, 0.0, 0.5);
}

/// Validate route settings.
fn validate_routes(errors: &mut Vec<String>, config: &DocketConfig) {
    let root = config.routes.fragment_root.trim();
    if root.is_empty() {
        errors.push("routes.fragment_root must not be empty".into());
    } else if root.contains("..") || root.starts_with('/') || root.contains('\\') {
        errors.push(format!(
            "routes.fragment_root = '{root}' must be a plain relative path"
        ));
    }

    if let Some(base) = &config.routes.remote_base {
        if !base.starts_with("http://") && !base.starts_with("https://") {
            errors.push(format!(
                "routes.remote_base = '{base}' must start with http:// or https://"
            ));
        }
    }
}

/// Validate gesture settings.
fn validate_gestures(errors: &mut Vec<String>, config: &DocketConfig) {
    validate_range(
        errors,
        "gestures.double_tap_threshold_ms",
        config.gestures.double_tap_threshold_ms as u64,
        50,
        2000,
    );
}

/// Validate persistence settings.
fn validate_persistence(errors: &mut Vec<String>, config: &DocketConfig) {
    let file = config.persistence.store_file.trim();
    if file.is_empty() {
        errors.push("persistence.store_file must not be empty".into());
    } else if file.contains('/') || file.contains('\\') {
        errors.push(format!(
            "persistence.store_file = '{file}' must be a bare file name"
        ));
    }
}

/// Validate window settings.
fn validate_window(errors: &mut Vec<String>, config: &DocketConfig) {
    validate_range_f64(errors, "window.width", config.window.width, 200.0, 4000.0);
    validate_range_f64(errors, "window.height", config.window.height, 200.0, 4000.0);
}

/// Validate fetch timeouts.
fn validate_fetch(errors: &mut Vec<String>, config: &DocketConfig) {
    validate_range(
        errors,
        "fetch.connect_timeout_secs",
        config.fetch.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "fetch.request_timeout_secs",
        config.fetch.request_timeout_secs,
        1,
        120,
    );
}
