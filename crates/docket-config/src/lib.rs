//! Docket configuration system.
//!
//! Provides TOML-based configuration with live reload and full validation.
//! All config sections use `serde(default)` so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = docket_config::load_config().expect("failed to load config");
//! println!("{}", config.window.title);
//! ```

pub mod colors;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

// Re-export core types for convenience
pub use reload::ReloadManager;
pub use schema::{DocketConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use docket_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<DocketConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
