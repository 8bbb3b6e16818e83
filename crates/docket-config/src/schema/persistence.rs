//! Field persistence configuration.

use serde::{Deserialize, Serialize};

/// Form field persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Restore and save `data-persist` fields across sessions.
    pub enabled: bool,
    /// File name of the store inside the platform data directory.
    pub store_file: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            store_file: "fields.json".into(),
        }
    }
}
