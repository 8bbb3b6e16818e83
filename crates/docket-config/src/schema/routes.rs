//! Route table configuration.

use docket_common::PageKey;
use serde::{Deserialize, Serialize};

/// Where page fragments live and which page opens first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Directory (relative to the asset root or remote base) holding the
    /// page fragments.
    pub fragment_root: String,
    /// Page shown when the address fragment is empty or unknown.
    pub default_page: PageKey,
    /// Optional HTTP(S) base for fetching fragments from a server instead
    /// of the bundled assets.
    pub remote_base: Option<String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            fragment_root: "pages".into(),
            default_page: PageKey::Cases,
            remote_base: None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
