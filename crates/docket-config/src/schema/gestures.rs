//! Gesture blocker configuration.

use serde::{Deserialize, Serialize};

/// Which zoom and selection gestures the shell suppresses inside the view.
///
/// Categories map one-to-one onto listener groups in the generated blocker
/// script; a disabled category is absent from the script entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// WebKit gesture events and multi-touch pinch.
    pub block_pinch: bool,
    /// Double-click and rapid double-tap zoom.
    pub block_double_tap: bool,
    /// Ctrl/Cmd + wheel zoom.
    pub block_wheel_zoom: bool,
    /// Also suppress text selection and the context menu.
    pub strict: bool,
    /// Two taps within this window count as a double-tap
    /// (valid range: 50-2000).
    pub double_tap_threshold_ms: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            block_pinch: true,
            block_double_tap: true,
            block_wheel_zoom: true,
            strict: false,
            double_tap_threshold_ms: 300,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
