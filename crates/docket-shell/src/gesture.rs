//! Gesture blocker: an initialization script that suppresses zoom and
//! selection gestures inside the view.
//!
//! Every listener registers with `{ capture: true, passive: false }` so
//! `preventDefault` runs before the default handling. Disabled categories
//! are absent from the generated script entirely.

/// Which gesture categories the generated script suppresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureOptions {
    /// `gesturestart`/`gesturechange`/`gestureend`, multi-finger
    /// `touchstart`, and pinch-scaled `touchmove`.
    pub block_pinch: bool,
    /// `dblclick` plus the rapid repeated `touchend` heuristic.
    pub block_double_tap: bool,
    /// `wheel` events carrying a ctrl/cmd modifier.
    pub block_wheel_zoom: bool,
    /// Additionally cancel `selectstart` and `contextmenu`, keeping input
    /// fields editable.
    pub strict: bool,
    /// Double-tap detection window in milliseconds, clamped to 50..=2000.
    pub double_tap_threshold_ms: u64,
}

impl Default for GestureOptions {
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

/// Generate the blocker script for the given options.
pub fn generate_gesture_script(options: &GestureOptions) -> String {
    let mut js = String::from("(function() {\n");
    js.push_str("  var opts = { capture: true, passive: false };\n");

    if options.block_pinch {
        js.push_str(concat!(
            "  ['gesturestart', 'gesturechange', 'gestureend'].forEach(function(name) {\n",
            "    document.addEventListener(name, function(e) { e.preventDefault(); }, opts);\n",
            "  });\n",
            "  document.addEventListener('touchstart', function(e) {\n",
            "    if (e.touches.length > 1) { e.preventDefault(); }\n",
            "  }, opts);\n",
            "  document.addEventListener('touchmove', function(e) {\n",
            "    if (typeof e.scale === 'number' && e.scale !== 1) { e.preventDefault(); }\n",
            "  }, opts);\n",
        ));
    }

    if options.block_double_tap {
        let threshold = options.double_tap_threshold_ms.clamp(50, 2000);
        js.push_str(
            "  document.addEventListener('dblclick', function(e) { e.preventDefault(); }, opts);\n",
        );
        js.push_str(&format!(
            concat!(
                "  var lastTouchEnd = 0;\n",
                "  document.addEventListener('touchend', function(e) {{\n",
                "    var now = Date.now();\n",
                "    if (now - lastTouchEnd <= {threshold}) {{ e.preventDefault(); }}\n",
                "    lastTouchEnd = now;\n",
                "  }}, opts);\n",
            ),
            threshold = threshold
        ));
    }

    if options.block_wheel_zoom {
        js.push_str(concat!(
            "  document.addEventListener('wheel', function(e) {\n",
            "    if (e.ctrlKey || e.metaKey) { e.preventDefault(); }\n",
            "  }, opts);\n",
        ));
    }

    if options.strict {
        js.push_str(concat!(
            "  document.addEventListener('selectstart', function(e) {\n",
            "    var t = e.target;\n",
            "    if (t && (t.tagName === 'INPUT' || t.tagName === 'TEXTAREA')) { return; }\n",
            "    e.preventDefault();\n",
            "  }, opts);\n",
            "  document.addEventListener('contextmenu', function(e) {\n",
            "    var t = e.target;\n",
            "    e.preventDefault();\n",
            "    if (t && (t.tagName === 'INPUT' || t.tagName === 'TEXTAREA')) {\n",
            "      var pos = t.selectionStart;\n",
            "      if (typeof pos === 'number') {\n",
            "        try { t.setSelectionRange(pos, pos); } catch (err) {}\n",
            "      }\n",
            "    }\n",
            "  }, opts);\n",
        ));
    }

    js.push_str("})();");
    js
}
