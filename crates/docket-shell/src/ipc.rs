//! IPC protocol between the shell and the hosted document.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: page code calls `window.docket.ipc.send(kind, payload)`,
//!   which posts JSON through `window.ipc.postMessage` into the view's
//!   `ipc_handler`. Kinds are allowlisted; anything else is dropped.
//! - **Rust -> JS**: the controller evaluates a dispatch call on
//!   `window.docket.ipc` to reach handlers registered with `on(kind, cb)`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message kinds the shell accepts from JavaScript.
pub const ALLOWED_IPC_KINDS: &[&str] = &[
    "shell_ready",
    "navigate",
    "hash_changed",
    "field_changed",
    "theme_changed",
    "host_ready",
    "ping",
];

/// Check whether a message kind is accepted by the shell.
pub fn is_allowed_kind(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// A message from JavaScript to the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON; `null` when omitted).
    #[serde(default)]
    pub payload: Value,
}

impl IpcMessage {
    /// Parse a message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side, injected
/// as an initialization script so it exists before any page code runs.
/// Also seeds the page hook registry (`window.docket.pages`).
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    // Docket IPC bridge
    window.docket = window.docket || {};
    window.docket.pages = window.docket.pages || {};
    window.docket.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        // Callbacks registered by page code to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Boot wiring installed alongside the bridge.
///
/// Forwards tab-bar clicks as `navigate`, address fragment changes as
/// `hash_changed`, and edits to `[data-persist]` fields as `field_changed`;
/// announces `shell_ready` (with the current hash) once the DOM is parsed.
pub const SHELL_BOOT_SCRIPT: &str = r#"
(function() {
    function fieldEvent(e) {
        var t = e.target;
        if (!t || !t.hasAttribute || !t.hasAttribute('data-persist')) { return; }
        var field = t.getAttribute('data-persist') || t.id;
        if (!field) { return; }
        window.docket.ipc.send('field_changed', {
            field: field,
            value: t.value === undefined ? '' : String(t.value)
        });
    }
    function wire() {
        document.addEventListener('click', function(e) {
            var tab = e.target && e.target.closest ? e.target.closest('[data-page]') : null;
            if (!tab) { return; }
            e.preventDefault();
            window.docket.ipc.send('navigate', { page: tab.getAttribute('data-page') });
        }, { capture: true });
        window.addEventListener('hashchange', function() {
            window.docket.ipc.send('hash_changed', { hash: window.location.hash });
        });
        document.addEventListener('input', fieldEvent, { capture: true });
        document.addEventListener('change', fieldEvent, { capture: true });
        window.docket.ipc.send('shell_ready', { hash: window.location.hash });
    }
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', wire);
    } else {
        wire();
    }
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.docket.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
