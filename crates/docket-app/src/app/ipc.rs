//! IPC message dispatch from the shell view to Rust handlers.
//!
//! The view rejects non-allowlisted kinds before they are queued, so the
//! dispatch here only deals with the known message set.

use serde_json::Value;

use docket_common::{FieldKey, PageKey};
use docket_shell::{IpcMessage, ShellViewEvent, ThemeHints};

use super::core::DocketApp;

impl DocketApp {
    /// Process pending shell view events (IPC messages, page loads).
    pub(super) fn poll_view_events(&mut self) {
        let events: Vec<ShellViewEvent> = match self.view {
            Some(ref view) => view.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                ShellViewEvent::Ipc(msg) => {
                    self.handle_ipc_message(msg);
                }
                ShellViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "Shell document load event");
                }
                ShellViewEvent::NavigationRequested { url } => {
                    tracing::debug!(url = %url, "Navigation requested");
                }
            }
        }
    }

    /// Handle a single IPC message from the shell view.
    pub(super) fn handle_ipc_message(&mut self, msg: IpcMessage) {
        tracing::debug!(kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "shell_ready" => self.handle_shell_ready(&msg.payload),
            "navigate" => self.handle_navigate(&msg.payload),
            "hash_changed" => self.handle_hash_changed(&msg.payload),
            "field_changed" => self.handle_field_changed(&msg.payload),
            "theme_changed" => self.handle_theme_changed(&msg.payload),
            "host_ready" => self.handle_host_ready(&msg.payload),
            "ping" => self.handle_ping(),
            _ => {
                tracing::warn!(kind = %msg.kind, "Unhandled IPC kind");
            }
        }
    }

    /// Handle `shell_ready` — the shell document finished wiring and the
    /// boot page can load.
    fn handle_shell_ready(&mut self, payload: &Value) {
        let hash = payload.get("hash").and_then(|v| v.as_str()).unwrap_or("");
        let page = self.boot_target(hash);
        tracing::info!(page = %page, "Shell ready");
        self.navigate_to(page);
    }

    /// Handle `navigate` — a tab or `data-page` element was activated.
    fn handle_navigate(&mut self, payload: &Value) {
        let requested = match payload.get("page").and_then(|v| v.as_str()) {
            Some(name) => name,
            None => {
                tracing::warn!("navigate: missing 'page' field");
                return;
            }
        };

        let page = PageKey::parse(requested).unwrap_or_else(|| {
            tracing::warn!(page = requested, "Unknown page requested, using default");
            self.config.routes.default_page
        });
        self.navigate_to(page);
    }

    /// Handle `hash_changed` — the address fragment changed outside the
    /// tab bar (back button, manual edit).
    fn handle_hash_changed(&mut self, payload: &Value) {
        let hash = payload.get("hash").and_then(|v| v.as_str()).unwrap_or("");
        let name = hash.trim_start_matches('#');

        let page = match PageKey::parse(name) {
            Some(page) => page,
            None => {
                if !name.is_empty() {
                    tracing::debug!(hash = name, "Unknown address fragment, using default page");
                }
                self.config.routes.default_page
            }
        };

        if self.loader.current() != Some(page) {
            self.navigate_to(page);
        }
    }

    /// Handle `field_changed` — persist a `data-persist` field edit under
    /// the current page.
    fn handle_field_changed(&mut self, payload: &Value) {
        if !self.config.persistence.enabled {
            return;
        }

        let field = payload.get("field").and_then(|v| v.as_str());
        let value = payload.get("value").and_then(|v| v.as_str());
        let (Some(field), Some(value)) = (field, value) else {
            tracing::warn!("field_changed: missing 'field' or 'value'");
            return;
        };
        if field.is_empty() {
            tracing::debug!("field_changed: unnamed field ignored");
            return;
        }

        let Some(page) = self.loader.current() else {
            tracing::debug!(field, "field_changed before any page applied, ignored");
            return;
        };

        let key = FieldKey::new(page, field);
        if let Some(ref mut store) = self.store {
            if let Err(e) = store.set(&key, value) {
                tracing::warn!(key = %key, error = %e, "Failed to persist field");
            }
        }
    }

    /// Handle `theme_changed` — the host published new theme params.
    fn handle_theme_changed(&mut self, payload: &Value) {
        let hints = ThemeHints::from_payload(payload);
        if hints.is_empty() {
            tracing::debug!("theme_changed carried no usable hints");
            return;
        }
        self.apply_theme_hints(hints);
    }

    /// Handle `host_ready` — the host bridge connected and reported the
    /// initial theme params.
    fn handle_host_ready(&mut self, payload: &Value) {
        tracing::info!("Host bridge connected");

        let hints = ThemeHints::from_payload(payload);
        if hints.is_empty() {
            tracing::debug!("Host reported no theme params, pushing current colors");
            self.publish_theme();
            return;
        }
        self.apply_theme_hints(hints);
    }

    /// Respond with pong — used for IPC round-trip testing.
    fn handle_ping(&self) {
        if let Some(ref view) = self.view {
            let payload = serde_json::json!("pong");
            if let Err(e) = view.send_ipc("pong", &payload) {
                tracing::warn!(error = %e, "Failed to send pong");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
