//! Live config reload: pick up changes published by the watcher task.

use docket_common::ShellEvent;
use docket_config::schema::DocketConfig;

use super::core::DocketApp;
use super::theme::fallbacks_from_config;

impl DocketApp {
    /// Apply a reloaded config when the watcher has published one.
    pub(super) fn poll_config_reload(&mut self) {
        let changed = match self.config_rx {
            Some(ref mut rx) => {
                if rx.has_changed().unwrap_or(false) {
                    Some(rx.borrow_and_update().clone())
                } else {
                    None
                }
            }
            None => None,
        };

        if let Some(config) = changed {
            self.apply_config(config);
        }
    }

    /// Swap in a reloaded config.
    ///
    /// Theme and window title apply immediately. The gesture blocker,
    /// route table, and fetch source are baked into the running view and
    /// take effect after a restart.
    pub(super) fn apply_config(&mut self, config: DocketConfig) {
        tracing::info!("Applying reloaded config");

        if config.window.title != self.config.window.title {
            if let Some(ref window) = self.window {
                window.set_title(&config.window.title);
            }
        }

        self.fallbacks = fallbacks_from_config(&config.theme);
        self.config = config;
        self.refresh_theme();
        self.event_bus.publish(ShellEvent::ConfigReloaded);

        tracing::info!("Reload applied; gesture and route changes take effect after restart");
    }
}

// =============================================================================
// TESTS
// =============================================================================
