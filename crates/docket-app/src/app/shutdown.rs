//! Graceful shutdown: detach the view, stop watchers, drain the runtime.

use std::time::Duration;

use docket_common::ShellEvent;

use super::core::DocketApp;

impl DocketApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Drop the shell view (no further scripts run)
    /// 2. Drop the config reload receiver
    /// 3. Shut down the tokio runtime (cancels fetch and watcher tasks)
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");
        self.event_bus.publish(ShellEvent::Shutdown);

        self.view = None;
        self.config_rx = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
