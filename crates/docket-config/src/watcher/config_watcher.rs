//! Core config file watcher implementation.
//!
//! Contains the [`ConfigWatcher`] struct that monitors a config file
//! for changes using the `notify` crate, with debounced notifications.

use docket_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::PathBuf;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Watches a config file for changes and sends notifications.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path })
    }

    /// Watch the config file for changes, sending a signal on the broadcast channel.
    ///
    /// This function runs indefinitely. Changes are debounced with a 500ms window
    /// to avoid rapid reloads when editors do atomic save (write + rename).
    ///
    /// Sends `()` on the broadcast channel when a change is detected.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        // Watch the parent directory so atomic saves (write + rename) are seen
        let watch_path = self
            .path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| self.path.clone());

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        // Bridge the sync notify callback into async
        let (notify_tx, mut notify_rx) = tokio::sync::mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if is_relevant(&event, &file_name) {
                        debug!("config file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => {
                    error!("file watcher error: {e}");
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_path, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_path.display()))
            })?;

        // The watcher must stay alive for the lifetime of this loop
        let _watcher = watcher;

        // Debounce loop: wait for change signals, coalesce within 500ms
        loop {
            if notify_rx.recv().await.is_none() {
                // Channel closed, watcher dropped
                break;
            }

            let debounce = tokio::time::sleep(std::time::Duration::from_millis(500));
            tokio::pin!(debounce);

            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                        // Further signals restart the drain, not the timer
                    }
                }
            }

            info!("config file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        Ok(())
    }
}

/// True when a filesystem event is a modify/create touching our file.
fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false))
}
