//! Window creation, service startup, and shell view setup.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use docket_config::schema::GestureConfig;
use docket_config::ReloadManager;
use docket_shell::theme::generate_css_root;
use docket_shell::{
    generate_gesture_script, host, ContentProvider, FieldStore, FragmentSource, GestureOptions,
    LocalAssets, RemoteHttp, ShellView, ShellViewOptions,
};

use super::core::DocketApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl DocketApp {
    /// Create the window, start background services, and attach the shell
    /// view. Returns `false` if initialization failed and the event loop
    /// should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        if !self.initialize_services() {
            return false;
        }

        if !self.initialize_view(&window) {
            return false;
        }

        self.window = Some(window);
        tracing::info!("Window created and shell view attached");
        true
    }

    /// Start the async runtime, the config reload watcher, and the field
    /// store.
    fn initialize_services(&mut self) -> bool {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start async runtime: {e}");
                return false;
            }
        };

        // The initial config was already loaded in main; keep only the
        // change stream.
        let (_, config_rx) = runtime.block_on(ReloadManager::start(self.config_path.clone()));
        self.config_rx = Some(config_rx);
        self.tokio_runtime = Some(runtime);

        if self.config.persistence.enabled {
            let store = FieldStore::load(store_path(&self.config.persistence.store_file));
            tracing::info!(
                path = %store.path().display(),
                fields = store.len(),
                "Field store loaded"
            );
            self.store = Some(store);
        }

        true
    }

    /// Build the content provider and fragment source, then create the
    /// shell view as a child of the window.
    fn initialize_view(&mut self, window: &Arc<Window>) -> bool {
        if !self.assets_dir.is_dir() {
            tracing::warn!(
                path = %self.assets_dir.display(),
                "Assets directory not found — the shell document will 404"
            );
        }

        let mut provider = ContentProvider::new(&self.assets_dir);
        let css = generate_css_root(&self.theme.css_variables());
        provider.add_override("theme.css", "text/css", css.into_bytes());
        let provider = Arc::new(provider);

        // Fragments come from the remote origin when one is configured,
        // from the bundled assets otherwise
        let source: Arc<dyn FragmentSource> = match self.config.routes.remote_base.as_deref() {
            Some(base) => {
                let connect = Duration::from_secs(self.config.fetch.connect_timeout_secs);
                let request = Duration::from_secs(self.config.fetch.request_timeout_secs);
                match RemoteHttp::new(base, connect, request) {
                    Ok(http) => {
                        tracing::info!(base, "Fetching fragments from remote origin");
                        Arc::new(http)
                    }
                    Err(e) => {
                        tracing::warn!(
                            base,
                            error = %e,
                            "Remote source unavailable, using bundled assets"
                        );
                        Arc::new(LocalAssets::new(provider.clone()))
                    }
                }
            }
            None => Arc::new(LocalAssets::new(provider.clone())),
        };
        self.source = Some(source);

        let options = ShellViewOptions {
            init_scripts: vec![
                generate_gesture_script(&gesture_options(&self.config.gestures)),
                host::HOST_BRIDGE_SCRIPT.to_string(),
            ],
            remote_base: self.config.routes.remote_base.clone(),
            ..ShellViewOptions::default()
        };

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let bounds = view_bounds(size.width, size.height);

        match ShellView::create(window.as_ref(), bounds, provider, &options) {
            Ok(view) => {
                self.view = Some(view);
                true
            }
            Err(e) => {
                tracing::error!("Failed to create shell view: {e}");
                false
            }
        }
    }

    /// Resize the shell view to cover the window client area.
    pub(super) fn sync_view_bounds(&mut self) {
        let window = match &self.window {
            Some(w) => w,
            None => return,
        };
        let view = match &self.view {
            Some(v) => v,
            None => return,
        };

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        if let Err(e) = view.set_bounds(view_bounds(size.width, size.height)) {
            tracing::warn!(error = %e, "Failed to update shell view bounds");
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Full-window bounds for the shell view in logical coordinates.
fn view_bounds(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

/// Map the gesture config section onto blocker script options.
pub(super) fn gesture_options(config: &GestureConfig) -> GestureOptions {
    GestureOptions {
        block_pinch: config.block_pinch,
        block_double_tap: config.block_double_tap,
        block_wheel_zoom: config.block_wheel_zoom,
        strict: config.strict,
        double_tap_threshold_ms: u64::from(config.double_tap_threshold_ms),
    }
}

/// Path of the field store inside the platform data directory.
fn store_path(store_file: &str) -> PathBuf {
    match docket_config::toml_loader::default_data_dir() {
        Ok(dir) => dir.join(store_file),
        Err(e) => {
            tracing::warn!("Could not resolve data directory: {e}");
            PathBuf::from(store_file)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
