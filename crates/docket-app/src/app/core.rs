//! DocketApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use docket_common::{EventBus, PageKey};
use docket_config::schema::DocketConfig;
use docket_shell::{
    FieldStore, FragmentSource, PageLoader, ResolvedTheme, RouteTable, ShellView, ThemeFallbacks,
    ThemeHints,
};

use super::theme::fallbacks_from_config;
use super::types::FetchDone;

/// Startup parameters resolved in `main` from CLI arguments.
pub struct AppOptions {
    /// Config file the reload watcher monitors.
    pub config_path: PathBuf,
    /// Directory holding the shell document and page fragments.
    pub assets_dir: PathBuf,
    /// `--page` override for the boot page.
    pub start_page: Option<PageKey>,
}

/// Top-level application state.
pub struct DocketApp {
    pub(super) config: DocketConfig,
    pub(super) config_path: PathBuf,
    pub(super) assets_dir: PathBuf,
    pub(super) start_page: Option<PageKey>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) view: Option<ShellView>,

    // Page navigation
    pub(super) loader: PageLoader,
    pub(super) source: Option<Arc<dyn FragmentSource>>,
    pub(super) fetch_tx: std::sync::mpsc::Sender<FetchDone>,
    pub(super) fetch_rx: std::sync::mpsc::Receiver<FetchDone>,

    // Theme
    pub(super) fallbacks: ThemeFallbacks,
    pub(super) theme: ResolvedTheme,
    pub(super) last_hints: ThemeHints,

    // Field persistence
    pub(super) store: Option<FieldStore>,

    // Config reload
    pub(super) config_rx: Option<tokio::sync::watch::Receiver<DocketConfig>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) event_bus: EventBus,
    pub(super) last_poll: Instant,
}

impl DocketApp {
    pub fn new(config: DocketConfig, options: AppOptions) -> Self {
        let fallbacks = fallbacks_from_config(&config.theme);
        let theme = ResolvedTheme::from_fallbacks(&fallbacks);
        let loader = PageLoader::new(RouteTable::new(&config.routes.fragment_root));
        let (fetch_tx, fetch_rx) = std::sync::mpsc::channel();

        Self {
            config,
            config_path: options.config_path,
            assets_dir: options.assets_dir,
            start_page: options.start_page,
            window: None,
            view: None,
            loader,
            source: None,
            fetch_tx,
            fetch_rx,
            fallbacks,
            theme,
            last_hints: ThemeHints::default(),
            store: None,
            config_rx: None,
            tokio_runtime: None,
            event_bus: EventBus::new(256),
            last_poll: Instant::now(),
        }
    }
}
