mod app;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use docket_common::PageKey;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Docket crashed ---");
        eprintln!("Docket v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("----------------------\n");
        default_hook(info);
    }));
}

fn main() {
    // Install panic hook for the crash banner
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Config must load before logging so the configured level can apply
    let load_result = match args.config {
        Some(ref path) => docket_config::toml_loader::load_from_path(std::path::Path::new(path)),
        None => docket_config::load_config(),
    };
    let (config, config_error) = match load_result {
        Ok(config) => (config, None),
        Err(e) => (docket_config::schema::DocketConfig::default(), Some(e)),
    };

    // Initialize logging
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "docket=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Docket v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    tracing::info!("Config loaded (default page: {})", config.routes.default_page);

    // The reload watcher needs the concrete config file path
    let config_path = match args.config {
        Some(ref path) => PathBuf::from(path),
        None => docket_config::toml_loader::default_config_path().unwrap_or_else(|e| {
            tracing::warn!("Could not resolve config path: {e}");
            PathBuf::from("config.toml")
        }),
    };

    let assets_dir = match args.assets {
        Some(ref path) => PathBuf::from(path),
        None => std::env::current_dir().unwrap_or_default().join("assets"),
    };

    let start_page = args.page.as_deref().and_then(|name| {
        let parsed = PageKey::parse(name);
        if parsed.is_none() {
            tracing::warn!(page = name, "Unknown --page value, using configured default");
        }
        parsed
    });

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::DocketApp::new(
        config,
        app::AppOptions {
            config_path,
            assets_dir,
            start_page,
        },
    );

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
