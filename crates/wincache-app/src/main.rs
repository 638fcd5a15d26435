mod app_state;
mod cli;
mod native;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use wincache_config::WincacheConfig;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so its level can apply; report the outcome afterwards
    let loaded = match &args.config {
        Some(path) => wincache_config::load_config_from(path),
        None => wincache_config::load_config(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (WincacheConfig::default(), Some(e)),
    };

    // Initialize logging
    let log_directive = args
        .log_level
        .as_deref()
        .map(|level| format!("wincache={level}"))
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_directive)),
        )
        .init();

    tracing::info!("wincache v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    match config_error {
        Some(e) => tracing::warn!("Config load failed, using defaults: {e}"),
        None => tracing::info!(
            "Config loaded ({} windows, close behavior: {})",
            config.windows.len(),
            config.registry.close_behavior
        ),
    }

    let mut app = app_state::WincacheApp::new(config);
    if let Some(ref option) = args.close_behavior {
        app.override_close_behavior(option);
    }

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
