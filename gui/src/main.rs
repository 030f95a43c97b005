// GUI main entry point using Dioxus Desktop
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_desktop::tao::dpi::LogicalSize;
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};
use gui::app::App;
use gui::config::AppConfig;
use gui::state::app_state::load_directory;

const CHART_LIBRARY: &str =
    r#"<script src="https://unpkg.com/lightweight-charts@4.1.3/dist/lightweight-charts.standalone.production.js"></script>"#;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Market Viewer (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded default configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load default configuration: {}. Exiting.", e);
            std::process::exit(1);
        }
    };

    // The directory is built exactly once, here, and shared read-only afterwards.
    let directory = match load_directory(&app_config.viewer) {
        Ok(directory) => Arc::new(directory),
        Err(e) => {
            tracing::error!("Failed to load instrument catalog: {}. Exiting.", e);
            std::process::exit(1);
        }
    };

    let desktop_config = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.app.title.clone())
                .with_inner_size(LogicalSize::new(1280.0, 800.0)),
        )
        .with_custom_head(CHART_LIBRARY.to_string());

    let vdom = VirtualDom::new(App)
        .with_root_context(app_config)
        .with_root_context(directory);

    dioxus_desktop::launch::launch_virtual_dom(vdom, desktop_config);
}
