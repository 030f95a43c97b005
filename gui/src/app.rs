#![allow(non_snake_case)]
use std::sync::Arc;

use dioxus::prelude::*;
use engine::chart::WindowSignal;
use engine::InstrumentDirectory;

use crate::components::{ChartPanel, InstrumentList, Toolbar};
use crate::config::theme::Theme;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

/// Root component. Expects `AppConfig` and the loaded `Arc<InstrumentDirectory>`
/// as root contexts.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let directory = use_context::<Arc<InstrumentDirectory>>();
    let state = use_context_provider(|| {
        Signal::new(AppState::new(directory, &config.viewer, Theme::from_name(&config.app.theme)))
    });
    use_context_provider(WindowSignal::new);
    use_context_provider(|| config.viewer.chart.clone());

    let palette = state.read().palette();
    let selected = state.read().selected_symbol().to_string();
    let title = config.app.title.clone();

    let page_style = format!("min-height: 100vh; margin: 0; font-family: sans-serif; background: {}; color: {};", palette.background, palette.foreground);
    let header_style = format!("border-bottom: 1px solid {}; background: {}; padding: 16px;", palette.border, palette.surface);
    let chart_card_style = format!(
        "flex: 1; border: 1px solid {}; border-radius: 8px; background: {}; padding: 16px;",
        palette.border, palette.surface
    );

    rsx! {
        div {
            class: "app",
            style: page_style,
            header {
                style: header_style,
                span { style: "font-size: 20px; font-weight: 700;", "{title}" }
            }
            main {
                style: "display: flex; gap: 16px; padding: 16px;",
                InstrumentList {}
                div {
                    style: chart_card_style,
                    div {
                        class: "chart-header",
                        style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                        h2 { style: "font-size: 18px; margin: 0;", "{selected}" }
                        Toolbar {}
                    }
                    ChartPanel {}
                }
            }
        }
    }
}
