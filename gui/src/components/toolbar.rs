// Timeframe buttons for the chart header. Display only: nothing is wired to them.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::TimeFrame;

use crate::state::app_state::AppState;

#[component]
pub fn Toolbar() -> Element {
    let state = use_context::<Signal<AppState>>();
    let active = state.read().timeframe();
    let palette = state.read().palette();

    rsx! {
        div {
            class: "timeframes",
            style: "display: flex; gap: 8px;",
            for tf in TimeFrame::ALL {
                button {
                    key: "{tf:?}",
                    class: "timeframe",
                    style: button_style(tf == active, &palette.primary, &palette.row),
                    {tf.label()}
                }
            }
        }
    }
}

fn button_style(active: bool, primary: &str, idle: &str) -> String {
    let background = if active { primary } else { idle };
    format!("border: none; border-radius: 4px; padding: 4px 12px; font-size: 13px; color: inherit; background: {};", background)
}
