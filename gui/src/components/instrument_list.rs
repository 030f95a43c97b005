// Searchable instrument directory. Forwards search and selection to AppState.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::QuoteTone;

use crate::state::app_state::{AppState, InstrumentRow, PanelEvent};

#[component]
pub fn InstrumentList() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let rows = state.read().instrument_rows();
    let search = state.read().search_term().to_string();
    let palette = state.read().palette();
    let panel_style = format!(
        "width: 320px; border: 1px solid {}; border-radius: 8px; background: {}; padding: 16px;",
        palette.border, palette.surface
    );
    let search_style = format!(
        "width: 100%; box-sizing: border-box; margin-bottom: 16px; padding: 8px 12px; border: none; \
         border-radius: 8px; background: {}; color: inherit;",
        palette.row
    );

    rsx! {
        div {
            class: "instrument-list",
            style: panel_style,
            input {
                r#type: "text",
                placeholder: "Search stocks...",
                value: "{search}",
                style: search_style,
                oninput: move |evt: FormEvent| state.write().apply(PanelEvent::Search(evt.value())),
            }
            div {
                class: "instrument-rows",
                style: "max-height: calc(100vh - 200px); overflow-y: auto; display: flex; flex-direction: column; gap: 8px;",
                for row in rows {
                    InstrumentRowView {
                        key: "{row.symbol}",
                        row: row.clone(),
                        onselect: move |symbol: String| state.write().apply(PanelEvent::Select(symbol)),
                    }
                }
            }
        }
    }
}

#[component]
fn InstrumentRowView(row: InstrumentRow, onselect: EventHandler<String>) -> Element {
    let state = use_context::<Signal<AppState>>();
    let palette = state.read().palette();
    let background = if row.selected { &palette.primary } else { &palette.row };
    let change_color = match row.tone {
        QuoteTone::NonNegative => &palette.bullish,
        QuoteTone::Negative => &palette.bearish,
    };
    let row_style = format!(
        "display: flex; justify-content: space-between; width: 100%; padding: 12px; border: none; \
         border-radius: 8px; text-align: left; color: inherit; background: {};",
        background
    );
    let name_style = format!("font-size: 13px; color: {};", palette.muted);
    let change_style = format!("font-size: 13px; color: {};", change_color);
    let tone_class = row.tone.css_class();
    let InstrumentRow { symbol, name, price, change, .. } = row;
    let label = symbol.clone();

    rsx! {
        button {
            class: "instrument-row",
            style: row_style,
            onclick: move |_| onselect.call(symbol.clone()),
            div {
                div { style: "font-weight: 600;", "{label}" }
                div { style: name_style, "{name}" }
            }
            div {
                style: "text-align: right;",
                div { style: "font-weight: 600;", "₹{price}" }
                div { class: tone_class, style: change_style, "{change}" }
            }
        }
    }
}
