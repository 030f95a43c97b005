// Chart backend driving the Lightweight Charts JavaScript library. Every
// operation becomes a small script handed to a sink (the webview's `eval`
// in the app, a recorder in tests). Charts live in `window.__marketCharts`
// keyed by session id.
use std::rc::Rc;

use engine::chart::options::{CandleStyle, ChartOptions, CrosshairLine};
use engine::chart::{ChartBackend, ChartHandle, Container};
use serde_json::{json, Value};
use shared::models::ChartPoint;
use uuid::Uuid;

pub type ScriptSink = Rc<dyn Fn(String)>;

const REGISTRY: &str = "window.__marketCharts";

#[derive(Clone)]
pub struct JsChartBackend {
    sink: ScriptSink,
}

impl JsChartBackend {
    pub fn new(sink: impl Fn(String) + 'static) -> Self {
        Self { sink: Rc::new(sink) }
    }
}

pub struct JsChart {
    key: String,
    sink: ScriptSink,
}

impl JsChart {
    fn run(&self, body: &str) {
        (self.sink)(with_entry(&self.key, body));
    }
}

fn js_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

// Runs `body` with `e` bound to the registry entry; a missing entry is a no-op.
fn with_entry(key: &str, body: &str) -> String {
    format!(
        "(() => {{ const e = ({REGISTRY} || {{}})[{key}]; if (!e) return; {body} }})();",
        key = js_string(key),
    )
}

fn crosshair_line_json(line: &CrosshairLine) -> Value {
    json!({
        "width": line.width,
        "color": line.color,
        "style": line.style.code(),
    })
}

pub fn chart_options_json(width: u32, options: &ChartOptions) -> Value {
    json!({
        "layout": {
            "background": { "type": "solid", "color": options.layout.background },
            "textColor": options.layout.text_color,
        },
        "grid": {
            "vertLines": { "color": options.grid.vert_lines_color },
            "horzLines": { "color": options.grid.horz_lines_color },
        },
        "width": width,
        "height": options.height,
        "crosshair": {
            "mode": options.crosshair.mode.code(),
            "vertLine": crosshair_line_json(&options.crosshair.vert_line),
            "horzLine": crosshair_line_json(&options.crosshair.horz_line),
        },
    })
}

pub fn candle_style_json(style: &CandleStyle) -> Value {
    json!({
        "upColor": style.up_color,
        "downColor": style.down_color,
        "borderVisible": style.border_visible,
        "wickUpColor": style.wick_up_color,
        "wickDownColor": style.wick_down_color,
    })
}

impl ChartBackend for JsChartBackend {
    type Chart = JsChart;

    fn create_chart(&mut self, session_id: Uuid, container: &dyn Container, width: u32, options: &ChartOptions) -> JsChart {
        let key = session_id.to_string();
        let script = format!(
            "(() => {{ const el = document.getElementById({el}); if (!el) return; \
             {REGISTRY} = {REGISTRY} || {{}}; \
             {REGISTRY}[{key}] = {{ chart: LightweightCharts.createChart(el, {opts}), series: null }}; }})();",
            el = js_string(container.id()),
            key = js_string(&key),
            opts = chart_options_json(width, options),
        );
        (self.sink)(script);
        JsChart { key, sink: Rc::clone(&self.sink) }
    }
}

impl ChartHandle for JsChart {
    fn add_candlestick_series(&mut self, style: &CandleStyle) {
        self.run(&format!("e.series = e.chart.addCandlestickSeries({});", candle_style_json(style)));
    }

    fn set_series_data(&mut self, points: &[ChartPoint]) {
        let data = serde_json::to_string(points).unwrap_or_else(|_| "[]".to_string());
        self.run(&format!("if (e.series) e.series.setData({});", data));
    }

    fn fit_content(&mut self) {
        self.run("e.chart.timeScale().fitContent();");
    }

    fn apply_width(&mut self, width: u32) {
        self.run(&format!("e.chart.applyOptions({});", json!({ "width": width })));
    }

    fn remove(self) {
        self.run(&format!("e.chart.remove(); delete {REGISTRY}[{}];", js_string(&self.key)));
    }
}
