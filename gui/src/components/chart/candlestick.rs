// Candlestick chart panel. Owns one ChartSurface for the lifetime of its
// container element and keeps it fed with the active series.
#![allow(non_snake_case)]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use engine::chart::{ChartOptions, ChartSurface, Container, MeasuredContainer, MountOutcome, WindowSignal};
use shared::models::Series;
use tracing::debug;

use super::js_backend::JsChartBackend;
use crate::state::app_state::AppState;

pub const CHART_CONTAINER_ID: &str = "price-chart";

// Page-level bridge: reports the container width now, again after the next
// layout pass, then on every window resize. The handler is kept on `window`
// so it can be detached on unmount.
const RESIZE_BRIDGE_JS: &str = r#"
const measure = () => {
    const el = document.getElementById("price-chart");
    return el ? el.clientWidth : 0;
};
window.__priceChartResize = () => dioxus.send(measure());
window.addEventListener("resize", window.__priceChartResize);
dioxus.send(measure());
requestAnimationFrame(() => requestAnimationFrame(window.__priceChartResize));
"#;

const DETACH_BRIDGE_JS: &str = r#"
if (window.__priceChartResize) {
    window.removeEventListener("resize", window.__priceChartResize);
    delete window.__priceChartResize;
}
"#;

type SharedSurface = Rc<RefCell<ChartSurface<JsChartBackend>>>;

#[component]
pub fn ChartPanel() -> Element {
    let state = use_context::<Signal<AppState>>();
    let window = use_context::<WindowSignal>();
    let options = use_context::<ChartOptions>();
    let height = options.height;

    let container = use_hook(|| Rc::new(MeasuredContainer::new(CHART_CONTAINER_ID)));
    let surface: SharedSurface = use_hook({
        let window = window.clone();
        move || {
            let backend = JsChartBackend::new(|script: String| {
                eval(&script);
            });
            Rc::new(RefCell::new(ChartSurface::new(backend, options, window)))
        }
    });

    // Width reports drive both the deferred mount and resize handling.
    use_future({
        let surface = surface.clone();
        let container = container.clone();
        move || {
            let surface = surface.clone();
            let container = container.clone();
            let window = window.clone();
            async move {
                let mut bridge = eval(RESIZE_BRIDGE_JS);
                while let Ok(value) = bridge.recv().await {
                    let width = value.as_f64().map_or(0, |w| w.max(0.0) as u32);
                    on_width_report(&surface, &container, &window, width, || state.peek().active_series());
                }
            }
        }
    });

    // Re-runs on every state change; `bind` ignores changes that keep the
    // same series, so typing in the search box never touches the chart.
    use_effect({
        let surface = surface.clone();
        move || {
            let series = state.read().active_series();
            surface.borrow_mut().bind(series);
        }
    });

    use_drop({
        let surface = surface.clone();
        move || {
            surface.borrow_mut().dispose();
            eval(DETACH_BRIDGE_JS);
        }
    });

    rsx! {
        div {
            id: CHART_CONTAINER_ID,
            class: "chart-container",
            style: "width: 100%; height: {height}px; min-height: {height}px; overflow: hidden; border-radius: 8px;",
        }
    }
}

// A zero width leaves the mount deferred; the next report retries it.
fn on_width_report(
    surface: &SharedSurface,
    container: &Rc<MeasuredContainer>,
    window: &WindowSignal,
    width: u32,
    active_series: impl FnOnce() -> Arc<Series>,
) {
    container.attach(width);
    mount_if_ready(surface, container, active_series);
    window.emit_resize();
}

fn mount_if_ready(
    surface: &SharedSurface,
    container: &Rc<MeasuredContainer>,
    active_series: impl FnOnce() -> Arc<Series>,
) {
    let mut surface = surface.borrow_mut();
    if surface.is_mounted() {
        return;
    }
    let target: Rc<dyn Container> = container.clone();
    match surface.mount(target) {
        MountOutcome::Mounted(_) => {
            surface.bind(active_series());
        }
        outcome => debug!(?outcome, "Chart mount not completed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::chart::SurfaceStatus;
    use engine::random::source_from_seed;
    use engine::SeriesSynthesizer;

    fn surface_with_log(window: &WindowSignal) -> (SharedSurface, Rc<RefCell<Vec<String>>>) {
        let scripts = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&scripts);
        let backend = JsChartBackend::new(move |s: String| sink.borrow_mut().push(s));
        let surface = ChartSurface::new(backend, ChartOptions::default(), window.clone());
        (Rc::new(RefCell::new(surface)), scripts)
    }

    #[test]
    fn test_bridge_remeasures_after_layout() {
        assert!(RESIZE_BRIDGE_JS.contains("requestAnimationFrame"));
        assert!(RESIZE_BRIDGE_JS.contains(&format!("getElementById(\"{}\")", CHART_CONTAINER_ID)));
    }

    #[test]
    fn test_zero_width_report_defers_until_layout_settles() {
        let window = WindowSignal::new();
        let (surface, scripts) = surface_with_log(&window);
        let container = Rc::new(MeasuredContainer::new(CHART_CONTAINER_ID));
        let series = Arc::new(SeriesSynthesizer::default().synthesize(250.0, &mut source_from_seed(Some(5))).unwrap());

        on_width_report(&surface, &container, &window, 0, || panic!("no data before mount"));
        assert_eq!(surface.borrow().status(), SurfaceStatus::Unmounted);
        assert!(scripts.borrow().is_empty());

        on_width_report(&surface, &container, &window, 960, || Arc::clone(&series));
        assert_eq!(surface.borrow().status(), SurfaceStatus::Rendering);
        assert_eq!(surface.borrow().width(), Some(960));
        assert!(Arc::ptr_eq(&surface.borrow().bound_series().unwrap(), &series));

        // Later reports only resize the existing session.
        on_width_report(&surface, &container, &window, 1100, || panic!("already mounted"));
        assert_eq!(surface.borrow().width(), Some(1100));
        assert!(scripts.borrow().last().unwrap().contains(r#"applyOptions({"width":1100})"#));
        assert_eq!(scripts.borrow().iter().filter(|s| s.contains("createChart")).count(), 1);
    }
}
