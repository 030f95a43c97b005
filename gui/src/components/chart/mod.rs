pub mod candlestick;
pub mod js_backend;

pub use candlestick::ChartPanel;
