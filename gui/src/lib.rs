// Dioxus front-end for the market viewer. The desktop launcher lives in
// main.rs behind the `desktop` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
