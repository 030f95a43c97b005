pub mod catalog;
pub mod synthesizer;
