// Engine library root: directory loading, series synthesis, selection state
// and the chart surface lifecycle. Nothing here touches a UI toolkit.

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod random;
pub mod selection;

pub use data::catalog::InstrumentDirectory;
pub use data::synthesizer::SeriesSynthesizer;
pub use error::{EngineError, EngineResult};
pub use selection::SelectionState;
