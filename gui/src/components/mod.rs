// GUI components module
pub mod chart;
pub mod instrument_list;
pub mod toolbar;

pub use chart::ChartPanel;
pub use instrument_list::InstrumentList;
pub use toolbar::Toolbar;
