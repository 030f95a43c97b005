pub mod models;
pub mod utils;

// Data shared by the engine and the GUI. No behaviour lives here beyond
// small invariant checks and presentation helpers.
