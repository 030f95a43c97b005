// Chart surface: keeps one charting-library session in step with a container
// and the active series. The library itself sits behind `ChartBackend`.
pub mod backend;
pub mod container;
pub mod options;
pub mod surface;
pub mod window;

pub use backend::{ChartBackend, ChartHandle};
pub use container::{Container, MeasuredContainer};
pub use options::ChartOptions;
pub use surface::{ChartSurface, MountOutcome, SurfaceStatus};
pub use window::{ListenerId, WindowSignal};
