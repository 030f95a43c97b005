// Capability surface expected from the external charting library.
use shared::models::ChartPoint;
use uuid::Uuid;

use super::container::Container;
use super::options::{CandleStyle, ChartOptions};

pub trait ChartBackend {
    type Chart: ChartHandle;

    /// Builds a chart inside `container` at the given width and the fixed
    /// height carried by `options`.
    fn create_chart(
        &mut self,
        session_id: Uuid,
        container: &dyn Container,
        width: u32,
        options: &ChartOptions,
    ) -> Self::Chart;
}

pub trait ChartHandle {
    fn add_candlestick_series(&mut self, style: &CandleStyle);

    /// Replaces the whole dataset of the candlestick series.
    fn set_series_data(&mut self, points: &[ChartPoint]);

    /// Fits the visible time range to all data.
    fn fit_content(&mut self);

    fn apply_width(&mut self, width: u32);

    /// Releases everything tied to the container.
    fn remove(self);
}
