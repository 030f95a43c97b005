// Viewer settings, loaded from the GUI's JSON config or defaulted.
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chart::options::ChartOptions;
use crate::data::synthesizer::{default_start_date, SeriesSynthesizer, DEFAULT_SERIES_LENGTH};
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub series_length: usize,
    pub start_date: NaiveDate,
    /// Seeds every random draw (directory quotes and series) when set.
    pub seed: Option<u64>,
    /// Replaces the embedded catalog when set.
    pub catalog_path: Option<PathBuf>,
    pub chart: ChartOptions,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        ViewerSettings {
            series_length: DEFAULT_SERIES_LENGTH,
            start_date: default_start_date(),
            seed: None,
            catalog_path: None,
            chart: ChartOptions::default(),
        }
    }
}

impl ViewerSettings {
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let settings: ViewerSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.series_length == 0 {
            return Err(EngineError::Config("series_length must be at least 1".to_string()));
        }
        if self.chart.height == 0 {
            return Err(EngineError::Config("chart.height must be positive".to_string()));
        }
        Ok(())
    }

    pub fn synthesizer(&self) -> SeriesSynthesizer {
        SeriesSynthesizer::new(self.series_length, self.start_date)
    }
}
