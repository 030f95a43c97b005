// Global application state for the GUI. Components reach it through a
// `Signal<AppState>` provided by the root component.
use std::sync::Arc;

use anyhow::Result;
use engine::config::settings::ViewerSettings;
use engine::random::source_from_seed;
use engine::{InstrumentDirectory, SelectionState};
use rand::rngs::StdRng;
use shared::models::{QuoteTone, Series, TimeFrame};
use tracing::info;

use crate::config::theme::{Theme, ThemePalette};

/// Loads the instrument directory once at startup: the configured catalog
/// file when set, the embedded catalog otherwise.
pub fn load_directory(settings: &ViewerSettings) -> Result<InstrumentDirectory> {
    let mut rng = source_from_seed(settings.seed);
    let directory = match &settings.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            InstrumentDirectory::load_file(path, &mut rng)?
        }
        None => InstrumentDirectory::load_default(&mut rng),
    };
    Ok(directory)
}

/// Events raised by the directory panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Select(String),
    Search(String),
}

/// One rendered row of the directory panel.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentRow {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change: String,
    pub tone: QuoteTone,
    pub selected: bool,
}

pub struct AppState {
    theme: Theme,
    selection: SelectionState<StdRng>,
    timeframe: TimeFrame,
}

impl AppState {
    pub fn new(directory: Arc<InstrumentDirectory>, settings: &ViewerSettings, theme: Theme) -> Self {
        // Offset the seed so series draws do not replay the directory's quote draws.
        let rng = source_from_seed(settings.seed.map(|seed| seed.wrapping_add(1)));
        Self {
            theme,
            selection: SelectionState::new(directory, settings.synthesizer(), rng),
            timeframe: TimeFrame::default(),
        }
    }

    pub fn apply(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Select(symbol) => {
                if self.selection.select_instrument(&symbol) {
                    info!(symbol = %symbol, "Instrument selected");
                }
            }
            PanelEvent::Search(term) => self.selection.update_search_term(&term),
        }
    }

    pub fn instrument_rows(&self) -> Vec<InstrumentRow> {
        let selected = self.selection.selected_symbol();
        self.selection
            .visible_instruments()
            .into_iter()
            .map(|i| InstrumentRow {
                symbol: i.symbol.clone(),
                name: i.name.clone(),
                price: i.price_label(),
                change: i.change_label(),
                tone: i.tone(),
                selected: i.symbol == selected,
            })
            .collect()
    }

    pub fn selected_symbol(&self) -> &str {
        self.selection.selected_symbol()
    }

    pub fn search_term(&self) -> &str {
        self.selection.search_term()
    }

    pub fn active_series(&self) -> Arc<Series> {
        self.selection.active_series()
    }

    pub fn timeframe(&self) -> TimeFrame {
        self.timeframe
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> ThemePalette {
        self.theme.palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::random::SequenceSource;
    use std::io::Write;

    fn state(seed: u64) -> AppState {
        let settings = ViewerSettings { seed: Some(seed), ..ViewerSettings::default() };
        let directory = Arc::new(load_directory(&settings).unwrap());
        AppState::new(directory, &settings, Theme::Dark)
    }

    #[test]
    fn test_rows_mark_selection_and_follow_search() {
        let mut s = state(1);
        let rows = s.instrument_rows();
        assert_eq!(rows.len(), 15);
        assert!(rows[0].selected);
        assert_eq!(rows.iter().filter(|r| r.selected).count(), 1);

        s.apply(PanelEvent::Search("bank".to_string()));
        let rows = s.instrument_rows();
        assert_eq!(rows.iter().map(|r| r.symbol.as_str()).collect::<Vec<_>>(), vec!["HDFCBANK"]);
        assert!(!rows[0].selected);
    }

    #[test]
    fn test_search_keeps_active_series() {
        let mut s = state(2);
        let before = s.active_series();
        s.apply(PanelEvent::Search("tcs".to_string()));
        s.apply(PanelEvent::Search(String::new()));
        assert!(Arc::ptr_eq(&before, &s.active_series()));
    }

    #[test]
    fn test_select_event_switches_series() {
        let mut s = state(3);
        let before = s.active_series();
        s.apply(PanelEvent::Select("INFY".to_string()));
        assert_eq!(s.selected_symbol(), "INFY");
        assert!(!Arc::ptr_eq(&before, &s.active_series()));
        assert!(s.instrument_rows().iter().any(|r| r.symbol == "INFY" && r.selected));
    }

    #[test]
    fn test_seeded_startup_is_reproducible() {
        let a = state(9);
        let b = state(9);
        assert_eq!(a.instrument_rows(), b.instrument_rows());
        assert_eq!(*a.active_series(), *b.active_series());
    }

    #[test]
    fn test_row_labels() {
        let directory = Arc::new(InstrumentDirectory::load(
            "SYMBOL,NAME\nAAA,Alpha Co\n",
            &mut SequenceSource::new([0.5, 0.75]),
        ));
        let s = AppState::new(directory, &ViewerSettings::default(), Theme::Light);
        let row = &s.instrument_rows()[0];
        assert_eq!(row.price, "1600.00");
        assert_eq!(row.change, "1.00%");
        assert_eq!(row.tone, QuoteTone::NonNegative);
        assert_eq!(s.timeframe(), TimeFrame::Day1);
        assert_eq!(s.theme(), Theme::Light);
    }

    #[test]
    fn test_load_directory_from_configured_file() {
        let mut file = tempfile_catalog();
        writeln!(file, "SYMBOL,NAME\nQQQ,Quux Holdings").unwrap();
        let settings = ViewerSettings {
            catalog_path: Some(file.path().to_path_buf()),
            ..ViewerSettings::default()
        };
        let directory = load_directory(&settings).unwrap();
        assert_eq!(directory.len(), 1);
        assert!(directory.get("QQQ").is_some());
    }

    #[test]
    fn test_load_directory_missing_file_fails() {
        let settings = ViewerSettings {
            catalog_path: Some("/no/such/catalog.csv".into()),
            ..ViewerSettings::default()
        };
        assert!(load_directory(&settings).is_err());
    }

    fn tempfile_catalog() -> tempfile::NamedTempFile {
        tempfile::NamedTempFile::new().unwrap()
    }
}
