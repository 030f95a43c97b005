// Selected instrument plus search term. The active series is derived from the
// selected symbol alone and is only rebuilt when that symbol changes.
use std::sync::Arc;

use shared::models::{Instrument, Series};
use tracing::{debug, error};

use crate::data::catalog::InstrumentDirectory;
use crate::data::synthesizer::SeriesSynthesizer;
use crate::random::UniformSource;

pub struct SelectionState<R: UniformSource> {
    directory: Arc<InstrumentDirectory>,
    synthesizer: SeriesSynthesizer,
    rng: R,
    selected_symbol: String,
    search_term: String,
    active_series: Arc<Series>,
}

impl<R: UniformSource> SelectionState<R> {
    /// Starts on the first instrument of the directory, or on the empty symbol
    /// when the directory has none.
    pub fn new(directory: Arc<InstrumentDirectory>, synthesizer: SeriesSynthesizer, rng: R) -> Self {
        let selected_symbol = directory.first().map(|i| i.symbol.clone()).unwrap_or_default();
        let mut state = Self {
            directory,
            synthesizer,
            rng,
            selected_symbol,
            search_term: String::new(),
            active_series: Arc::new(Series::default()),
        };
        state.resynthesize();
        state
    }

    /// Returns true when the selection changed and a new series was built.
    /// Unknown symbols are accepted and chart against the default baseline.
    pub fn select_instrument(&mut self, symbol: &str) -> bool {
        if self.selected_symbol == symbol {
            return false;
        }
        self.selected_symbol = symbol.to_string();
        self.resynthesize();
        true
    }

    pub fn update_search_term(&mut self, text: &str) {
        self.search_term = text.to_string();
    }

    fn resynthesize(&mut self) {
        let baseline = self.directory.baseline_for(&self.selected_symbol);
        match self.synthesizer.synthesize(baseline, &mut self.rng) {
            Ok(series) => {
                debug!(symbol = %self.selected_symbol, baseline, "Active series rebuilt");
                self.active_series = Arc::new(series);
            }
            Err(e) => {
                // Only reachable with a zero-length synthesizer; chart an empty series.
                error!(symbol = %self.selected_symbol, "Series synthesis failed: {}", e);
                self.active_series = Arc::new(Series::default());
            }
        }
    }

    pub fn selected_symbol(&self) -> &str {
        &self.selected_symbol
    }

    pub fn selected_instrument(&self) -> Option<&Instrument> {
        self.directory.get(&self.selected_symbol)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_series(&self) -> Arc<Series> {
        Arc::clone(&self.active_series)
    }

    pub fn directory(&self) -> &Arc<InstrumentDirectory> {
        &self.directory
    }

    pub fn visible_instruments(&self) -> Vec<&Instrument> {
        self.directory.filter(&self.search_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::DEFAULT_BASELINE_PRICE;
    use crate::random::{source_from_seed, SequenceSource};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;

    const CATALOG: &str = "SYMBOL,NAME\nAAA,Alpha Co\nBBB,Beta Co\n";

    fn state() -> SelectionState<StdRng> {
        let directory = Arc::new(InstrumentDirectory::load(CATALOG, &mut source_from_seed(Some(1))));
        SelectionState::new(directory, SeriesSynthesizer::default(), source_from_seed(Some(2)))
    }

    // Draws of 0.5 for open and close jitter leave open == close == basis, so the
    // first open of every series equals its baseline.
    fn flat_state(catalog: &str) -> SelectionState<SequenceSource> {
        let directory = Arc::new(InstrumentDirectory::load(catalog, &mut SequenceSource::new([0.5, 0.5, 0.0, 0.5])));
        let synth = SeriesSynthesizer::new(3, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        SelectionState::new(directory, synth, SequenceSource::default())
    }

    #[test]
    fn test_initial_selection_is_first_instrument() {
        let s = state();
        assert_eq!(s.selected_symbol(), "AAA");
        assert_eq!(s.search_term(), "");
        assert_eq!(s.active_series().len(), 100);
    }

    #[test]
    fn test_search_does_not_resynthesize() {
        let mut s = state();
        let before = s.active_series();
        s.update_search_term("bet");
        s.update_search_term("beta");
        assert!(Arc::ptr_eq(&before, &s.active_series()));
        assert_eq!(s.selected_symbol(), "AAA");
        let visible: Vec<_> = s.visible_instruments().iter().map(|i| i.symbol.clone()).collect();
        assert_eq!(visible, vec!["BBB"]);
    }

    #[test]
    fn test_selecting_new_symbol_resynthesizes() {
        let mut s = state();
        let before = s.active_series();
        assert!(s.select_instrument("BBB"));
        assert!(!Arc::ptr_eq(&before, &s.active_series()));
        assert_eq!(s.selected_instrument().unwrap().name, "Beta Co");
    }

    #[test]
    fn test_reselecting_same_symbol_is_inert() {
        let mut s = state();
        let before = s.active_series();
        assert!(!s.select_instrument("AAA"));
        assert!(Arc::ptr_eq(&before, &s.active_series()));
    }

    #[test]
    fn test_known_symbol_uses_its_baseline() {
        // AAA: 100 + 0.5 * 3000, BBB: 100 + 0.0 * 3000
        let mut s = flat_state(CATALOG);
        assert_eq!(s.active_series().first().unwrap().open, 1600.0);
        s.select_instrument("BBB");
        assert_eq!(s.active_series().first().unwrap().open, 100.0);
    }

    #[test]
    fn test_unknown_symbol_uses_default_baseline() {
        let mut s = flat_state(CATALOG);
        assert!(s.select_instrument("ZZZ"));
        assert_eq!(s.selected_symbol(), "ZZZ");
        assert!(s.selected_instrument().is_none());
        assert_eq!(s.active_series().first().unwrap().open, DEFAULT_BASELINE_PRICE);
    }

    #[test]
    fn test_empty_directory_starts_unselected() {
        let s = flat_state("SYMBOL,NAME\n");
        assert_eq!(s.selected_symbol(), "");
        assert_eq!(s.active_series().first().unwrap().open, DEFAULT_BASELINE_PRICE);
        assert!(s.visible_instruments().is_empty());
    }

    #[test]
    fn test_zero_length_synthesizer_charts_empty_series() {
        let directory = Arc::new(InstrumentDirectory::load(CATALOG, &mut source_from_seed(Some(1))));
        let synth = SeriesSynthesizer::new(0, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let s = SelectionState::new(directory, synth, source_from_seed(Some(2)));
        assert!(s.active_series().is_empty());
    }
}
