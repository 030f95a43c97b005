// Instrument directory: parses the static catalog and attaches a synthetic
// baseline price and display quote to every row.
//
// Quotes come from the injected uniform source. With an entropy-seeded source
// two loads of the same catalog disagree; pass a seeded source to reproduce.
use std::collections::HashSet;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use shared::models::{Instrument, Quote};
use shared::utils::round_to_cents;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::random::UniformSource;

pub const DEFAULT_CATALOG: &str = include_str!("../../assets/catalog.csv");

/// Baseline used for a symbol the directory cannot resolve.
pub const DEFAULT_BASELINE_PRICE: f64 = 100.0;

pub const BASELINE_RANGE: (f64, f64) = (100.0, 3100.0);
pub const CHANGE_PERCENT_RANGE: (f64, f64) = (-2.0, 2.0);

// Column positions: SYMBOL, NAME, SERIES, <listing date>, <paid up>, <lot>, ISIN, ...
const SYMBOL_COL: usize = 0;
const NAME_COL: usize = 1;
const SERIES_COL: usize = 2;
const ISIN_COL: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentDirectory {
    instruments: Vec<Instrument>,
}

impl InstrumentDirectory {
    /// Parses catalog text. Never fails: unreadable or incomplete rows are skipped.
    pub fn load(catalog_text: &str, rng: &mut impl UniformSource) -> Self {
        // Quotes are literal: a stray `"` stays inside its own row.
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(catalog_text.as_bytes());

        let mut instruments = Vec::new();
        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for result in rdr.records() {
            let parsed = match result {
                Ok(record) => Self::parse_row(&record, &seen, rng),
                Err(e) => Err(EngineError::from(e)),
            };
            match parsed {
                Ok(instrument) => {
                    seen.insert(instrument.symbol.clone());
                    instruments.push(instrument);
                }
                Err(e) => {
                    skipped += 1;
                    warn!("Skipping catalog row: {}", e);
                }
            }
        }

        info!(count = instruments.len(), skipped, "Instrument directory loaded");
        Self { instruments }
    }

    pub fn load_file(path: impl AsRef<Path>, rng: &mut impl UniformSource) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::load(&text, rng))
    }

    pub fn load_default(rng: &mut impl UniformSource) -> Self {
        Self::load(DEFAULT_CATALOG, rng)
    }

    fn parse_row(
        record: &StringRecord,
        seen: &HashSet<String>,
        rng: &mut impl UniformSource,
    ) -> EngineResult<Instrument> {
        let line = record.position().map_or(0, |p| p.line());
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let symbol = field(SYMBOL_COL);
        if symbol.is_empty() {
            return Err(EngineError::MalformedRow { line, reason: "missing symbol".to_string() });
        }
        let name = record
            .get(NAME_COL)
            .ok_or_else(|| EngineError::MalformedRow { line, reason: format!("missing name for '{}'", symbol) })?;
        if seen.contains(symbol) {
            return Err(EngineError::MalformedRow { line, reason: format!("duplicate symbol '{}'", symbol) });
        }

        // Quotes are drawn only for rows that made it this far, so skipped rows
        // do not consume draws.
        // The walk starts from the price shown in the list.
        let baseline_price = round_to_cents(rng.uniform(BASELINE_RANGE.0, BASELINE_RANGE.1));
        let change_percent = round_to_cents(rng.uniform(CHANGE_PERCENT_RANGE.0, CHANGE_PERCENT_RANGE.1));

        Ok(Instrument {
            symbol: symbol.to_string(),
            name: name.to_string(),
            series_code: field(SERIES_COL).to_string(),
            isin: field(ISIN_COL).to_string(),
            baseline_price,
            quote: Quote {
                price: baseline_price,
                change_percent,
            },
        })
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn first(&self) -> Option<&Instrument> {
        self.instruments.first()
    }

    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    /// The baseline for `symbol`, or `DEFAULT_BASELINE_PRICE` when it is unknown.
    pub fn baseline_for(&self, symbol: &str) -> f64 {
        self.get(symbol)
            .map(|i| i.baseline_price)
            .filter(|p| *p > 0.0)
            .unwrap_or(DEFAULT_BASELINE_PRICE)
    }

    /// Case-insensitive substring match on symbol or name, in directory order.
    pub fn filter(&self, search_term: &str) -> Vec<&Instrument> {
        let needle = search_term.to_lowercase();
        self.instruments
            .iter()
            .filter(|i| {
                needle.is_empty()
                    || i.symbol.to_lowercase().contains(&needle)
                    || i.name.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
