// Synthetic OHLC walk standing in for real market data. Each bar opens
// near the previous close; there is no claim of market realism.
use chrono::{Days, NaiveDate};
use shared::models::{Candle, Series};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::random::UniformSource;

pub const DEFAULT_SERIES_LENGTH: usize = 100;

const OPEN_JITTER: f64 = 0.01;
const CLOSE_JITTER: f64 = 0.0075;
const WICK_MAX: f64 = 0.01;

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSynthesizer {
    length: usize,
    start_date: NaiveDate,
}

impl Default for SeriesSynthesizer {
    fn default() -> Self {
        Self {
            length: DEFAULT_SERIES_LENGTH,
            start_date: default_start_date(),
        }
    }
}

impl SeriesSynthesizer {
    pub fn new(length: usize, start_date: NaiveDate) -> Self {
        Self { length, start_date }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn synthesize(&self, baseline_price: f64, rng: &mut impl UniformSource) -> EngineResult<Series> {
        synthesize(baseline_price, self.length, self.start_date, rng)
    }
}

/// Walks `length` daily candles forward from `baseline_price`, one per
/// calendar day starting at `start_date`.
pub fn synthesize(
    baseline_price: f64,
    length: usize,
    start_date: NaiveDate,
    rng: &mut impl UniformSource,
) -> EngineResult<Series> {
    if !baseline_price.is_finite() || baseline_price <= 0.0 {
        return Err(EngineError::InvalidSynthesis(format!(
            "baseline price must be positive, got {}",
            baseline_price
        )));
    }
    if length == 0 {
        return Err(EngineError::InvalidSynthesis("series length must be at least 1".to_string()));
    }

    let mut candles = Vec::with_capacity(length);
    let mut price = baseline_price;

    for i in 0..length {
        let date = start_date
            .checked_add_days(Days::new(i as u64))
            .ok_or_else(|| EngineError::InvalidSynthesis(format!("date overflow at bar {}", i)))?;

        let open = price + rng.uniform(-OPEN_JITTER, OPEN_JITTER) * price;
        let close = open + rng.uniform(-CLOSE_JITTER, CLOSE_JITTER) * open;
        let body_high = open.max(close);
        let body_low = open.min(close);
        let high = body_high + rng.uniform(0.0, WICK_MAX) * body_high;
        let low = body_low - rng.uniform(0.0, WICK_MAX) * body_low;

        candles.push(Candle { date, open, high, low, close });
        price = close;
    }

    debug!(baseline_price, length, %start_date, "Synthesized series");
    Ok(Series::new(candles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{source_from_seed, SequenceSource};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_valid(series: &Series, length: usize, start: NaiveDate) {
        assert_eq!(series.len(), length);
        for (i, candle) in series.candles().iter().enumerate() {
            assert_eq!(candle.date, start + Days::new(i as u64), "gap at bar {}", i);
            assert!(candle.is_well_formed(), "bar {} violates containment: {:?}", i, candle);
        }
    }

    #[test]
    fn test_five_day_scenario() {
        let series = synthesize(100.0, 5, date(2024, 1, 1), &mut source_from_seed(None)).unwrap();
        assert_valid(&series, 5, date(2024, 1, 1));
        assert_eq!(series.last().unwrap().date, date(2024, 1, 5));
    }

    #[test]
    fn test_invariants_across_baselines_and_seeds() {
        for seed in 0..20 {
            let mut rng = source_from_seed(Some(seed));
            for baseline in [0.01, 1.0, 100.0, 3099.99, 1.0e6] {
                let series = synthesize(baseline, 250, date(2023, 12, 30), &mut rng).unwrap();
                assert_valid(&series, 250, date(2023, 12, 30));
                assert!(series.is_strictly_ascending());
            }
        }
    }

    #[test]
    fn test_dates_cross_month_and_leap_day() {
        let series = synthesize(50.0, 3, date(2024, 2, 28), &mut source_from_seed(Some(1))).unwrap();
        let dates: Vec<_> = series.candles().iter().map(|c| c.date).collect();
        assert_eq!(dates, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }

    #[test]
    fn test_exact_bars_from_fixed_draws() {
        // Per bar: open jitter, close jitter, high wick, low wick.
        let mut seq = SequenceSource::new([
            1.0, 0.0, 0.5, 0.5, // open 101, close 101 * 0.9925
            0.5, 1.0, 0.0, 1.0, // open = prev close, close +0.75%, no upper wick
        ]);
        let series = synthesize(100.0, 2, date(2024, 1, 1), &mut seq).unwrap();
        let first = series.candles()[0];
        assert!((first.open - 101.0).abs() < 1e-9);
        assert!((first.close - 101.0 * 0.9925).abs() < 1e-9);
        assert!((first.high - 101.0 * 1.005).abs() < 1e-9);
        assert!((first.low - first.close * 0.995).abs() < 1e-9);

        let second = series.candles()[1];
        assert!((second.open - first.close).abs() < 1e-9);
        assert!((second.close - second.open * 1.0075).abs() < 1e-9);
        assert_eq!(second.high, second.close);
        assert!((second.low - second.open * 0.99).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_synthesis_is_reproducible() {
        let synth = SeriesSynthesizer::default();
        let a = synth.synthesize(250.0, &mut source_from_seed(Some(11))).unwrap();
        let b = synth.synthesize(250.0, &mut source_from_seed(Some(11))).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_SERIES_LENGTH);
        assert_eq!(a.first().unwrap().date, date(2024, 1, 1));
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut rng = source_from_seed(Some(1));
        assert!(synthesize(0.0, 5, date(2024, 1, 1), &mut rng).is_err());
        assert!(synthesize(-5.0, 5, date(2024, 1, 1), &mut rng).is_err());
        assert!(synthesize(f64::NAN, 5, date(2024, 1, 1), &mut rng).is_err());
        let err = synthesize(100.0, 0, date(2024, 1, 1), &mut rng).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_single_bar() {
        let series = synthesize(100.0, 1, date(2024, 1, 1), &mut source_from_seed(Some(2))).unwrap();
        assert_valid(&series, 1, date(2024, 1, 1));
    }
}
