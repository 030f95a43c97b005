// Pluggable uniform draws. Production wiring hands in an entropy-seeded
// `StdRng`; reproducible runs and tests seed it or replay fixed draws.
use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait UniformSource {
    /// A draw from `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low < high {
            self.gen_range(low..high)
        } else {
            low
        }
    }
}

/// `StdRng` seeded from `seed` when given, from OS entropy otherwise.
pub fn source_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Replays unit fractions in `[0, 1)`, scaling each onto the requested range.
/// Once exhausted it keeps returning the midpoint.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    fractions: VecDeque<f64>,
}

impl SequenceSource {
    pub fn new(fractions: impl IntoIterator<Item = f64>) -> Self {
        Self {
            fractions: fractions.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.fractions.len()
    }
}

impl UniformSource for SequenceSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let t = self.fractions.pop_front().unwrap_or(0.5).clamp(0.0, 1.0);
        low + t * (high - low)
    }
}
