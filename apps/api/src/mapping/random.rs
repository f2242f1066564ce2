//! Randomness capability consumed by the mapping engine.
//!
//! The engine never reaches for a global RNG; every draw goes through a
//! `RandomSource` handed in by the caller. Production wraps a seeded or
//! entropy-backed `rand` generator in `RngSource`, tests replay scripted draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in `[low, high]`, inclusive on both ends.
    fn int_in(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index_below(&mut self, len: usize) -> usize;
}

/// Adapts any `rand::Rng` to `RandomSource`.
#[derive(Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in(&mut self, low: i64, high: i64) -> i64 {
        self.0.gen_range(low..=high)
    }

    fn index_below(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

pub type StdRngSource = RngSource<StdRng>;

impl StdRngSource {
    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource(StdRng::seed_from_u64(seed)),
            None => RngSource(StdRng::from_entropy()),
        }
    }
}

/// Replays a fixed list of draws in order. Panics when the script runs dry
/// or a draw falls outside the requested range, so tests notice.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: std::collections::VecDeque<i64>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(draws: &[i64]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    fn next(&mut self) -> i64 {
        self.draws.pop_front().expect("scripted randomness exhausted")
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn int_in(&mut self, low: i64, high: i64) -> i64 {
        let v = self.next();
        assert!(
            (low..=high).contains(&v),
            "scripted draw {v} outside [{low}, {high}]"
        );
        v
    }

    fn index_below(&mut self, len: usize) -> usize {
        let v = self.next();
        assert!(
            v >= 0 && (v as usize) < len,
            "scripted index {v} outside 0..{len}"
        );
        v as usize
    }
}
