//! Injectable sources of randomness for short token generation.
//!
//! Token generation never calls a global RNG directly; it goes through
//! [`RandomSource`] so tests can substitute a deterministic source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// A uniform random source.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns a uniformly distributed value in `0..bound`.
    ///
    /// `bound` is always greater than zero.
    fn next_below(&self, bound: u32) -> u32;
}

/// Random source backed by the thread-local generator of `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_below(&self, bound: u32) -> u32 {
        rand::rng().random_range(0..bound)
    }
}

/// Reproducible random source seeded from a fixed value.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_below(&self, bound: u32) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..bound)
    }
}
