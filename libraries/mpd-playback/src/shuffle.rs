//! Random source for random-mode navigation
//!
//! Navigation never touches a global generator; it draws from an injected
//! [`RandomSource`] so selections can be reproduced in tests.

use crate::types::Tlid;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of random choices
pub trait RandomSource: Send {
    /// Uniform index in `0..upper` (`upper > 0`)
    fn pick(&mut self, upper: usize) -> usize;

    /// Shuffle `tlids` in place
    ///
    /// Default implementation is Fisher-Yates driven by [`RandomSource::pick`].
    fn shuffle(&mut self, tlids: &mut [Tlid]) {
        for i in (1..tlids.len()).rev() {
            let j = self.pick(i + 1) % (i + 1);
            tlids.swap(i, j);
        }
    }
}

/// [`RandomSource`] backed by `StdRng`
#[derive(Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, otherwise from entropy
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RandomSource for StdRandom {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn shuffle(&mut self, tlids: &mut [Tlid]) {
        tlids.shuffle(&mut self.rng);
    }
}
