//! Confidence jitter sources
//!
//! The scorer adds bounded uniform noise to each confidence so live output
//! does not look frozen. Noise is drawn through [`JitterSource`] so tests and
//! reproducible runs can pin it down.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform noise in `[0, upper)`
pub trait JitterSource {
    fn sample(&mut self, upper: f64) -> f64;
}

/// Always 0
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&mut self, _upper: f64) -> f64 {
        0.0
    }
}

/// Reproducible noise from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible, but unlike [`ThreadJitter`] can cross threads
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl JitterSource for SeededJitter {
    fn sample(&mut self, upper: f64) -> f64 {
        draw(&mut self.rng, upper)
    }
}

/// Thread-local entropy, for demo output
#[derive(Debug, Clone, Default)]
pub struct ThreadJitter {
    rng: ThreadRng,
}

impl JitterSource for ThreadJitter {
    fn sample(&mut self, upper: f64) -> f64 {
        draw(&mut self.rng, upper)
    }
}

fn draw<R: Rng>(rng: &mut R, upper: f64) -> f64 {
    // gen_range panics on an empty range
    if upper > 0.0 {
        rng.gen_range(0.0..upper)
    } else {
        0.0
    }
}
