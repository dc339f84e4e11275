#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the half-open interval [min, max)
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Tests probability value in (0., 1.) range: values outside are never or always hit.
    fn is_hit(&self, probability: f64) -> bool {
        probability >= 1. || (probability > 0. && self.uniform_real(0., 1.) < probability)
    }
}

/// A default random implementation backed by `StdRng`.
///
/// The generator is owned by the instance: two instances created with the same seed produce
/// identical sequences.
pub struct DefaultRandom {
    rng: Mutex<StdRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with explicit seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // NOTE generator state stays valid even if a holder panicked
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng().gen_range(min..=max)
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng().gen_range(min..max)
    }
}
