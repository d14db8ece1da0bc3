//! Uniform deviate source driving every stochastic choice of a run.

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Source of uniform deviates in `[0, 1)`.
///
/// The order in which the engine draws values is part of its
/// reproducibility contract: the same source state and inputs always yield
/// the same system.
pub trait RandomSource {
    /// Next deviate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Next deviate scaled into `[min, max)`.
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_uniform() * (max - min)
    }
}

impl RandomSource for ChaChaRng {
    fn next_uniform(&mut self) -> f64 {
        self.random()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
