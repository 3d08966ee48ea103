//! Uniform random sample generation.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::DataType;
use crate::error::BenchError;

/// Seeded generator for the benchmark's sample array.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed from operating-system entropy. Runs are not reproducible.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed, for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `len` values uniformly from the closed interval `[min, max]`.
    pub fn generate(
        &mut self,
        len: usize,
        min: DataType,
        max: DataType,
    ) -> Result<Vec<DataType>, BenchError> {
        if min > max {
            return Err(BenchError::InvalidBounds { min, max });
        }
        let dist = Uniform::new_inclusive(min, max);
        Ok(dist.sample_iter(&mut self.rng).take(len).collect())
    }
}
