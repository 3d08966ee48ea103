//! Benchmark configuration.
//!
//! A [`BenchConfig`] is built once before the run and never changes while
//! the driver executes. The binary always uses [`BenchConfig::default`];
//! embedders and tests can also build one from a TOML table.

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Element type stored in every container.
pub type DataType = i32;

pub const DEFAULT_ELEMENT_COUNT: usize = 1_000_000;
pub const DEFAULT_READ_REPEAT: usize = 10;
pub const DEFAULT_DISPLAY_COUNT: usize = 10;
pub const DEFAULT_RANDOM_MIN: DataType = -100;
pub const DEFAULT_RANDOM_MAX: DataType = 100;

/// How the statistics phase computes population variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VarianceMethod {
    /// Single pass, Welford's online update.
    #[default]
    Welford,
    /// Sum of squared deviations from the already computed mean.
    TwoPass,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BenchConfig {
    /// Length of the generated sample.
    pub element_count: usize,
    /// Full traversals per container in the sequential read phase.
    pub read_repeat: usize,
    /// Leading elements printed per container.
    pub display_count: usize,
    /// Inclusive lower bound for generated values.
    pub random_min: DataType,
    /// Inclusive upper bound for generated values.
    pub random_max: DataType,
    pub variance_method: VarianceMethod,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            element_count: DEFAULT_ELEMENT_COUNT,
            read_repeat: DEFAULT_READ_REPEAT,
            display_count: DEFAULT_DISPLAY_COUNT,
            random_min: DEFAULT_RANDOM_MIN,
            random_max: DEFAULT_RANDOM_MAX,
            variance_method: VarianceMethod::default(),
        }
    }
}

impl BenchConfig {
    /// Parse a TOML table. Missing keys keep their default values.
    /// The result is validated before it is returned.
    pub fn from_toml_str(s: &str) -> Result<Self, BenchError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations that cannot be run.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.random_min > self.random_max {
            return Err(BenchError::InvalidBounds {
                min: self.random_min,
                max: self.random_max,
            });
        }
        Ok(())
    }

    pub fn with_element_count(mut self, element_count: usize) -> Self {
        self.element_count = element_count;
        self
    }

    pub fn with_read_repeat(mut self, read_repeat: usize) -> Self {
        self.read_repeat = read_repeat;
        self
    }

    pub fn with_display_count(mut self, display_count: usize) -> Self {
        self.display_count = display_count;
        self
    }

    pub fn with_bounds(mut self, min: DataType, max: DataType) -> Self {
        self.random_min = min;
        self.random_max = max;
        self
    }

    pub fn with_variance_method(mut self, method: VarianceMethod) -> Self {
        self.variance_method = method;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
