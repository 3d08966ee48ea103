//! Error type shared by the benchmark library.

use thiserror::Error;

use crate::config::DataType;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid random bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: DataType, max: DataType },
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
    #[error("invalid benchmark config: {0}")]
    Config(#[from] toml::de::Error),
}
