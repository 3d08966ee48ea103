//! Sequence-container benchmarks.
//!
//! Generates a random sample, copies it into `Vec`, `VecDeque` and
//! `LinkedList`, then times sequential reads and mean/variance over each
//! container. Every timed block reports `<label>: <ms> ms` when its
//! [`ScopeTimer`] goes out of scope.

pub mod config;
pub mod containers;
pub mod driver;
pub mod error;
pub mod random;
pub mod report;
pub mod stats;
pub mod timer;

pub use config::{BenchConfig, DataType, VarianceMethod};
pub use containers::{ContainerKind, ContainerSet};
pub use driver::{BenchmarkDriver, ContainerStats, RunSummary};
pub use error::BenchError;
pub use random::RandomSource;
pub use report::{Phase, PhaseTiming, Recorder};
pub use timer::{ScopeTimer, TimingSink};
