//! Benchmark orchestration.
//!
//! Phases run strictly in order: generate, copy, read, display, mean,
//! variance. Each timed block owns a [`ScopeTimer`] borrowed from the
//! [`Recorder`], so its report line is written as the block closes.

use std::collections::{LinkedList, VecDeque};
use std::io::Write;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::{BenchConfig, DataType, VarianceMethod};
use crate::containers::{self, ContainerKind, ContainerSet};
use crate::error::BenchError;
use crate::random::RandomSource;
use crate::report::{Phase, PhaseTiming, Recorder};
use crate::stats;
use crate::timer::ScopeTimer;

/// Statistics computed for one container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStats {
    pub kind: ContainerKind,
    pub len: usize,
    pub mean: f64,
    pub variance: f64,
}

/// Everything a run measured, in report order.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub element_count: usize,
    pub timings: Vec<PhaseTiming>,
    pub stats: Vec<ContainerStats>,
}

impl RunSummary {
    pub fn timing(&self, phase: Phase, label: &str) -> Option<Duration> {
        self.timings
            .iter()
            .find(|t| t.phase == phase && t.label == label)
            .map(|t| t.elapsed)
    }

    pub fn phase_timings(&self, phase: Phase) -> impl Iterator<Item = &PhaseTiming> {
        self.timings.iter().filter(move |t| t.phase == phase)
    }

    pub fn stats_for(&self, kind: ContainerKind) -> Option<&ContainerStats> {
        self.stats.iter().find(|s| s.kind == kind)
    }
}

pub struct BenchmarkDriver {
    config: BenchConfig,
}

impl BenchmarkDriver {
    /// Validates `config` up front so no timed phase starts on bad input.
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Full run over an entropy-seeded sample, reporting to `out`.
    pub fn run<W: Write>(&self, out: W) -> Result<RunSummary, BenchError> {
        let mut source = RandomSource::from_entropy();
        self.run_with(&mut source, out)
    }

    /// Full run drawing the sample from `source`.
    pub fn run_with<W: Write>(
        &self,
        source: &mut RandomSource,
        out: W,
    ) -> Result<RunSummary, BenchError> {
        let mut rec = Recorder::new(out);
        rec.line("===== sequence container benchmark =====");
        rec.line(&format!("elements: {}", self.config.element_count));

        let sample = self.generate(source, &mut rec)?;
        let set = self.copy(&sample, &mut rec);
        debug_assert!(set.matches(&sample));
        drop(sample);

        self.read(&set, &mut rec);
        self.display(&set, &mut rec);
        let stats = self.statistics(&set, &mut rec);

        rec.line("");
        rec.line("===== done =====");
        if let Some(e) = rec.take_error() {
            return Err(e.into());
        }
        info!(timings = rec.timings().len(), "benchmark finished");

        Ok(RunSummary {
            element_count: self.config.element_count,
            timings: rec.into_timings(),
            stats,
        })
    }

    /// Fill the sample array.
    pub fn generate<W: Write>(
        &self,
        source: &mut RandomSource,
        rec: &mut Recorder<W>,
    ) -> Result<Vec<DataType>, BenchError> {
        let cfg = &self.config;
        info!(phase = %Phase::Generate, elements = cfg.element_count, "starting phase");
        rec.section(Phase::Generate, "random sample");
        let _timer = ScopeTimer::start("random sample", rec);
        source.generate(cfg.element_count, cfg.random_min, cfg.random_max)
    }

    /// Copy the sample into each container kind, timing every copy on its own.
    ///
    /// `Vec` is measured twice: with default growth, then into a buffer
    /// reserved to the sample length. The reserved one is kept.
    pub fn copy<W: Write>(&self, sample: &[DataType], rec: &mut Recorder<W>) -> ContainerSet {
        info!(phase = %Phase::Copy, "starting phase");
        rec.section(Phase::Copy, "copy");

        let mut unreserved: Vec<DataType> = Vec::new();
        {
            let _timer = ScopeTimer::start("Vec (no reserve)", rec);
            containers::copy_into(&mut unreserved, sample);
        }
        debug!(capacity = unreserved.capacity(), "unreserved Vec grown");
        drop(unreserved);

        let mut vec: Vec<DataType> = Vec::with_capacity(sample.len());
        {
            let _timer = ScopeTimer::start("Vec (reserved)", rec);
            containers::copy_into(&mut vec, sample);
        }

        let mut deque: VecDeque<DataType> = VecDeque::new();
        {
            let _timer = ScopeTimer::start(ContainerKind::VecDeque.label(), rec);
            containers::copy_into(&mut deque, sample);
        }

        let mut list: LinkedList<DataType> = LinkedList::new();
        {
            let _timer = ScopeTimer::start(ContainerKind::LinkedList.label(), rec);
            containers::copy_into(&mut list, sample);
        }

        ContainerSet { vec, deque, list }
    }

    /// Repeated full traversals, one timed block per container.
    pub fn read<W: Write>(&self, set: &ContainerSet, rec: &mut Recorder<W>) {
        let repeats = self.config.read_repeat;
        info!(phase = %Phase::Read, repeats, "starting phase");
        rec.section(Phase::Read, &format!("sequential read ({} repeats)", repeats));
        timed_read(ContainerKind::Vec, &set.vec, repeats, rec);
        timed_read(ContainerKind::VecDeque, &set.deque, repeats, rec);
        timed_read(ContainerKind::LinkedList, &set.list, repeats, rec);
    }

    /// Print the leading elements of every container.
    pub fn display<W: Write>(&self, set: &ContainerSet, rec: &mut Recorder<W>) {
        let n = self.config.display_count;
        rec.section(Phase::Display, &format!("first {} elements", n));
        rec.line(&containers::first_n(ContainerKind::Vec.label(), &set.vec, n));
        rec.line(&containers::first_n(ContainerKind::VecDeque.label(), &set.deque, n));
        rec.line(&containers::first_n(ContainerKind::LinkedList.label(), &set.list, n));
    }

    /// Timed mean, then timed variance, for every container.
    pub fn statistics<W: Write>(
        &self,
        set: &ContainerSet,
        rec: &mut Recorder<W>,
    ) -> Vec<ContainerStats> {
        info!(phase = %Phase::Mean, "starting phase");
        rec.section(Phase::Mean, "mean");
        let means = [
            timed_mean(ContainerKind::Vec, &set.vec, rec),
            timed_mean(ContainerKind::VecDeque, &set.deque, rec),
            timed_mean(ContainerKind::LinkedList, &set.list, rec),
        ];

        let method = self.config.variance_method;
        info!(phase = %Phase::Variance, ?method, "starting phase");
        rec.section(Phase::Variance, "variance");
        let variances = [
            timed_variance(ContainerKind::Vec, &set.vec, means[0], method, rec),
            timed_variance(ContainerKind::VecDeque, &set.deque, means[1], method, rec),
            timed_variance(ContainerKind::LinkedList, &set.list, means[2], method, rec),
        ];

        ContainerKind::ALL
            .iter()
            .zip(means.iter().zip(variances.iter()))
            .map(|(&kind, (&mean, &variance))| ContainerStats {
                kind,
                len: set.len_of(kind),
                mean,
                variance,
            })
            .collect()
    }
}

fn timed_read<'a, C, W: Write>(
    kind: ContainerKind,
    container: &'a C,
    repeats: usize,
    rec: &mut Recorder<W>,
) where
    &'a C: IntoIterator<Item = &'a DataType>,
{
    let visited = {
        let _timer = ScopeTimer::start(kind.label(), rec);
        containers::read_sequential(container, repeats)
    };
    debug!(container = kind.label(), visited, "sequential read done");
}

fn timed_mean<'a, C, W: Write>(kind: ContainerKind, container: &'a C, rec: &mut Recorder<W>) -> f64
where
    &'a C: IntoIterator<Item = &'a DataType>,
{
    let mean = {
        let _timer = ScopeTimer::start(format!("{}_mean", kind.label()), rec);
        stats::mean(container.into_iter().copied())
    };
    rec.line(&format!("{} mean: {:.3}", kind.label(), mean));
    mean
}

fn timed_variance<'a, C, W: Write>(
    kind: ContainerKind,
    container: &'a C,
    mean: f64,
    method: VarianceMethod,
    rec: &mut Recorder<W>,
) -> f64
where
    &'a C: IntoIterator<Item = &'a DataType>,
{
    let variance = {
        let _timer = ScopeTimer::start(format!("{}_variance", kind.label()), rec);
        match method {
            VarianceMethod::Welford => stats::variance(container.into_iter().copied()),
            VarianceMethod::TwoPass => stats::variance_two_pass(container.into_iter().copied(), mean),
        }
    };
    rec.line(&format!("{} variance: {:.1}", kind.label(), variance));
    variance
}
