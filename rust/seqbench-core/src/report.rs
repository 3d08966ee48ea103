//! Line-oriented report writer that also keeps every timing it prints.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crate::timer::{format_elapsed, TimingSink};

/// Ordered phases of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Generate,
    Copy,
    Read,
    Display,
    Mean,
    Variance,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Generate => "generate",
            Phase::Copy => "copy",
            Phase::Read => "read",
            Phase::Display => "display",
            Phase::Mean => "mean",
            Phase::Variance => "variance",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTiming {
    pub phase: Phase,
    pub label: String,
    pub elapsed: Duration,
}

/// Writes report lines to `out` and records every timing reported to it.
///
/// Write errors do not interrupt the run; the first one is kept and
/// surfaced through [`Recorder::take_error`] once the run is over.
pub struct Recorder<W: Write> {
    out: W,
    phase: Phase,
    timings: Vec<PhaseTiming>,
    error: Option<io::Error>,
}

impl<W: Write> Recorder<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            phase: Phase::Generate,
            timings: Vec::new(),
            error: None,
        }
    }

    /// Start a new phase: timings recorded from now on are tagged with it.
    pub fn section(&mut self, phase: Phase, title: &str) {
        self.phase = phase;
        let result = writeln!(self.out).and_then(|_| writeln!(self.out, "-- {} --", title));
        self.keep(result);
    }

    pub fn line(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text);
        self.keep(result);
    }

    pub fn timings(&self) -> &[PhaseTiming] {
        &self.timings
    }

    pub fn into_timings(self) -> Vec<PhaseTiming> {
        self.timings
    }

    /// First write error seen so far, if any. Flushes the writer first.
    pub fn take_error(&mut self) -> Option<io::Error> {
        let flushed = self.out.flush();
        self.keep(flushed);
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn keep(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.error.is_none() {
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> TimingSink for Recorder<W> {
    fn record(&mut self, label: &str, elapsed: Duration) -> io::Result<()> {
        self.timings.push(PhaseTiming {
            phase: self.phase,
            label: label.to_string(),
            elapsed,
        });
        match writeln!(self.out, "{}", format_elapsed(label, elapsed)) {
            Ok(()) => Ok(()),
            Err(e) => {
                let reported = io::Error::new(e.kind(), e.to_string());
                self.keep(Err(e));
                Err(reported)
            }
        }
    }
}
