//! Scoped wall-clock measurement.
//!
//! A [`ScopeTimer`] captures a monotonic [`Instant`] when it is created and
//! reports the elapsed time to its [`TimingSink`] exactly once, when it is
//! dropped. Drop runs on normal scope exit, early return, `?` propagation
//! and unwinding alike, so a measured block cannot lose or duplicate its
//! report line.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Destination for finished measurements.
pub trait TimingSink {
    fn record(&mut self, label: &str, elapsed: Duration) -> io::Result<()>;
}

/// Render one measurement as `<label>: <ms, 2 decimals> ms`.
pub fn format_elapsed(label: &str, elapsed: Duration) -> String {
    format!("{}: {:.2} ms", label, elapsed.as_secs_f64() * 1000.0)
}

impl TimingSink for io::Stdout {
    fn record(&mut self, label: &str, elapsed: Duration) -> io::Result<()> {
        let mut out = self.lock();
        writeln!(out, "{}", format_elapsed(label, elapsed))?;
        out.flush()
    }
}

/// Measures the lifetime of the enclosing scope.
#[must_use = "the timer reports when dropped; binding it to `_` drops it immediately"]
pub struct ScopeTimer<'a> {
    label: String,
    start: Instant,
    sink: &'a mut dyn TimingSink,
}

impl<'a> ScopeTimer<'a> {
    pub fn start(label: impl Into<String>, sink: &'a mut dyn TimingSink) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
            sink,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time since the timer was started. Does not report.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopeTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if let Err(e) = self.sink.record(&self.label, elapsed) {
            tracing::warn!(label = %self.label, error = %e, "failed to report timing");
        }
    }
}
