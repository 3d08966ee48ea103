//! `seqbench` — times copy, sequential read and mean/variance over `Vec`,
//! `VecDeque` and `LinkedList`, printing the report to stdout.
//!
//! Takes no arguments. Diagnostics go to stderr.

mod memory;

use std::io;
use std::process::ExitCode;

use seqbench_core::{BenchConfig, BenchmarkDriver, ScopeTimer};
use tracing::{error, info};

fn run() -> Result<(), seqbench_core::BenchError> {
    let driver = BenchmarkDriver::new(BenchConfig::default())?;
    info!(config = ?driver.config(), "configuration");

    let mut total_out = io::stdout();
    let _total = ScopeTimer::start("total", &mut total_out);
    let summary = driver.run(io::stdout().lock())?;
    info!(
        elements = summary.element_count,
        timings = summary.timings.len(),
        "run complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("seqbench=info,seqbench_core=info")
        .with_writer(io::stderr)
        .init();

    let result = run();
    info!(
        peak_rss_kb = ?memory::peak_rss_kb(),
        current_rss_kb = ?memory::current_rss_kb(),
        "memory"
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
