// crates/engine/src/lib.rs
use std::io::{self, BufRead};

pub mod config;
pub mod error;
pub mod processor;
pub mod report;
pub mod scanner;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::report::Reporter;
use crate::stats::RunSummary;

/// Run the line counter over `config.inputs`, or over the process's standard
/// input when there are none.
///
/// # Errors
///
/// Only a failing reporter aborts the run. Open and read failures of
/// individual resources are reported through [`Reporter::on_failure`].
/// Open failures are tallied in [`RunSummary::failures`], read failures in
/// [`RunSummary::read_failures`].
pub fn run<R: Reporter>(config: &Config, reporter: R) -> Result<RunSummary> {
    let stdin = io::stdin();
    run_with_stdin(config, stdin.lock(), reporter)
}

/// Like [`run`], reading `stdin` instead of the process's standard input.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_stdin<I, R>(config: &Config, mut stdin: I, mut reporter: R) -> Result<RunSummary>
where
    I: BufRead,
    R: Reporter,
{
    let mut summary = RunSummary::default();

    if config.inputs.is_empty() {
        match processor::process_stdin(&mut stdin) {
            Ok(lines) => {
                summary.total = lines;
                summary.processed = 1;
                reporter.on_stdin(lines).map_err(EngineError::Output)?;
            }
            Err(e) => {
                summary.read_failures = 1;
                reporter.on_failure(&e).map_err(EngineError::Output)?;
            }
        }
        reporter.on_complete().map_err(EngineError::Output)?;
        return Ok(summary);
    }

    // 1件ずつ open → scan → report → accumulate を完了させてから次へ
    for path in &config.inputs {
        match processor::process_path(path) {
            Ok(lines) => {
                summary.total += lines;
                summary.processed += 1;
                reporter.on_file(path, lines).map_err(EngineError::Output)?;
            }
            Err(e) => {
                log::debug!("skipping {}: {e}", e.path().unwrap_or(path).display());
                if matches!(e, EngineError::Open { .. }) {
                    summary.failures += 1;
                } else {
                    summary.read_failures += 1;
                }
                reporter.on_failure(&e).map_err(EngineError::Output)?;
            }
        }
    }

    if config.total_row {
        reporter
            .on_total(summary.total, summary.processed)
            .map_err(EngineError::Output)?;
    }
    reporter.on_complete().map_err(EngineError::Output)?;

    log::debug!(
        "finished: {} processed, {} not opened, {} unreadable, {} lines",
        summary.processed,
        summary.failures,
        summary.read_failures,
        summary.total
    );
    Ok(summary)
}
