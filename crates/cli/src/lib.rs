// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

use crate::args::Args;
use crate::error::Result;
use crate::options::OutputFormat;
use crate::presentation::{JsonlReporter, TextReporter};
use linecount_engine::config::Config;
use linecount_engine::stats::RunSummary;
use std::io;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Count every input named by `args` and write the reports to the process's
/// standard output and standard error.
pub fn execute(args: Args) -> Result<RunSummary> {
    let format = args.format;
    let config = Config::try_from(args)?;
    log::debug!("format={format:?}, inputs={}", config.inputs.len());

    let stdout = io::stdout().lock();
    let stderr = io::stderr().lock();

    let summary = match format {
        OutputFormat::Text => linecount_engine::run(&config, TextReporter::new(stdout, stderr))?,
        OutputFormat::Jsonl => linecount_engine::run(&config, JsonlReporter::new(stdout, stderr))?,
    };
    Ok(summary)
}
