// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linecount",
    version = crate::VERSION,
    about = "Count newline-delimited lines in files or standard input"
)]
pub struct Args {
    /// Files to count. Standard input is read when none are given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}
