use clap::Parser;
use linecount_cli::args::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match linecount_cli::execute(args) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::from(1)
        }
    }
}

// RUST_LOG 未指定時は何も出さない
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .init();
}
