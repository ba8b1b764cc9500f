//! CLI entrypoint for `suite-conf`.

use std::process::ExitCode;

use clap::Parser;
use suite_conf::cli::Args;
use suite_conf::error::CliError;
use suite_conf::{execute, output};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), CliError> {
    let args = Args::parse();
    let report = execute(&args.command)?;
    output::write_report(&report, &args.output)
}
