mod cli;
mod error;
mod http;
mod testing;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, RunConfig};
use testing::{ApiTester, RunReport};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(RunConfig::from(&cli)) {
        Ok(report) if report.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("run aborted: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "hajabot_check=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(config: RunConfig) -> Result<RunReport> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        let mut tester = ApiTester::new(&config).context("Failed to build HTTP client")?;
        Ok::<_, anyhow::Error>(tester.run_all_tests().await)
    })
}
