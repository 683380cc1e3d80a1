//! Greedtrace - instrumented greedy graph algorithms
//!
//! Runs Dijkstra or Prim over a small weighted graph and streams every
//! algorithmic decision as newline-delimited JSON, one record per line.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use greedtrace_core::error::{ExitCode as GreedExitCode, GreedError};
use greedtrace_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            // Help and version are informational, not errors - let clap handle them
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                err.exit()
            }
            _ => {
                let error = GreedError::UsageError(err.to_string().trim_end().to_string());
                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }
        },
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GreedExitCode::Success as u8),
        Err(e) => {
            eprintln!("{}", e.to_json());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
