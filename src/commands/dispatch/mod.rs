//! Command dispatch logic for greedtrace

use std::time::Instant;

use crate::cli::Cli;
use greedtrace_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext};

use crate::commands::trace::TraceCommand;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    let config = ctx.load_config()?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    let command = TraceCommand::from_cli(cli, &config)?;
    debug!(elapsed = ?start.elapsed(), algorithm = %command.request.algorithm, "validate_request");

    command.execute(&ctx)
}
