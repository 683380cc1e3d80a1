//! The trace command: validate, run one engine, stream records

use tracing::debug;

use crate::cli::Cli;
use crate::commands::dispatch::{Command, CommandContext};
use greedtrace_core::config::TraceConfig;
use greedtrace_core::error::Result;
use greedtrace_core::request::{run_request, TraceRequest};
use greedtrace_core::trace::JsonLinesSink;

pub struct TraceCommand {
    pub request: TraceRequest,
}

impl TraceCommand {
    /// Validate CLI input into a request. Nothing is written on failure.
    pub fn from_cli(cli: &Cli, config: &TraceConfig) -> Result<Self> {
        let request =
            TraceRequest::parse(&cli.algorithm, &cli.edges, config, cli.node_overrides())?;
        Ok(Self { request })
    }
}

impl Command for TraceCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut sink = JsonLinesSink::new(ctx.open_output()?);

        let outcome = run_request(&self.request, &mut sink)?;

        debug!(
            elapsed = ?ctx.start.elapsed(),
            records = sink.written(),
            cost = outcome.cost(),
            "trace complete"
        );
        Ok(())
    }
}
