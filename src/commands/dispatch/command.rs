//! Command trait and context for dispatching commands

use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;

use crate::cli::Cli;
use greedtrace_core::config::TraceConfig;
use greedtrace_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_config(&self) -> Result<TraceConfig> {
        TraceConfig::load(self.cli.config.as_deref())
    }

    /// Destination for trace records: `--output` file or stdout
    pub fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.cli.output {
            Some(path) => {
                let file = File::create(path)?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
