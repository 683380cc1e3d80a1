//! CLI argument parsing for greedtrace
//!
//! Edge tokens are taken as raw strings; numeric validation happens at the
//! request boundary in `greedtrace-core` so malformed input produces the
//! same structured error as any other request failure.
//!
//! Options go before the algorithm selector. Everything after the first
//! edge token is an edge token, including anything that looks like a flag.

use clap::Parser;
use std::path::PathBuf;

use greedtrace_core::graph::NodeId;
use greedtrace_core::request::NodeOverrides;

/// Greedtrace - stream instrumented Dijkstra and Prim runs as trace records
#[derive(Parser, Debug)]
#[command(name = "greedtrace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Algorithm to run: dijkstra or prims
    pub algorithm: String,

    /// Graph edges as flat `u v w` triples; none (or a single 0) selects the default graph
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub edges: Vec<String>,

    /// Dijkstra source node
    #[arg(long, allow_negative_numbers = true)]
    pub source: Option<NodeId>,

    /// Dijkstra destination node
    #[arg(long, allow_negative_numbers = true)]
    pub destination: Option<NodeId>,

    /// Prim start node
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<NodeId>,

    /// Config file (defaults to <config dir>/greedtrace/config.toml)
    #[arg(long, env = "GREEDTRACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the trace to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn node_overrides(&self) -> NodeOverrides {
        NodeOverrides {
            source: self.source,
            destination: self.destination,
            start: self.start,
        }
    }
}
