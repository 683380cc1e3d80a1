//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    #[serde(default)]
    pub dijkstra: DijkstraConfig,

    #[serde(default)]
    pub prims: PrimConfig,
}

/// Default endpoints for shortest-path runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraConfig {
    #[serde(default = "default_source")]
    pub source: NodeId,

    #[serde(default = "default_destination")]
    pub destination: NodeId,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            destination: default_destination(),
        }
    }
}

/// Default start node for spanning-tree runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimConfig {
    #[serde(default)]
    pub start: NodeId,
}

fn default_source() -> NodeId {
    0
}

fn default_destination() -> NodeId {
    3
}
