use serde::{Deserialize, Serialize};

/// Integer node identifier. Nodes exist implicitly as edge endpoints.
pub type NodeId = i64;

/// Edge weight and accumulated cost
pub type Weight = i64;

/// An undirected weighted edge, as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((from, to, weight): (NodeId, NodeId, Weight)) -> Self {
        Self { from, to, weight }
    }
}

/// One directed adjacency entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: Weight,
}
