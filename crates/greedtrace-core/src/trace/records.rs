//! Trace record schema
//!
//! Records serialize to one JSON object each, discriminated by `type`.
//! The `path` and `mst` strings keep the format the renderer parses
//! (`0->2->1->3` and `(0-2) (2-1)`).

use serde::{Serialize, Serializer};

use crate::graph::{Edge, NodeId, Weight};

/// A single trace record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TraceRecord {
    /// Full node and edge listing, for drawing the initial graph
    Init { nodes: Vec<NodeId>, edges: Vec<Edge> },
    /// Dijkstra finalized a node
    Visit(StepRecord),
    /// Prim added a node to the tree
    Include(StepRecord),
    /// A node's distance or key improved
    Update(StepRecord),
    /// Terminal outcome of the run
    Final(FinalRecord),
    /// Trace completion sentinel
    End,
}

impl TraceRecord {
    pub fn visit(node: NodeId, value: Weight) -> Self {
        TraceRecord::Visit(StepRecord {
            node,
            value,
            explanation: format!("Visiting node {node}"),
        })
    }

    pub fn distance_update(node: NodeId, value: Weight) -> Self {
        TraceRecord::Update(StepRecord {
            node,
            value,
            explanation: format!("Updated distance of node {node}"),
        })
    }

    pub fn include(node: NodeId, value: Weight) -> Self {
        TraceRecord::Include(StepRecord {
            node,
            value,
            explanation: format!("Added node {node} to MST"),
        })
    }

    pub fn key_update(node: NodeId, value: Weight) -> Self {
        TraceRecord::Update(StepRecord {
            node,
            value,
            explanation: format!("Updated key of node {node}"),
        })
    }

    /// The `type` discriminator, for logging and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            TraceRecord::Init { .. } => "init",
            TraceRecord::Visit(_) => "visit",
            TraceRecord::Include(_) => "include",
            TraceRecord::Update(_) => "update",
            TraceRecord::Final(_) => "final",
            TraceRecord::End => "end",
        }
    }

    /// Step records carry a node and its new value
    pub fn step(&self) -> Option<&StepRecord> {
        match self {
            TraceRecord::Visit(step) | TraceRecord::Include(step) | TraceRecord::Update(step) => {
                Some(step)
            }
            _ => None,
        }
    }
}

/// One algorithmic decision about a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub node: NodeId,
    pub value: Weight,
    pub explanation: String,
}

/// Terminal record payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FinalRecord {
    /// Shortest path found
    Path {
        #[serde(serialize_with = "serialize_arrow_path")]
        path: Vec<NodeId>,
        cost: Weight,
        explanation: String,
    },
    /// Destination cannot be reached from the source
    NoPath {
        /// Always serialized as `null`
        path: (),
        destination: NodeId,
        explanation: String,
    },
    /// Spanning tree of the start node's component
    Tree {
        mst: String,
        edges: Vec<Edge>,
        cost: Weight,
        explanation: String,
    },
}

impl FinalRecord {
    pub fn path(path: Vec<NodeId>, cost: Weight) -> Self {
        FinalRecord::Path {
            path,
            cost,
            explanation: format!("Shortest path found with total cost {cost}"),
        }
    }

    pub fn no_path(destination: NodeId) -> Self {
        FinalRecord::NoPath {
            path: (),
            destination,
            explanation: format!("No path to node {destination}"),
        }
    }

    pub fn tree(edges: Vec<Edge>, cost: Weight) -> Self {
        let mst = edges
            .iter()
            .map(|e| format!("({}-{})", e.from, e.to))
            .collect::<Vec<_>>()
            .join(" ");
        FinalRecord::Tree {
            mst,
            edges,
            cost,
            explanation: format!("MST complete with total cost {cost}"),
        }
    }
}

fn serialize_arrow_path<S: Serializer>(path: &[NodeId], serializer: S) -> Result<S::Ok, S::Error> {
    let joined = path
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join("->");
    serializer.serialize_str(&joined)
}
