use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::algos::shared::Frontier;
use crate::graph::reconstruct::reconstruct_path;
use crate::graph::types::{Edge, NodeId, Weight};
use crate::graph::Graph;
use crate::trace::{FinalRecord, TraceRecord, TraceSink};

/// State owned by a single Prim run.
///
/// Keys are raw incident edge weights, not cumulative costs, so a queued
/// entry is only ever stale once its node is included.
#[derive(Debug)]
pub struct PrimState {
    start: NodeId,
    key: HashMap<NodeId, Weight>,
    parent: HashMap<NodeId, NodeId>,
    included: HashSet<NodeId>,
    inclusion_order: Vec<NodeId>,
    edges: Vec<Edge>,
    total: Weight,
    frontier: Frontier,
    discarded: usize,
}

impl PrimState {
    /// Seed the run: key[start] = 0 and (0, start) queued
    pub fn new(start: NodeId) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(0, start);

        Self {
            start,
            key: HashMap::from([(start, 0)]),
            parent: HashMap::new(),
            included: HashSet::new(),
            inclusion_order: Vec::new(),
            edges: Vec::new(),
            total: 0,
            frontier,
            discarded: 0,
        }
    }

    pub fn key(&self, node: NodeId) -> Option<Weight> {
        self.key.get(&node).copied()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(&node).copied()
    }

    pub fn is_included(&self, node: NodeId) -> bool {
        self.included.contains(&node)
    }

    pub fn total(&self) -> Weight {
        self.total
    }

    /// Tree edges in inclusion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Pop and process one frontier entry.
    ///
    /// Returns `false` once the frontier is exhausted. Entries for nodes
    /// already in the tree are consumed without emitting anything.
    pub fn step(&mut self, graph: &Graph, sink: &mut dyn TraceSink) -> Result<bool> {
        let Some((cost, u)) = self.frontier.pop() else {
            return Ok(false);
        };

        if !self.included.insert(u) {
            trace!(node = u, priority = cost, "discard included entry");
            self.discarded += 1;
            return Ok(true);
        }

        self.inclusion_order.push(u);
        self.total = self.total.saturating_add(cost);
        sink.emit(&TraceRecord::include(u, cost))?;

        if u != self.start {
            if let Some(parent) = self.parent(u) {
                self.edges.push(Edge::new(parent, u, cost));
            }
        }

        for neighbor in graph.neighbors(u) {
            if self.included.contains(&neighbor.node) {
                continue;
            }
            let improves = self
                .key(neighbor.node)
                .is_none_or(|current| neighbor.weight < current);

            if improves {
                self.key.insert(neighbor.node, neighbor.weight);
                self.parent.insert(neighbor.node, u);
                self.frontier.push(neighbor.weight, neighbor.node);
                sink.emit(&TraceRecord::key_update(neighbor.node, neighbor.weight))?;
            }
        }

        Ok(true)
    }
}

/// Outcome of a spanning-tree run
#[derive(Debug)]
pub struct SpanningTree {
    pub start: NodeId,
    pub cost: Weight,
    /// Tree edges as `(parent, child, weight)`, in inclusion order
    pub edges: Vec<Edge>,
    pub inclusion_order: Vec<NodeId>,
    parent: HashMap<NodeId, NodeId>,
}

impl SpanningTree {
    /// Whether every node of `graph` made it into the tree.
    ///
    /// On a disconnected graph the run only covers the start node's
    /// component and emits no diagnostic; this is how a caller can tell.
    pub fn is_spanning(&self, graph: &Graph) -> bool {
        graph
            .nodes()
            .iter()
            .all(|node| self.inclusion_order.contains(node))
    }

    /// Tree path from the start node to `node`, if it was included
    pub fn path_from_start(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.inclusion_order.contains(&node) {
            return None;
        }
        reconstruct_path(self.start, node, &self.parent)
    }
}

/// Run Prim from `start`.
///
/// Emits `include` and `update` records while running and exactly one
/// `final` record with the total weight and tree edges. On a disconnected
/// graph the result covers only the start node's component. A start node
/// absent from the graph yields an empty tree and no step records.
#[tracing::instrument(skip(graph, sink), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_tree(
    graph: &Graph,
    start: NodeId,
    sink: &mut dyn TraceSink,
) -> Result<SpanningTree> {
    let mut state = PrimState::new(start);

    if graph.contains(start) {
        while state.step(graph, sink)? {}
    } else {
        debug!(start, "start not in graph");
    }

    sink.emit(&TraceRecord::Final(FinalRecord::tree(
        state.edges.clone(),
        state.total,
    )))?;

    debug!(
        included = state.included.len(),
        pushed = state.frontier.pushed(),
        discarded = state.discarded,
        cost = state.total,
        "prim complete"
    );

    Ok(SpanningTree {
        start,
        cost: state.total,
        edges: state.edges,
        inclusion_order: state.inclusion_order,
        parent: state.parent,
    })
}

#[cfg(test)]
mod tests;
