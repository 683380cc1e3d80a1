use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::algos::shared::Frontier;
use crate::graph::reconstruct::reconstruct_path;
use crate::graph::types::{NodeId, Weight};
use crate::graph::Graph;
use crate::trace::{FinalRecord, TraceRecord, TraceSink};

/// State owned by a single Dijkstra run.
///
/// A node missing from `distance` is at +infinity. Distances only ever
/// decrease and `visited` only ever grows.
#[derive(Debug)]
pub struct DijkstraState {
    source: NodeId,
    distance: HashMap<NodeId, Weight>,
    predecessor: HashMap<NodeId, NodeId>,
    visited: HashSet<NodeId>,
    visit_order: Vec<NodeId>,
    frontier: Frontier,
    discarded: usize,
}

impl DijkstraState {
    /// Seed the run: distance[source] = 0 and (0, source) queued
    pub fn new(source: NodeId) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(0, source);

        Self {
            source,
            distance: HashMap::from([(source, 0)]),
            predecessor: HashMap::new(),
            visited: HashSet::new(),
            visit_order: Vec::new(),
            frontier,
            discarded: 0,
        }
    }

    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.distance.get(&node).copied()
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessor.get(&node).copied()
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    /// Nodes in the order they were finalized
    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    /// Queue entries currently waiting, stale ones included
    pub fn queued(&self) -> usize {
        self.frontier.len()
    }

    /// Pop and process one frontier entry.
    ///
    /// Returns `false` once the frontier is exhausted. Stale and duplicate
    /// entries are consumed without emitting anything.
    pub fn step(&mut self, graph: &Graph, sink: &mut dyn TraceSink) -> Result<bool> {
        let Some((d, u)) = self.frontier.pop() else {
            return Ok(false);
        };

        if self.distance(u).is_some_and(|best| d > best) {
            trace!(node = u, priority = d, "discard stale entry");
            self.discarded += 1;
            return Ok(true);
        }
        if !self.visited.insert(u) {
            trace!(node = u, priority = d, "discard visited entry");
            self.discarded += 1;
            return Ok(true);
        }

        self.visit_order.push(u);
        sink.emit(&TraceRecord::visit(u, d))?;

        for neighbor in graph.neighbors(u) {
            let candidate = d.saturating_add(neighbor.weight);
            let improves = self
                .distance(neighbor.node)
                .is_none_or(|current| candidate < current);

            if improves {
                self.distance.insert(neighbor.node, candidate);
                self.predecessor.insert(neighbor.node, u);
                self.frontier.push(candidate, neighbor.node);
                sink.emit(&TraceRecord::distance_update(neighbor.node, candidate))?;
            }
        }

        Ok(true)
    }

    /// Resolve the path to `destination` from the predecessor table
    pub fn path_to(&self, destination: NodeId) -> Option<Vec<NodeId>> {
        if destination != self.source && !self.predecessor.contains_key(&destination) {
            return None;
        }
        reconstruct_path(self.source, destination, &self.predecessor)
    }
}

/// Outcome of a shortest-path run
#[derive(Debug)]
pub struct ShortestPath {
    pub source: NodeId,
    pub destination: NodeId,
    /// Source-to-destination nodes, `None` when unreachable
    pub path: Option<Vec<NodeId>>,
    pub cost: Option<Weight>,
    pub state: DijkstraState,
}

impl ShortestPath {
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }
}

/// Run Dijkstra from `source` and report the path to `destination`.
///
/// Emits `visit` and `update` records while running and exactly one
/// `final` record at the end. Bracketing `init`/`end` records belong to
/// the caller. Source and destination need not exist in the graph; an
/// absent node is unreachable, and an absent source emits no step records.
#[tracing::instrument(skip(graph, sink), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn shortest_path(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
    sink: &mut dyn TraceSink,
) -> Result<ShortestPath> {
    let mut state = DijkstraState::new(source);

    let path = if graph.contains(source) {
        while state.step(graph, sink)? {}
        state.path_to(destination)
    } else {
        debug!(source, "source not in graph");
        None
    };
    let cost = path.as_ref().and_then(|_| state.distance(destination));

    let record = match (&path, cost) {
        (Some(nodes), Some(cost)) => FinalRecord::path(nodes.clone(), cost),
        _ => FinalRecord::no_path(destination),
    };
    sink.emit(&TraceRecord::Final(record))?;

    debug!(
        visited = state.visited.len(),
        pushed = state.frontier.pushed(),
        discarded = state.discarded,
        reachable = path.is_some(),
        cost,
        "dijkstra complete"
    );

    Ok(ShortestPath {
        source,
        destination,
        path,
        cost,
        state,
    })
}
