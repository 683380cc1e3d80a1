//! Immutable weighted undirected adjacency structure

use std::collections::BTreeMap;

use crate::graph::types::{Edge, Neighbor, NodeId, Weight};

/// Weighted undirected multigraph.
///
/// Every edge is stored as two adjacency entries of equal weight. Parallel
/// edges and self loops are accepted as given. Adjacency lists keep
/// insertion order and nodes are keyed in ascending order, so iteration is
/// reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<Neighbor>>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of edges, in order
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let edge = edge.into();
            graph.add_edge(edge.from, edge.to, edge.weight);
        }
        graph
    }

    /// The fixed 4-node graph used when a request supplies no edges
    pub fn default_graph() -> Self {
        Self::from_edges([(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8)])
    }

    /// Add an undirected edge. Weight sign is not checked: a negative weight
    /// silently breaks shortest-path guarantees.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, w: Weight) {
        self.adjacency
            .entry(u)
            .or_default()
            .push(Neighbor { node: v, weight: w });
        self.adjacency
            .entry(v)
            .or_default()
            .push(Neighbor { node: u, weight: w });
        self.edges.push(Edge::new(u, v, w));
    }

    /// Every distinct endpoint exactly once, ascending
    pub fn nodes(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    /// Supplied edges in insertion order, one entry per `add_edge` call
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Adjacency list of `node`, empty for unknown nodes
    pub fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
