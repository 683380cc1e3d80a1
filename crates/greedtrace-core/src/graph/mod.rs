//! Graph model and greedy algorithms
//!
//! Provides the weighted undirected graph and the instrumented engines
//! that run over it:
//! - Dijkstra shortest path from a source to a destination
//! - Prim minimum spanning tree from a start node
//! - Predecessor-map path reconstruction shared by both

pub mod algos;
pub mod model;
pub mod reconstruct;
pub mod types;

pub use algos::{minimum_spanning_tree, shortest_path, ShortestPath, SpanningTree};
pub use model::Graph;
pub use reconstruct::reconstruct_path;
pub use types::{Edge, Neighbor, NodeId, Weight};
