//! Graph algorithm implementations
//!
//! Contains the instrumented greedy engines:
//! - `dijkstra`: shortest path from a source to a destination
//! - `prim`: minimum spanning tree from a start node
//! - `shared`: the lazy-deletion frontier queue both engines pop from

pub mod dijkstra;
pub mod prim;
pub mod shared;

pub use dijkstra::{shortest_path, DijkstraState, ShortestPath};
pub use prim::{minimum_spanning_tree, PrimState, SpanningTree};
pub use shared::{Frontier, HeapEntry};
