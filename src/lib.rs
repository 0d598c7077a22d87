//! All-pairs shortest paths over a small, named, directed weighted graph,
//! computed three independent ways: Dijkstra and Bellman-Ford once per
//! source, and a single Floyd-Warshall pass.

pub mod graph;
pub mod min_heap;
pub mod parse;
pub mod report;

pub use graph::{
    algo::{Algorithm, NegativeCycleErr, Paths},
    DistanceMatrix, Edge, Graph, GraphError, Weight, DEFAULT_CAPACITY, INF,
};
