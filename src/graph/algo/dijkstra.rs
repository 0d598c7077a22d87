use tracing::{debug, trace};

use super::{write_row, Paths};
use crate::{
    graph::{DistanceMatrix, Graph, INF},
    min_heap::MinHeap,
};

/// Single-source shortest paths, always settling the closest vertex first.
///
/// Every vertex enters a fresh min-heap up front; each extraction relaxes the
/// edge from the extracted vertex to every other vertex, including pairs
/// without an edge, whose [`INF`] weight makes the relaxation a no-op. The
/// loop therefore ends after exactly `vertex_count` extractions.
///
/// Negative edges reachable from `source` are not checked for and give wrong
/// distances, not an error. Use Bellman-Ford on such graphs.
pub fn dijkstra(graph: &Graph, source: usize) -> Paths {
    let node_count = graph.vertex_count();
    let mut paths = Paths::init_single_source(node_count, source);
    let mut priority_queue = MinHeap::with_vertices(node_count);

    // always try to visit the closest point
    while let Some(node) = priority_queue.extract_min(&paths.distances) {
        for (target, &weight) in graph.weights().row(node).iter().enumerate() {
            if target != node {
                paths.relax(node, target, weight);
            }
        }
    }

    trace!(
        source,
        reached = paths.distances.iter().filter(|&&d| d < INF).count(),
        "dijkstra pass finished"
    );
    paths
}

/// run [`dijkstra`] once per source, `result[source][target]` is the distance
pub fn all_pairs(graph: &Graph) -> DistanceMatrix {
    let node_count = graph.vertex_count();
    debug!(vertices = node_count, "running dijkstra from every source");

    let mut result = DistanceMatrix::filled(node_count, INF);
    for source in 0..node_count {
        write_row(&mut result, &dijkstra(graph, source));
    }
    result
}
