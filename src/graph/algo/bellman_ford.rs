use fixedbitset::FixedBitSet;
use thiserror::Error;
use tracing::{debug, trace, warn};

use super::{write_row, Paths};
use crate::graph::{DistanceMatrix, Graph, INF};

/// A negative-weight cycle is reachable from the contained source vertex, so
/// shortest paths from it are undefined.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("negative-weight cycle reachable from vertex {0}")]
pub struct NegativeCycleErr(pub usize);

/// bellman ford shortest path algorithm, could be used to find shortest path in a negative
/// weight graph. It relaxes every edge of the graph in a fixed order, `node_count - 1` times,
/// which is enough for the longest simple path. One more scan then tells whether some edge could
/// still be relaxed, which is only possible when a negative cycle is reachable from `source`.
///
/// The run stops at the first such edge, the partially relaxed state is dropped.
pub fn bellman_ford(graph: &Graph, source: usize) -> Result<Paths, NegativeCycleErr> {
    let paths = construct_bellman(graph, source);

    // check if there is negative cycle in the graph
    for edge in graph.edges() {
        if paths.can_relax(edge.source, edge.target, edge.weight) {
            warn!(
                source,
                from = edge.source,
                to = edge.target,
                "negative-weight cycle detected"
            );
            return Err(NegativeCycleErr(source));
        }
    }

    trace!(source, "bellman-ford pass finished");
    Ok(paths)
}

/// run [`bellman_ford`] once per source.
///
/// The first source that reaches a negative cycle aborts the whole
/// computation, no partially filled matrix is returned.
pub fn all_pairs(graph: &Graph) -> Result<DistanceMatrix, NegativeCycleErr> {
    let node_count = graph.vertex_count();
    debug!(
        vertices = node_count,
        edges = graph.edge_count(),
        "running bellman-ford from every source"
    );

    let mut result = DistanceMatrix::filled(node_count, INF);
    for source in 0..node_count {
        write_row(&mut result, &bellman_ford(graph, source)?);
    }
    Ok(result)
}

/// find a negative cycle reachable from source node.
///
/// The cycle is listed in edge order, starting at its smallest vertex index,
/// so `[1, 3, 2]` stands for `1 -> 3 -> 2 -> 1`.
pub fn find_negative_cycle(graph: &Graph, source: usize) -> Option<Vec<usize>> {
    let node_count = graph.vertex_count();
    let mut paths = construct_bellman(graph, source);

    // an extra full pass, the last vertex it relaxes hangs off a negative cycle
    let mut last_relaxed = None;
    for edge in graph.edges() {
        if paths.relax(edge.source, edge.target, edge.weight) {
            last_relaxed = Some(edge.target);
        }
    }
    let mut node = last_relaxed?;

    // walking back node_count steps is enough to land inside the cycle
    for _ in 0..node_count {
        node = paths.predecessors[node]?;
    }

    let mut visited = FixedBitSet::with_capacity(node_count);
    let mut cycle = Vec::new();
    while !visited.put(node) {
        cycle.push(node);
        node = paths.predecessors[node]?;
    }

    // the predecessor walk goes against the edges
    cycle.reverse();
    let start = cycle
        .iter()
        .enumerate()
        .min_by_key(|&(_, &v)| v)
        .map(|(pos, _)| pos)?;
    cycle.rotate_left(start);

    Some(cycle)
}

fn construct_bellman(graph: &Graph, source: usize) -> Paths {
    let node_count = graph.vertex_count();
    let mut paths = Paths::init_single_source(node_count, source);

    for _ in 0..node_count.saturating_sub(1) {
        for edge in graph.edges() {
            paths.relax(edge.source, edge.target, edge.weight);
        }
    }

    paths
}
