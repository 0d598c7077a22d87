use tracing::{debug, warn};

use crate::graph::{DistanceMatrix, Graph, INF};

/// floyd_warshall shortest path algorithm, this algorithm has N * N * N time complexity,
/// which means it scale badly.
///
/// The result matrix starts as a copy of the weight matrix with a zero diagonal and is then
/// updated in place: for every intermediate vertex `k`, any pair `(i, j)` whose path through `k`
/// is shorter gets shrunk. A cell holding [`INF`] is never used as an addend, so the sentinel
/// can't leak into a finite sum, and a sum that overflows
/// [`Weight`](crate::graph::Weight) is dropped.
///
/// Negative cycles are not reported as an error. When the graph has one, some diagonal entry
/// ends up below zero and the other entries are not shortest paths; see
/// [`negative_cycle_vertices`].
pub fn floyd_warshall(graph: &Graph) -> DistanceMatrix {
    let node_count = graph.vertex_count();
    debug!(vertices = node_count, "running floyd-warshall");

    let mut distance = graph.weights().clone();

    // the default value from node to self is zero
    for i in 0..node_count {
        distance[(i, i)] = 0;
    }

    // increasly add extra node to find the shortest path in every node pair
    for k in 0..node_count {
        for i in 0..node_count {
            let via_k = distance[(i, k)];
            if via_k >= INF {
                continue;
            }
            for j in 0..node_count {
                let rest = distance[(k, j)];
                if rest >= INF {
                    continue;
                }
                // a sum past the integer range is never a usable path
                let Some(candidate) = via_k.checked_add(rest) else {
                    continue;
                };
                if candidate < distance[(i, j)] {
                    distance[(i, j)] = candidate;
                }
            }
        }
    }

    let negative = negative_cycle_vertices(&distance);
    if !negative.is_empty() {
        warn!(
            vertices = ?negative,
            "negative-weight cycle found, floyd-warshall distances are not reliable"
        );
    }

    distance
}

/// vertices lying on a negative-weight cycle, i.e. with a negative diagonal entry
/// after [`floyd_warshall`]
pub fn negative_cycle_vertices(distances: &DistanceMatrix) -> Vec<usize> {
    distances
        .diagonal()
        .enumerate()
        .filter(|&(_, d)| d < 0)
        .map(|(i, _)| i)
        .collect()
}
