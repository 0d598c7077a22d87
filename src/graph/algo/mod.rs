pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;

use std::fmt;

use fixedbitset::FixedBitSet;

use super::{DistanceMatrix, Graph, Weight, INF};

pub use bellman_ford::NegativeCycleErr;

/// Scratch state of one single-source run: the best known distance of every
/// vertex and the vertex that last improved it.
///
/// A fresh value is built by [`Paths::init_single_source`] for every source,
/// nothing carries over from a previous run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub source: usize,
    pub distances: Vec<Weight>,
    pub predecessors: Vec<Option<usize>>,
}

impl Paths {
    /// every vertex starts unreachable without predecessor, the source at 0
    pub fn init_single_source(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![INF; vertex_count];
        distances[source] = 0;

        Self {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    /// whether the edge `(u, v, w)` offers a shorter path to `v`.
    ///
    /// An edge out of a vertex still at [`INF`], or an edge of weight
    /// [`INF`], never does: the sentinel stays numerically inert. Neither
    /// does a sum that overflows [`Weight`].
    pub fn can_relax(&self, u: usize, v: usize, w: Weight) -> bool {
        self.candidate(u, w)
            .is_some_and(|candidate| self.distances[v] > candidate)
    }

    /// The single mutator of `distances` and `predecessors`, shared by
    /// Dijkstra and Bellman-Ford. Returns whether `v` improved.
    pub fn relax(&mut self, u: usize, v: usize, w: Weight) -> bool {
        match self.candidate(u, w) {
            Some(candidate) if self.distances[v] > candidate => {
                self.distances[v] = candidate;
                self.predecessors[v] = Some(u);
                true
            }
            _ => false,
        }
    }

    /// length of the path to `u` extended by an edge of weight `w`
    fn candidate(&self, u: usize, w: Weight) -> Option<Weight> {
        let from = self.distances[u];
        if from >= INF || w >= INF {
            return None;
        }
        from.checked_add(w)
    }

    /// the vertices from the source to `target`, both included.
    ///
    /// `None` if `target` is unreachable, or if the predecessor chain runs in a
    /// circle, which only happens after a run on a graph the algorithm does not
    /// support.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if self.distances.get(target).map_or(true, |&d| d >= INF) {
            return None;
        }

        let mut visited = FixedBitSet::with_capacity(self.distances.len());
        let mut path = vec![target];
        let mut node = target;
        visited.insert(node);

        while node != self.source {
            node = self.predecessors[node]?;
            if visited.put(node) {
                return None;
            }
            path.push(node);
        }

        path.reverse();
        Some(path)
    }
}

/// The three all-pairs strategies, in the order they are usually compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::FloydWarshall,
    ];

    /// run the algorithm for every source, only Bellman-Ford can fail
    pub fn all_pairs(self, graph: &Graph) -> Result<DistanceMatrix, NegativeCycleErr> {
        match self {
            Algorithm::Dijkstra => Ok(dijkstra::all_pairs(graph)),
            Algorithm::BellmanFord => bellman_ford::all_pairs(graph),
            Algorithm::FloydWarshall => Ok(floyd_warshall::floyd_warshall(graph)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra's algorithm",
            Algorithm::BellmanFord => "Bellman-Ford algorithm",
            Algorithm::FloydWarshall => "Floyd-Warshall algorithm",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// copy the distances of a finished single-source run into its result row
fn write_row(result: &mut DistanceMatrix, paths: &Paths) {
    result.row_mut(paths.source).copy_from_slice(&paths.distances);
}
