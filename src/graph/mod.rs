use indexmap::IndexSet;
use thiserror::Error;
use tracing::debug;

pub use matrix::*;

pub mod algo;
mod matrix;

/// Integer edge weight and path length.
pub type Weight = i32;

/// The "no edge" / "unreachable" sentinel. It is a plain finite value so it can
/// take part in additive comparisons. Real path lengths are expected to stay
/// below it, any sum reaching it counts as unreachable.
pub const INF: Weight = 9999;

/// Maximum vertex count used when no explicit capacity is given.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph has {count} vertices but its capacity is {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },
    #[error("vertex name `{0}` is used more than once")]
    DuplicateVertex(String),
    #[error("weight matrix has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },
    #[error("weight matrix row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("vertex index {index} out of bound, graph has {count} vertices")]
    VertexOutOfBounds { index: usize, count: usize },
}

pub trait IntoWeightedEdge<E> {
    type NodeId;

    fn into_weighted_edge(self) -> (Self::NodeId, Self::NodeId, E);
}

impl<N, E> IntoWeightedEdge<E> for (N, N, E) {
    type NodeId = N;

    fn into_weighted_edge(self) -> (Self::NodeId, Self::NodeId, E) {
        self
    }
}

/// A finite, off-diagonal entry of the weight matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex<'a> {
    pub index: usize,
    pub name: &'a str,
}

/// A directed weighted graph over a small, fixed set of named vertices.
///
/// The topology is immutable once built: the weight matrix is the source of
/// truth and the edge list is derived from it exactly once, in row-major
/// order. Algorithms keep their per-source state outside the graph, see
/// [`algo::Paths`].
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: IndexSet<String>,
    weights: Matrix,
    edges: Vec<Edge>,
    capacity: usize,
}

impl Graph {
    /// build a graph from vertex names and a square weight matrix, using
    /// [`DEFAULT_CAPACITY`] as the vertex bound
    pub fn new<I, S, R>(names: I, rows: R) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator,
        R::Item: AsRef<[Weight]>,
    {
        Self::with_capacity(DEFAULT_CAPACITY, names, rows)
    }

    /// build a graph from vertex names and a square weight matrix.
    ///
    /// Entries at or above [`INF`] mean "no edge" and the diagonal never holds
    /// an edge. Fails without producing a partial graph when there are more
    /// names than `capacity`, a name repeats, or the matrix is not `N x N`.
    pub fn with_capacity<I, S, R>(capacity: usize, names: I, rows: R) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator,
        R::Item: AsRef<[Weight]>,
    {
        let vertices = collect_vertices(capacity, names)?;
        let count = vertices.len();

        let rows: Vec<R::Item> = rows.into_iter().collect();
        if rows.len() != count {
            return Err(GraphError::RowCount {
                expected: count,
                found: rows.len(),
            });
        }

        let mut weights = Matrix::filled(count, INF);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != count {
                return Err(GraphError::RaggedRow {
                    row: i,
                    expected: count,
                    found: row.len(),
                });
            }
            for (cell, &weight) in weights.row_mut(i).iter_mut().zip(row) {
                *cell = weight.min(INF);
            }
        }

        Ok(Self::from_parts(vertices, weights, capacity))
    }

    /// build a graph from vertex names and `(source, target, weight)` triples,
    /// every pair not listed has no edge. A repeated pair keeps the last weight.
    pub fn from_edges<I, S, E, W>(names: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = W>,
        W: IntoWeightedEdge<Weight, NodeId = usize>,
    {
        let vertices = collect_vertices(DEFAULT_CAPACITY, names)?;
        let count = vertices.len();
        let mut weights = Matrix::filled(count, INF);

        for edge in edges {
            let (source, target, weight) = edge.into_weighted_edge();
            for index in [source, target] {
                if index >= count {
                    return Err(GraphError::VertexOutOfBounds { index, count });
                }
            }
            weights[(source, target)] = weight.min(INF);
        }

        Ok(Self::from_parts(vertices, weights, DEFAULT_CAPACITY))
    }

    fn from_parts(vertices: IndexSet<String>, weights: Matrix, capacity: usize) -> Self {
        let edges = derive_edges(&weights);
        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            capacity,
            "graph constructed"
        );

        Self {
            vertices,
            weights,
            edges,
            capacity,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// all finite off-diagonal edges, in row-major order of the weight matrix
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// direct edge cost from `source` to `target`, [`INF`] when there is none
    pub fn weight(&self, source: usize, target: usize) -> Weight {
        self.weights[(source, target)]
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.vertices.get_index_of(name)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.vertices.get_index(index).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(String::as_str)
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex<'_>> + '_ {
        self.names()
            .enumerate()
            .map(|(index, name)| Vertex { index, name })
    }
}

fn collect_vertices<I, S>(capacity: usize, names: I) -> Result<IndexSet<String>, GraphError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    if names.len() > capacity {
        return Err(GraphError::CapacityExceeded {
            count: names.len(),
            capacity,
        });
    }

    let mut vertices = IndexSet::with_capacity(names.len());
    for name in names {
        if vertices.contains(&name) {
            return Err(GraphError::DuplicateVertex(name));
        }
        vertices.insert(name);
    }

    Ok(vertices)
}

/// the edge list is exactly the set of (i, j) with i != j and weight < INF
fn derive_edges(weights: &Matrix) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (source, row) in weights.rows().enumerate() {
        for (target, &weight) in row.iter().enumerate() {
            if source != target && weight < INF {
                edges.push(Edge {
                    source,
                    target,
                    weight,
                });
            }
        }
    }
    edges
}
