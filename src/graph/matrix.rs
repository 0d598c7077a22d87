use std::ops::{Index, IndexMut};

use super::Weight;

/// A square matrix of weights stored as one flat, row-major array.
///
/// The same layout backs both the graph's adjacency weights and the
/// all-pairs result of every algorithm, so results can be compared cell by
/// cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    /// a flat array format of matrix, `Vec<Vec<Weight>>` would scatter the rows
    /// across the heap and waste a length/capacity pair per row
    data: Vec<Weight>,
    dimension: usize,
}

/// Every all-pairs algorithm returns `result[source][target]` in this shape.
pub type DistanceMatrix = Matrix;

/// return the cell pos of (row, column)
fn get_cell_pos(row: usize, column: usize, width: usize) -> usize {
    row * width + column
}

impl Matrix {
    /// a `dimension * dimension` matrix with every cell set to `fill`
    pub fn filled(dimension: usize, fill: Weight) -> Self {
        Self {
            data: vec![fill; dimension * dimension],
            dimension,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Weight> {
        if row >= self.dimension || column >= self.dimension {
            return None;
        }
        Some(self.data[get_cell_pos(row, column, self.dimension)])
    }

    pub fn row(&self, row: usize) -> &[Weight] {
        let start = get_cell_pos(row, 0, self.dimension);
        &self.data[start..start + self.dimension]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [Weight] {
        let start = get_cell_pos(row, 0, self.dimension);
        &mut self.data[start..start + self.dimension]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        // `chunks` panics on a zero chunk size
        self.data.chunks(self.dimension.max(1))
    }

    /// the main diagonal, `self[(i, i)]` for every i
    pub fn diagonal(&self) -> impl Iterator<Item = Weight> + '_ {
        (0..self.dimension).map(move |i| self[(i, i)])
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Weight;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.dimension && column < self.dimension,
            "cell ({row}, {column}) out of bound for dimension {}",
            self.dimension
        );
        &self.data[get_cell_pos(row, column, self.dimension)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.dimension && column < self.dimension,
            "cell ({row}, {column}) out of bound for dimension {}",
            self.dimension
        );
        &mut self.data[get_cell_pos(row, column, self.dimension)]
    }
}
