use crate::graph::Weight;

/// A priority queue implemention with binary-heap structure, holding vertex
/// indices ordered by an external distance table.
///
/// The heap never owns the keys: each call that needs ordering borrows the
/// current `distances`, so the keys may change between calls. Vertices are
/// only appended when the heap is built, and `extract_min` rebuilds the whole
/// heap before it removes the root instead of trusting any earlier order.
pub struct MinHeap {
    data: Vec<usize>,
}

impl MinHeap {
    /// a heap holding every vertex `0..count`, appended in index order and
    /// not yet heap-ordered
    pub fn with_vertices(count: usize) -> Self {
        MinHeap {
            data: (0..count).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// restore the heap order bottom-up, from the last parent to the root
    pub fn heapify(&mut self, distances: &[Weight]) {
        for pos in (0..self.data.len() / 2).rev() {
            self.heap_down(pos, distances);
        }
    }

    /// remove and return the vertex with the smallest distance
    pub fn extract_min(&mut self, distances: &[Weight]) -> Option<usize> {
        if self.data.is_empty() {
            return None;
        }
        self.heapify(distances);

        // the last element takes the place of the root
        let root = self.data.swap_remove(0);
        self.heap_down(0, distances);
        Some(root)
    }

    /// heap-down from a specified position, the loop runs at most once per
    /// tree level
    fn heap_down(&mut self, mut pos: usize, distances: &[Weight]) {
        let end_pos = self.data.len();

        loop {
            let left = left_child_pos(pos);
            if left >= end_pos {
                // a leaf is a fixed point
                break;
            }

            let right = left + 1;
            // on a tie between the children, the right one wins
            let child = if right < end_pos
                && self.key(right, distances) <= self.key(left, distances)
            {
                right
            } else {
                left
            };

            if self.key(pos, distances) <= self.key(child, distances) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }

    fn key(&self, pos: usize, distances: &[Weight]) -> Weight {
        distances[self.data[pos]]
    }

    #[cfg(test)]
    fn is_heap(&self, distances: &[Weight]) -> bool {
        (1..self.data.len())
            .all(|pos| self.key(parent_pos(pos), distances) <= self.key(pos, distances))
    }
}

fn left_child_pos(pos: usize) -> usize {
    pos * 2 + 1
}

#[cfg(test)]
fn parent_pos(pos: usize) -> usize {
    (pos - 1) / 2
}
