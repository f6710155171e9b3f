//! Dense edge-weight matrix.

use crate::error::{Error, Result};

/// A dense n×n edge-weight matrix stored in row-major order.
///
/// `get(i, j)` is the cost of travelling directly from node `i` to node `j`.
/// Weights may be asymmetric; no triangle inequality is assumed.
///
/// # Examples
///
/// ```
/// use u_evopath::graph::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 1.0],
///     vec![7.0, 0.0, 7.0],
///     vec![5.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 2), 1.0);
/// assert_eq!(dm.get(2, 0), 5.0);
/// assert_eq!(dm.path_length(&[0, 2, 1]), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// Fails if there are no rows or any row length differs from the row count.
    pub fn from_rows<T: AsRef<[f64]>>(rows: &[T]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(Error::NonSquareMatrix {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the weight of the edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the weight of the edge `from → to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of nodes in the graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of edge weights along consecutive nodes of `nodes`.
    ///
    /// Sequences with fewer than two nodes have length zero.
    pub fn path_length(&self, nodes: &[usize]) -> f64 {
        nodes.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
