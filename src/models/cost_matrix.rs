//! Dense unit-cost matrix.

/// A dense rows×cols unit-cost matrix stored in row-major order.
///
/// `get(i, j)` is the cost of shipping one unit from origin `i` to
/// destination `j`. The matrix is never mutated after construction.
///
/// # Examples
///
/// ```
/// use u_transport::models::CostMatrix;
///
/// let costs = CostMatrix::from_rows(&[
///     vec![8.0, 6.0, 10.0],
///     vec![9.0, 12.0, 13.0],
/// ]).expect("rectangular");
/// assert_eq!(costs.num_origins(), 2);
/// assert_eq!(costs.num_destinations(), 3);
/// assert_eq!(costs.get(1, 2), 13.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    /// Builds a cost matrix from nested rows.
    ///
    /// Returns `None` if `rows` is empty, any row is empty, or the rows
    /// have unequal lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let data = rows.iter().flatten().copied().collect();
        Some(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the unit cost from origin `i` to destination `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    /// Number of origins (rows).
    pub fn num_origins(&self) -> usize {
        self.rows
    }

    /// Number of destinations (columns).
    pub fn num_destinations(&self) -> usize {
        self.cols
    }
}
