//! Allocation matrix filled in by the construction heuristics.

/// A dense rows×cols allocation matrix stored in row-major order.
///
/// `get(i, j)` is the quantity shipped from origin `i` to destination `j`.
/// Starts all-zero; the heuristics write each cell at most once in
/// non-degenerate runs.
///
/// # Examples
///
/// ```
/// use u_transport::models::Allocation;
///
/// let mut alloc = Allocation::zeros(2, 3);
/// alloc.set(0, 1, 15.0);
/// assert_eq!(alloc.get(0, 1), 15.0);
/// assert_eq!(alloc.row_sum(0), 15.0);
/// assert_eq!(alloc.col_sum(1), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Allocation {
    /// Creates an all-zero allocation matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Returns the quantity shipped from origin `i` to destination `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    /// Sets the quantity shipped from origin `i` to destination `j`.
    pub fn set(&mut self, i: usize, j: usize, quantity: f64) {
        self.data[i * self.cols + j] = quantity;
    }

    /// Number of origins (rows).
    pub fn num_origins(&self) -> usize {
        self.rows
    }

    /// Number of destinations (columns).
    pub fn num_destinations(&self) -> usize {
        self.cols
    }

    /// Total quantity shipped out of origin `i`.
    pub fn row_sum(&self, i: usize) -> f64 {
        (0..self.cols).map(|j| self.get(i, j)).sum()
    }

    /// Total quantity received by destination `j`.
    pub fn col_sum(&self, j: usize) -> f64 {
        (0..self.rows).map(|i| self.get(i, j)).sum()
    }

    /// Converts to nested rows, e.g. for serialization.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows)
            .map(|i| self.data[i * self.cols..(i + 1) * self.cols].to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let alloc = Allocation::zeros(2, 3);
        assert_eq!(alloc.num_origins(), 2);
        assert_eq!(alloc.num_destinations(), 3);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(alloc.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn test_set_get() {
        let mut alloc = Allocation::zeros(2, 2);
        alloc.set(1, 0, 7.0);
        assert_eq!(alloc.get(1, 0), 7.0);
        assert_eq!(alloc.get(0, 1), 0.0);
    }

    #[test]
    fn test_row_col_sums() {
        let mut alloc = Allocation::zeros(2, 2);
        alloc.set(0, 0, 3.0);
        alloc.set(0, 1, 4.0);
        alloc.set(1, 1, 5.0);
        assert_eq!(alloc.row_sum(0), 7.0);
        assert_eq!(alloc.row_sum(1), 5.0);
        assert_eq!(alloc.col_sum(0), 3.0);
        assert_eq!(alloc.col_sum(1), 9.0);
    }

    #[test]
    fn test_to_rows() {
        let mut alloc = Allocation::zeros(2, 2);
        alloc.set(0, 1, 1.0);
        alloc.set(1, 0, 2.0);
        assert_eq!(alloc.to_rows(), vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
    }
}
