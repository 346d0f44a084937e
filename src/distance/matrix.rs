//! Dense distance matrix.

use crate::error::{Error, Result};

/// A dense n×n distance matrix stored in row-major order.
///
/// `get(i, j)` is the cost of traveling directly from city `i` to city `j`.
/// The matrix need not be symmetric; diagonal entries must exist but are
/// never read by the optimizer.
///
/// # Examples
///
/// ```
/// use tour_opt::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 5.0],
///     vec![7.0, 0.0],
/// ])?;
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.get(1, 0), 7.0);
/// # Ok::<(), tour_opt::Error>(())
/// ```
#[derive(Debug, Clone)]
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

    /// Creates a distance matrix from an explicit flat n×n grid.
    ///
    /// Returns [`Error::DimensionMismatch`] if the data length doesn't
    /// match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::DimensionMismatch {
                size,
                len: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from row vectors.
    ///
    /// Returns [`Error::RowLength`] if any row's width differs from the
    /// number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::RowLength {
                    row: i,
                    expected: n,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size: n })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks the well-formedness contract: every entry finite and non-negative.
    ///
    /// The optimizer calls this once before entering its loop; a malformed
    /// matrix is rejected up front rather than mid-search.
    pub fn validate(&self) -> Result<()> {
        for from in 0..self.size {
            for to in 0..self.size {
                let value = self.get(from, to);
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidDistance { from, to, value });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 3.0],
            vec![8.0, 3.0, 0.0],
        ]
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(&sample_rows()).expect("valid");
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(2, 1), 3.0);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(
            DistanceMatrix::from_rows(&rows),
            Err(Error::RowLength {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 7.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 7.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_rows(&sample_rows()).expect("valid");
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let dm = DistanceMatrix::from_rows(&sample_rows()).expect("valid");
        assert!(dm.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, f64::NAN);
        assert!(matches!(
            dm.validate(),
            Err(Error::InvalidDistance { from: 0, to: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_infinite() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(1, 0, f64::INFINITY);
        assert!(dm.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(1, 0, -1.0);
        assert!(dm.validate().is_err());
    }
}
