//! Tour permutation and segment reversal.

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// An ordered permutation of city indices `0..n`, interpreted cyclically:
/// the city after the last entry is the first entry.
///
/// The permutation invariant (no duplicate or missing index) holds for the
/// whole lifetime of the value. Construction either builds the identity
/// permutation or validates a caller-supplied order; the only mutator,
/// [`reverse_segment`](Tour::reverse_segment), reorders entries without
/// changing the set of cities.
///
/// # Examples
///
/// ```
/// use tour_opt::tour::Tour;
///
/// let mut tour = Tour::identity(5);
/// assert_eq!(tour.order(), &[0, 1, 2, 3, 4]);
///
/// tour.reverse_segment(1, 4);
/// assert_eq!(tour.order(), &[0, 3, 2, 1, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Creates the identity tour visiting cities in index order `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Creates a tour from an explicit visit order.
    ///
    /// Returns [`Error::NotAPermutation`] if `order` contains a duplicate,
    /// an out-of-range index, or omits a city.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_opt::tour::Tour;
    ///
    /// assert!(Tour::from_order(vec![2, 0, 1]).is_ok());
    /// assert!(Tour::from_order(vec![2, 0, 2]).is_err());
    /// assert!(Tour::from_order(vec![0, 3]).is_err());
    /// ```
    pub fn from_order(order: Vec<usize>) -> Result<Self> {
        let n = order.len();
        let mut seen = vec![false; n];
        for &city in &order {
            if city >= n || seen[city] {
                return Err(Error::NotAPermutation { len: n });
            }
            seen[city] = true;
        }
        Ok(Self { order })
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The visit order as a slice of city indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning the visit order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// The city at tour position `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    pub fn city(&self, pos: usize) -> usize {
        self.order[pos]
    }

    /// Reverses the entries in the half-open position range `[lo, hi)` in place.
    ///
    /// This is the mechanical realization of a 2-opt exchange: cutting the
    /// edges after positions `i` and `j` and reconnecting them is exactly a
    /// reversal of `[i + 1, j + 1)`. Only the order within the range
    /// changes; the set of visited cities does not.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi > self.len()`.
    pub fn reverse_segment(&mut self, lo: usize, hi: usize) {
        self.order[lo..hi].reverse();
    }

    /// Total length of the closed cycle
    /// `order[0] → order[1] → ... → order[n-1] → order[0]`.
    ///
    /// Returns 0.0 for tours of fewer than two cities.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_opt::distance::DistanceMatrix;
    /// use tour_opt::tour::Tour;
    ///
    /// let dm = DistanceMatrix::from_rows(&[
    ///     vec![0.0, 1.0, 4.0],
    ///     vec![2.0, 0.0, 1.0],
    ///     vec![1.0, 3.0, 0.0],
    /// ])?;
    /// let tour = Tour::identity(3);
    /// // 0→1 (1) + 1→2 (1) + 2→0 (1)
    /// assert!((tour.length(&dm) - 3.0).abs() < 1e-10);
    /// # Ok::<(), tour_opt::Error>(())
    /// ```
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        let n = self.order.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n {
            total += distances.get(self.order[i], self.order[(i + 1) % n]);
        }
        total
    }
}
