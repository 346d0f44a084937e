//! Single improving-move 2-opt scan.
//!
//! # Algorithm
//!
//! For each pair of non-adjacent tour positions (i, j) with j ≥ i + 2,
//! compute the change in cycle length from removing edges
//! (t[i], t[i+1]) and (t[j], t[(j+1) mod n]) and reconnecting as
//! (t[i], t[j]) and (t[i+1], t[(j+1) mod n]):
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[(j+1) % n])
//!       - d(t[i], t[i+1]) - d(t[j], t[(j+1) % n])
//! ```
//!
//! The first pair with delta < -epsilon is applied immediately by reversing
//! the segment [i+1, j+1) and the scan stops (first-improvement strategy,
//! fixed row-major tie-break). The cyclic successor keeps the closing edge
//! t[n-1] → t[0] in play, so the tour is treated as a closed cycle.
//!
//! # Complexity
//!
//! O(n²) per call; at most one reversal is applied.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::tour::Tour;

/// A 2-opt exchange that was found and applied by [`improve_step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeMove {
    /// Outer cut position: the edge after tour position `i` was removed.
    pub i: usize,
    /// Inner cut position: the edge after tour position `j` was removed.
    pub j: usize,
    /// Change in cycle length. Always strictly below the scan's `-epsilon`.
    pub delta: f64,
}

/// Scans for the first strictly improving 2-opt exchange and applies it.
///
/// Positions are enumerated with `i` in `0..n-1` and `j` in `i+2..n`,
/// skipping adjacent pairs (reversing a single entry changes nothing).
/// On a hit the segment `[i+1, j+1)` is reversed in place and the move is
/// returned; `None` means the tour is 2-opt locally optimal under
/// `epsilon`, and the tour is left untouched.
///
/// `epsilon` guards against floating-point noise: only exchanges with
/// `delta < -epsilon` are accepted, so flat plateaus never loop.
///
/// # Examples
///
/// ```
/// use tour_opt::distance::DistanceMatrix;
/// use tour_opt::local_search::improve_step;
/// use tour_opt::tour::Tour;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])?;
/// let mut tour = Tour::identity(4);
///
/// let mv = improve_step(&mut tour, &dm, 1e-10).expect("improvable");
/// assert_eq!((mv.i, mv.j), (1, 3));
/// assert!((mv.delta + 15.0).abs() < 1e-10);
/// assert_eq!(tour.order(), &[0, 1, 3, 2]);
/// # Ok::<(), tour_opt::Error>(())
/// ```
pub fn improve_step(
    tour: &mut Tour,
    distances: &DistanceMatrix,
    epsilon: f64,
) -> Option<ExchangeMove> {
    let n = tour.len();
    if n < 3 {
        return None;
    }

    for i in 0..n - 1 {
        for j in i + 2..n {
            let succ_j = (j + 1) % n;
            let delta = -distances.get(tour.city(i), tour.city(i + 1))
                - distances.get(tour.city(j), tour.city(succ_j))
                + distances.get(tour.city(i), tour.city(j))
                + distances.get(tour.city(i + 1), tour.city(succ_j));

            if delta < -epsilon {
                tour.reverse_segment(i + 1, j + 1);
                return Some(ExchangeMove { i, j, delta });
            }
        }
    }

    None
}
