//! Iterate-until-no-improvement 2-opt loop.
//!
//! The loop owns a [`Tour`] and borrows a read-only [`DistanceMatrix`].
//! Each pass asks the search step for one improving exchange; the step
//! applies it directly to the tour and reports its delta. The loop stops
//! when the step finds nothing (a 2-opt local optimum, the natural terminal
//! condition) or when the iteration cap is reached. Given the same matrix
//! and start tour the whole process is deterministic.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::local_search::improve_step;
use crate::tour::Tour;

/// Default iteration cap, a safety bound against pathological non-convergence.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Default strict-improvement threshold guarding against float noise.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Tuning knobs for the optimization loop.
///
/// The cap bounds runtime on pathological inputs; the epsilon keeps flat
/// plateaus from looping. There is rarely a reason to change the defaults
/// outside of tests.
///
/// # Examples
///
/// ```
/// use tour_opt::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default();
/// assert_eq!(config.max_iterations, 10_000);
/// assert_eq!(config.epsilon, 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Maximum number of exchanges to apply before giving up.
    pub max_iterations: usize,
    /// An exchange is accepted only if its delta is below `-epsilon`.
    pub epsilon: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Outcome of one optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// The final tour, a 2-opt local optimum unless the cap was hit.
    pub tour: Tour,
    /// Sum of all applied deltas. Zero or negative; negate for display as
    /// a positive "total improvement" figure.
    pub total_improvement: f64,
    /// Number of exchanges applied.
    pub iterations: usize,
}

/// Runs 2-opt from the identity tour `[0, 1, ..., n-1]`.
///
/// Validates the matrix (finite, non-negative entries) before entering the
/// loop; a malformed matrix is the only error surface.
///
/// # Examples
///
/// ```
/// use tour_opt::distance::DistanceMatrix;
/// use tour_opt::optimizer::{optimize, OptimizerConfig};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])?;
///
/// let result = optimize(&dm, &OptimizerConfig::default())?;
/// assert_eq!(result.tour.order(), &[0, 1, 3, 2]);
/// assert_eq!(result.iterations, 1);
/// assert!((result.total_improvement + 15.0).abs() < 1e-10);
/// # Ok::<(), tour_opt::Error>(())
/// ```
pub fn optimize(distances: &DistanceMatrix, config: &OptimizerConfig) -> Result<OptimizationResult> {
    optimize_from(Tour::identity(distances.size()), distances, config)
}

/// Runs 2-opt from a caller-supplied start tour.
///
/// The tour must cover exactly the matrix's cities; a length mismatch is
/// rejected with [`Error::SizeMismatch`] before the loop begins.
pub fn optimize_from(
    tour: Tour,
    distances: &DistanceMatrix,
    config: &OptimizerConfig,
) -> Result<OptimizationResult> {
    if tour.len() != distances.size() {
        return Err(Error::SizeMismatch {
            tour_len: tour.len(),
            matrix_size: distances.size(),
        });
    }
    distances.validate()?;

    let mut tour = tour;
    let mut total_improvement = 0.0;
    let mut iterations = 0;

    while iterations < config.max_iterations {
        match improve_step(&mut tour, distances, config.epsilon) {
            Some(mv) => {
                total_improvement += mv.delta;
                iterations += 1;
            }
            None => {
                debug!("local optimum after {iterations} exchanges");
                break;
            }
        }
    }
    if iterations == config.max_iterations {
        debug!("iteration cap {} reached", config.max_iterations);
    }

    Ok(OptimizationResult {
        tour,
        total_improvement,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("valid matrix")
    }

    #[test]
    fn test_converges_on_square_matrix() {
        let dm = square_matrix();
        let result = optimize(&dm, &OptimizerConfig::default()).expect("well-formed");
        assert_eq!(result.tour.order(), &[0, 1, 3, 2]);
        assert_eq!(result.iterations, 1);
        assert!((result.total_improvement + 15.0).abs() < 1e-10);
        assert!(result.tour.length(&dm) <= 95.0);
    }

    #[test]
    fn test_local_optimum_is_stable() {
        let dm = square_matrix();
        let result = optimize(&dm, &OptimizerConfig::default()).expect("well-formed");
        let mut tour = result.tour;
        // Re-running the step at DONE keeps reporting no improvement.
        assert!(improve_step(&mut tour, &dm, DEFAULT_EPSILON).is_none());
        assert!(improve_step(&mut tour, &dm, DEFAULT_EPSILON).is_none());
    }

    #[test]
    fn test_single_city_terminates_immediately() {
        let dm = DistanceMatrix::new(1);
        let result = optimize(&dm, &OptimizerConfig::default()).expect("well-formed");
        assert_eq!(result.iterations, 0);
        assert_eq!(result.total_improvement, 0.0);
        assert_eq!(result.tour.order(), &[0]);
    }

    #[test]
    fn test_two_cities_terminate_immediately() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 3.0);
        dm.set(1, 0, 4.0);
        let result = optimize(&dm, &OptimizerConfig::default()).expect("well-formed");
        assert_eq!(result.iterations, 0);
        assert_eq!(result.total_improvement, 0.0);
    }

    #[test]
    fn test_flat_matrix_terminates_immediately() {
        let mut dm = DistanceMatrix::new(5);
        for i in 0..5 {
            for j in 0..5 {
                if i != j {
                    dm.set(i, j, 7.0);
                }
            }
        }
        let result = optimize(&dm, &OptimizerConfig::default()).expect("well-formed");
        assert_eq!(result.iterations, 0);
        assert_eq!(result.total_improvement, 0.0);
        assert_eq!(result.tour.order(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_iteration_cap_respected() {
        let dm = square_matrix();
        let config = OptimizerConfig {
            max_iterations: 0,
            ..OptimizerConfig::default()
        };
        let result = optimize(&dm, &config).expect("well-formed");
        assert_eq!(result.iterations, 0);
        assert_eq!(result.tour.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let dm = square_matrix();
        let config = OptimizerConfig::default();
        let a = optimize(&dm, &config).expect("well-formed");
        let b = optimize(&dm, &config).expect("well-formed");
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.total_improvement, b.total_improvement);
    }

    #[test]
    fn test_rejects_malformed_matrix_before_loop() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 2, f64::NAN);
        assert!(matches!(
            optimize(&dm, &OptimizerConfig::default()),
            Err(Error::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_rejects_start_tour_size_mismatch() {
        let dm = square_matrix();
        let tour = Tour::identity(3);
        assert!(matches!(
            optimize_from(tour, &dm, &OptimizerConfig::default()),
            Err(Error::SizeMismatch {
                tour_len: 3,
                matrix_size: 4
            })
        ));
    }

    #[test]
    fn test_custom_start_tour() {
        let dm = square_matrix();
        let start = Tour::from_order(vec![0, 1, 3, 2]).expect("valid");
        let result =
            optimize_from(start, &dm, &OptimizerConfig::default()).expect("well-formed");
        // Already a local optimum: nothing to do.
        assert_eq!(result.iterations, 0);
        assert_eq!(result.tour.order(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_improvement_monotone_under_tight_cap() {
        // Each applied exchange is strictly improving, so widening the cap
        // can only decrease (or keep) the cumulative improvement.
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 5.0, 100.0],
            vec![1.0, 0.0, 10.0, 1.0],
            vec![5.0, 10.0, 0.0, 1.0],
            vec![100.0, 1.0, 1.0, 0.0],
        ])
        .expect("valid matrix");
        let mut previous = 0.0;
        for cap in 0..4 {
            let config = OptimizerConfig {
                max_iterations: cap,
                ..OptimizerConfig::default()
            };
            let result = optimize(&dm, &config).expect("well-formed");
            assert!(result.total_improvement <= previous);
            previous = result.total_improvement;
        }
    }
}
