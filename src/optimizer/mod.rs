//! Optimization loop, configuration, and result.
//!
//! - [`engine`] — Run 2-opt to a local optimum from the identity tour or a
//!   caller-supplied start tour

mod engine;

pub use engine::{
    optimize, optimize_from, OptimizationResult, OptimizerConfig, DEFAULT_EPSILON,
    DEFAULT_MAX_ITERATIONS,
};
