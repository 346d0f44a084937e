//! # tour-opt
//!
//! Traveling-salesman tour improvement using first-improvement 2-opt local
//! search over a dense, asymmetric-capable distance matrix.
//!
//! ## Modules
//!
//! - [`tour`] — Cyclic tour permutation and the segment-reversal primitive
//! - [`distance`] — Dense distance matrix
//! - [`local_search`] — Single improving-move 2-opt scan
//! - [`optimizer`] — Iterate-until-local-optimum loop, config, and result
//! - [`io`] — Matrix reader for the textual "n, then n×n grid" format
//! - [`error`] — Crate error type
//!
//! ## Example
//!
//! ```
//! use tour_opt::distance::DistanceMatrix;
//! use tour_opt::optimizer::{optimize, OptimizerConfig};
//!
//! let dm = DistanceMatrix::from_rows(&[
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ])?;
//!
//! let result = optimize(&dm, &OptimizerConfig::default())?;
//! assert!(result.tour.length(&dm) <= 95.0);
//! # Ok::<(), tour_opt::Error>(())
//! ```

pub mod distance;
pub mod error;
pub mod io;
pub mod local_search;
pub mod optimizer;
pub mod tour;

pub use error::{Error, Result};
