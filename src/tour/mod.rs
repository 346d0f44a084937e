//! Cyclic tour permutation.
//!
//! - [`Tour`] — Ordered permutation of city indices with the in-place
//!   segment-reversal primitive used by 2-opt

mod tour;

pub use tour::Tour;
