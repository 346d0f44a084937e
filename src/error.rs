//! Crate error type.
//!
//! Covers the two failure surfaces: reading a matrix from text, and the
//! well-formedness contract the optimizer checks before entering its loop.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by matrix input and optimizer precondition checks.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O failure while reading matrix input.
    #[error("error reading input: {0}")]
    Io(#[from] std::io::Error),

    /// The node count at the head of the input was missing or unparsable.
    #[error("error reading number of nodes")]
    MissingNodeCount,

    /// A matrix row did not contain exactly `expected` values.
    #[error("invalid number of distances in row {row}: expected {expected}, got {actual}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Expected number of values (the node count).
        expected: usize,
        /// Number of values actually present.
        actual: usize,
    },

    /// A distance value could not be parsed as a number.
    #[error("error parsing distance at ({row}, {col})")]
    ParseDistance {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },

    /// The flat data length does not match `size * size`.
    #[error("matrix data length {len} does not match {size}x{size}")]
    DimensionMismatch {
        /// Declared matrix size.
        size: usize,
        /// Actual data length.
        len: usize,
    },

    /// A matrix entry was NaN, infinite, or negative.
    #[error("invalid distance {value} at ({from}, {to}): entries must be non-negative and finite")]
    InvalidDistance {
        /// Row of the offending entry.
        from: usize,
        /// Column of the offending entry.
        to: usize,
        /// The offending value.
        value: f64,
    },

    /// A city sequence is not a permutation of `0..n`.
    #[error("tour of length {len} is not a permutation of 0..{len}")]
    NotAPermutation {
        /// Length of the rejected sequence.
        len: usize,
    },

    /// A start tour does not cover the same number of cities as the matrix.
    #[error("tour visits {tour_len} cities but matrix has {matrix_size}")]
    SizeMismatch {
        /// Number of cities in the start tour.
        tour_len: usize,
        /// Matrix dimension.
        matrix_size: usize,
    },
}
