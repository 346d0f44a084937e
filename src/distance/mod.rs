//! Dense distance matrices.
//!
//! Provides the read-only n×n cost grid the optimizer searches over.

mod matrix;

pub use matrix::DistanceMatrix;
