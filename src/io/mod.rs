//! Matrix input.
//!
//! - [`reader`] — Parse the textual "n, then n rows of n numbers" format

mod reader;

pub use reader::{load_matrix, read_matrix};
