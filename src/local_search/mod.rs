//! Local search over cyclic tours.
//!
//! - [`two_opt`] — Single first-improvement 2-opt edge exchange

mod two_opt;

pub use two_opt::{improve_step, ExchangeMove};
