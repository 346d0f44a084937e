//! Textual distance-matrix reader.
//!
//! The format is a node count `n` on the first non-empty line, followed by
//! `n` rows of exactly `n` whitespace-separated numbers. Each non-empty
//! line holds one row. The reader is the input supplier for the optimizer:
//! it surfaces every malformation (missing count, short or long rows,
//! unparsable values) so the optimizer never sees a malformed matrix.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// Reads a distance matrix from any buffered reader.
///
/// # Examples
///
/// ```
/// use tour_opt::io::read_matrix;
///
/// let input = "3\n0 1 2\n1 0 3\n2 3 0\n";
/// let dm = read_matrix(input.as_bytes())?;
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 2), 3.0);
/// # Ok::<(), tour_opt::Error>(())
/// ```
pub fn read_matrix<R: BufRead>(reader: R) -> Result<DistanceMatrix> {
    let mut lines = reader.lines();

    let n = next_nonempty(&mut lines)?
        .ok_or(Error::MissingNodeCount)?
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::MissingNodeCount)?;

    let mut data = Vec::with_capacity(n * n);
    for row in 0..n {
        let line = next_nonempty(&mut lines)?.ok_or(Error::RowLength {
            row,
            expected: n,
            actual: 0,
        })?;
        let values: Vec<&str> = line.split_whitespace().collect();
        if values.len() != n {
            return Err(Error::RowLength {
                row,
                expected: n,
                actual: values.len(),
            });
        }
        for (col, value) in values.iter().enumerate() {
            let parsed = value
                .parse::<f64>()
                .map_err(|_| Error::ParseDistance { row, col })?;
            data.push(parsed);
        }
    }

    debug!("read {n}x{n} distance matrix");
    DistanceMatrix::from_data(n, data)
}

/// Opens `path` and reads a distance matrix from it.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<DistanceMatrix> {
    let file = File::open(path)?;
    read_matrix(BufReader::new(file))
}

fn next_nonempty<R: BufRead>(
    lines: &mut std::io::Lines<R>,
) -> Result<Option<String>> {
    for line in lines {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}
