//! The immutable dataset every strategy is benchmarked against.

use rand::distributions::{Distribution, Uniform};
use std::fs;
use std::num::ParseFloatError;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building a [`Dataset`].
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset would contain no values.
    #[error("dataset is empty; at least one value is required")]
    Empty,
    /// The input file could not be read.
    #[error("failed to read input file")]
    Io(#[from] std::io::Error),
    /// A line of the input file was not a numeric literal.
    #[error("invalid numeric literal on line {line}")]
    Parse {
        /// One-based line number of the offending literal.
        line: usize,
        /// The underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
}

/// An ordered, fixed-size, non-empty sequence of values, immutable for the
/// duration of a run.
///
/// The values live behind an `Arc<[f64]>`, so cloning a `Dataset` hands out
/// another read-only view of the same backing storage. There is no mutating
/// API; a fair comparison requires every strategy to see identical data.
#[derive(Debug, Clone)]
pub struct Dataset(Arc<[f64]>);

impl Dataset {
    /// Wraps the given values, rejecting an empty sequence.
    pub fn from_values(values: Vec<f64>) -> Result<Self, DatasetError> {
        if values.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Dataset(values.into()))
    }

    /// Generates `sample_size` uniform-random values in `[0, 1)`.
    pub fn generate(sample_size: usize) -> Result<Self, DatasetError> {
        let dist = Uniform::new(0.0, 1.0);
        let rng = &mut rand::thread_rng();

        let values = (0..sample_size).map(|_| dist.sample(rng)).collect();
        Self::from_values(values)
    }

    /// Loads newline-delimited numeric literals from `path`, keeping only
    /// the first `sample_size` lines when the file holds more.
    pub fn from_file(path: &Path, sample_size: usize) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path)?;

        let mut values = Vec::new();
        for (idx, line) in contents.lines().take(sample_size).enumerate() {
            let value = line
                .trim()
                .parse()
                .map_err(|source| DatasetError::Parse { line: idx + 1, source })?;
            values.push(value);
        }

        Self::from_values(values)
    }

    /// Number of values in the dataset.
    ///
    /// There is no `is_empty`: every constructor rejects an empty sequence,
    /// so the length is always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Read-only view of the values.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Copies the values into an independent working vector, decoupling the
    /// view a strategy iterates over from the view it reads.
    pub fn duplicate(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn generate_produces_the_requested_count_in_unit_range() {
        let data = Dataset::generate(100).unwrap();

        assert_eq!(data.len(), 100);
        assert!(data.values().iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn zero_sample_size_is_an_empty_dataset_error() {
        assert!(matches!(Dataset::generate(0), Err(DatasetError::Empty)));
    }

    #[test]
    fn from_file_truncates_to_sample_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1.0\n2.5\n-3.0\n4.25").unwrap();

        let data = Dataset::from_file(file.path(), 3).unwrap();
        assert_eq!(data.values(), &[1.0, 2.5, -3.0]);
    }

    #[test]
    fn from_file_keeps_everything_when_shorter_than_sample_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1.0\n2.0").unwrap();

        let data = Dataset::from_file(file.path(), 10).unwrap();
        assert_eq!(data.values(), &[1.0, 2.0]);
    }

    #[test]
    fn from_file_reports_the_offending_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1.0\nnot-a-number").unwrap();

        match Dataset::from_file(file.path(), 10) {
            Err(DatasetError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn from_file_rejects_an_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        assert!(matches!(
            Dataset::from_file(file.path(), 10),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn duplicate_is_independent_of_the_original() {
        let data = Dataset::from_values(vec![1.0, 2.0]).unwrap();

        let mut working = data.duplicate();
        working[0] = 9.0;

        assert_eq!(data.values(), &[1.0, 2.0]);
    }
}
