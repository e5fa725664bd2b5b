//! This module provides a `Strategy` which uses a rayon parallel iterator
//! to perform the work.

use crate::dataset::Dataset;
use crate::deviation;
use crate::strategy::{Strategy, Timing};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::time::Instant;

/// A `Strategy` which hands the working copy to rayon's work-stealing pool
/// via a parallel iterator.
///
/// This is an extra comparison point beyond the three baseline scheduling
/// models: the same parallel-workers idea as the threadpool, but with the
/// dispatch machinery supplied by a library instead of hand-rolled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RayonStrategy(());

impl RayonStrategy {
    /// Creates a rayon strategy.
    pub fn new() -> Self {
        RayonStrategy(())
    }
}

impl Strategy for RayonStrategy {
    fn name(&self) -> &'static str {
        "rayon"
    }

    fn run(&self, data: &Dataset) -> Timing {
        let working = data.duplicate();

        let start = Instant::now();
        let calculations = working
            .into_par_iter()
            .map(|value| {
                // The deviation is computed and dropped; only timing is
                // observed.
                let _ = deviation::max_deviation(value, data.values());
            })
            .count();
        let elapsed = start.elapsed();

        Timing::new(self.name(), calculations, elapsed)
    }
}
