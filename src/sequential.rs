//! This module provides a `Strategy` which processes every element
//! synchronously on the calling thread.

use crate::dataset::Dataset;
use crate::deviation;
use crate::strategy::{Strategy, Timing};
use std::time::Instant;

/// A `Strategy` which walks the working copy in order with no concurrency
/// at all, serving as the baseline the other strategies are compared to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SequentialStrategy(());

impl SequentialStrategy {
    /// Creates a sequential strategy.
    pub fn new() -> Self {
        SequentialStrategy(())
    }
}

impl Strategy for SequentialStrategy {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn run(&self, data: &Dataset) -> Timing {
        let working = data.duplicate();

        let start = Instant::now();
        let mut calculations = 0;
        for value in working {
            // The deviation is computed and dropped; only timing is observed.
            let _ = deviation::max_deviation(value, data.values());
            calculations += 1;
        }
        let elapsed = start.elapsed();

        Timing::new(self.name(), calculations, elapsed)
    }
}
