//! This module provides a `Strategy` which schedules one cooperative task
//! per element on a single-threaded runtime.

use crate::dataset::Dataset;
use crate::deviation;
use crate::strategy::{Strategy, Timing};
use futures::future::join_all;
use std::time::Instant;
use tokio::runtime;

/// A `Strategy` which spawns one task per element onto a current-thread
/// `tokio` runtime, then suspends at a join-all barrier until every task
/// has completed.
///
/// Everything runs on a single underlying thread of control: this exercises
/// cooperative multitasking, not parallelism, so for a CPU-bound workload
/// the scheduling is pure overhead relative to the sequential baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CoroutineStrategy(());

impl CoroutineStrategy {
    /// Creates a coroutine strategy.
    pub fn new() -> Self {
        CoroutineStrategy(())
    }
}

impl Strategy for CoroutineStrategy {
    fn name(&self) -> &'static str {
        "coroutine"
    }

    fn run(&self, data: &Dataset) -> Timing {
        let working = data.duplicate();

        let rt = runtime::Builder::new_current_thread()
            .build()
            .expect("failed to create a current-thread runtime");

        // The clock spans scheduling through the join barrier; runtime
        // construction stays outside it.
        let start = Instant::now();
        let calculations = rt.block_on(async {
            let tasks: Vec<_> = working
                .into_iter()
                .map(|value| {
                    let data = data.clone();
                    tokio::task::spawn(async move {
                        // The deviation is computed and dropped; only timing
                        // is observed.
                        let _ = deviation::max_deviation(value, data.values());
                    })
                })
                .collect();

            // Fan-in: resume only once every task has run to completion.
            join_all(tasks)
                .await
                .into_iter()
                .map(|task| task.expect("failed to join deviation task"))
                .count()
        });
        let elapsed = start.elapsed();

        Timing::new(self.name(), calculations, elapsed)
    }
}
