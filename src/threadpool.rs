//! This module provides a `Strategy` which fans the workload out to a
//! bounded pool of OS threads.

use crate::dataset::Dataset;
use crate::deviation;
use crate::strategy::{Strategy, Timing};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Instant;

/// A `Strategy` which dispatches elements round-robin to a pool of worker
/// threads sized to the host's available parallelism.
///
/// A bounded pool replaces the obvious one-thread-per-element scheme: large
/// datasets would otherwise exhaust OS thread limits, and reusing workers
/// still exercises the "preemptive parallel workers" comparison point. The
/// workers share nothing but a read-only view of the dataset, and report
/// back only how many elements they processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ThreadPoolStrategy(());

impl ThreadPoolStrategy {
    /// Creates a threadpool strategy.
    pub fn new() -> Self {
        ThreadPoolStrategy(())
    }
}

impl Strategy for ThreadPoolStrategy {
    fn name(&self) -> &'static str {
        "threadpool"
    }

    fn run(&self, data: &Dataset) -> Timing {
        let working = data.duplicate();

        // Thread creation and scheduling are notable overhead, so the clock
        // starts before the pool is built.
        let start = Instant::now();

        let num_workers = num_cpus::get();
        let mut join_handles = Vec::with_capacity(num_workers);
        let mut work_senders = Vec::with_capacity(num_workers);

        for _ in 0..num_workers {
            let (work_tx, work_rx) = channel();
            work_senders.push(work_tx);

            let data = data.clone();
            join_handles.push(thread::spawn(move || pool_worker(work_rx, data)));
        }

        // Each worker owns its own queue, so dispatch the focal values to
        // them in a round robin fashion.
        let mut next_worker = (0..work_senders.len()).cycle();
        for value in working {
            let idx = next_worker.next().expect("should never get none on cycle");
            let _ = work_senders[idx].send(value);
        }

        // Dropping the channel handles signals the workers to exit once
        // their queues drain.
        drop(work_senders);

        let mut calculations = 0;
        for jh in join_handles {
            calculations += jh.join().expect("failed to join pool worker");
        }
        let elapsed = start.elapsed();

        Timing::new(self.name(), calculations, elapsed)
    }
}

fn pool_worker(work_rx: Receiver<f64>, data: Dataset) -> usize {
    let mut processed = 0;
    while let Ok(focal) = work_rx.recv() {
        // The deviation is computed and dropped; only timing is observed.
        let _ = deviation::max_deviation(focal, data.values());
        processed += 1;
    }
    processed
}
