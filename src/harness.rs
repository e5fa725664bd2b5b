//! This module drives each strategy in turn against the same dataset and
//! reports timings relative to the sequential baseline.

use crate::coroutine::CoroutineStrategy;
use crate::dataset::Dataset;
use crate::par_iter::RayonStrategy;
use crate::sequential::SequentialStrategy;
use crate::strategy::{self, Strategy, Timing};
use crate::threadpool::ThreadPoolStrategy;
use log::debug;

/// Runs a single strategy over `data` and prints its report.
pub fn run_strategy<S: Strategy>(strategy: &S, data: &Dataset) -> Timing {
    debug!("running {} over {} values", strategy.name(), data.len());

    let timing = strategy.run(data);
    timing.report();
    timing
}

/// Runs every strategy in a fixed order against `data`, comparing each
/// non-baseline run to the sequential one.
///
/// Strategies run strictly one after another in the same process: a
/// strategy begins only after the previous one has joined all of its
/// workers or tasks, so the runs never contend with each other.
pub fn run_all(data: &Dataset) {
    let baseline = run_strategy(&SequentialStrategy::new(), data);

    let threaded = run_strategy(&ThreadPoolStrategy::new(), data);
    strategy::compare(&baseline, &threaded);

    let coroutine = run_strategy(&CoroutineStrategy::new(), data);
    strategy::compare(&baseline, &coroutine);

    let rayon = run_strategy(&RayonStrategy::new(), data);
    strategy::compare(&baseline, &rayon);
}
