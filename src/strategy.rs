//! This module defines the interface shared by the different execution
//! strategies, along with the timing record they all produce.

use crate::dataset::Dataset;
use std::time::Duration;

/// An interface which represents one way of scheduling the max-deviation
/// workload over a dataset.
///
/// Implementations duplicate the dataset into a private working copy,
/// compute one deviation per element of that copy against the *original*
/// dataset, and time the whole operation. This lets a single harness drive
/// each scheduling model against identical work.
pub trait Strategy {
    /// Get the name of this strategy so we can print out how long it takes
    /// to run.
    fn name(&self) -> &'static str;

    /// Run the workload over `data` and report how long it took.
    fn run(&self, data: &Dataset) -> Timing;
}

/// The outcome of one strategy run: how many top-level deviation
/// computations completed, and the wall-clock time the run took.
///
/// The computed deviations themselves are never collected or printed; the
/// original tool discarded them and that behavior is preserved on purpose
/// (only scheduling overhead is under measurement).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    label: &'static str,
    calculations: usize,
    elapsed: Duration,
}

impl Timing {
    /// Records a completed run.
    pub fn new(label: &'static str, calculations: usize, elapsed: Duration) -> Self {
        Timing {
            label,
            calculations,
            elapsed,
        }
    }

    /// The strategy name this measurement belongs to.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Number of top-level deviation computations that ran to completion.
    pub fn calculations(&self) -> usize {
        self.calculations
    }

    /// Elapsed wall-clock time in nanoseconds.
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    /// Builds the human-readable report for this run: a header line, the
    /// calculation count, and the elapsed time in nanoseconds and seconds.
    pub fn report_lines(&self) -> String {
        format!(
            "\narray_compare ({}):\n\t{} calculations\n\t{} ns\n\t{} s",
            self.label,
            self.calculations,
            self.elapsed_nanos(),
            self.elapsed_nanos() as f64 / 1e9
        )
    }

    /// Prints the human-readable report for this run.
    pub fn report(&self) {
        println!("{}", self.report_lines());
    }
}

/// Builds the signed comparison line between a baseline measurement and
/// another one: `-` means `other` was faster than the baseline, `+` that it
/// was slower.
pub fn comparison_line(baseline: &Timing, other: &Timing) -> String {
    let baseline_ns = baseline.elapsed_nanos();
    let other_ns = other.elapsed_nanos();

    let direction = if baseline_ns > other_ns { '-' } else { '+' };
    let delta = baseline_ns.abs_diff(other_ns);

    format!(
        "\ttime difference: {} {} {} ns",
        baseline.label(),
        direction,
        delta
    )
}

/// Prints the signed difference between two measurements.
pub fn compare(baseline: &Timing, other: &Timing) {
    println!("{}", comparison_line(baseline, other));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_is_negative_when_other_is_faster() {
        let baseline = Timing::new("sequential", 10, Duration::from_nanos(500));
        let other = Timing::new("threadpool", 10, Duration::from_nanos(200));

        assert_eq!(
            comparison_line(&baseline, &other),
            "\ttime difference: sequential - 300 ns"
        );
    }

    #[test]
    fn comparison_is_positive_when_other_is_slower() {
        let baseline = Timing::new("sequential", 10, Duration::from_nanos(200));
        let other = Timing::new("coroutine", 10, Duration::from_nanos(500));

        assert_eq!(
            comparison_line(&baseline, &other),
            "\ttime difference: sequential + 300 ns"
        );
    }

    #[test]
    fn report_carries_the_label_count_and_elapsed_time() {
        let timing = Timing::new("sequential", 3, Duration::from_nanos(1500));

        assert_eq!(
            timing.report_lines(),
            "\narray_compare (sequential):\n\t3 calculations\n\t1500 ns\n\t0.0000015 s"
        );
    }

    #[test]
    fn elapsed_nanos_round_trips_the_duration() {
        let timing = Timing::new("sequential", 1, Duration::from_nanos(1234));
        assert_eq!(timing.elapsed_nanos(), 1234);
    }
}
