//! This crate compares a few different ways of scheduling the same trivially
//! parallel computation in Rust: finding, for each value in a dataset, the
//! maximum absolute difference to any other value in the dataset.
//!
//! Each strategy runs the identical O(n²) workload and only its wall-clock
//! time is reported, so the numbers say something about scheduling overhead
//! rather than about the computation itself. Don't expect a rigorous
//! benchmark (there is no warm-up or repetition); the point is to contrast
//! the paradigms.
//!
//! To see the comparison, simply run `cargo run --release`!

#![deny(missing_docs)]

pub mod coroutine;
pub mod dataset;
pub mod deviation;
pub mod harness;
pub mod par_iter;
pub mod sequential;
pub mod strategy;
pub mod threadpool;
