//! Binary entry point: parse the command-line flags, build the dataset,
//! and run the strategy comparison.

use anyhow::Context;
use array_compare::dataset::Dataset;
use array_compare::harness;
use clap::Parser;
use std::path::PathBuf;

/// Find the maximum deviation of values under several execution strategies.
#[derive(Debug, Parser)]
#[command(name = "array-compare")]
struct Cli {
    /// Number of values to use.
    #[arg(short = 'n', long = "sample_size", default_value_t = 1000)]
    sample_size: usize,

    /// Newline-delimited numeric input file; random data in [0, 1) is
    /// generated when omitted.
    #[arg(short = 'i', long = "input_path")]
    input_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let data = match &cli.input_path {
        Some(path) => Dataset::from_file(path, cli.sample_size)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?,
        None => Dataset::generate(cli.sample_size)
            .with_context(|| format!("failed to generate {} values", cli.sample_size))?,
    };

    harness::run_all(&data);
    Ok(())
}
