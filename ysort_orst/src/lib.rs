//! # Introduction
//!
//! Different ways of ordering records by a vertical key, and a harness that times them against
//! each other.

pub mod orst;
pub mod points;

use clap::Args;
use orst::benchmark::{run_solutions, BenchOptions};
use orst::{Order, Strategy};
use rand::{rngs::StdRng, SeedableRng};

/// Time every sorting strategy on the same set of points. Install the `ysort` binary and run
/// `ysort bench --help` to see what options are available
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Number of points to sort.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    count: usize,

    /// Direction of the sorted output.
    #[arg(short, long, value_enum, default_value_t = Order::Descending)]
    order: Order,

    /// Strategies to run, in order. Defaults to all of them.
    #[arg(short, long = "strategy", value_enum)]
    strategies: Vec<Strategy>,

    /// Use random points instead of the reversed sequence.
    #[arg(long)]
    shuffle: bool,

    /// Seed for `--shuffle`.
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Skip O(n²) strategies above this many points.
    #[arg(long, default_value_t = 100_000)]
    quadratic_limit: usize,

    /// Count key comparisons with a second run of every strategy.
    #[arg(long)]
    comparisons: bool,

    /// Also print a summary table.
    #[arg(long)]
    table: bool,
}

impl BenchArgs {
    pub fn run(self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.count <= points::MAX_POINTS,
            "cannot generate {} points, the most is {}",
            self.count,
            points::MAX_POINTS
        );

        let records = if self.shuffle {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            points::random(self.count, &mut rng)
        } else {
            points::reversed(self.count)
        };

        let strategies = if self.strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategies
        };

        let options = BenchOptions {
            order: self.order,
            quadratic_limit: Some(self.quadratic_limit),
            count_comparisons: self.comparisons || self.table,
            progress: true,
        };

        let report = run_solutions(&records, &strategies, &options)?;
        println!("{report}");

        if self.table {
            println!();
            report.print_table();
        }

        anyhow::ensure!(
            report.all_ordered(),
            "at least one strategy produced out of order output"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_above_the_coordinate_range_is_an_error() {
        let args = BenchArgs {
            count: points::MAX_POINTS + 1,
            order: Order::Descending,
            strategies: vec![Strategy::Sort],
            shuffle: false,
            seed: None,
            quadratic_limit: 100_000,
            comparisons: false,
            table: false,
        };

        let err = args.run().unwrap_err();
        assert!(err.to_string().contains("cannot generate"));
    }
}
