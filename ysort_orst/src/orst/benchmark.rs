use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use std::{
    cell::Cell,
    fmt::{self, Display},
    rc::Rc,
    time::{Duration, Instant},
};

use super::{is_ordered, DepthKey, Keyed, Order, Strategy};

// In this the `elem` supplies the key and the `comparison_counter` goes along for the ride.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    // Shared by every evaluator of one run, bumped on each key comparison.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }
}

// The key handed out by a `SortEvaluator`. Every `cmp_key` call counts as one comparison, no
// matter which sorter makes it.
struct CountedKey<K> {
    key: K,
    comparison_counter: Rc<Cell<usize>>,
}

impl<K: DepthKey> DepthKey for CountedKey<K> {
    fn cmp_key(&self, other: &Self) -> std::cmp::Ordering {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
        self.key.cmp_key(&other.key)
    }
}

impl<T: Keyed> Keyed for SortEvaluator<T> {
    type Key = CountedKey<T::Key>;

    fn key(&self) -> Self::Key {
        CountedKey {
            key: self.elem.key(),
            comparison_counter: Rc::clone(&self.comparison_counter),
        }
    }
}

/// Knobs for [`run_solutions`].
#[derive(Debug, Clone)]
pub struct BenchOptions {
    pub order: Order,
    /// Quadratic strategies are skipped above this many records.
    pub quadratic_limit: Option<usize>,
    /// Run every strategy a second time to count key comparisons.
    pub count_comparisons: bool,
    /// Draw a progress bar on stderr while running.
    pub progress: bool,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            order: Order::Ascending,
            quadratic_limit: None,
            count_comparisons: false,
            progress: false,
        }
    }
}

/// What happened to one strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Timed {
        elapsed: Duration,
        comparisons: Option<usize>,
        /// Whether the output passed [`is_ordered`].
        ordered: bool,
    },
    Skipped,
}

/// One numbered line of the benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub number: usize,
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution {} ({}): ", self.number, self.strategy.name())?;
        match &self.outcome {
            Outcome::Timed { elapsed, .. } => write!(f, "{} microseconds", elapsed.as_micros()),
            Outcome::Skipped => f.write_str("skipped"),
        }
    }
}

/// All solutions of one run plus what is needed for the memory line.
#[derive(Debug, Clone)]
pub struct Report {
    pub records: usize,
    pub record_size: usize,
    pub solutions: Vec<Solution>,
}

impl Report {
    /// Bytes taken by the input records.
    pub fn memory_usage(&self) -> usize {
        self.record_size * self.records
    }

    /// `true` if every strategy that ran produced ordered output.
    pub fn all_ordered(&self) -> bool {
        self.solutions.iter().all(|solution| match solution.outcome {
            Outcome::Timed { ordered, .. } => ordered,
            Outcome::Skipped => true,
        })
    }

    pub fn print_table(&self) {
        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            self.records.to_string().bold()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Solution".bold(),
            "Sorter".bold(),
            "Stable".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        for solution in &self.solutions {
            let stable = if solution.strategy.is_stable() {
                "yes".green()
            } else {
                "no".normal()
            };

            match &solution.outcome {
                Outcome::Timed {
                    elapsed,
                    comparisons,
                    ordered,
                } => {
                    let comparisons = comparisons
                        .map_or_else(|| "-".to_string(), |count| count.to_string());
                    let elapsed = if *ordered {
                        format!("{elapsed:?}").normal()
                    } else {
                        format!("{elapsed:?} (out of order)").red()
                    };
                    table.add_row(row![
                        solution.number,
                        solution.strategy.name(),
                        stable,
                        comparisons,
                        elapsed
                    ]);
                }
                Outcome::Skipped => {
                    table.add_row(row![
                        solution.number,
                        solution.strategy.name(),
                        stable,
                        "Not Doing It".red(),
                        "O(n²) on this many records"
                    ]);
                }
            }
        }

        table.printstd();
        println!();
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for solution in &self.solutions {
            writeln!(f, "{solution}")?;
        }
        write!(f, "Memory usage: {} bytes", self.memory_usage())
    }
}

fn count_comparisons<T>(records: &[T], strategy: Strategy, order: Order) -> usize
where
    T: Keyed + Clone,
{
    let counter = Rc::new(Cell::new(0));
    let mut values: Vec<_> = records
        .iter()
        .cloned()
        .map(|elem| SortEvaluator::new(elem, Rc::clone(&counter)))
        .collect();

    strategy.sort(&mut values, order);
    counter.get()
}

/// Times every strategy on its own copy of `records`.
///
/// Solutions are numbered from 1 in the order of `strategies`.
///
/// ```
/// use ysort_orst::orst::benchmark::{run_solutions, BenchOptions};
/// use ysort_orst::orst::{Order, Strategy};
/// use ysort_orst::points::reversed;
///
/// let options = BenchOptions { order: Order::Descending, ..Default::default() };
/// let report = run_solutions(&reversed(100), &Strategy::ALL, &options).unwrap();
///
/// assert_eq!(report.solutions.len(), 6);
/// assert_eq!(report.memory_usage(), 800);
/// assert!(report.all_ordered());
/// ```
pub fn run_solutions<T>(
    records: &[T],
    strategies: &[Strategy],
    options: &BenchOptions,
) -> anyhow::Result<Report>
where
    T: Keyed + Clone,
{
    let pb = if options.progress {
        ProgressBar::new(strategies.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(ProgressStyle::with_template(
        "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] {msg} ({pos}/{len})",
    )?);

    log::info!(
        "benchmarking {} strategies over {} records",
        strategies.len(),
        records.len()
    );

    let mut solutions = Vec::with_capacity(strategies.len());
    for (index, &strategy) in strategies.iter().enumerate() {
        pb.set_message(strategy.name());

        let over_limit = options
            .quadratic_limit
            .is_some_and(|limit| records.len() > limit);

        let outcome = if strategy.is_quadratic() && over_limit {
            log::info!("skipping {strategy}: {} records", records.len());
            Outcome::Skipped
        } else {
            let mut working = records.to_vec();
            let now = Instant::now();
            strategy.sort(&mut working, options.order);
            let elapsed = now.elapsed();

            let ordered = is_ordered(&working, options.order);
            if !ordered {
                log::warn!("{strategy} left records out of {:?} order", options.order);
            }

            let comparisons = options
                .count_comparisons
                .then(|| count_comparisons(records, strategy, options.order));

            log::debug!("{strategy} took {elapsed:?}");
            Outcome::Timed {
                elapsed,
                comparisons,
                ordered,
            }
        };

        solutions.push(Solution {
            number: index + 1,
            strategy,
            outcome,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Report {
        records: records.len(),
        record_size: std::mem::size_of::<T>(),
        solutions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::{reversed, Point};

    #[test]
    fn report_lines() {
        let report = Report {
            records: 3,
            record_size: 8,
            solutions: vec![
                Solution {
                    number: 1,
                    strategy: Strategy::Sort,
                    outcome: Outcome::Timed {
                        elapsed: Duration::from_micros(42),
                        comparisons: None,
                        ordered: true,
                    },
                },
                Solution {
                    number: 2,
                    strategy: Strategy::Loop,
                    outcome: Outcome::Skipped,
                },
            ],
        };

        assert_eq!(
            report.to_string(),
            "Solution 1 (sort_unstable_by): 42 microseconds\n\
             Solution 2 (for loop): skipped\n\
             Memory usage: 24 bytes"
        );
    }

    #[test]
    fn quadratic_limit_skips_selection_sorts() {
        let options = BenchOptions {
            quadratic_limit: Some(10),
            ..Default::default()
        };
        let report = run_solutions(&reversed(11), &Strategy::ALL, &options).unwrap();

        for solution in &report.solutions {
            assert_eq!(
                solution.outcome == Outcome::Skipped,
                solution.strategy.is_quadratic()
            );
        }
        assert!(report.all_ordered());
    }

    #[test]
    fn selection_comparisons_are_quadratic() {
        let records: Vec<Point> = reversed(10);
        let comparisons = count_comparisons(&records, Strategy::Loop, Order::Ascending);
        // 9 + 8 + ... + 1
        assert_eq!(comparisons, 45);
    }

    #[test]
    fn counting_does_not_change_the_result() {
        let counter = Rc::new(Cell::new(0));
        let mut values: Vec<_> = [3, 1, 2]
            .into_iter()
            .map(|n| SortEvaluator::new(n, Rc::clone(&counter)))
            .collect();

        Strategy::StableSort.sort(&mut values, Order::Ascending);

        let sorted: Vec<i32> = values.iter().map(|v| v.elem).collect();
        assert_eq!(sorted, [1, 2, 3]);
        assert!(counter.get() > 0);
    }

    #[test]
    fn empty_input() {
        let report =
            run_solutions::<Point>(&[], &Strategy::ALL, &BenchOptions::default()).unwrap();
        assert_eq!(report.memory_usage(), 0);
        assert!(report.all_ordered());
    }
}
