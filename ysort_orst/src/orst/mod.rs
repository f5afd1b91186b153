//! Depth ordering of records by a derived vertical key.
//!
//! Every way of ordering records lives behind the [`Sorter`] trait. The sorters themselves only
//! differ in how they get there: a full comparison sort, three flavours of selection sort and a
//! priority queue. [`Strategy`] picks one of them at runtime.
//!
//! # Example
//!
//! ```
//! use ysort_orst::orst::{Order, Orst, StdSorter};
//! use ysort_orst::points::Point;
//!
//! let mut points = vec![Point::new(0, 5), Point::new(1, 3), Point::new(2, 9)];
//! points.orst(StdSorter { stable: true, order: Order::Descending });
//!
//! let ys: Vec<i32> = points.iter().map(|p| p.y).collect();
//! assert_eq!(ys, [9, 5, 3]);
//! ```

pub mod benchmark;
mod sorters;

use std::cmp::Ordering;
use std::fmt::{self, Display};

pub use sorters::extremum_sorter::ExtremumSorter;
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::iter_sorter::IterSorter;
pub use sorters::loop_sorter::LoopSorter;
pub use sorters::std_sorter::StdSorter;

/// A key with a total order.
///
/// Integers compare with [`Ord`]. Floats compare with `total_cmp`, which is what lets them sit
/// inside a [`BinaryHeap`](std::collections::BinaryHeap).
pub trait DepthKey {
    fn cmp_key(&self, other: &Self) -> Ordering;
}

macro_rules! impl_depth_key_ord {
    ($($t:ty),*) => {
        $(
            impl DepthKey for $t {
                #[inline]
                fn cmp_key(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_depth_key_ord!(i16, i32, i64, u16, u32, u64, usize);

impl DepthKey for f32 {
    #[inline]
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl DepthKey for f64 {
    #[inline]
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// A record that can be depth ordered.
pub trait Keyed {
    type Key: DepthKey;

    /// The derived scalar used for ordering.
    fn key(&self) -> Self::Key;
}

// Bare numbers are their own key.
macro_rules! impl_keyed_scalar {
    ($($t:ty),*) => {
        $(
            impl Keyed for $t {
                type Key = $t;

                #[inline]
                fn key(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_keyed_scalar!(i32, i64, u32, f32);

/// Direction of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    /// Compares two keys so that [`Ordering::Less`] means `a` comes first in the output.
    #[inline]
    pub fn compare<K: DepthKey>(self, a: &K, b: &K) -> Ordering {
        match self {
            Order::Ascending => a.cmp_key(b),
            Order::Descending => b.cmp_key(a),
        }
    }

    /// `true` if `a` must be placed strictly before `b`.
    #[inline]
    pub fn precedes<K: DepthKey>(self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// The sorting algorithm must implement the trait `Sorter`.
///
/// Sorters take the whole `Vec` so that the selection sorts can move records into a fresh output
/// buffer and hand it back.
pub trait Sorter<T>
where
    T: Keyed,
{
    fn sort(&self, records: &mut Vec<T>);
}

/// Extension trait for sorting a collection in place with any [`Sorter`].
pub trait Orst<T>
where
    T: Keyed,
{
    fn orst<S: Sorter<T>>(&mut self, sorter: S);
}

impl<T> Orst<T> for Vec<T>
where
    T: Keyed,
{
    fn orst<S: Sorter<T>>(&mut self, sorter: S) {
        sorter.sort(self)
    }
}

/// Every way this crate knows to order records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// `slice::sort_unstable_by` on the key.
    Sort,
    /// `slice::sort_by` on the key.
    StableSort,
    /// Selection by scanning indices.
    Loop,
    /// Selection by walking an enumerate cursor.
    Iterator,
    /// Selection with `Iterator::min_by`.
    Extremum,
    /// Push everything into a `BinaryHeap`, then pop it empty.
    PriorityQueue,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Sort,
        Strategy::StableSort,
        Strategy::Loop,
        Strategy::Iterator,
        Strategy::Extremum,
        Strategy::PriorityQueue,
    ];

    /// Label used in benchmark output.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Sort => "sort_unstable_by",
            Strategy::StableSort => "sort_by",
            Strategy::Loop => "for loop",
            Strategy::Iterator => "iterator",
            Strategy::Extremum => "min_by",
            Strategy::PriorityQueue => "BinaryHeap",
        }
    }

    /// Whether records with equal keys are guaranteed to keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Strategy::StableSort)
    }

    /// Selection based strategies are O(n²).
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            Strategy::Loop | Strategy::Iterator | Strategy::Extremum
        )
    }

    /// Sorts `records` in place with the sorter behind this strategy.
    pub fn sort<T: Keyed>(self, records: &mut Vec<T>, order: Order) {
        match self {
            Strategy::Sort => records.orst(StdSorter {
                stable: false,
                order,
            }),
            Strategy::StableSort => records.orst(StdSorter {
                stable: true,
                order,
            }),
            Strategy::Loop => records.orst(LoopSorter { order }),
            Strategy::Iterator => records.orst(IterSorter { order }),
            Strategy::Extremum => records.orst(ExtremumSorter { order }),
            Strategy::PriorityQueue => records.orst(HeapSorter { order }),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checks that `records` are monotonic in `order`.
pub fn is_ordered<T: Keyed>(records: &[T], order: Order) -> bool {
    records
        .windows(2)
        .all(|pair| !order.precedes(&pair[1].key(), &pair[0].key()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_compare() {
        assert_eq!(Order::Ascending.compare(&1, &2), Ordering::Less);
        assert_eq!(Order::Descending.compare(&1, &2), Ordering::Greater);
        assert_eq!(Order::Descending.compare(&2.5f32, &2.5f32), Ordering::Equal);
    }

    #[test]
    fn float_keys_are_total() {
        assert_eq!(f32::NAN.cmp_key(&f32::NAN), Ordering::Equal);
        assert_eq!((-0.0f32).cmp_key(&0.0), Ordering::Less);
    }

    #[test]
    fn only_stable_sort_is_stable() {
        let stable: Vec<_> = Strategy::ALL.into_iter().filter(|s| s.is_stable()).collect();
        assert_eq!(stable, [Strategy::StableSort]);
    }

    #[test]
    fn quadratic_strategies() {
        assert!(Strategy::Loop.is_quadratic());
        assert!(Strategy::Extremum.is_quadratic());
        assert!(!Strategy::PriorityQueue.is_quadratic());
        assert!(!Strategy::Sort.is_quadratic());
    }
}
