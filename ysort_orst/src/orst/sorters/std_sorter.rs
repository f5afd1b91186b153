use crate::orst::{Keyed, Order, Sorter};

/// Ordering through the standard library's slice sorts.
///
/// With `stable: true` this is `sort_by` (a merge based sort), records with equal keys keep their
/// input order. With `stable: false` it is `sort_unstable_by` (pattern defeating quicksort), which
/// is free to shuffle equal keys. Both are O(n log n).
///
/// # Usage
///```
/// use ysort_orst::orst::{Order, Sorter, StdSorter};
///
/// let mut records = vec![1, 5, 4, 2, 3];
/// StdSorter { stable: false, order: Order::Ascending }.sort(&mut records);
/// assert_eq!(records, [1, 2, 3, 4, 5]);
///
/// StdSorter { stable: true, order: Order::Descending }.sort(&mut records);
/// assert_eq!(records, [5, 4, 3, 2, 1]);
///```
#[derive(Debug, Clone, Copy)]
pub struct StdSorter {
    pub stable: bool,
    pub order: Order,
}

impl<T> Sorter<T> for StdSorter
where
    T: Keyed,
{
    #[inline]
    fn sort(&self, records: &mut Vec<T>) {
        let order = self.order;
        if self.stable {
            records.sort_by(|a, b| order.compare(&a.key(), &b.key()));
        } else {
            records.sort_unstable_by(|a, b| order.compare(&a.key(), &b.key()));
        }
    }
}
