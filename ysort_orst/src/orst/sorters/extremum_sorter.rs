use crate::orst::{Keyed, Order, Sorter};

/// Selection sort that leaves the scan to the standard library.
///
/// Each pass asks [`Iterator::min_by`] for the record that must come first. `min_by` returns the
/// first of several equal elements, so ties resolve in input order just like
/// [`LoopSorter`](crate::orst::LoopSorter). Still O(n²).
///
/// # Usage
///```
/// use ysort_orst::orst::{ExtremumSorter, Order, Sorter};
///
/// let mut records = vec![1, 5, 4, 2, 3];
/// ExtremumSorter { order: Order::Descending }.sort(&mut records);
/// assert_eq!(records, [5, 4, 3, 2, 1]);
///```
#[derive(Debug, Clone, Copy)]
pub struct ExtremumSorter {
    pub order: Order,
}

impl<T> Sorter<T> for ExtremumSorter
where
    T: Keyed,
{
    fn sort(&self, records: &mut Vec<T>) {
        let mut remaining = std::mem::take(records);
        let mut sorted = Vec::with_capacity(remaining.len());

        loop {
            let first = remaining
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| self.order.compare(&a.key(), &b.key()))
                .map(|(position, _)| position);

            let Some(position) = first else {
                break;
            };
            sorted.push(remaining.remove(position));
        }

        *records = sorted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orst::sorters::test_records::{keys, tagged};

    #[test]
    fn arbitrary_array() {
        let mut records = vec![1, 5, 4, 2, 3];
        ExtremumSorter {
            order: Order::Ascending,
        }
        .sort(&mut records);
        assert_eq!(records, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn very_unsorted() {
        let mut records = (1..1000).rev().collect::<Vec<i32>>();
        ExtremumSorter {
            order: Order::Ascending,
        }
        .sort(&mut records);
        assert_eq!(records, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_keep_input_order() {
        let mut records = tagged(&[5, 3, 5, 1]);
        ExtremumSorter {
            order: Order::Descending,
        }
        .sort(&mut records);

        assert_eq!(keys(&records), [5, 5, 3, 1]);
        assert_eq!(records[0].tag, 0);
    }

    #[test]
    fn empty() {
        let mut empty: Vec<f32> = vec![];
        ExtremumSorter {
            order: Order::Descending,
        }
        .sort(&mut empty);
        assert!(empty.is_empty());
    }
}
