use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::orst::{Keyed, Order, Sorter};

/// Ordering through a [`BinaryHeap`].
///
/// # Usage
///```
/// use ysort_orst::orst::{HeapSorter, Order, Sorter};
///
/// let mut records = vec![1, 5, 4, 2, 3];
/// HeapSorter { order: Order::Descending }.sort(&mut records);
/// assert_eq!(records, [5, 4, 3, 2, 1]);
///```
/// # Algorithm
///
/// Every record is pushed into a max-heap (O(log n) each) ranked so that the record which must
/// come first sits on top. Popping until the heap is empty (O(log n) each) yields the output. Equal
/// keys come out in whatever order the heap leaves them.
#[derive(Debug, Clone, Copy)]
pub struct HeapSorter {
    pub order: Order,
}

// Heap entry that caches the key and knows which way is "up".
struct Ranked<T: Keyed> {
    key: T::Key,
    order: Order,
    record: T,
}

impl<T: Keyed> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // The heap pops its greatest entry, which has to be the one that comes first.
        self.order.compare(&other.key, &self.key)
    }
}

impl<T: Keyed> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Keyed> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Keyed> Eq for Ranked<T> {}

impl<T> Sorter<T> for HeapSorter
where
    T: Keyed,
{
    fn sort(&self, records: &mut Vec<T>) {
        let mut heap = BinaryHeap::with_capacity(records.len());
        for record in records.drain(..) {
            heap.push(Ranked {
                key: record.key(),
                order: self.order,
                record,
            });
        }

        while let Some(Ranked { record, .. }) = heap.pop() {
            records.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orst::sorters::test_records::{keys, tagged};

    #[test]
    fn arbitrary_array() {
        let mut records = vec![1, 5, 4, 2, 3];
        HeapSorter {
            order: Order::Ascending,
        }
        .sort(&mut records);
        assert_eq!(records, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn very_unsorted() {
        let mut records = (1..1000).collect::<Vec<i32>>();
        HeapSorter {
            order: Order::Descending,
        }
        .sort(&mut records);
        assert_eq!(records, (1..1000).rev().collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_are_neither_lost_nor_doubled() {
        let mut records = tagged(&[5, 3, 5, 1, 3]);
        HeapSorter {
            order: Order::Descending,
        }
        .sort(&mut records);

        assert_eq!(keys(&records), [5, 5, 3, 3, 1]);
        let mut tags: Vec<_> = records.iter().map(|r| r.tag).collect();
        tags.sort();
        assert_eq!(tags, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn float_keys() {
        let mut records = vec![0.5f32, 3.0, -2.0, 3.0];
        HeapSorter {
            order: Order::Ascending,
        }
        .sort(&mut records);
        assert_eq!(records, [-2.0, 0.5, 3.0, 3.0]);
    }

    #[test]
    fn empty() {
        let mut empty: Vec<i32> = vec![];
        HeapSorter {
            order: Order::Ascending,
        }
        .sort(&mut empty);
        assert!(empty.is_empty());
    }
}
