use crate::orst::{Keyed, Order, Sorter};

/// Selection sort driven by an iterator cursor instead of indices.
///
/// Behaves exactly like [`LoopSorter`](crate::orst::LoopSorter): O(n²) time, O(n) extra space,
/// first of several equal keys wins. The difference is purely in how the scan is written.
///
/// # Usage
///```
/// use ysort_orst::orst::{IterSorter, Order, Sorter};
///
/// let mut records = vec![1, 5, 4, 2, 3];
/// IterSorter { order: Order::Ascending }.sort(&mut records);
/// assert_eq!(records, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Clone, Copy)]
pub struct IterSorter {
    pub order: Order,
}

impl<T> Sorter<T> for IterSorter
where
    T: Keyed,
{
    fn sort(&self, records: &mut Vec<T>) {
        let mut remaining = std::mem::take(records);
        let mut sorted = Vec::with_capacity(remaining.len());

        loop {
            let mut cursor = remaining.iter().enumerate();
            let Some((mut first, record)) = cursor.next() else {
                break;
            };

            let mut first_key = record.key();
            for (position, record) in cursor {
                let key = record.key();
                if self.order.precedes(&key, &first_key) {
                    first = position;
                    first_key = key;
                }
            }

            sorted.push(remaining.remove(first));
        }

        *records = sorted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orst::sorters::test_records::{keys, tagged};

    const DESC: IterSorter = IterSorter {
        order: Order::Descending,
    };

    #[test]
    fn arbitrary_array() {
        let mut records = vec![1, 5, 4, 2, 3];
        DESC.sort(&mut records);
        assert_eq!(records, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn very_unsorted() {
        let mut records = (1..1000).collect::<Vec<i32>>();
        DESC.sort(&mut records);
        assert_eq!(records, (1..1000).rev().collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_keep_input_order() {
        let mut records = tagged(&[2, 7, 2, 7, 2]);
        DESC.sort(&mut records);

        assert_eq!(keys(&records), [7, 7, 2, 2, 2]);
        let tags: Vec<_> = records.iter().map(|r| r.tag).collect();
        assert_eq!(tags, [1, 3, 0, 2, 4]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        DESC.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        DESC.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut three = vec![3, 1, 2];
        DESC.sort(&mut three);
        assert_eq!(three, vec![3, 2, 1]);
    }
}
