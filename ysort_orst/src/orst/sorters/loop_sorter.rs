use crate::orst::{Keyed, Order, Sorter};

/// Selection sort written with plain indices.
///
/// # Usage
///```
/// use ysort_orst::orst::{LoopSorter, Order, Sorter};
///
/// let mut records = vec![1, 5, 4, 2, 3];
/// LoopSorter { order: Order::Descending }.sort(&mut records);
/// assert_eq!(records, [5, 4, 3, 2, 1]);
///```
/// # Algorithm
///
/// Until the input is empty: scan every remaining record for the one that must come first, move it
/// to the back of a separate output buffer and remove it from the input. The output buffer then
/// replaces the input.
///
/// Each pass is a full scan and a `Vec::remove`, so the whole sort is O(n²) in time and needs O(n)
/// extra space for the output. Only a strictly better key replaces the current pick, which means
/// the first of several equal keys always wins.
#[derive(Debug, Clone, Copy)]
pub struct LoopSorter {
    pub order: Order,
}

impl<T> Sorter<T> for LoopSorter
where
    T: Keyed,
{
    #[allow(clippy::needless_range_loop)]
    fn sort(&self, records: &mut Vec<T>) {
        let mut remaining = std::mem::take(records);
        let mut sorted = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let mut first = 0;
            let mut first_key = remaining[0].key();
            for i in 1..remaining.len() {
                let key = remaining[i].key();
                if self.order.precedes(&key, &first_key) {
                    first = i;
                    first_key = key;
                }
            }
            sorted.push(remaining.remove(first));
        }

        *records = sorted;
    }
}
