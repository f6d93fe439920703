//! Stable merge sort over keyed entries.
//!
//! [`BalancedTree`](crate::BalancedTree) needs its input in sorted order
//! before the balanced build can run, and the O(n log n) construction
//! guarantee only holds if the sort itself is O(n log n) on *every*
//! input. Merge-based divide and conquer gives that bound; a
//! partition-based sort would not (quadratic on adversarial input).

use alloc::vec::Vec;

/// Sorts `(key, item)` entries into non-decreasing key order.
///
/// The sort is stable: entries with equal keys keep their input order.
/// Recursion depth is `⌈log2 n⌉`.
///
/// # Examples
///
/// ```
/// use hollow_maze::merge_sort;
///
/// let sorted = merge_sort(vec![(3, 'c'), (1, 'a'), (2, 'b')]);
/// assert_eq!(sorted, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
/// ```
pub fn merge_sort<K: Ord, V>(mut entries: Vec<(K, V)>) -> Vec<(K, V)> {
    if entries.len() <= 1 {
        return entries;
    }
    let right = entries.split_off(entries.len() / 2);
    merge(merge_sort(entries), merge_sort(right))
}

/// Merges two sorted runs, taking from the left run on equal keys.
fn merge<K: Ord, V>(left: Vec<(K, V)>, right: Vec<(K, V)>) -> Vec<(K, V)> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                // `<` (not `<=`) keeps equal-key entries in input order.
                if r.0 < l.0 {
                    merged.push(right.next().expect("peeked"));
                } else {
                    merged.push(left.next().expect("peeked"));
                }
            }
            (Some(_), None) => merged.push(left.next().expect("peeked")),
            (None, Some(_)) => merged.push(right.next().expect("peeked")),
            (None, None) => return merged,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;

    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Matches the standard library's stable sort on random input.
        #[test]
        fn matches_std_stable_sort(keys in prop::collection::vec(0u16..100, 0..500)) {
            // Tag each entry with its input position so stability is
            // observable through the payload.
            let entries: Vec<(u16, usize)> = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
            let mut expected = entries.clone();
            expected.sort_by_key(|&(k, _)| k);

            prop_assert_eq!(merge_sort(entries), expected);
        }

        /// Sorting an already-sorted sequence returns it unchanged.
        #[test]
        fn sorted_input_is_identity(mut keys in prop::collection::vec(any::<i32>(), 0..500)) {
            keys.sort_unstable();
            let entries: Vec<(i32, ())> = keys.into_iter().map(|k| (k, ())).collect();

            prop_assert_eq!(merge_sort(entries.clone()), entries);
        }
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let entries = alloc::vec![(1, "first"), (0, "zero"), (1, "second"), (1, "third")];
        let sorted = merge_sort(entries);
        assert_eq!(sorted, alloc::vec![(0, "zero"), (1, "first"), (1, "second"), (1, "third")]);
    }
}
