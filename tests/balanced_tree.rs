use proptest::prelude::*;

use hollow_maze::BalancedTree;

/// Operations for driving randomized multimap tests.
#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64),
    Remove(usize),
    ExtractDivisible,
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        5 => (-50i64..50).prop_map(TreeOp::Insert),
        2 => any::<usize>().prop_map(TreeOp::Remove),
        2 => Just(TreeOp::ExtractDivisible),
    ]
}

// ─── Construction ────────────────────────────────────────────────────────────

proptest! {
    /// `from_entries` walks out in ascending key order and loses nothing:
    /// the key sequence matches a sort of the input, and the full entry
    /// multiset is preserved. Entries with equal keys may come out in any
    /// (deterministic) relative order, so payload order is only compared
    /// as a multiset.
    #[test]
    fn build_sorts_and_preserves_entries(keys in prop::collection::vec(-20i64..20, 0..400)) {
        let entries: Vec<(i64, usize)> = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
        let mut expected = entries.clone();
        expected.sort_unstable();

        let tree = BalancedTree::from_entries(entries);
        let walked: Vec<(i64, usize)> = tree.iter().map(|(&k, &v)| (k, v)).collect();

        let keys_sorted = walked.windows(2).all(|pair| pair[0].0 <= pair[1].0);
        prop_assert!(keys_sorted, "in-order walk produced unsorted keys");

        let mut walked_multiset = walked;
        walked_multiset.sort_unstable();
        prop_assert_eq!(walked_multiset, expected);
    }

    /// The floor-midpoint build pins the height exactly, which is what
    /// makes the documented `⌊log2 n⌋ + 1` bound (and the looser
    /// `⌈log2(n+1)⌉ + O(1)` contract bound) hold on every input.
    #[test]
    fn build_height_is_logarithmic(keys in prop::collection::vec(any::<i64>(), 1..2000)) {
        let n = keys.len();
        let tree = BalancedTree::from_entries(keys.into_iter().map(|k| (k, ())).collect());

        prop_assert_eq!(tree.len(), n);
        prop_assert_eq!(tree.height(), n.ilog2() as usize + 1);
    }
}

// ─── Randomized operation replay against a sorted-Vec model ──────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Replays random insert/remove/extract sequences against a sorted
    /// `Vec` model (stable at equal keys) and compares the full in-order
    /// walk after every step. Items are unique sequence numbers so the
    /// model can track exactly which duplicate-key entry was removed.
    #[test]
    fn ops_match_sorted_model(ops in prop::collection::vec(tree_op_strategy(), 0..300)) {
        let mut tree: BalancedTree<i64, usize> = BalancedTree::new();
        let mut model: Vec<(i64, usize)> = Vec::new();
        let mut next_item = 0usize;

        for op in &ops {
            match op {
                TreeOp::Insert(key) => {
                    tree.insert(*key, next_item);
                    let at = model.partition_point(|&(k, _)| k <= *key);
                    model.insert(at, (*key, next_item));
                    next_item += 1;
                }
                TreeOp::Remove(which) => {
                    if model.is_empty() {
                        continue;
                    }
                    let key = model[which % model.len()].0;
                    let (removed_key, removed_item) = tree.remove(&key);
                    prop_assert_eq!(removed_key, key);
                    let at = model
                        .iter()
                        .position(|&entry| entry == (removed_key, removed_item))
                        .expect("tree removed an entry the model does not hold");
                    model.remove(at);
                }
                TreeOp::ExtractDivisible => {
                    let taken = tree.extract_in_order(|_, &item| item % 3 == 0);
                    let expected_at = model.iter().position(|&(_, item)| item % 3 == 0);
                    match (taken, expected_at) {
                        (Some(entry), Some(at)) => {
                            prop_assert_eq!(entry, model.remove(at));
                        }
                        (None, None) => {}
                        (taken, _) => {
                            return Err(TestCaseError::fail(format!(
                                "extract disagreement: tree {taken:?}, model index {expected_at:?}"
                            )));
                        }
                    }
                }
            }

            prop_assert_eq!(tree.len(), model.len());
            prop_assert_eq!(tree.is_empty(), model.is_empty());

            let walked: Vec<(i64, usize)> = tree.iter().map(|(&k, &v)| (k, v)).collect();
            prop_assert_eq!(&walked, &model);
        }
    }

    /// A rejected extraction never mutates the tree.
    #[test]
    fn failed_extract_is_a_no_op(keys in prop::collection::vec(-50i64..50, 1..200)) {
        let entries: Vec<(i64, usize)> = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
        let mut tree = BalancedTree::from_entries(entries);

        let before: Vec<(i64, usize)> = tree.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(tree.extract_in_order(|_, _| false), None);
        let after: Vec<(i64, usize)> = tree.iter().map(|(&k, &v)| (k, v)).collect();

        prop_assert_eq!(before, after);
    }
}
