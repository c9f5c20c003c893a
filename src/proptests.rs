//! Property tests for the structural invariants: agreement with a set
//! model, the leaf-count invariant, and full pruning on drain.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::iterator::Traversal;
use crate::trie::Trie;

#[derive(Clone, Debug)]
enum Op {
    Add(Vec<u8>),
    Remove(Vec<u8>),
}

// Narrow alphabet and short keys force shared prefixes and collisions.
fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..6)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        key_strategy().prop_map(Op::Add),
        key_strategy().prop_map(Op::Remove),
    ]
}

/// Leaf paths as the model sees them: the emitted path minus the root
/// placeholder.
fn leaf_set(trie: &Trie<u8>, order: Traversal) -> BTreeSet<Vec<u8>> {
    trie.iter_ordered(order)
        .map(|path| path[1..].to_vec())
        .collect()
}

proptest! {
    #[test]
    fn added_keys_are_contained(keys in prop::collection::vec(key_strategy(), 1..20)) {
        let mut trie = Trie::new(0u8);
        for key in &keys {
            trie.add(key.iter().copied());
            prop_assert!(trie.contains(key.iter().copied()));
        }
    }

    #[test]
    fn trie_agrees_with_a_set_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut trie = Trie::new(0u8);
        let mut model: BTreeSet<Vec<u8>> = BTreeSet::new();
        for op in ops {
            match op {
                Op::Add(key) => {
                    let fresh = trie.add(key.iter().copied());
                    prop_assert_eq!(fresh, model.insert(key));
                }
                Op::Remove(key) => {
                    let present = trie.remove(key.iter().copied());
                    prop_assert_eq!(present, model.remove(&key));
                }
            }
        }
        prop_assert_eq!(trie.len(), model.len());
        prop_assert_eq!(leaf_set(&trie, Traversal::DepthFirst), model);
    }

    #[test]
    fn traversal_orders_agree_on_the_leaf_set(keys in prop::collection::vec(key_strategy(), 0..20)) {
        let mut trie = Trie::new(0u8);
        for key in keys {
            trie.add(key);
        }
        prop_assert_eq!(
            leaf_set(&trie, Traversal::DepthFirst),
            leaf_set(&trie, Traversal::BreadthFirst)
        );
    }

    #[test]
    fn traversals_are_restartable(keys in prop::collection::vec(key_strategy(), 0..20)) {
        let mut trie = Trie::new(0u8);
        for key in keys {
            trie.add(key);
        }
        let first: Vec<Vec<u8>> = trie.iter().collect();
        let second: Vec<Vec<u8>> = trie.iter().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn removal_is_the_inverse_of_addition(keys in prop::collection::vec(key_strategy(), 1..20)) {
        let mut trie = Trie::new(0u8);
        for key in &keys {
            trie.add(key.iter().copied());
        }
        let populated = trie.len();
        let probe = keys[0].clone();
        if trie.remove(probe.iter().copied()) {
            prop_assert!(!trie.contains(probe.iter().copied()));
            prop_assert_eq!(trie.len(), populated - 1);
        }
    }

    #[test]
    fn draining_prunes_back_to_the_root(keys in prop::collection::vec(key_strategy(), 0..20)) {
        let mut trie = Trie::new(0u8);
        for key in &keys {
            trie.add(key.iter().copied());
        }
        for key in &keys {
            trie.remove(key.iter().copied());
        }
        prop_assert_eq!(trie.len(), 0);
        prop_assert_eq!(trie.live_nodes(), 1);
    }
}
