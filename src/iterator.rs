//! Provides lazy Trie traversals.
//!
//! A traversal visits every leaf exactly once, emitting the value the
//! joiner builds from the leaf's root-to-leaf key path. Each call to
//! [`Trie::iter`] (or iterating `&trie` directly) starts a fresh,
//! independent walk: no cursor state survives between calls, and
//! dropping a half-consumed traversal leaves the trie untouched.
//!
//! Because the iterator borrows the trie shared, the borrow checker
//! rules out `add`/`remove` while a traversal is live.

use std::collections::VecDeque;

use crate::trie::{Joiner, NodeId, Sorter, Trie, TrieKey, ROOT};

/// Order in which a traversal visits the trie's nodes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Traversal {
    /// Pre-order walk: a leaf is emitted before any leaf beneath it, and
    /// sibling subtrees are exhausted one at a time in sorter order.
    #[default]
    DepthFirst,
    /// Queue-driven walk: leaves are emitted level by level, shallowest
    /// first, siblings in sorter order.
    BreadthFirst,
}

/// Lazy iterator over the joined root-to-leaf paths of a [`Trie`].
pub struct Leaves<'a, A, T, S, J> {
    trie: &'a Trie<A, T>,
    frontier: VecDeque<NodeId>,
    order: Traversal,
    sorter: S,
    joiner: J,
}

impl<'a, A, T, S, J, U> Iterator for Leaves<'a, A, T, S, J>
where
    A: TrieKey,
    S: Fn(Vec<A>) -> Vec<A>,
    J: Fn(Vec<A>) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        while let Some(id) = self.frontier.pop_front() {
            // Expand before emitting so this node's subtree is already
            // queued when we hand back a value.
            let keys = (self.sorter)(self.trie.child_keys(id));
            match self.order {
                Traversal::DepthFirst => {
                    // Reversed onto the front of the deque, so the first
                    // sorted child is the next node popped.
                    for key in keys.into_iter().rev() {
                        if let Some(child) = self.trie.find_child(id, &key) {
                            self.frontier.push_front(child);
                        }
                    }
                }
                Traversal::BreadthFirst => {
                    for key in keys {
                        if let Some(child) = self.trie.find_child(id, &key) {
                            self.frontier.push_back(child);
                        }
                    }
                }
            }
            if self.trie.node(id).is_leaf {
                return Some((self.joiner)(self.trie.hierarchy(id)));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every emission is a distinct leaf.
        (0, Some(self.trie.len()))
    }
}

impl<A: TrieKey, T> Trie<A, T> {
    /// Create a depth-first iterator over the Trie, using the configured
    /// sorter and joiner.
    pub fn iter(&self) -> Leaves<'_, A, T, &Sorter<A>, &Joiner<A, T>> {
        self.iter_ordered(Traversal::default())
    }

    /// Create an iterator over the Trie in the given traversal order,
    /// using the configured sorter and joiner.
    pub fn iter_ordered(&self, order: Traversal) -> Leaves<'_, A, T, &Sorter<A>, &Joiner<A, T>> {
        Leaves {
            trie: self,
            frontier: VecDeque::from([ROOT]),
            order,
            sorter: &self.sorter,
            joiner: &self.joiner,
        }
    }

    /// Create an iterator with per-call policies. The sorter may filter
    /// children to skip whole subtrees; the joiner may emit a different
    /// type to the configured one.
    pub fn iter_with<S, J, U>(&self, order: Traversal, sorter: S, joiner: J) -> Leaves<'_, A, T, S, J>
    where
        S: Fn(Vec<A>) -> Vec<A>,
        J: Fn(Vec<A>) -> U,
    {
        Leaves {
            trie: self,
            frontier: VecDeque::from([ROOT]),
            order,
            sorter,
            joiner,
        }
    }
}

// Default iteration: depth-first with the configured policies.
impl<'a, A: TrieKey, T> IntoIterator for &'a Trie<A, T> {
    type Item = T;
    type IntoIter = Leaves<'a, A, T, &'a Sorter<A>, &'a Joiner<A, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
