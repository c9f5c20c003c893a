//! Provides a simple Trie implementation for storing keys composed of
//! sequences of atoms, together with configurable traversal.
//!
//! Atoms must support the [`crate::trie::TrieKey`] trait. The interface
//! relies on iterators to add, remove and check for the existence of
//! keys, so it is up to the user to decide what kind of atoms make most
//! sense for the keys being stored: chars, grapheme clusters, path
//! segments, numbers, ...
//!
//! Traversal is shaped by two injectable policies: a *sorter*, which
//! orders (and may filter) the children of each node, and a *joiner*,
//! which concatenates a root-to-leaf key path into the emitted value.
//! Both depth-first and breadth-first walks are available, lazily and
//! restartably.
//!
//! Since the most common uses are storing the chars of strings and the
//! segments of filesystem paths, the convenience constructors
//! [`crate::trie::Trie::strings`] and [`crate::trie::Trie::paths`]
//! bundle suitable policies. If those don't suffice, build a
//! [`crate::trie::Trie`] with your own policies.
//!
//! ```
//! use branching::trie::Trie;
//!
//! let mut trie = Trie::strings();
//! trie.add("cat".chars());
//! trie.add("car".chars());
//! trie.add("card".chars());
//! assert_eq!(trie.iter().collect::<Vec<_>>(), ["car", "card", "cat"]);
//! ```
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * exclusion filtering : [`crate::exclude`]
//!
//! Typical usages for this data structure:
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication
//!  - Prefix-organised enumeration of keys
//!  - Exclusion/allow lists over nested key paths
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod exclude;

pub mod iterator;

pub mod trie;

#[cfg(test)]
mod proptests;
