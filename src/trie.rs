//! Provides a simple Trie implementation for storing keys composed of
//! sequences of atoms. A key sequence is remembered by marking its final
//! node as a leaf, so the structure behaves as a set of sequences with
//! shared prefixes.
//!
//! Atoms must support the TrieKey trait. Two policies, supplied at
//! construction (or overridden per traversal), shape iteration:
//!
//!  - a *sorter* orders (and may filter) the child keys of each node
//!  - a *joiner* concatenates a root-to-leaf key path into the value the
//!    iterator emits
//!
//! The interface relies on iterators to add, remove and check for the
//! existence of keys. Because the trie is based on the concept of atoms,
//! it is up to the user to decide what kind of atoms make most sense for
//! the keys being stored: chars, grapheme clusters, path segments, ...
//!
//! Example 1
//! ```
//! use branching::trie::Trie;
//!
//! let mut trie = Trie::strings();
//! assert!(trie.add("cat".chars()));
//! assert!(trie.add("car".chars()));
//! assert!(trie.add("card".chars()));
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our Trie
//! assert!(trie.contains("cat".chars()));
//! assert!(trie.contains(['c', 'a', 'r']));
//! assert!(!trie.contains("ca".chars())); // a prefix, not a leaf
//! assert_eq!(trie.iter().collect::<Vec<_>>(), ["car", "card", "cat"]);
//!
//! assert!(trie.remove("car".chars()));
//! assert!(!trie.contains("car".chars()));
//! assert_eq!(trie.len(), 2);
//! ```
//!
//! Example 2
//! ```
//! use branching::trie::Trie;
//!
//! // The default trie emits raw key paths, root placeholder first.
//! let mut trie = Trie::new(0u8);
//! trie.add([1, 2, 3]);
//! assert_eq!(trie.iter().collect::<Vec<_>>(), [vec![0, 1, 2, 3]]);
//! ```
//!
//! Example 3
//! ```
//! use branching::trie::Trie;
//! use std::path::MAIN_SEPARATOR;
//!
//! let mut trie = Trie::paths();
//! trie.add(["src", "lib.rs"].map(String::from));
//! let expected = format!("src{}lib.rs", MAIN_SEPARATOR);
//! assert_eq!(trie.iter().collect::<Vec<_>>(), [expected]);
//! ```
//!
//! Typical usages for this data structure:
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication
//!  - Prefix-organised enumeration (sorted, filtered, or level by level)
//!  - Exclusion/allow lists over nested key paths
//!  - ...

use std::fmt;
use std::path::{Path, MAIN_SEPARATOR};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a Trie must implement TrieKey.
pub trait TrieKey: Clone + PartialEq {}

// Blanket implementation which satisfies the compiler
impl<A> TrieKey for A
where
    A: Clone + PartialEq,
{
    // Nothing to implement, since A already supports the other traits.
    // It has the functions it needs already
}

/// Orders, and may filter, the child keys of a node during traversal.
pub type Sorter<A> = Box<dyn Fn(Vec<A>) -> Vec<A>>;

/// Concatenates a root-to-leaf key path into the emitted value.
///
/// The path always starts with the root placeholder key.
pub type Joiner<A, T> = Box<dyn Fn(Vec<A>) -> T>;

pub(crate) type NodeId = usize;

/// The root always occupies slot 0 of the arena and is never released.
pub(crate) const ROOT: NodeId = 0;

/// A single trie vertex, stored in the arena owned by [`Trie`].
///
/// Parent and child links are arena indices, which keeps the upward link
/// non-owning: releasing a slot never needs to touch reference counts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node<A> {
    pub(crate) key: A,
    pub(crate) parent: Option<NodeId>,
    pub(crate) is_leaf: bool,
    pub(crate) children: Vec<NodeId>,
}

impl<A: TrieKey> Node<A> {
    fn new(key: A, parent: Option<NodeId>) -> Self {
        Self {
            key,
            parent,
            is_leaf: false,
            children: Vec::new(),
        }
    }

    /// Does this node currently have no children?
    pub(crate) fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node still has a reason to exist. A node which is not
    /// a leaf, has no children and is not the root is a pruning candidate.
    /// The root self-protects through its absent parent.
    pub(crate) fn should_exist(&self) -> bool {
        self.is_leaf || !self.is_empty() || self.parent.is_none()
    }
}

/// Stores key sequences as root-to-leaf paths of shared nodes.
///
/// Nodes live in an arena of slots; removal returns slots to a free list
/// after pruning any branch that no longer leads to a leaf. The number of
/// leaves is tracked, so [`Trie::len`] is O(1).
pub struct Trie<A, T = Vec<A>> {
    pub(crate) slots: Vec<Option<Node<A>>>,
    free: Vec<NodeId>,
    count: usize,
    pub(crate) sorter: Sorter<A>,
    pub(crate) joiner: Joiner<A, T>,
}

impl<A: TrieKey> Trie<A, Vec<A>> {
    /// Create a new Trie with the default policies: children are visited
    /// in insertion order and iteration emits raw key paths (including
    /// the `empty` root placeholder as the first atom).
    pub fn new(empty: A) -> Self {
        Self::with_policies(empty, |keys| keys, |path| path)
    }
}

impl<A: TrieKey + Default> Default for Trie<A, Vec<A>> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

impl<A: TrieKey, T> Trie<A, T> {
    /// Create a new Trie with the supplied root placeholder key and
    /// traversal policies.
    pub fn with_policies(
        empty: A,
        sorter: impl Fn(Vec<A>) -> Vec<A> + 'static,
        joiner: impl Fn(Vec<A>) -> T + 'static,
    ) -> Self {
        Self {
            slots: vec![Some(Node::new(empty, None))],
            free: Vec::new(),
            count: 0,
            sorter: Box::new(sorter),
            joiner: Box::new(joiner),
        }
    }

    /// Add a key, supplied as a sequence of atoms, marking its final node
    /// as a leaf. An empty sequence refers to the root node.
    ///
    /// Returns `true` if a new leaf was added (even if it is a prefix of
    /// an existing key), `false` if the key was already present.
    pub fn add<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        let mut id = ROOT;
        for atom in key {
            id = self.child_or_create(id, atom);
        }
        if self.node(id).is_leaf {
            return false;
        }
        self.node_mut(id).is_leaf = true;
        self.count += 1;
        true
    }

    /// Remove a key, supplied as a sequence of atoms. An empty sequence
    /// refers to the root node, which is unmarked but never deleted.
    ///
    /// The final node is unmarked and then, walking back towards the
    /// root, every node left with no leaf and no children is deleted.
    ///
    /// Returns `true` if the key was present, `false` if the sequence did
    /// not lead to a leaf. A failed removal does not mutate the trie.
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        let id = match self.walk(key) {
            Some(id) => id,
            None => return false,
        };
        if !self.node(id).is_leaf {
            return false;
        }
        self.node_mut(id).is_leaf = false;
        self.count -= 1;
        self.prune(id);
        true
    }

    /// Does the Trie contain the supplied key? Prefixes of stored keys
    /// are only contained if they were added in their own right.
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        match self.walk(key) {
            Some(id) => self.node(id).is_leaf,
            None => false,
        }
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clear the Trie, keeping the root placeholder key and the policies.
    pub fn clear(&mut self) {
        let empty = self.node(ROOT).key.clone();
        self.slots = vec![Some(Node::new(empty, None))];
        self.free.clear();
        self.count = 0;
    }

    /// Follow `key` down from the root without creating nodes.
    fn walk<K: IntoIterator<Item = A>>(&self, key: K) -> Option<NodeId> {
        let mut id = ROOT;
        for atom in key {
            id = self.find_child(id, &atom)?;
        }
        Some(id)
    }

    /// Delete nodes from `id` towards the root while they have no reason
    /// to exist. Stops at the first leaf, branch or the root itself.
    fn prune(&mut self, mut id: NodeId) {
        while !self.node(id).should_exist() {
            let parent = match self.node(id).parent {
                Some(parent) => parent,
                // Unreachable: the root always exists.
                None => break,
            };
            self.detach_child(parent, id);
            self.release(id);
            id = parent;
        }
    }

    /// Unlink `child` from `parent`, releasing the child Vec's allocation
    /// once the last entry goes.
    fn detach_child(&mut self, parent: NodeId, child: NodeId) {
        let children = &mut self.node_mut(parent).children;
        if let Some(pos) = children.iter().position(|&c| c == child) {
            children.remove(pos);
            if children.is_empty() {
                children.shrink_to_fit();
            }
        }
    }

    pub(crate) fn find_child(&self, id: NodeId, key: &A) -> Option<NodeId> {
        self.node(id)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).key == *key)
    }

    /// Return the child of `id` holding `key`, creating it if absent.
    fn child_or_create(&mut self, id: NodeId, key: A) -> NodeId {
        if let Some(existing) = self.find_child(id, &key) {
            return existing;
        }
        let child = self.allocate(Node::new(key, Some(id)));
        self.node_mut(id).children.push(child);
        child
    }

    /// The key path from the root down to `id`, root placeholder first.
    pub(crate) fn hierarchy(&self, id: NodeId) -> Vec<A> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current);
            path.push(node.key.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }

    /// The current child keys of `id`, in insertion order.
    pub(crate) fn child_keys(&self, id: NodeId) -> Vec<A> {
        self.node(id)
            .children
            .iter()
            .map(|&child| self.node(child).key.clone())
            .collect()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<A> {
        // Safe to unwrap here since ids are only handed out for live slots
        self.slots[id].as_ref().unwrap()
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<A> {
        // Safe to unwrap here since ids are only handed out for live slots
        self.slots[id].as_mut().unwrap()
    }

    fn allocate(&mut self, node: Node<A>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.slots[id] = None;
        self.free.push(id);
    }

    /// Number of live nodes in the arena, root included.
    #[cfg(test)]
    pub(crate) fn live_nodes(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

fn sort_keys<A: Ord>(mut keys: Vec<A>) -> Vec<A> {
    keys.sort_unstable();
    keys
}

impl Trie<char, String> {
    /// Create a trie for strings: chars are the atoms, children are
    /// visited in lexicographic order and iteration emits each leaf as a
    /// concatenated `String`.
    ///
    /// `char` has no empty value, so the root placeholder is `'\0'` and
    /// the joiner drops it from the emitted string.
    pub fn strings() -> Self {
        Trie::with_policies('\0', sort_keys, |path| path.into_iter().skip(1).collect())
    }
}

impl Trie<String, String> {
    /// Create a trie for paths, stored segment by segment. Handles
    /// relative and absolute paths fairly well in the same trie.
    pub fn paths() -> Self {
        Self::paths_with(sort_keys)
    }

    /// As [`Trie::paths`], with a replacement sorter. The default is
    /// lexicographic, which implies case sensitivity.
    pub fn paths_with(sorter: impl Fn(Vec<String>) -> Vec<String> + 'static) -> Self {
        Trie::with_policies(String::new(), sorter, join_path)
    }
}

/// Reassemble a stored segment path. The bare root comes back as the
/// separator alone; an absolute first segment is emitted verbatim minus
/// any trailing separators; anything else is joined with the platform
/// separator.
fn join_path(parts: Vec<String>) -> String {
    let mut segments = parts.into_iter().skip(1);
    let first = match segments.next() {
        Some(first) => first,
        None => return MAIN_SEPARATOR.to_string(),
    };
    let mut joined = if Path::new(&first).is_absolute() {
        // Handles C:\ on Windows as well as a lone /
        first.trim_end_matches(&['/', '\\'][..]).to_string()
    } else {
        first
    };
    for segment in segments {
        joined.push(MAIN_SEPARATOR);
        joined.push_str(&segment);
    }
    if joined.is_empty() {
        joined.push(MAIN_SEPARATOR);
    }
    joined
}

/// Representation equality: same leaf count and same arena layout. Two
/// tries built by the same sequence of operations compare equal; the
/// policies take no part in the comparison.
impl<A: TrieKey, T> PartialEq for Trie<A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.slots == other.slots
    }
}

/// Structural dump: one line per node, indented by depth, with a `*`
/// marker on leaves. Children appear in the configured sorter's order.
impl<A: TrieKey + fmt::Debug, T> fmt::Debug for Trie<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trie ({} leaves)", self.count)?;
        self.fmt_node(f, ROOT, 2)
    }
}

impl<A: TrieKey + fmt::Debug, T> Trie<A, T> {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, indent: usize) -> fmt::Result {
        let node = self.node(id);
        write!(f, "{:indent$}{:?}", "", node.key, indent = indent)?;
        if node.is_leaf {
            write!(f, "*")?;
        }
        writeln!(f)?;
        for key in (self.sorter)(self.child_keys(id)) {
            if let Some(child) = self.find_child(id, &key) {
                self.fmt_node(f, child, indent + 2)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    //! The arena, free list and count serialize; the policies cannot, so
    //! deserialization is only offered for the default emitted type and
    //! restores the default policies.

    use serde_crate::ser::SerializeStruct;
    use serde_crate::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Node, NodeId, Trie, TrieKey};

    #[derive(Deserialize)]
    #[serde(crate = "serde_crate")]
    struct TrieData<A> {
        slots: Vec<Option<Node<A>>>,
        free: Vec<NodeId>,
        count: usize,
    }

    impl<A: Serialize, T> Serialize for Trie<A, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Trie", 3)?;
            state.serialize_field("slots", &self.slots)?;
            state.serialize_field("free", &self.free)?;
            state.serialize_field("count", &self.count)?;
            state.end()
        }
    }

    impl<'de, A> Deserialize<'de> for Trie<A, Vec<A>>
    where
        A: TrieKey + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let data = TrieData::deserialize(deserializer)?;
            Ok(Trie {
                slots: data.slots,
                free: data.free,
                count: data.count,
                sorter: Box::new(|keys| keys),
                joiner: Box::new(|path| path),
            })
        }
    }
}
