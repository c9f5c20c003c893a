//! Provides an exclusion filter over nested key paths.
//!
//! Serializers and configuration dumpers often need to drop a handful of
//! keys from their output. The filter stores the excluded paths in a
//! [`Trie`] keyed by path segments: a scalar entry excludes a single
//! top-level key, a list entry excludes the exact nested path it spells
//! out. Lookups are exact — excluding `["db", "password"]` says nothing
//! about `["db"]` itself.
//!
//! ```
//! use branching::exclude::{Exclude, ExclusionFilter};
//!
//! let filter = ExclusionFilter::new([
//!     Exclude::from("secret"),
//!     Exclude::from(vec!["db", "password"]),
//! ]);
//! assert!(filter.is_excluded(["secret"]));
//! assert!(filter.is_excluded(["db", "password"]));
//! assert!(!filter.is_excluded(["db"]));
//! ```

use crate::trie::Trie;

/// A single exclusion entry: one top-level key, or a nested key path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Exclude {
    Key(String),
    Path(Vec<String>),
}

impl From<&str> for Exclude {
    fn from(key: &str) -> Self {
        Exclude::Key(key.to_string())
    }
}

impl From<String> for Exclude {
    fn from(key: String) -> Self {
        Exclude::Key(key)
    }
}

impl From<Vec<String>> for Exclude {
    fn from(path: Vec<String>) -> Self {
        Exclude::Path(path)
    }
}

impl From<Vec<&str>> for Exclude {
    fn from(path: Vec<&str>) -> Self {
        Exclude::Path(path.into_iter().map(str::to_string).collect())
    }
}

/// Decides whether a nested key path should be excluded from output.
#[derive(Debug)]
pub struct ExclusionFilter {
    trie: Trie<String, Vec<String>>,
}

impl ExclusionFilter {
    /// Build a filter from exclusion entries. Scalar entries are treated
    /// as single-element paths.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Exclude>,
    {
        let mut trie = Trie::new(String::new());
        for entry in entries {
            match entry.into() {
                Exclude::Key(key) => {
                    trie.add([key]);
                }
                Exclude::Path(path) => {
                    trie.add(path);
                }
            }
        }
        Self { trie }
    }

    /// Was this exact path named for exclusion?
    pub fn is_excluded<I, S>(&self, path: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trie.contains(path.into_iter().map(Into::into))
    }

    /// How many paths does the filter exclude?
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Does the filter exclude nothing at all?
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_excludes_scalar_keys() {
        let filter = ExclusionFilter::new(["alpha", "beta"]);
        assert!(filter.is_excluded(["alpha"]));
        assert!(filter.is_excluded(["beta"]));
        assert!(!filter.is_excluded(["gamma"]));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn it_excludes_nested_paths() {
        let filter = ExclusionFilter::new([
            Exclude::from("top"),
            Exclude::from(vec!["db", "password"]),
        ]);
        assert!(filter.is_excluded(["top"]));
        assert!(filter.is_excluded(["db", "password"]));
        assert!(!filter.is_excluded(["db"]));
        assert!(!filter.is_excluded(["db", "password", "hash"]));
    }

    #[test]
    fn it_treats_dotted_keys_as_single_segments() {
        // A scalar "a.b" is one top-level key, not a two-segment path.
        let filter = ExclusionFilter::new(["a.b"]);
        assert!(filter.is_excluded(["a.b"]));
        assert!(!filter.is_excluded(["a", "b"]));
    }

    #[test]
    fn it_deduplicates_repeated_entries() {
        let filter = ExclusionFilter::new(["same", "same"]);
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn it_can_be_empty() {
        let filter = ExclusionFilter::new(Vec::<Exclude>::new());
        assert!(filter.is_empty());
        assert!(!filter.is_excluded(["anything"]));
    }
}
