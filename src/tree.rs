//! Provides a multi-way prefix tree for storing keys composed of
//! sequences of atoms, with insertion, membership testing and prefix
//! completion.
//!
//! Atoms must support the [`TrieAtom`] trait. The interface relies on
//! iterators to insert and look up keys, so it is up to the user to decide
//! what kind of atoms make most sense of the keys being stored: chars,
//! grapheme clusters, whole words, numbers...
//!
//! Example 1
//! ```
//! use prefixtree::tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! for word in ["ABC", "ABD", "A", "XYZ"] {
//!     tree.insert(word.chars());
//! }
//!
//! assert_eq!(4, tree.size());
//! assert!(tree.contains("A".chars()));
//! assert!(!tree.contains("AB".chars())); // a path, not a stored key
//! assert!(tree.contains_prefix("AB".chars()));
//!
//! let completions: Vec<String> = tree.complete("A".chars());
//! assert_eq!(vec!["A", "ABC", "ABD"], completions);
//! ```
//!
//! Example 2
//! ```
//! use prefixtree::tree::PrefixTree;
//! use unicode_segmentation::UnicodeSegmentation;
//!
//! let mut tree: PrefixTree<&str> = PrefixTree::new();
//! let input = "a̐éö̲\r\n".graphemes(true);
//! assert!(tree.insert(input.clone()));
//! assert!(!tree.insert(input.clone())); // already present
//! assert!(tree.contains(input));
//! ```
//!
//! Example 3
//! ```
//! use prefixtree::tree::PrefixTree;
//!
//! let tree: PrefixTree<&str> = ["the quick brown fox", "the lazy dog"]
//!     .into_iter()
//!     .map(str::split_whitespace)
//!     .collect();
//!
//! let completions: Vec<Vec<&str>> = tree.complete(["the", "lazy"]);
//! assert_eq!(vec![vec!["the", "lazy", "dog"]], completions);
//! ```
//!
//! Typical usages for this data structure:
//!  - Autocompletion
//!  - Spell checking
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication

use std::fmt;
use std::iter::Peekable;

use tracing::trace;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::iterator::Iter;
use crate::node::Node;

pub use crate::node::TrieAtom;

/// Stores keys of atoms as paths of individual nodes.
///
/// The root holds the sentinel symbol `A::default()` and is only terminal
/// when the empty key has been inserted.
///
/// Insertion, lookup, enumeration and drop are iterative, so keys of any
/// length are supported by them. `Clone`, `PartialEq`, `Debug` and serde
/// recurse once per atom of the longest key.
///
/// Deserializing recounts the stored keys rather than trusting a
/// serialized `size`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        from = "TreeRepr<A>",
        bound(
            serialize = "A: TrieAtom + Serialize",
            deserialize = "A: TrieAtom + Deserialize<'de>"
        )
    )
)]
pub struct PrefixTree<A: TrieAtom> {
    pub(crate) root: Node<A>,
    size: usize,
}

impl<A: TrieAtom> PrefixTree<A> {
    /// Create a new, empty PrefixTree.
    pub fn new() -> Self {
        Self {
            root: Node::new(A::default()),
            size: 0,
        }
    }

    /// Remove every key from the PrefixTree.
    pub fn clear(&mut self) {
        trace!(size = self.size, "clearing prefix tree");
        self.root = Node::new(A::default());
        self.size = 0;
    }

    /// How many distinct keys does the PrefixTree contain?
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Is the PrefixTree empty?
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Insert the key into the PrefixTree. Returns true if the key was not
    /// already present; inserting a present key changes nothing.
    ///
    /// Runs in time proportional to the length of the key, however many
    /// keys are already stored.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        let mut atoms = key.into_iter().peekable();
        let (mut node, depth) = Self::find_deepest_match_mut(&mut self.root, &mut atoms);

        // Everything past the deepest match is new, so nothing is overwritten
        let mut created = 0;
        for atom in atoms {
            node = node.add_child(atom, Node::new(atom));
            created += 1;
        }

        if node.terminal {
            trace!(depth, "key already present");
            return false;
        }
        node.terminal = true;
        self.size += 1;
        trace!(len = depth + created, created, size = self.size, "inserted key");
        true
    }

    /// Does the PrefixTree contain exactly the supplied key?
    ///
    /// A key which is only a path to other keys is not contained.
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.locate(key).is_some_and(Node::is_terminal)
    }

    /// Does any key in the PrefixTree start with the supplied prefix?
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.completions(prefix).next().is_some()
    }

    /// Get every key which starts with `prefix`, including `prefix` itself
    /// when it is a stored key. Keys are returned in enumeration order
    /// (see [`crate::iterator`]).
    pub fn complete<P, K>(&self, prefix: P) -> Vec<K>
    where
        P: IntoIterator<Item = A>,
        K: FromIterator<A>,
    {
        self.completions(prefix)
            .map(|key| key.into_iter().collect::<K>())
            .collect()
    }

    /// Create an iterator over every key which starts with `prefix`.
    pub fn completions<P: IntoIterator<Item = A>>(&self, prefix: P) -> Iter<'_, A> {
        let path: Vec<A> = prefix.into_iter().collect();
        let mut atoms = path.iter().copied().peekable();
        let (node, depth) = self.find_deepest_match(&mut atoms);
        if depth < path.len() {
            trace!(depth, len = path.len(), "no key has this prefix");
            return Iter::empty();
        }
        Iter::new(node, path)
    }

    /// Get every key stored in the PrefixTree, in enumeration order.
    pub fn strings<K: FromIterator<A>>(&self) -> Vec<K> {
        self.iter().map(|key| key.into_iter().collect::<K>()).collect()
    }

    /// Create an iterator over the PrefixTree.
    pub fn iter(&self) -> Iter<'_, A> {
        self.into_iter()
    }

    /// Create a sorted iterator over the PrefixTree.
    pub fn iter_sorted(&self) -> impl Iterator<Item = Vec<A>>
    where
        A: Ord,
    {
        let mut v = self.iter().collect::<Vec<Vec<A>>>();
        v.sort_unstable();
        v.into_iter()
    }

    /// The node at the end of `key`, if every atom of `key` is on a path.
    fn locate<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&Node<A>> {
        let mut atoms = key.into_iter().peekable();
        let (node, _depth) = self.find_deepest_match(&mut atoms);
        atoms.peek().is_none().then_some(node)
    }

    /// Walk from the root while the next atom has a child, consuming the
    /// matched atoms. Returns the deepest node reached and how many atoms
    /// matched; `(root, 0)` when nothing matches.
    fn find_deepest_match<I: Iterator<Item = A>>(
        &self,
        atoms: &mut Peekable<I>,
    ) -> (&Node<A>, usize) {
        let mut node = &self.root;
        let mut depth = 0;
        while let Some(child) = atoms.peek().and_then(|atom| node.children.get(atom)) {
            node = child;
            depth += 1;
            atoms.next();
        }
        (node, depth)
    }

    fn find_deepest_match_mut<'a, I: Iterator<Item = A>>(
        mut node: &'a mut Node<A>,
        atoms: &mut Peekable<I>,
    ) -> (&'a mut Node<A>, usize) {
        let mut depth = 0;
        while let Some(idx) = atoms
            .peek()
            .and_then(|atom| node.children.get_index_of(atom))
        {
            node = &mut node.children[idx];
            depth += 1;
            atoms.next();
        }
        (node, depth)
    }
}

/// The serialized form of a [`PrefixTree`]; `size` is derived from it.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(
    crate = "serde_crate",
    bound(deserialize = "A: TrieAtom + Deserialize<'de>")
)]
struct TreeRepr<A: TrieAtom> {
    root: Node<A>,
}

#[cfg(feature = "serde")]
impl<A: TrieAtom> From<TreeRepr<A>> for PrefixTree<A> {
    fn from(repr: TreeRepr<A>) -> Self {
        let mut size = 0;
        let mut stack = vec![&repr.root];
        while let Some(node) = stack.pop() {
            size += usize::from(node.terminal);
            stack.extend(node.children.values());
        }
        trace!(size, "recounted deserialized keys");
        Self {
            root: repr.root,
            size,
        }
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> FromIterator<K> for PrefixTree<A> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> Extend<K> for PrefixTree<A> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Renders the stored keys, e.g. `PrefixTree(["ABC", "ABD"])`.
impl<A: TrieAtom + fmt::Display> fmt::Display for PrefixTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self
            .iter()
            .map(|key| key.iter().map(ToString::to_string).collect::<String>())
            .collect();
        write!(f, "PrefixTree({keys:?})")
    }
}
