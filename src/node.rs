//! A single symbol position in a prefix tree and its links to children.
//!
//! Each [`Node`] exclusively owns its children; there are no back
//! references, so dropping a node releases its whole subtree.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Atoms which we wish to store in a PrefixTree must implement
/// TrieAtom.
///
/// `A::default()` is used as the sentinel symbol of the root node and never
/// appears in an enumerated key.
pub trait TrieAtom: Copy + Debug + Default + Eq + Hash {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Copy + Debug + Default + Eq + Hash {}

/// A labeled vertex: one symbol, a terminal flag and the children keyed by
/// their symbol. Children iterate in the order they were first added.
///
/// Dropping a node releases its subtree without recursion. The derived
/// `Clone`, `PartialEq`, `Debug` and serde impls do recurse, once per level,
/// so their depth is bounded by the stack and the longest stored key.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        bound(
            serialize = "A: TrieAtom + Serialize",
            deserialize = "A: TrieAtom + Deserialize<'de>"
        )
    )
)]
pub struct Node<A: TrieAtom> {
    pub(crate) symbol: A,
    pub(crate) terminal: bool,
    pub(crate) children: IndexMap<A, Node<A>>,
}

impl<A: TrieAtom> Node<A> {
    /// Create a non-terminal node with no children.
    pub fn new(symbol: A) -> Self {
        Self {
            symbol,
            terminal: false,
            children: IndexMap::new(),
        }
    }

    /// The symbol this node represents.
    #[inline]
    pub fn symbol(&self) -> A {
        self.symbol
    }

    /// Does the path from the root to this node spell a stored string?
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Is there a child for `symbol`?
    #[inline]
    pub fn has_child(&self, symbol: &A) -> bool {
        self.children.contains_key(symbol)
    }

    /// Get the child for `symbol`, or [`Error::MissingChild`].
    pub fn get_child(&self, symbol: &A) -> Result<&Node<A>> {
        self.children
            .get(symbol)
            .ok_or_else(|| Error::missing_child(symbol))
    }

    /// Link `node` under `symbol` and return it.
    ///
    /// Last write wins: an existing child at `symbol` is replaced and its
    /// subtree dropped. Insertion avoids this by only adding children below
    /// the deepest existing match.
    pub fn add_child(&mut self, symbol: A, node: Node<A>) -> &mut Node<A> {
        let (idx, _orphan) = self.children.insert_full(symbol, node);
        &mut self.children[idx]
    }

    /// The children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &Node<A>> {
        self.children.values()
    }

    /// How many distinct symbols branch from this node?
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl<A: TrieAtom> Drop for Node<A> {
    fn drop(&mut self) {
        // Detach every descendant first so each node drops with no children
        let mut stack: Vec<Node<A>> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
