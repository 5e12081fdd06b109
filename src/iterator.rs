//! Provides PrefixTree iterators.
//!
//! Enumeration is a pre-order depth-first walk with an explicit stack:
//! a terminal node is yielded before any of its descendants, and children
//! are visited in the order they were first inserted. A terminal node which
//! also has children is yielded once and then descended into.
//!
//! ```
//! use prefixtree::tree::PrefixTree;
//!
//! let tree: PrefixTree<char> = ["ABC", "ABD", "A", "XYZ"]
//!     .into_iter()
//!     .map(str::chars)
//!     .collect();
//!
//! let keys: Vec<String> = tree.iter().map(String::from_iter).collect();
//! assert_eq!(vec!["A", "ABC", "ABD", "XYZ"], keys);
//! ```
use indexmap::map::Values;

use crate::node::{Node, TrieAtom};
use crate::tree::PrefixTree;

/// Iterator over the keys stored at and below a node.
///
/// Each item is the full key, starting with whatever prefix led to the
/// node the walk began at.
#[derive(Debug)]
pub struct Iter<'a, A: TrieAtom> {
    path: Vec<A>,
    pending: Option<&'a Node<A>>,
    stack: Vec<Values<'a, A, Node<A>>>,
}

impl<'a, A: TrieAtom> Iter<'a, A> {
    /// Walk below `start`, whose path from the root is `path`.
    pub(crate) fn new(start: &'a Node<A>, path: Vec<A>) -> Self {
        Self {
            path,
            pending: Some(start),
            stack: vec![],
        }
    }

    /// An iterator which yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            path: vec![],
            pending: None,
            stack: vec![],
        }
    }
}

impl<'a, A: TrieAtom> Iterator for Iter<'a, A> {
    type Item = Vec<A>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Entering a node: its symbol is already on the path
            if let Some(node) = self.pending.take() {
                self.stack.push(node.children.values());
                if node.terminal {
                    return Some(self.path.clone());
                }
                continue;
            }
            match self.stack.last_mut()?.next() {
                Some(child) => {
                    self.path.push(child.symbol);
                    self.pending = Some(child);
                }
                None => {
                    self.stack.pop();
                    // The start node's symbol belongs to the caller's prefix
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
    }
}

impl<'a, A: TrieAtom> IntoIterator for &'a PrefixTree<A> {
    type Item = Vec<A>;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.root, vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{distr::Alphanumeric, rng, Rng};
    use std::collections::HashSet;

    fn populated() -> PrefixTree<char> {
        let mut tree = PrefixTree::new();
        for word in ["abcdef", "abcdefg", "abd", "ez", "z", "ze", "abdd"] {
            tree.insert(word.chars());
        }
        tree
    }

    #[test]
    fn it_iterates_over_empty_tree() {
        let tree: PrefixTree<char> = PrefixTree::new();
        assert_eq!(0, tree.iter().count());
    }

    #[test]
    fn it_iterates_in_pre_order() {
        let tree = populated();
        let keys: Vec<String> = tree.iter().map(String::from_iter).collect();
        assert_eq!(
            vec!["abcdef", "abcdefg", "abd", "abdd", "ez", "z", "ze"],
            keys
        );
    }

    #[test]
    fn it_yields_terminal_nodes_with_children_once() {
        let mut tree = PrefixTree::new();
        tree.insert("a".chars());
        tree.insert("ab".chars());
        tree.insert("abc".chars());
        let keys: Vec<String> = (&tree).into_iter().map(String::from_iter).collect();
        assert_eq!(vec!["a", "ab", "abc"], keys);
    }

    #[test]
    fn it_yields_the_empty_key_first() {
        let mut tree = PrefixTree::new();
        tree.insert("b".chars());
        tree.insert("".chars());
        let keys: Vec<String> = tree.iter().map(String::from_iter).collect();
        assert_eq!(vec!["", "b"], keys);
    }

    #[test]
    fn it_iterates_and_re_assembles_words() {
        let mut tree = PrefixTree::new();
        tree.insert("the quick brown fox".split_whitespace());
        tree.insert("the quick red fox".split_whitespace());

        let sentences: Vec<String> = tree
            .iter()
            .map(|key| Itertools::intersperse(key.into_iter(), " ").collect())
            .collect();
        assert_eq!(vec!["the quick brown fox", "the quick red fox"], sentences);
    }

    #[test]
    fn it_finds_in_populated_tree() {
        static POPULATION_SIZE: usize = 1000;
        static SIZE: usize = 64;
        let mut tree: PrefixTree<char> = PrefixTree::new();
        let mut searches: HashSet<Vec<char>> = HashSet::new();
        for _i in 0..POPULATION_SIZE {
            let entry: Vec<char> = rng()
                .sample_iter(&Alphanumeric)
                .take(rng().random_range(1..=SIZE))
                .map(char::from)
                .collect();
            searches.insert(entry.clone());
            tree.insert(entry);
        }
        let found: HashSet<Vec<char>> = tree.iter().collect();
        assert_eq!(searches, found);
        assert_eq!(searches.len(), tree.iter().count());
    }
}
