//! Provides a multi-way prefix tree (trie) for storing a dynamic set of
//! keys, each a sequence of atoms, with insertion, membership testing and
//! prefix completion.
//!
//! Keys must be iterators of atoms supporting the [`crate::node::TrieAtom`]
//! trait, so the user decides the granularity: `chars()`, grapheme
//! clusters, whitespace separated words, numbers...
//!
//! Insertion, membership and prefix location run in time proportional to
//! the length of the key and are independent of how many keys are stored.
//! Enumeration ([`crate::tree::PrefixTree::strings`] and
//! [`crate::tree::PrefixTree::complete`]) is a pre-order depth-first walk
//! with children in insertion order.
//!
//! Modules:
//! * tree : [`crate::tree`]
//! * node : [`crate::node`]
//! * iterator : [`crate::iterator`]
//! * error : [`crate::error`]
//!
//! Typical usages for this data structure:
//!  - Autocompletion
//!  - Spell checking
//!  - Prefix matching keys
//!
//! The tree is single threaded and provides no internal synchronisation.
//! Share it read-only once built, or guard writes with one external lock.

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod error;

pub mod iterator;

pub mod node;

pub mod tree;
