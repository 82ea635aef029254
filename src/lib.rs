//! A 26-way prefix tree (trie) over lowercase alphabetic keys.
//!
//! This crate provides a `Trie`, a key-value structure for keys made of the
//! letters `a..=z`, together with the searches a word list usually needs.
//!
//! # Features
//!
//! - Insert, lookup and removal in O(k) where k is the key length
//! - O(1) `len`, backed by per-node counts of the keys below each node
//! - Branches are pruned as soon as their last key is removed
//! - Lexicographic iteration with per-entry subtree counts
//! - Wildcard matching (`c*t`), autocomplete and autocorrect suggestions
//!
//! # Example
//!
//! ```
//! use alphatrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.load([("cat", 1), ("car", 2), ("cap", 3), ("dog", 4)]).unwrap();
//!
//! assert_eq!(trie.len(), 4);
//! assert_eq!(trie.partial_match("ca*").unwrap(), vec!["cap", "car", "cat"]);
//! assert_eq!(trie.autocomplete("ca").unwrap(), vec!["cap", "car", "cat"]);
//!
//! assert_eq!(trie.remove("cat"), Ok(true));
//! assert_eq!(trie.get("cat"), Ok(None));
//! assert_eq!(trie.remove("cat"), Ok(false));
//! assert_eq!(trie.len(), 3);
//! ```

mod error;
mod iter;
mod letters;
mod node;
mod query;
mod trie;

pub use error::TrieError;
pub use iter::{Iter, Keys, Values};
pub use letters::{AsLetters, WILDCARD};
pub use query::Correction;
pub use trie::{LoadReport, Trie};

/// Result type returned by the fallible `Trie` operations.
pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod proptest_trie;
