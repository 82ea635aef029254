//! Read-only searches over the key space: wildcard patterns, prefix
//! completion and one-letter corrections.
//!
//! Every search walks the nodes depth-first on an explicit stack while sharing
//! a single path buffer of branch indices; a `String` is only built for keys
//! that end up in the result. Stack depth never grows with key length.

use tracing::debug;

use crate::letters::{AsLetters, Slot, pattern_slots, spell};
use crate::node::TrieNode;
use crate::{Result, Trie};

/// Selects how [`Trie::autocorrect_with`] builds its suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Correction {
    /// Stored keys of the same length that differ from the input in exactly
    /// one position.
    #[default]
    Substitution,
    /// Walk the input while it matches a stored path and, after every
    /// letter, suggest each stored key that extends the walked prefix by a
    /// single letter. The walk stops at the first letter with no branch.
    PrefixWalk,
}

impl<T> Trie<T> {
    /// Returns the stored keys matching `pattern`, where `*` stands for
    /// exactly one letter.
    ///
    /// Matches have the same length as the pattern. They are returned in
    /// lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.load([("cat", 1), ("car", 2), ("cart", 3), ("cot", 4)]).unwrap();
    ///
    /// assert_eq!(trie.partial_match("ca*").unwrap(), vec!["car", "cat"]);
    /// assert_eq!(trie.partial_match("c*t").unwrap(), vec!["cat", "cot"]);
    /// assert!(trie.partial_match("c?t").is_err());
    /// ```
    pub fn partial_match<P: AsLetters>(&self, pattern: P) -> Result<Vec<String>> {
        let slots = pattern_slots(&pattern)?;
        let found = match_slots(&self.root, &slots);
        debug!(
            wildcards = slots.iter().filter(|s| **s == Slot::Any).count(),
            matches = found.len(),
            "partial match"
        );
        Ok(found)
    }

    /// Returns every stored key starting with `prefix`, in lexicographic
    /// order. The prefix itself is included when it is a stored key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.load([("you", 1), ("young", 2), ("your", 3), ("yes", 4)]).unwrap();
    ///
    /// assert_eq!(trie.autocomplete("you").unwrap(), vec!["you", "young", "your"]);
    /// assert!(trie.autocomplete("yo-").is_err());
    /// assert!(trie.autocomplete("zz").unwrap().is_empty());
    /// ```
    pub fn autocomplete<K: AsLetters>(&self, prefix: K) -> Result<Vec<String>> {
        let mut path = prefix.letters()?;
        let found = match self.find(&path) {
            Some(node) => collect_subtree(node, &mut path),
            None => Vec::new(),
        };
        debug!(completions = found.len(), "autocomplete");
        Ok(found)
    }

    /// Suggests stored keys that differ from `key` by one substituted letter.
    ///
    /// Shorthand for [`autocorrect_with`](Trie::autocorrect_with) using
    /// [`Correction::Substitution`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.load([("your", 1), ("tour", 2), ("you", 3)]).unwrap();
    ///
    /// assert_eq!(trie.autocorrect("yoer").unwrap(), vec!["your"]);
    /// assert_eq!(trie.autocorrect("four").unwrap(), vec!["tour", "your"]);
    /// ```
    pub fn autocorrect<K: AsLetters>(&self, key: K) -> Result<Vec<String>> {
        self.autocorrect_with(key, Correction::Substitution)
    }

    /// Suggests stored keys close to `key`, using the given strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::{Correction, Trie};
    /// let mut trie = Trie::new();
    /// trie.load([("yo", 1), ("you", 2), ("yon", 3), ("yours", 4)]).unwrap();
    ///
    /// // "yoru": after "y" suggest "yo", after "yo" suggest "yon" and "you",
    /// // then stop because nothing continues "yor".
    /// assert_eq!(
    ///     trie.autocorrect_with("yoru", Correction::PrefixWalk).unwrap(),
    ///     vec!["yo", "yon", "you"]
    /// );
    /// ```
    pub fn autocorrect_with<K: AsLetters>(
        &self,
        key: K,
        correction: Correction,
    ) -> Result<Vec<String>> {
        let letters = key.letters()?;
        let found = match correction {
            Correction::Substitution => substitute(&self.root, &letters),
            Correction::PrefixWalk => prefix_walk(&self.root, &letters),
        };
        debug!(?correction, suggestions = found.len(), "autocorrect");
        Ok(found)
    }
}

/// Pending node of a depth-first walk: the node, the length of its parent's
/// path, and the letter leading to it (`None` for the starting node).
type Step<'a, T> = (&'a TrieNode<T>, usize, Option<u8>);

fn match_slots<T>(root: &TrieNode<T>, slots: &[Slot]) -> Vec<String> {
    let mut found = Vec::new();
    let mut path = Vec::with_capacity(slots.len());
    let mut stack: Vec<Step<'_, T>> = vec![(root, 0, None)];
    while let Some((node, depth, letter)) = stack.pop() {
        path.truncate(depth);
        path.extend(letter);
        match slots.get(path.len()) {
            None => {
                if node.value.is_some() {
                    found.push(spell(&path));
                }
            }
            Some(&Slot::Letter(idx)) => {
                if let Some(child) = node.child(idx) {
                    stack.push((child, path.len(), Some(idx)));
                }
            }
            Some(&Slot::Any) => {
                for (idx, child) in node.children().rev() {
                    stack.push((child, path.len(), Some(idx)));
                }
            }
        }
    }
    found
}

fn collect_subtree<T>(start: &TrieNode<T>, path: &mut Vec<u8>) -> Vec<String> {
    let mut found = Vec::new();
    let mut stack: Vec<Step<'_, T>> = vec![(start, path.len(), None)];
    while let Some((node, depth, letter)) = stack.pop() {
        path.truncate(depth);
        path.extend(letter);
        if node.value.is_some() {
            found.push(spell(path));
        }
        for (idx, child) in node.children().rev() {
            stack.push((child, path.len(), Some(idx)));
        }
    }
    found
}

/// Keys differing from `letters` in exactly one position. Each pending node
/// carries whether its path already spent the substitution.
fn substitute<T>(root: &TrieNode<T>, letters: &[u8]) -> Vec<String> {
    let mut found = Vec::new();
    let mut path = Vec::with_capacity(letters.len());
    let mut stack: Vec<(Step<'_, T>, bool)> = vec![((root, 0, None), false)];
    while let Some(((node, depth, letter), used)) = stack.pop() {
        path.truncate(depth);
        path.extend(letter);
        let Some(&want) = letters.get(path.len()) else {
            if used && node.value.is_some() {
                found.push(spell(&path));
            }
            continue;
        };

        if used {
            if let Some(child) = node.child(want) {
                stack.push(((child, path.len(), Some(want)), true));
            }
            continue;
        }

        for (idx, child) in node.children().rev() {
            stack.push(((child, path.len(), Some(idx)), idx != want));
        }
    }
    found
}

fn prefix_walk<T>(root: &TrieNode<T>, letters: &[u8]) -> Vec<String> {
    let mut found = Vec::new();
    let mut node = root;
    let mut path = Vec::with_capacity(letters.len() + 1);
    for &idx in letters {
        let Some(child) = node.child(idx) else {
            break;
        };
        node = child;
        path.push(idx);
        for (next, grandchild) in node.children() {
            if grandchild.value.is_some() {
                path.push(next);
                found.push(spell(&path));
                path.pop();
            }
        }
    }
    found
}
