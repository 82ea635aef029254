use tracing::{debug, trace};

use crate::iter::{Iter, Keys, Values};
use crate::letters::{AsLetters, index_letter, spell};
use crate::node::TrieNode;
use crate::Result;

/// A `Trie` maps lowercase alphabetic keys to values using a 26-way prefix tree.
///
/// Every node keeps the number of values stored in its subtree, so `len` is
/// O(1) and a branch is detached as soon as its last key is removed.
///
/// Keys may contain ASCII letters only; uppercase letters are folded to
/// lowercase and any other character is rejected with
/// [`TrieError::InvalidKey`](crate::TrieError::InvalidKey).
///
/// # Examples
///
/// ```
/// use alphatrie::Trie;
///
/// let mut trie = Trie::new();
///
/// assert_eq!(trie.insert("cat", 1), Ok(true));
/// assert_eq!(trie.insert("car", 2), Ok(true));
///
/// // Duplicates are rejected, the first value stays
/// assert_eq!(trie.insert("cat", 10), Ok(false));
/// assert_eq!(trie.get("cat"), Ok(Some(&1)));
///
/// assert_eq!(trie.remove("car"), Ok(true));
/// assert_eq!(trie.get("car"), Ok(None));
/// assert_eq!(trie.len(), 1);
///
/// assert!(trie.insert("c4t", 3).is_err());
/// ```
#[derive(Clone)]
pub struct Trie<T> {
    pub(crate) root: TrieNode<T>,
}

/// Outcome of [`Trie::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Pairs whose key was new and got stored.
    pub inserted: usize,
    /// Pairs whose key was already present and got ignored.
    pub duplicates: usize,
}

impl<T> Default for Trie<T> {
    /// Creates a new empty `Trie`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let trie: Trie<i32> = Default::default();
    /// assert!(trie.is_empty());
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map_debug = f.debug_map();
        for (key, value, _) in self.iter() {
            map_debug.entry(&key, value);
        }
        map_debug.finish()
    }
}

impl<T: PartialEq> PartialEq for Trie<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((k1, v1, _), (k2, v2, _))| k1 == k2 && v1 == v2)
    }
}

impl<T: Eq> Eq for Trie<T> {}

impl<'a, T> IntoIterator for &'a Trie<T> {
    type Item = (String, &'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Trie<T> {
    /// Creates a new empty `Trie`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let trie: Trie<i32> = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
        }
    }

    /// Returns the number of keys stored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("a", 1).unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.root.count
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.root.count == 0
    }

    /// Drops every node and leaves a single empty root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("a", 1).unwrap();
    /// trie.insert("b", 2).unwrap();
    ///
    /// trie.clear();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.node_count(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }

    /// Returns the number of allocated nodes, the root included.
    ///
    /// Nodes only exist on the path of a stored key, so this drops back as
    /// keys are removed.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Inserts a key-value pair.
    ///
    /// Returns `Ok(true)` if the key was new. If the key already holds a value
    /// the trie is left untouched and `Ok(false)` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.insert("a", 1), Ok(true));
    /// assert_eq!(trie.insert("A", 2), Ok(false));
    /// assert_eq!(trie.get("a"), Ok(Some(&1)));
    /// ```
    pub fn insert<K: AsLetters>(&mut self, key: K, value: T) -> Result<bool> {
        let letters = key.letters()?;

        if self.find(&letters).is_some_and(|node| node.value.is_some()) {
            trace!(key = %spell(&letters), "duplicate key ignored");
            return Ok(false);
        }

        let mut node = &mut self.root;
        node.count += 1;
        for &idx in &letters {
            node = node.child_or_insert(idx);
            node.count += 1;
        }
        node.value = Some(value);
        Ok(true)
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("a", 0).unwrap();
    /// assert_eq!(trie.get("a"), Ok(Some(&0)));
    /// assert_eq!(trie.get("b"), Ok(None));
    /// ```
    pub fn get<K: AsLetters>(&self, key: K) -> Result<Option<&T>> {
        let letters = key.letters()?;
        Ok(self.find(&letters).and_then(|node| node.value.as_ref()))
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("a", 1).unwrap();
    ///
    /// if let Ok(Some(value)) = trie.get_mut("a") {
    ///     *value = 10;
    /// }
    /// assert_eq!(trie.get("a"), Ok(Some(&10)));
    /// ```
    pub fn get_mut<K: AsLetters>(&mut self, key: K) -> Result<Option<&mut T>> {
        let letters = key.letters()?;
        let mut node = &mut self.root;
        for &idx in &letters {
            match node.child_mut(idx) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(node.value.as_mut())
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains_key<K: AsLetters>(&self, key: K) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Removes `key`, returning `Ok(true)` if it was present.
    ///
    /// Nodes left without any key below them are detached.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("a", 1).unwrap();
    ///
    /// assert_eq!(trie.remove("a"), Ok(true));
    /// assert_eq!(trie.remove("a"), Ok(false));
    /// ```
    pub fn remove<K: AsLetters>(&mut self, key: K) -> Result<bool> {
        Ok(self.take(key)?.is_some())
    }

    /// Removes `key`, returning the value it held.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("a", 1).unwrap();
    ///
    /// assert_eq!(trie.take("a"), Ok(Some(1)));
    /// assert_eq!(trie.take("a"), Ok(None));
    /// ```
    pub fn take<K: AsLetters>(&mut self, key: K) -> Result<Option<T>> {
        let letters = key.letters()?;
        let taken = take_at(&mut self.root, &letters);
        if taken.is_none() {
            trace!(key = %spell(&letters), "key not found");
        }
        Ok(taken)
    }

    /// Stores every `(key, value)` pair in order.
    ///
    /// The first value given for a key wins; later duplicates are counted and
    /// dropped. Stops at the first invalid key, keeping what was stored so far.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::{LoadReport, Trie};
    /// let mut trie = Trie::new();
    /// let report = trie.load([("cat", 1), ("dog", 2), ("cat", 3)]).unwrap();
    ///
    /// assert_eq!(report, LoadReport { inserted: 2, duplicates: 1 });
    /// assert_eq!(trie.get("cat"), Ok(Some(&1)));
    /// ```
    pub fn load<K, I>(&mut self, pairs: I) -> Result<LoadReport>
    where
        K: AsLetters,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut report = LoadReport::default();
        for (key, value) in pairs {
            if self.insert(key, value)? {
                report.inserted += 1;
            } else {
                report.duplicates += 1;
            }
        }
        debug!(
            inserted = report.inserted,
            duplicates = report.duplicates,
            "loaded key/value pairs"
        );
        Ok(report)
    }

    /// Returns an iterator over `(key, value, count)` in lexicographic key order.
    ///
    /// `count` is the number of keys stored at or below `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("ab", 2).unwrap();
    /// trie.insert("a", 1).unwrap();
    /// trie.insert("b", 3).unwrap();
    ///
    /// let entries: Vec<_> = trie.iter().collect();
    /// assert_eq!(
    ///     entries,
    ///     vec![
    ///         ("a".to_string(), &1, 2),
    ///         ("ab".to_string(), &2, 1),
    ///         ("b".to_string(), &3, 1),
    ///     ]
    /// );
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(Some((&self.root, String::new())))
    }

    /// Returns an iterator over the entries whose key starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use alphatrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("apple", 1).unwrap();
    /// trie.insert("apply", 2).unwrap();
    /// trie.insert("banana", 3).unwrap();
    ///
    /// let keys: Vec<_> = trie.prefix_iter("app").unwrap().map(|(k, _, _)| k).collect();
    /// assert_eq!(keys, vec!["apple", "apply"]);
    /// ```
    pub fn prefix_iter<K: AsLetters>(&self, prefix: K) -> Result<Iter<'_, T>> {
        let letters = prefix.letters()?;
        Ok(Iter::new(self.find(&letters).map(|node| (node, spell(&letters)))))
    }

    /// Returns an iterator over the keys in lexicographic order.
    pub fn keys(&self) -> Keys<'_, T> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values, ordered by key.
    pub fn values(&self) -> Values<'_, T> {
        Values { inner: self.iter() }
    }

    pub(crate) fn find(&self, letters: &[u8]) -> Option<&TrieNode<T>> {
        let mut node = &self.root;
        for &idx in letters {
            node = node.child(idx)?;
        }
        Some(node)
    }
}

/// Takes the value at the end of `letters`, decrementing counts along the path
/// and detaching the highest branch left without any key.
fn take_at<T>(root: &mut TrieNode<T>, letters: &[u8]) -> Option<T> {
    let mut node = &*root;
    for &idx in letters {
        node = node.child(idx)?;
    }
    node.value.as_ref()?;

    let mut node = root;
    node.count -= 1;
    for (depth, &idx) in letters.iter().enumerate() {
        if node.child(idx)?.count == 1 {
            let mut branch = node.children[idx as usize].take()?;
            debug!(letter = %index_letter(idx), depth, "pruned empty branch");
            let mut end = &mut *branch;
            for &rest in &letters[depth + 1..] {
                end = end.child_mut(rest)?;
            }
            return end.value.take();
        }
        node = node.child_mut(idx)?;
        node.count -= 1;
    }
    node.value.take()
}
