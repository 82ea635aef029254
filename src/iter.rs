use std::iter::FusedIterator;

use crate::letters::index_letter;
use crate::node::TrieNode;

/// An iterator over the entries of a `Trie` in lexicographic key order.
///
/// Each item is `(key, value, count)` where `count` is the number of keys
/// stored at or below `key` (the entry itself included).
///
/// This struct is created by the [`iter`] and [`prefix_iter`] methods on [`Trie`].
///
/// [`iter`]: crate::Trie::iter
/// [`prefix_iter`]: crate::Trie::prefix_iter
/// [`Trie`]: crate::Trie
pub struct Iter<'a, T> {
    stack: Vec<(&'a TrieNode<T>, String)>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(start: Option<(&'a TrieNode<T>, String)>) -> Self {
        match start {
            Some((node, key)) => Iter {
                remaining: node.count,
                stack: vec![(node, key)],
            },
            None => Iter {
                stack: Vec::new(),
                remaining: 0,
            },
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (String, &'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            // Reverse push so that 'a' is popped first.
            for (idx, child) in node.children().rev() {
                let mut child_key = String::with_capacity(key.len() + 1);
                child_key.push_str(&key);
                child_key.push(index_letter(idx));
                self.stack.push((child, child_key));
            }

            if let Some(value) = &node.value {
                self.remaining -= 1;
                return Some((key, value, node.count));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over the keys of a `Trie`, in lexicographic order.
///
/// This struct is created by the [`keys`] method on [`Trie`].
///
/// [`keys`]: crate::Trie::keys
/// [`Trie`]: crate::Trie
pub struct Keys<'a, T> {
    pub(crate) inner: Iter<'a, T>,
}

impl<T> Iterator for Keys<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Keys<'_, T> {}

/// An iterator over the values of a `Trie`, ordered by key.
///
/// This struct is created by the [`values`] method on [`Trie`].
///
/// [`values`]: crate::Trie::values
/// [`Trie`]: crate::Trie
pub struct Values<'a, T> {
    pub(crate) inner: Iter<'a, T>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}
