use crate::{Result, TrieError};

/// Number of branches per node, one for each letter `a..=z`.
pub(crate) const ALPHABET: usize = 26;

/// Wildcard accepted by [`Trie::partial_match`](crate::Trie::partial_match).
pub const WILDCARD: char = '*';

/// The `AsLetters` trait allows a type to be used as a key in a `Trie`.
///
/// Keys are read character by character. Uppercase ASCII letters are folded to
/// lowercase; anything else outside `a..=z` makes the key invalid.
pub trait AsLetters {
    /// Returns the characters of the key, in order.
    fn key_chars(&self) -> impl Iterator<Item = char>;

    /// Converts the key into branch indices (`0` for `a` up to `25` for `z`).
    fn letters(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for (position, found) in self.key_chars().enumerate() {
            match letter_index(found) {
                Some(idx) => out.push(idx),
                None => {
                    return Err(TrieError::InvalidKey {
                        key: self.key_chars().collect(),
                        position,
                        found,
                    });
                }
            }
        }
        Ok(out)
    }
}

impl AsLetters for str {
    fn key_chars(&self) -> impl Iterator<Item = char> {
        self.chars()
    }
}

impl AsLetters for String {
    fn key_chars(&self) -> impl Iterator<Item = char> {
        self.as_str().chars()
    }
}

impl AsLetters for char {
    fn key_chars(&self) -> impl Iterator<Item = char> {
        std::iter::once(*self)
    }
}

impl AsLetters for [char] {
    fn key_chars(&self) -> impl Iterator<Item = char> {
        self.iter().copied()
    }
}

impl AsLetters for Vec<char> {
    fn key_chars(&self) -> impl Iterator<Item = char> {
        self.iter().copied()
    }
}

impl<const N: usize> AsLetters for [char; N] {
    fn key_chars(&self) -> impl Iterator<Item = char> {
        self.iter().copied()
    }
}

impl<T: AsLetters + ?Sized> AsLetters for &T {
    fn key_chars(&self) -> impl Iterator<Item = char> {
        T::key_chars(*self)
    }
}

/// Maps a character to its branch index, folding ASCII uppercase.
pub(crate) fn letter_index(c: char) -> Option<u8> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        Some(c as u8 - b'a')
    } else {
        None
    }
}

pub(crate) fn index_letter(idx: u8) -> char {
    (b'a' + idx) as char
}

/// Builds the key spelled by a path of branch indices.
pub(crate) fn spell(path: &[u8]) -> String {
    path.iter().map(|&idx| index_letter(idx)).collect()
}

/// One position of a wildcard pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Letter(u8),
    Any,
}

pub(crate) fn pattern_slots<P: AsLetters + ?Sized>(pattern: &P) -> Result<Vec<Slot>> {
    let mut slots = Vec::new();
    for (position, found) in pattern.key_chars().enumerate() {
        if found == WILDCARD {
            slots.push(Slot::Any);
            continue;
        }
        match letter_index(found) {
            Some(idx) => slots.push(Slot::Letter(idx)),
            None => {
                return Err(TrieError::MalformedPattern {
                    pattern: pattern.key_chars().collect(),
                    position,
                    found,
                });
            }
        }
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_fold_case() {
        assert_eq!("aZb".letters(), Ok(vec![0, 25, 1]));
        assert_eq!(String::from("Cat").letters(), Ok(vec![2, 0, 19]));
        assert_eq!(['d', 'o', 'g'].letters(), Ok(vec![3, 14, 6]));
        assert_eq!("".letters(), Ok(vec![]));
    }

    #[test]
    fn test_letters_reject_invalid() {
        assert_eq!(
            "ca-t".letters(),
            Err(TrieError::InvalidKey {
                key: "ca-t".to_string(),
                position: 2,
                found: '-',
            })
        );
        assert!("café".letters().is_err());
        assert!("a1".letters().is_err());
        assert!("*".letters().is_err());
    }

    #[test]
    fn test_spell_round_trips_indices() {
        let path = "hello".letters().unwrap();
        assert_eq!(spell(&path), "hello");
        assert_eq!(index_letter(0), 'a');
        assert_eq!(index_letter(25), 'z');
    }

    #[test]
    fn test_pattern_slots() {
        assert_eq!(
            pattern_slots("C*t").unwrap(),
            vec![Slot::Letter(2), Slot::Any, Slot::Letter(19)]
        );
        assert_eq!(
            pattern_slots("a?"),
            Err(TrieError::MalformedPattern {
                pattern: "a?".to_string(),
                position: 1,
                found: '?',
            })
        );
    }
}
