use thiserror::Error;

/// Errors returned for input the trie cannot represent.
///
/// Duplicate inserts and missing keys are not errors: they are reported as
/// `Ok(false)` / `Ok(None)` by the operation that hit them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// A key contains a character outside `a..=z` after lowercasing.
    #[error("invalid character {found:?} at position {position} in key {key:?}")]
    InvalidKey {
        key: String,
        position: usize,
        found: char,
    },

    /// A pattern contains a character outside `a..=z` and `*`.
    #[error("invalid character {found:?} at position {position} in pattern {pattern:?}")]
    MalformedPattern {
        pattern: String,
        position: usize,
        found: char,
    },
}
