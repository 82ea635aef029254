use super::*;
use crate::node::TrieNode;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// A small alphabet keeps shared prefixes and collisions frequent.
fn key() -> impl Strategy<Value = String> {
    "[a-e]{0,6}".prop_map(String::from)
}

fn key_value_pairs(
    min_pairs: usize,
    max_pairs: usize,
) -> impl Strategy<Value = Vec<(String, i32)>> {
    proptest::collection::vec((key(), proptest::num::i32::ANY), min_pairs..max_pairs)
}

#[derive(Debug, Clone)]
enum Operation {
    Insert(String, i32),
    Remove(String),
}

fn operations(max_ops: usize) -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            3 => (key(), any::<i32>()).prop_map(|(k, v)| Operation::Insert(k, v)),
            2 => key().prop_map(Operation::Remove),
        ],
        0..max_ops,
    )
}

/// Builds the trie and the reference map side by side; first insert wins.
fn build(pairs: &[(String, i32)]) -> (Trie<i32>, BTreeMap<String, i32>) {
    let mut trie = Trie::new();
    let mut reference_map = BTreeMap::new();
    for (key, value) in pairs {
        trie.insert(key, *value).unwrap();
        reference_map.entry(key.clone()).or_insert(*value);
    }
    (trie, reference_map)
}

fn counts_hold<T>(node: &TrieNode<T>) -> Option<usize> {
    let mut total = node.value.is_some() as usize;
    for (_, child) in node.children() {
        if child.count == 0 {
            return None;
        }
        total += counts_hold(child)?;
    }
    (node.count == total).then_some(total)
}

fn prefixes(reference_map: &BTreeMap<String, i32>) -> BTreeSet<String> {
    let mut all = BTreeSet::from([String::new()]);
    for key in reference_map.keys() {
        for end in 1..=key.len() {
            all.insert(key[..end].to_string());
        }
    }
    all
}

fn matches_pattern(key: &str, pattern: &str) -> bool {
    key.len() == pattern.len()
        && key
            .chars()
            .zip(pattern.chars())
            .all(|(k, p)| p == WILDCARD || k == p)
}

fn hamming_one(key: &str, input: &str) -> bool {
    key.len() == input.len()
        && key
            .chars()
            .zip(input.chars())
            .filter(|(a, b)| a != b)
            .count()
            == 1
}

proptest! {
    #[test]
    fn size_and_counts_track_operations(ops in operations(200)) {
        let mut trie = Trie::new();
        let mut reference_map = BTreeMap::new();

        for op in &ops {
            match op {
                Operation::Insert(key, value) => {
                    let fresh = !reference_map.contains_key(key);
                    if fresh {
                        reference_map.insert(key.clone(), *value);
                    }
                    prop_assert_eq!(trie.insert(key, *value), Ok(fresh));
                }
                Operation::Remove(key) => {
                    let expected = reference_map.remove(key);
                    prop_assert_eq!(trie.take(key), Ok(expected));
                }
            }
            prop_assert_eq!(trie.len(), reference_map.len());
            prop_assert_eq!(trie.is_empty(), reference_map.is_empty());
            prop_assert_eq!(counts_hold(&trie.root), Some(reference_map.len()));
        }

        for (key, value) in &reference_map {
            prop_assert_eq!(trie.get(key), Ok(Some(value)));
        }
    }

    #[test]
    fn duplicates_never_overwrite(k in key(), first in any::<i32>(), second in any::<i32>()) {
        let mut trie = Trie::new();
        prop_assert_eq!(trie.insert(&k, first), Ok(true));
        prop_assert_eq!(trie.insert(&k, second), Ok(false));
        prop_assert_eq!(trie.get(&k), Ok(Some(&first)));
        prop_assert_eq!(trie.len(), 1);
    }

    #[test]
    fn removal_clears_value_and_shrinks_size(pairs in key_value_pairs(1, 60)) {
        let (mut trie, reference_map) = build(&pairs);

        for key in reference_map.keys() {
            let before = trie.len();
            prop_assert_eq!(trie.remove(key), Ok(true));
            prop_assert_eq!(trie.get(key), Ok(None));
            prop_assert_eq!(trie.len(), before - 1);
            prop_assert_eq!(trie.remove(key), Ok(false));
        }

        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn nodes_exist_only_for_stored_prefixes(
        pairs in key_value_pairs(1, 60),
        removal_indices in proptest::collection::vec(0..60usize, 0..30)
    ) {
        let (mut trie, mut reference_map) = build(&pairs);

        for idx in removal_indices.iter().filter(|&&idx| idx < pairs.len()) {
            let key = &pairs[*idx].0;
            trie.remove(key).unwrap();
            reference_map.remove(key);
        }

        prop_assert_eq!(trie.node_count(), prefixes(&reference_map).len());
    }

    #[test]
    fn iteration_matches_sorted_reference(pairs in key_value_pairs(0, 60)) {
        let (trie, reference_map) = build(&pairs);

        let trie_pairs: Vec<(String, i32)> = trie.iter().map(|(k, v, _)| (k, *v)).collect();
        let ref_pairs: Vec<(String, i32)> =
            reference_map.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(trie_pairs, ref_pairs);

        for (key, _, count) in trie.iter() {
            let below = reference_map.keys().filter(|k| k.starts_with(&key)).count();
            prop_assert_eq!(count, below);
        }
    }

    #[test]
    fn autocomplete_returns_exactly_the_prefixed_keys(
        pairs in key_value_pairs(0, 60),
        prefix in "[a-e]{0,3}"
    ) {
        let (trie, reference_map) = build(&pairs);

        let expected: Vec<String> = reference_map
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect();
        let completions = trie.autocomplete(&prefix).unwrap();

        prop_assert!(completions.iter().all(|k| k.starts_with(&prefix)));
        prop_assert_eq!(completions, expected);
    }

    #[test]
    fn partial_match_respects_length_and_literals(
        pairs in key_value_pairs(0, 60),
        pattern in "[a-e*]{0,5}"
    ) {
        let (trie, reference_map) = build(&pairs);

        let expected: Vec<String> = reference_map
            .keys()
            .filter(|k| matches_pattern(k, &pattern))
            .cloned()
            .collect();
        prop_assert_eq!(trie.partial_match(&pattern).unwrap(), expected);
    }

    #[test]
    fn autocorrect_finds_every_single_substitution(
        pairs in key_value_pairs(0, 60),
        input in "[a-e]{0,6}"
    ) {
        let (trie, reference_map) = build(&pairs);

        let expected: Vec<String> = reference_map
            .keys()
            .filter(|k| hamming_one(k, &input))
            .cloned()
            .collect();
        prop_assert_eq!(trie.autocorrect(&input).unwrap(), expected);
    }

    #[test]
    fn prefix_walk_suggests_stored_one_letter_extensions(
        pairs in key_value_pairs(0, 60),
        input in "[a-e]{0,6}"
    ) {
        let (trie, reference_map) = build(&pairs);

        for suggestion in trie.autocorrect_with(&input, Correction::PrefixWalk).unwrap() {
            let walked = &suggestion[..suggestion.len() - 1];
            prop_assert!(!walked.is_empty());
            prop_assert!(input.starts_with(walked));
            prop_assert!(reference_map.contains_key(&suggestion));
        }
    }
}
