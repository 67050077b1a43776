use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::{BTreeMap, BTreeSet};

fn validate_trie(t: &Trie) {
    let issues = t.verify_integrity();
    assert!(issues.is_empty(), "integrity issues: {issues:?}");

    let stats = t.stats();
    assert_eq!(stats.terminal_count, t.len(), "stats must agree with len()");
    assert_eq!(
        t.entries().count(),
        t.len(),
        "traversal must yield one entry per key"
    );
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    // A small alphabet so keys share prefixes often.
    prop::collection::vec(0u8..4, 0..=12)
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 4)]
    Insert(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    #[proptest(weight = 3)]
    Increment(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    #[proptest(weight = 2)]
    Search(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    #[proptest(weight = 2)]
    Lookup(#[proptest(strategy = "key_strategy()")] Vec<u8>),
}

/// Every prefix of `key`, including the empty one and `key` itself.
fn prefixes(key: &[u8]) -> impl Iterator<Item = Vec<u8>> + '_ {
    (0..=key.len()).map(move |len| key[..len].to_vec())
}

fn brute_force_counts(corpus: &[u8]) -> BTreeMap<Vec<u8>, u64> {
    let mut counts = BTreeMap::new();
    for len in 1..=corpus.len() {
        for window in corpus.windows(len) {
            *counts.entry(window.to_vec()).or_insert(0) += 1;
        }
    }
    counts
}

fn collect(t: &Trie) -> BTreeMap<Vec<u8>, u64> {
    t.entries().map(|(k, c)| (k.into_vec(), c)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_model(ops in prop::collection::vec(any::<Op>(), 0..=400)) {
        let mut t = Trie::new();
        let mut keys: BTreeMap<Vec<u8>, u64> = BTreeMap::new();
        let mut paths: BTreeSet<Vec<u8>> = BTreeSet::new();
        paths.insert(Vec::new());

        for op in ops {
            match op {
                Op::Insert(key) => {
                    let before = keys.get(&key).copied();
                    let node = t.insert(&key).unwrap();
                    prop_assert!(node.is_terminal());
                    prop_assert_eq!(node.count(), before.unwrap_or(0));
                    keys.entry(key.clone()).or_insert(0);
                    paths.extend(prefixes(&key));
                }
                Op::Increment(key) => {
                    if let Some(count) = keys.get_mut(&key) {
                        *count += 1;
                        let got = t.lookup_mut(&key).unwrap().increment();
                        prop_assert_eq!(got, *count);
                    }
                }
                Op::Search(key) => {
                    prop_assert_eq!(t.search(&key), keys.contains_key(&key));
                    prop_assert_eq!(t.count(&key), keys.get(&key).copied());
                }
                Op::Lookup(key) => {
                    match t.lookup(&key) {
                        Ok(node) => {
                            prop_assert!(paths.contains(&key));
                            prop_assert_eq!(node.is_terminal(), keys.contains_key(&key));
                        }
                        Err(err) => {
                            prop_assert!(err.is_not_found());
                            prop_assert!(!paths.contains(&key));
                        }
                    }
                }
            }

            prop_assert_eq!(t.len(), keys.len());
        }

        validate_trie(&t);
        prop_assert_eq!(t.stats().node_count, paths.len());
        let got: Vec<(Vec<u8>, u64)> = t.entries().map(|(k, c)| (k.into_vec(), c)).collect();
        let expected: Vec<(Vec<u8>, u64)> = keys.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_training_counts_every_occurrence(corpus in prop::collection::vec(0u8..4, 0..=24)) {
        let mut t = Trie::new();
        let report = UnigramTrainer::default().train(&mut t, &corpus).unwrap();

        let n = corpus.len() as u64;
        prop_assert_eq!(report.substrings, n * (n + 1) / 2);
        prop_assert_eq!(t.stats().total_count, report.substrings);
        prop_assert_eq!(collect(&t), brute_force_counts(&corpus));
        validate_trie(&t);
    }

    #[test]
    fn prop_training_twice_doubles(corpus in prop::collection::vec(any::<u8>(), 0..=16)) {
        let mut t = Trie::new();
        train_unigram(&mut t, &corpus).unwrap();
        let once = collect(&t);
        train_unigram(&mut t, &corpus).unwrap();
        let twice = collect(&t);

        prop_assert_eq!(
            once.keys().collect::<Vec<_>>(),
            twice.keys().collect::<Vec<_>>()
        );
        for (key, count) in &once {
            prop_assert_eq!(twice[key], count * 2);
        }
    }

    #[test]
    fn prop_inserting_one_key_never_reveals_another(
        k1 in key_strategy(),
        k2 in key_strategy(),
    ) {
        let mut t = Trie::new();
        prop_assert!(!t.search(&k1));
        t.insert(&k1).unwrap();
        prop_assert!(t.search(&k1));
        prop_assert_eq!(t.search(&k2), k1 == k2);
    }

    #[test]
    fn prop_chunked_training_matches_per_chunk_counts(
        corpus in prop::collection::vec(0u8..3, 0..=30),
        chunk in 1usize..8,
    ) {
        let trainer = UnigramTrainer::new(TrainerConfig {
            chunk_length: Some(chunk),
            ..TrainerConfig::default()
        })
        .unwrap();
        let mut t = Trie::new();
        trainer.train(&mut t, &corpus).unwrap();

        let mut expected = BTreeMap::new();
        for part in corpus.chunks(chunk) {
            for (key, count) in brute_force_counts(part) {
                *expected.entry(key).or_insert(0) += count;
            }
        }
        prop_assert_eq!(collect(&t), expected);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys: Vec<Vec<u8>> = vec![
        b"a".to_vec(),
        b"b".to_vec(),
        b"".to_vec(),
        b"aa".to_vec(),
        b"ab".to_vec(),
        b"ba".to_vec(),
    ];

    for_each_permutation(&keys, |perm| {
        let mut t = Trie::new();
        let mut m: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for (i, k) in perm.into_iter().enumerate() {
            let v = i as u64;
            t.insert(&k).unwrap().add(v);
            m.insert(k, v);
        }

        validate_trie(&t);
        let got: Vec<(Vec<u8>, u64)> = t.entries().map(|(k, v)| (k.into_vec(), v)).collect();
        let expected: Vec<(Vec<u8>, u64)> = m.into_iter().collect();
        assert_eq!(got, expected);
    });
}

#[test]
fn repeated_pattern_counts_survive_any_corpus_prefix() {
    // Counting must not stop partway through the inner enumeration; every
    // prefix of the pattern is checked against the brute-force counts.
    let pattern: Vec<u8> = [1u8, 2, 3].iter().copied().cycle().take(16).collect();
    for len in 0..=pattern.len() {
        let mut t = Trie::new();
        train_unigram(&mut t, &pattern[..len]).unwrap();
        assert_eq!(collect(&t), brute_force_counts(&pattern[..len]), "len {len}");
    }
}
