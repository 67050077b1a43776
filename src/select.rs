//! Picking the best stored substring under a scoring rule.

use std::cmp::Ordering;

use crate::key::ByteKey;
use crate::trie::Trie;

/// Return the `(key, count)` pair maximizing `score(key_len, count)`.
///
/// Ties go to the shortest key, then to the lexicographically smallest one.
/// Returns `None` when the trie holds no keys.
pub fn select_best<F, S>(trie: &Trie, mut score: F) -> Option<(ByteKey<'static>, u64)>
where
    F: FnMut(usize, u64) -> S,
    S: Ord,
{
    let mut best: Option<(ByteKey<'static>, u64, S)> = None;
    for (key, count) in trie.entries() {
        let s = score(key.len(), count);
        let better = match &best {
            None => true,
            Some((best_key, _, best_score)) => s
                .cmp(best_score)
                .then_with(|| best_key.len().cmp(&key.len()))
                .then_with(|| best_key.cmp(&key))
                == Ordering::Greater,
        };
        if better {
            best = Some((key, count, s));
        }
    }
    best.map(|(key, count, _)| (key, count))
}

/// Bytes saved by replacing a `len`-byte substring seen `count` times with a
/// single-byte token, after paying for one stored copy of it:
/// `(count - 1) * (len - 1)`.
///
/// Substrings that occur once never gain anything.
pub fn compression_gain(len: usize, count: u64) -> u64 {
    count
        .saturating_sub(1)
        .saturating_mul(len.saturating_sub(1) as u64)
}

/// [`select_best`] under [`compression_gain`].
pub fn best_by_compression_gain(trie: &Trie) -> Option<(ByteKey<'static>, u64)> {
    select_best(trie, compression_gain)
}
