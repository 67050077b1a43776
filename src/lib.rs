//! # bytepiece
//!
//! Byte-level substring frequency counting for unigram tokenizer training.
//!
//! Given a corpus of bytes, [`train_unigram`] enumerates every contiguous
//! substring and records it in a [`Trie`]. Afterwards the count of any stored
//! key is the number of positions at which that byte sequence starts in the
//! corpus, overlapping occurrences included.
//!
//! ## Example
//!
//! ```rust
//! use bytepiece::{train_unigram, Trie};
//!
//! let mut trie = Trie::new();
//! train_unigram(&mut trie, &[1u8, 2, 3, 1, 2, 3][..]).unwrap();
//!
//! assert_eq!(trie.count([1u8, 2, 3]), Some(2));
//! assert_eq!(trie.count([2u8, 3, 1, 2]), Some(1));
//! assert!(!trie.search([3u8, 3]));
//!
//! for (key, count) in trie.entries().take(3) {
//!     println!("{:?} -> {}", key, count);
//! }
//! ```
//!
//! ## Layout
//!
//! - [`trie`]: the prefix tree, its traversal and statistics.
//! - [`trainer`]: substring enumeration, optionally per chunk.
//! - [`select`]: best-substring selection under a scoring rule.
//! - [`printer`]: bounded-width rendering of entries.
//! - [`corpus`]: bounded reads of corpus files.
//! - [`shared`]: a lock-protected trie for multi-threaded callers.

#![warn(clippy::all)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod key;
pub mod printer;
pub mod select;
pub mod shared;
pub mod trainer;
pub mod trie;

pub use config::{EmptyKeyPolicy, PrinterConfig, TrainerConfig, TrieConfig};
pub use corpus::read_corpus;
pub use error::{BytepieceError, Result};
pub use key::{ByteKey, CorpusView};
pub use printer::EntryPrinter;
pub use select::{best_by_compression_gain, compression_gain, select_best};
pub use shared::SharedTrie;
pub use trainer::{train_unigram, TrainReport, UnigramTrainer};
pub use trie::{Entries, NodeMut, NodeRef, Trie, TrieStats};

#[cfg(test)]
mod proptests;
