//! Unigram substring counting.
//!
//! Training enumerates every contiguous substring `corpus[i..=j]` and records
//! one occurrence of it in a [`Trie`]. Afterwards the count of any stored key
//! is exactly the number of offsets at which it starts in the corpus,
//! overlapping occurrences included.
//!
//! This is the naive baseline: `n * (n + 1) / 2` substrings, each walked
//! twice through the trie, for `O(n^3)` total work on an `n`-byte corpus.
//! Chunked training bounds `n` by the chunk length.

use log::{debug, info, trace};

use crate::config::TrainerConfig;
use crate::error::Result;
use crate::key::CorpusView;
use crate::trie::Trie;

/// Summary of one training run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainReport {
    /// Bytes of corpus consumed.
    pub corpus_len: usize,
    /// Chunks trained independently (1 when unchunked, 0 for an empty corpus).
    pub chunks: usize,
    /// Insert-and-increment cycles performed.
    pub substrings: u64,
    /// Keys that were not present in the trie before this run.
    pub new_keys: usize,
}

/// Drives substring enumeration into a [`Trie`].
#[derive(Debug, Clone, Default)]
pub struct UnigramTrainer {
    config: TrainerConfig,
}

impl UnigramTrainer {
    pub fn new(config: TrainerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Count every substring of `corpus` (or of each chunk, when chunking
    /// is configured) into `trie`.
    ///
    /// Stops at the first error; substrings recorded before it stay counted.
    pub fn train<'c>(&self, trie: &mut Trie, corpus: impl Into<CorpusView<'c>>) -> Result<TrainReport> {
        let corpus = corpus.into();
        let keys_before = trie.len();
        let mut report = TrainReport {
            corpus_len: corpus.len(),
            ..TrainReport::default()
        };

        debug!(
            "training on {} bytes (chunk length {:?})",
            corpus.len(),
            self.config.chunk_length
        );

        match self.config.chunk_length {
            Some(len) => {
                for chunk in corpus.chunks(len) {
                    self.count_substrings(trie, chunk, &mut report)?;
                    report.chunks += 1;
                }
            }
            None if !corpus.is_empty() => {
                self.count_substrings(trie, corpus, &mut report)?;
                report.chunks = 1;
            }
            None => {}
        }

        report.new_keys = trie.len() - keys_before;
        info!(
            "counted {} substrings over {} chunk(s): {} new keys, {} total",
            report.substrings,
            report.chunks,
            report.new_keys,
            trie.len()
        );
        Ok(report)
    }

    fn count_substrings(
        &self,
        trie: &mut Trie,
        corpus: CorpusView<'_>,
        report: &mut TrainReport,
    ) -> Result<()> {
        let n = corpus.len();
        for i in 0..n {
            for j in i..n {
                let key = corpus.key(i, j);
                trie.insert(&key)?;
                trie.lookup_mut(&key)?.increment();

                report.substrings += 1;
                if report.substrings % self.config.log_every == 0 {
                    trace!("{} substrings counted, {} keys", report.substrings, trie.len());
                }
            }
        }
        Ok(())
    }
}

/// Count every substring of `corpus` into `trie` with the default trainer.
///
/// An empty corpus is not an error and leaves the trie untouched.
pub fn train_unigram<'c>(trie: &mut Trie, corpus: impl Into<CorpusView<'c>>) -> Result<()> {
    UnigramTrainer::default().train(trie, corpus).map(|_| ())
}
