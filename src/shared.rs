//! A trie behind a read-write lock.
//!
//! [`Trie`] itself does no synchronization. `SharedTrie` serializes every
//! mutation behind a write lock and lets readers share a read lock, so a
//! single trie can be filled and queried from several threads.

use parking_lot::RwLock;

use crate::error::Result;
use crate::key::{ByteKey, CorpusView};
use crate::trainer::{TrainReport, UnigramTrainer};
use crate::trie::Trie;

#[derive(Default)]
pub struct SharedTrie {
    inner: RwLock<Trie>,
}

impl SharedTrie {
    pub fn new(trie: Trie) -> Self {
        Self {
            inner: RwLock::new(trie),
        }
    }

    /// Insert `key` and record one occurrence of it; returns the new count.
    pub fn insert_counted(&self, key: impl AsRef<[u8]>) -> Result<u64> {
        let mut trie = self.inner.write();
        let mut node = trie.insert(key)?;
        Ok(node.increment())
    }

    pub fn search(&self, key: impl AsRef<[u8]>) -> bool {
        self.inner.read().search(key)
    }

    pub fn count(&self, key: impl AsRef<[u8]>) -> Option<u64> {
        self.inner.read().count(key)
    }

    /// Train `corpus` into the trie while holding the write lock.
    pub fn train<'c>(
        &self,
        trainer: &UnigramTrainer,
        corpus: impl Into<CorpusView<'c>>,
    ) -> Result<TrainReport> {
        trainer.train(&mut self.inner.write(), corpus)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Collect every entry under a single read lock.
    pub fn snapshot_entries(&self) -> Vec<(ByteKey<'static>, u64)> {
        self.inner.read().entries().collect()
    }

    pub fn into_inner(self) -> Trie {
        self.inner.into_inner()
    }
}

impl From<Trie> for SharedTrie {
    fn from(trie: Trie) -> Self {
        Self::new(trie)
    }
}
