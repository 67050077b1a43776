//! Configuration for the trie, the trainer and the diagnostic printer.

use crate::error::{BytepieceError, Result};

/// How a trie treats zero-length keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyKeyPolicy {
    /// The empty key is stored on the root node like any other key.
    #[default]
    Allow,
    /// Inserting or looking up the empty key fails with
    /// [`BytepieceError::EmptyKey`].
    Reject,
}

/// Configuration for a [`Trie`](crate::Trie).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieConfig {
    /// Treatment of the empty key.
    pub empty_key_policy: EmptyKeyPolicy,
}

/// Configuration for the [`UnigramTrainer`](crate::UnigramTrainer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    /// Train each chunk of this many bytes independently; `None` trains on
    /// the whole corpus at once.
    pub chunk_length: Option<usize>,
    /// Emit a progress record every this many substrings.
    pub log_every: u64,
}

impl TrainerConfig {
    /// Reject a zero chunk length or a zero logging interval.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_length == Some(0) {
            return Err(BytepieceError::InvalidConfig(
                "chunk_length must be greater than zero".into(),
            ));
        }
        if self.log_every == 0 {
            return Err(BytepieceError::InvalidConfig(
                "log_every must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            chunk_length: None,
            log_every: 1_000_000,
        }
    }
}

/// Configuration for the [`EntryPrinter`](crate::EntryPrinter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Maximum number of key bytes rendered before the truncation marker.
    pub width_cap: usize,
}

impl PrinterConfig {
    /// Reject a zero width cap.
    pub fn validate(&self) -> Result<()> {
        if self.width_cap == 0 {
            return Err(BytepieceError::InvalidConfig(
                "width_cap must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            width_cap: crate::printer::DEFAULT_WIDTH_CAP,
        }
    }
}
