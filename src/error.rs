//! Error types shared across the crate.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = BytepieceError> = std::result::Result<T, E>;

/// Failures surfaced by the trie, the trainer and the corpus source.
#[derive(Debug, Error)]
pub enum BytepieceError {
    /// A node or buffer could not be reserved.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    /// The path for a lookup does not exist in the trie.
    #[error("no node exists for the requested key")]
    NodeNotFound,
    /// A zero-length key was used where the trie's policy forbids it.
    #[error("empty keys are rejected by this trie")]
    EmptyKey,
    /// The corpus path does not resolve to a readable file.
    #[error("corpus file not found: {path:?}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// Any other IO failure while reading the corpus.
    #[error("failed to read corpus {path:?}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BytepieceError {
    /// Whether this error only signals absence rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound)
    }
}
