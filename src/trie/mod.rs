//! Byte-indexed prefix tree with per-key occurrence counters.
//!
//! Every edge is labelled by one byte. A node is *terminal* when the path
//! from the root to it spells a key that was explicitly inserted; terminal
//! nodes carry a counter that callers bump once per recorded occurrence.
//! Interior nodes may exist without being terminal (after inserting
//! `"hello"`, the node for `"hell"` exists but is not a key).
//!
//! The tree only grows. Nodes are released all at once by [`Trie::clear`]
//! or when the trie is dropped.

mod debug;
mod iter;
mod node;

pub use debug::TrieStats;
pub use iter::Entries;

use std::fmt;

use log::trace;

use crate::config::{EmptyKeyPolicy, TrieConfig};
use crate::error::{BytepieceError, Result};
use node::Node;

/// A prefix tree over byte strings with an occurrence counter per key.
pub struct Trie {
    root: Node,
    /// Number of terminal nodes.
    len: usize,
    config: TrieConfig,
}

/// Read-only handle to a node found by [`Trie::lookup`].
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    node: &'t Node,
}

impl NodeRef<'_> {
    /// Occurrence count; only meaningful when the node is terminal.
    pub fn count(&self) -> u64 {
        self.node.count
    }

    pub fn is_terminal(&self) -> bool {
        self.node.terminal
    }

    /// Number of occupied child slots.
    pub fn child_count(&self) -> usize {
        self.node.child_count()
    }
}

/// Mutable handle to a node, returned by [`Trie::insert`] and
/// [`Trie::lookup_mut`].
pub struct NodeMut<'t> {
    node: &'t mut Node,
}

impl NodeMut<'_> {
    pub fn count(&self) -> u64 {
        self.node.count
    }

    pub fn is_terminal(&self) -> bool {
        self.node.terminal
    }

    /// Record one more occurrence and return the new count.
    ///
    /// Works on any node. Counts on interior nodes are never reported by
    /// [`Trie::count`] or [`Trie::entries`], and are reset to zero when the
    /// node's key is later inserted.
    pub fn increment(&mut self) -> u64 {
        self.add(1)
    }

    /// Record `n` more occurrences and return the new count.
    pub fn add(&mut self, n: u64) -> u64 {
        self.node.count = self.node.count.saturating_add(n);
        self.node.count
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("terminal", &self.node.terminal)
            .field("count", &self.node.count)
            .field("children", &self.node.child_count())
            .finish()
    }
}

impl fmt::Debug for NodeMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeMut")
            .field("terminal", &self.node.terminal)
            .field("count", &self.node.count)
            .field("children", &self.node.child_count())
            .finish()
    }
}

impl Trie {
    /// Create a trie holding only the root node.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    pub fn with_policy(policy: EmptyKeyPolicy) -> Self {
        Self::with_config(TrieConfig {
            empty_key_policy: policy,
        })
    }

    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: Node::new(),
            len: 0,
            config,
        }
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Number of keys (terminal nodes) stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn check_empty(&self, key: &[u8]) -> Result<()> {
        if key.is_empty() && self.config.empty_key_policy == EmptyKeyPolicy::Reject {
            return Err(BytepieceError::EmptyKey);
        }
        Ok(())
    }

    /// Insert `key`, creating any missing nodes along its path, and mark the
    /// final node terminal.
    ///
    /// Inserting an existing key is idempotent and leaves its count alone.
    /// A node that becomes terminal starts counting from zero.
    /// Returns a handle to the terminal node so the caller can adjust its
    /// count.
    ///
    /// # Errors
    /// - [`BytepieceError::EmptyKey`] if `key` is empty and the policy is
    ///   [`EmptyKeyPolicy::Reject`]; the trie is unchanged.
    /// - [`BytepieceError::Allocation`] if a child slot cannot be reserved.
    ///   Nodes created before the failure remain, unterminated.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) -> Result<NodeMut<'_>> {
        let key = key.as_ref();
        self.check_empty(key)?;

        let mut node = &mut self.root;
        for &byte in key {
            node = node.child_or_insert(byte)?;
        }

        if !node.terminal {
            node.terminal = true;
            node.count = 0;
            self.len += 1;
            trace!("new key of length {}", key.len());
        }
        Ok(NodeMut { node })
    }

    /// Whether `key` was inserted. Never fails and never mutates.
    pub fn search(&self, key: impl AsRef<[u8]>) -> bool {
        self.find(key.as_ref()).is_some_and(|node| node.terminal)
    }

    /// Find the node at the end of `key`'s path, terminal or not.
    ///
    /// # Errors
    /// [`BytepieceError::NodeNotFound`] if the path does not exist;
    /// [`BytepieceError::EmptyKey`] for an empty key under
    /// [`EmptyKeyPolicy::Reject`].
    pub fn lookup(&self, key: impl AsRef<[u8]>) -> Result<NodeRef<'_>> {
        let key = key.as_ref();
        self.check_empty(key)?;
        self.find(key)
            .map(|node| NodeRef { node })
            .ok_or(BytepieceError::NodeNotFound)
    }

    /// Mutable counterpart of [`Trie::lookup`].
    pub fn lookup_mut(&mut self, key: impl AsRef<[u8]>) -> Result<NodeMut<'_>> {
        let key = key.as_ref();
        self.check_empty(key)?;
        self.find_mut(key)
            .map(|node| NodeMut { node })
            .ok_or(BytepieceError::NodeNotFound)
    }

    /// Occurrence count of `key` if it was inserted.
    pub fn count(&self, key: impl AsRef<[u8]>) -> Option<u64> {
        self.find(key.as_ref())
            .filter(|node| node.terminal)
            .map(|node| node.count)
    }

    /// Lazily walk every stored key in lexicographic order.
    pub fn entries(&self) -> Entries<'_> {
        Entries::new(&self.root)
    }

    /// Release every node, leaving only a fresh root. Returns the number of
    /// non-root nodes released.
    pub fn clear(&mut self) -> usize {
        let released = self.release_children();
        self.root.terminal = false;
        self.root.count = 0;
        self.len = 0;
        released
    }

    /// Tear down the subtree below the root without recursion; a trie built
    /// from an `n`-byte corpus is `n` nodes deep.
    fn release_children(&mut self) -> usize {
        let mut stack = std::mem::take(&mut self.root.children);
        let mut released = 0;
        while let Some((_, mut node)) = stack.pop() {
            stack.append(&mut node.children);
            released += 1;
        }
        released
    }

    fn find(&self, key: &[u8]) -> Option<&Node> {
        let mut node = &self.root;
        for &byte in key {
            node = node.child(byte)?;
        }
        Some(node)
    }

    fn find_mut(&mut self, key: &[u8]) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for &byte in key {
            node = node.child_mut(byte)?;
        }
        Some(node)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Trie {
    fn drop(&mut self) {
        self.release_children();
    }
}

impl<'t> IntoIterator for &'t Trie {
    type Item = (crate::ByteKey<'static>, u64);
    type IntoIter = Entries<'t>;

    fn into_iter(self) -> Entries<'t> {
        self.entries()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|(k, v)| (k.into_vec(), v)))
            .finish()
    }
}
