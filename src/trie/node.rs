//! Trie nodes with sparse, sorted fan-out.
//!
//! A node logically has 256 child slots, one per byte value. Only occupied
//! slots are stored, as `(byte, child)` pairs kept sorted by byte, so a node
//! costs memory proportional to its actual branching factor and children are
//! always visited in ascending byte order.

use std::collections::TryReserveError;

pub(crate) struct Node {
    /// Occupied child slots, sorted by byte.
    pub(crate) children: Vec<(u8, Node)>,
    pub(crate) terminal: bool,
    pub(crate) count: u64,
}

impl Node {
    pub(crate) const fn new() -> Self {
        Self {
            children: Vec::new(),
            terminal: false,
            count: 0,
        }
    }

    #[inline]
    fn slot(&self, byte: u8) -> Result<usize, usize> {
        self.children.binary_search_by_key(&byte, |(b, _)| *b)
    }

    #[inline]
    pub(crate) fn child(&self, byte: u8) -> Option<&Node> {
        self.slot(byte).ok().map(|idx| &self.children[idx].1)
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, byte: u8) -> Option<&mut Node> {
        match self.slot(byte) {
            Ok(idx) => Some(&mut self.children[idx].1),
            Err(_) => None,
        }
    }

    /// Return the child for `byte`, creating it if the slot is empty.
    ///
    /// Space for the new slot is reserved fallibly; on failure the node is
    /// left untouched.
    pub(crate) fn child_or_insert(&mut self, byte: u8) -> Result<&mut Node, TryReserveError> {
        let idx = match self.slot(byte) {
            Ok(idx) => idx,
            Err(idx) => {
                self.children.try_reserve(1)?;
                self.children.insert(idx, (byte, Node::new()));
                idx
            }
        };
        Ok(&mut self.children[idx].1)
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }
}
