//! Depth-first traversal over stored keys.

use smallvec::SmallVec;

use super::node::Node;
use crate::key::ByteKey;

struct Frame<'t> {
    /// Path length of the parent.
    depth: usize,
    /// Edge byte leading into `node`; `None` for the root.
    byte: Option<u8>,
    node: &'t Node,
}

/// Lazy pre-order walk over a [`Trie`](super::Trie), yielding one
/// `(key, count)` pair per terminal node.
///
/// Children are visited in ascending byte order, so keys come out in
/// lexicographic order with every key preceding its extensions. The walk uses
/// an explicit stack and is safe on arbitrarily deep tries.
pub struct Entries<'t> {
    stack: Vec<Frame<'t>>,
    path: SmallVec<[u8; 32]>,
}

impl<'t> Entries<'t> {
    pub(super) fn new(root: &'t Node) -> Self {
        Self {
            stack: vec![Frame {
                depth: 0,
                byte: None,
                node: root,
            }],
            path: SmallVec::new(),
        }
    }
}

impl Iterator for Entries<'_> {
    type Item = (ByteKey<'static>, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            self.path.truncate(frame.depth);
            if let Some(byte) = frame.byte {
                self.path.push(byte);
            }

            let depth = self.path.len();
            for (byte, child) in frame.node.children.iter().rev() {
                self.stack.push(Frame {
                    depth,
                    byte: Some(*byte),
                    node: child,
                });
            }

            if frame.node.terminal {
                return Some((ByteKey::owned(self.path.to_vec()), frame.node.count));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Entries<'_> {}
