//! Structural statistics and integrity checks.

use std::mem;

use super::node::Node;
use super::Trie;

/// Shape and memory statistics for a [`Trie`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Nodes including the root.
    pub node_count: usize,
    /// Terminal nodes (stored keys).
    pub terminal_count: usize,
    /// Length of the longest path from the root.
    pub max_depth: usize,
    /// Sum of all terminal counts.
    pub total_count: u64,
    /// Approximate heap and inline bytes held by nodes.
    pub approx_bytes: usize,
}

impl Trie {
    /// Walk the whole tree and collect [`TrieStats`].
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            approx_bytes: mem::size_of::<Node>(),
            ..TrieStats::default()
        };
        let mut stack: Vec<(&Node, usize)> = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            stats.node_count += 1;
            stats.max_depth = stats.max_depth.max(depth);
            if node.terminal {
                stats.terminal_count += 1;
                stats.total_count = stats.total_count.saturating_add(node.count);
            }
            stats.approx_bytes += node.children.capacity() * mem::size_of::<(u8, Node)>();
            stack.extend(node.children.iter().map(|(_, child)| (child, depth + 1)));
        }
        stats
    }

    /// Verify tree integrity; returns a description of every issue found.
    pub fn verify_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut terminals = 0usize;
        let mut stack: Vec<(&Node, Vec<u8>)> = vec![(&self.root, Vec::new())];

        while let Some((node, path)) = stack.pop() {
            if node.terminal {
                terminals += 1;
            }

            for pair in node.children.windows(2) {
                if pair[0].0 >= pair[1].0 {
                    issues.push(format!(
                        "children of {:?} out of order: {} before {}",
                        path, pair[0].0, pair[1].0
                    ));
                }
            }

            for (byte, child) in &node.children {
                let mut child_path = path.clone();
                child_path.push(*byte);
                stack.push((child, child_path));
            }
        }

        if terminals != self.len {
            issues.push(format!(
                "len() is {} but {} terminal nodes are reachable",
                self.len, terminals
            ));
        }
        issues
    }
}
