//! Node implementation for the prefix trie.

use fnv::FnvHashMap;

/// A single node in the prefix trie.
///
/// Each node represents one Unicode scalar value along a prefix path.
/// Terminal nodes mark that the path from the root to them spells out a
/// complete loaded prefix; a terminal node may still have children when a
/// longer prefix extends through it.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Child nodes keyed by the next character on the path.
    pub children: FnvHashMap<char, TrieNode>,

    /// Whether a complete prefix ends at this node.
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }
}
