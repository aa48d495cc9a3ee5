//! Character trie for longest-prefix matching.
//!
//! This module provides a trie keyed by Unicode scalar values for finding
//! the longest pre-loaded prefix of an input string. Both insertion and
//! lookup run the shared normalization policy first, so matching is
//! insensitive to whitespace and to composed/decomposed Unicode encodings.

mod error;
mod node;

#[cfg(test)]
mod tests;

pub use error::TrieError;
use node::TrieNode;

use crate::normalize::normalize;

/// Result type for trie operations.
pub type TrieResult<T> = Result<T, TrieError>;

/// A prefix trie over normalized character sequences.
///
/// The trie is built once (`insert` takes `&mut self`) and queried
/// afterwards through shared references. Queries are side-effect-free, so a
/// fully built trie can be shared across threads behind an `Arc`; the borrow
/// rules guarantee no mutation happens after the build phase ends.
#[derive(Debug, Default)]
pub struct PrefixTrie {
    /// The root node, representing the empty prefix. Never terminal.
    root: TrieNode,

    /// Number of distinct prefixes loaded.
    len: usize,
}

impl PrefixTrie {
    /// Creates a new empty `PrefixTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Inserts a prefix into the trie.
    ///
    /// The prefix is normalized first, then a path of nodes is walked (and
    /// created where missing) one node per character, and the terminal flag
    /// is set on the final node. Inserting the same normalized prefix twice
    /// is a no-op beyond the redundant traversal.
    ///
    /// A prefix that normalizes to the empty string is ignored: the root
    /// represents the empty prefix and must never become terminal.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The raw, non-normalized prefix to load.
    ///
    /// # Returns
    ///
    /// `true` if a new prefix was added, `false` if it was already present
    /// (or normalized to nothing).
    pub fn insert<P: AsRef<str>>(&mut self, prefix: P) -> bool {
        let normalized = normalize(prefix.as_ref());
        if normalized.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for c in normalized.chars() {
            node = node.children.entry(c).or_default();
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Finds the longest loaded prefix matching the given input.
    ///
    /// The input is normalized with the same policy as insertion, then the
    /// walk follows the single path dictated by the input's characters, one
    /// child per character, stopping at the first character with no matching
    /// child or at the end of the input. The consumed characters are a match
    /// only if the final node reached is terminal and at least one character
    /// was consumed.
    ///
    /// Only the deepest reached node's terminal status is checked; a shorter
    /// loaded prefix that is a strict ancestor on the same path is never
    /// reported. With {"a", "abx"} loaded, querying "aby" stops on the
    /// non-terminal "ab" node and returns no match, not "a".
    ///
    /// # Arguments
    ///
    /// * `input` - The raw candidate string.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(prefix))` - The longest matching prefix, in normalized form.
    /// * `Ok(None)` - No match, including for empty or all-whitespace input.
    /// * `Err(TrieError::MultilineInput)` - The input spans multiple lines.
    pub fn find_longest_prefix(&self, input: &str) -> TrieResult<Option<String>> {
        // Blank check takes precedence: an all-whitespace input is "no
        // match" even when it spans several lines.
        if input.trim().is_empty() {
            return Ok(None);
        }

        if is_multiline(input) {
            tracing::error!(
                input = %excerpt(input),
                "Multiline input is not supported so cannot process input string"
            );
            return Err(TrieError::MultilineInput {
                input: input.to_string(),
            });
        }

        let normalized = normalize(input);
        let mut node = &self.root;
        let mut longest_prefix = String::new();
        for c in normalized.chars() {
            match node.children.get(&c) {
                Some(next) => {
                    longest_prefix.push(c);
                    node = next;
                }
                None => break,
            }
        }

        // The consumed path must end exactly on a loaded prefix.
        if node.is_terminal && !longest_prefix.is_empty() {
            Ok(Some(longest_prefix))
        } else {
            Ok(None)
        }
    }

    /// Returns the number of distinct prefixes loaded into the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie has no prefixes loaded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Cap on the number of input characters echoed into log events.
const MAX_LOGGED_INPUT_CHARS: usize = 256;

/// Returns `input` capped to a loggable length, marking elision.
fn excerpt(input: &str) -> String {
    let mut shown: String = input.chars().take(MAX_LOGGED_INPUT_CHARS).collect();
    if shown.len() < input.len() {
        shown.push_str("...");
    }
    shown
}

/// Reports whether `input` spans more than one line.
///
/// Line terminators are `\n`, `\r\n`, and `\r`. A single trailing
/// terminator does not start a second line, so "foo\n" is single-line
/// while "\nfoo" is not.
fn is_multiline(input: &str) -> bool {
    let body = input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .or_else(|| input.strip_suffix('\r'))
        .unwrap_or(input);
    body.contains(['\n', '\r'])
}
