//! Error types for the prefix trie.

/// Errors that can occur during trie queries.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// Error when a lookup candidate spans more than one line.
    #[error("Multiline input is not supported so cannot process input string: {input}")]
    MultilineInput {
        /// The offending input.
        input: String,
    },
}
