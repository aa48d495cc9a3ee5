//! Prefix matching facade.
//!
//! Composes the prefix trie with a line-delimited prefix source: every
//! non-blank line of the source is loaded through the normalization and
//! insertion pipeline, and queries are forwarded to the trie unchanged.

mod error;

pub use error::PrefixLoadError;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::trie::{PrefixTrie, TrieResult};

/// Longest-prefix matcher over a loaded prefix dictionary.
///
/// Built in two phases: `load_prefixes` populates the trie (and must
/// complete before any query), then `find_longest_prefix` may be called any
/// number of times. Queries are read-only, so a fully loaded matcher can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Default)]
pub struct PrefixMatcher {
    trie: PrefixTrie,
}

impl PrefixMatcher {
    /// Creates a new matcher with an empty prefix dictionary.
    pub fn new() -> Self {
        Self {
            trie: PrefixTrie::new(),
        }
    }

    /// Loads a prefix file into the trie.
    ///
    /// Each line in the file is one raw prefix; blank lines are skipped and
    /// every other line is inserted after normalization.
    ///
    /// # Arguments
    ///
    /// * `path` - The path of the line-delimited prefix file.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of distinct prefixes loaded.
    /// * `Err(PrefixLoadError)` - The file was missing, unreadable, or
    ///   failed mid-read. The matcher must be discarded on error.
    pub fn load_prefixes<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, PrefixLoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "trying to load prefix file");

        let file = File::open(path).map_err(|source| PrefixLoadError::new(path, source))?;
        let loaded = self
            .load_from_reader(BufReader::new(file))
            .map_err(|source| PrefixLoadError::new(path, source))?;

        debug!(path = %path.display(), loaded, "prefix file loaded");
        Ok(loaded)
    }

    /// Loads prefixes from any buffered line source, skipping blank lines.
    ///
    /// # Returns
    ///
    /// The number of distinct prefixes inserted.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> std::io::Result<usize> {
        let mut loaded = 0;
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if self.trie.insert(&line) {
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    /// Finds the longest loaded prefix matching the given input.
    ///
    /// Direct delegation to [`PrefixTrie::find_longest_prefix`]; see there
    /// for the matching policy and error conditions.
    pub fn find_longest_prefix(&self, input: &str) -> TrieResult<Option<String>> {
        self.trie.find_longest_prefix(input)
    }

    /// Returns the number of distinct prefixes loaded.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Checks if no prefixes have been loaded.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
