//! Prefix Matcher Library
//!
//! This library performs longest-prefix matching against a pre-loaded
//! dictionary of prefix strings, using a character trie keyed by Unicode
//! scalar values. It is designed to be used by the binary crate, but can
//! also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`trie`] owns the character tree and the two core operations,
//!   insertion and longest-prefix lookup.
//! - [`normalize`] is the text canonicalization policy applied identically
//!   before both insertion and lookup, making matching insensitive to
//!   whitespace and to Unicode representation variants.
//! - [`matcher`] composes the two: it loads a line-delimited prefix source
//!   and forwards queries.
//!
//! The trie is built once, then queried an arbitrary number of times;
//! queries are read-only and a fully built [`matcher::PrefixMatcher`] can
//! be shared across threads behind an `Arc`.

pub mod config;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use matcher::{PrefixLoadError, PrefixMatcher};
pub use trie::{PrefixTrie, TrieError, TrieResult};

/// Version information for the prefix matcher.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MatcherResult<()> {
    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
