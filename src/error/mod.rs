//! Error module for the prefix matcher.
//!
//! This module provides the error handling framework for the whole
//! application: one typed error per module, aggregated here with explicit
//! conversions so callers can distinguish every failure kind.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the prefix matcher.
pub type MatcherResult<T> = Result<T, MatcherError>;

/// Core error enum for the prefix matcher.
#[derive(Error, Debug)]
pub enum MatcherError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie queries (multiline input rejection).
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] crate::trie::TrieError),

    /// Errors raised when the prefix source cannot be fully read.
    #[error("{0}")]
    PrefixLoad(#[from] crate::matcher::PrefixLoadError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
