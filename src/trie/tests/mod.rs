//! Tests for the prefix trie.

mod unit_tests;
