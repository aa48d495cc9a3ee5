//! Unit tests for `PrefixTrie`.

use crate::trie::{excerpt, PrefixTrie, TrieError};

fn trie_with(prefixes: &[&str]) -> PrefixTrie {
    let mut trie = PrefixTrie::new();
    for p in prefixes {
        trie.insert(p);
    }
    trie
}

#[test]
fn test_trie_basic_operations() {
    let mut trie = PrefixTrie::new();
    assert!(trie.is_empty());

    assert!(trie.insert("foo"));
    assert_eq!(trie.len(), 1);
    assert!(!trie.is_empty());

    // Re-inserting the same prefix is a no-op
    assert!(!trie.insert("foo"));
    assert_eq!(trie.len(), 1);

    assert_eq!(trie.find_longest_prefix("foo").unwrap().as_deref(), Some("foo"));
    assert_eq!(trie.find_longest_prefix("foox").unwrap().as_deref(), Some("foo"));
    assert_eq!(trie.find_longest_prefix("bar").unwrap(), None);
}

#[test]
fn test_insert_is_normalization_aware() {
    let mut trie = PrefixTrie::new();
    assert!(trie.insert("f o o"));
    // Same prefix after normalization
    assert!(!trie.insert("  foo  "));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.find_longest_prefix("foo").unwrap().as_deref(), Some("foo"));
}

#[test]
fn test_insert_of_blank_prefix_is_ignored() {
    let mut trie = PrefixTrie::new();
    assert!(!trie.insert("   \t "));
    assert!(trie.is_empty());
    // The root never becomes terminal, so nothing matches
    assert_eq!(trie.find_longest_prefix("anything").unwrap(), None);
}

#[test]
fn test_empty_and_blank_input_return_no_match() {
    let trie = trie_with(&["foo"]);
    assert_eq!(trie.find_longest_prefix("").unwrap(), None);
    assert_eq!(trie.find_longest_prefix("      ").unwrap(), None);
}

#[test]
fn test_blank_multiline_input_returns_no_match() {
    // Blank check happens before the multiline check
    let trie = trie_with(&["foo"]);
    let input = "\n        \n \n \t";
    assert_eq!(trie.find_longest_prefix(input).unwrap(), None);
}

#[test]
fn test_multiline_input_is_rejected() {
    let trie = trie_with(&["foo"]);
    for input in ["\nfoo\n", "foo\nbar", "+1 800 355 \n5555", "a\rb", "a\r\nb"] {
        let err = trie.find_longest_prefix(input).unwrap_err();
        assert!(
            matches!(&err, TrieError::MultilineInput { input: i } if i.as_str() == input),
            "expected MultilineInput for {input:?}"
        );
        assert!(err.to_string().contains("Multiline input is not supported"));
    }
}

#[test]
fn test_single_trailing_newline_is_not_multiline() {
    let trie = trie_with(&["foo"]);
    assert_eq!(trie.find_longest_prefix("foo\n").unwrap().as_deref(), Some("foo"));
    assert_eq!(trie.find_longest_prefix("foo\r\n").unwrap().as_deref(), Some("foo"));
}

#[test]
fn test_deepest_reached_node_only_policy() {
    // "a" is a loaded ancestor on the walked path, but the walk ends on the
    // non-terminal "ab" node, so nothing is reported.
    let trie = trie_with(&["a", "abx"]);
    assert_eq!(trie.find_longest_prefix("aby").unwrap(), None);

    // When the walk ends exactly on a terminal node, that node wins.
    let trie = trie_with(&["a", "ab"]);
    assert_eq!(trie.find_longest_prefix("abc").unwrap().as_deref(), Some("ab"));
}

#[test]
fn test_walk_stops_where_children_diverge() {
    // Walk consumes "foobar" via the "foobarbaz" branch, then stops at 'q'
    // ('b' is the only child under the "foobar" node). "foobar" is not
    // terminal, so there is no match despite "foo" being loaded.
    let trie = trie_with(&["foo", "foobarbaz"]);
    assert_eq!(trie.find_longest_prefix("foobarqux").unwrap(), None);
    assert_eq!(trie.find_longest_prefix("foobarbazmore").unwrap().as_deref(), Some("foobarbaz"));
}

#[test]
fn test_input_shorter_than_every_prefix_returns_no_match() {
    let trie = trie_with(&["arandomprefix"]);
    assert_eq!(trie.find_longest_prefix("arandompre").unwrap(), None);
}

#[test]
fn test_whitespace_insensitive_matching() {
    let trie = trie_with(&["foo"]);
    assert_eq!(trie.find_longest_prefix("  f o o  ").unwrap().as_deref(), Some("foo"));
}

#[test]
fn test_unicode_nfc_equivalence() {
    // Inserted decomposed, queried composed
    let mut trie = PrefixTrie::new();
    trie.insert("cafe\u{0301}");
    assert_eq!(
        trie.find_longest_prefix("caf\u{00E9} latte").unwrap().as_deref(),
        Some("caf\u{00E9}")
    );

    // Inserted composed, queried decomposed
    let mut trie = PrefixTrie::new();
    trie.insert("caf\u{00E9}");
    assert_eq!(
        trie.find_longest_prefix("cafe\u{0301}s").unwrap().as_deref(),
        Some("caf\u{00E9}")
    );
}

#[test]
fn test_very_large_input_completes_iteratively() {
    let trie = trie_with(&["ashortprefix"]);

    let matching = format!("ashortprefix{}", "a".repeat(1_000_000));
    assert_eq!(
        trie.find_longest_prefix(&matching).unwrap().as_deref(),
        Some("ashortprefix")
    );

    let non_matching = format!("ashortpre{}", "l".repeat(1_000_000));
    assert_eq!(trie.find_longest_prefix(&non_matching).unwrap(), None);
}

#[test]
fn test_log_excerpt_caps_long_input() {
    // Short inputs pass through unchanged
    assert_eq!(excerpt("foo\nbar"), "foo\nbar");

    // Long inputs are cut at a character boundary and marked as elided
    let long = format!("{}\n{}", "a".repeat(300), "b".repeat(300));
    let shown = excerpt(&long);
    assert_eq!(shown.chars().count(), 256 + "...".len());
    assert!(shown.ends_with("..."));

    // Multi-byte characters survive the cut
    let accented = "\u{00E9}".repeat(400);
    assert!(excerpt(&accented).starts_with("\u{00E9}"));
}

#[test]
fn test_match_is_returned_in_normalized_form() {
    let trie = trie_with(&["+4 4 2 0"]);
    assert_eq!(
        trie.find_longest_prefix("+44 20 7946 0958").unwrap().as_deref(),
        Some("+4420")
    );
}
