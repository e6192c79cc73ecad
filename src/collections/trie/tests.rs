#![cfg(test)]

use super::*;

#[test]
fn test_words_and_prefixes() {
    let mut trie = Trie::new();
    trie.insert("cat");

    assert!(trie.search("cat"));
    assert!(!trie.search("ca"), "A prefix of a word isn't a word by itself.");
    assert!(!trie.search("cats"));
    assert!(trie.starts_with("ca"));
    assert!(trie.starts_with("cat"), "A word is a prefix of itself.");
    assert!(!trie.starts_with("dog"));
    assert!(!trie.starts_with("cats"));
}

#[test]
fn test_shared_prefixes() {
    let trie: Trie = ["car", "cart", "care", "dog"].into_iter().collect();

    assert_eq!(trie.len(), 4);
    assert!(trie.search("car"));
    assert!(trie.search("cart"));
    assert!(trie.search("care"));
    assert!(!trie.search("ca"));
    assert!(trie.starts_with("car"));
    assert!(trie.starts_with("do"));
    assert_eq!(
        trie.root.walk("car").map(|node| node.children.len()),
        Some(2),
        "Words sharing a prefix should share the prefix's nodes."
    );
}

#[test]
fn test_empty_word() {
    let mut trie = Trie::new();

    assert!(!trie.search(""), "The root isn't a word until the empty string is inserted.");
    assert!(trie.starts_with(""), "Every trie contains the empty prefix.");

    assert!(trie.insert(""));
    assert!(trie.search(""));
    assert!(trie.root.terminal);
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_duplicate_insert() {
    let mut trie = Trie::new();

    assert!(trie.insert("repeat"));
    assert!(!trie.insert("repeat"), "A second insert of the same word adds nothing.");
    assert_eq!(trie.len(), 1);

    assert!(trie.insert("rep"));
    assert_eq!(trie.len(), 2, "A prefix of a stored word is a new word once inserted.");
    assert!(trie.search("rep"));
}

#[test]
fn test_unicode_symbols() {
    let trie: Trie = ["héllo", "日本語"].into_iter().collect();

    assert!(trie.search("héllo"));
    assert!(!trie.starts_with("hello"));
    assert!(trie.starts_with("日本"));
    assert!(!trie.search("日本"));
}
