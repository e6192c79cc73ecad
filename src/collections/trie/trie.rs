use std::fmt::{self, Debug, Formatter};

use super::TrieNode;

/// A prefix tree over the [`char`]s of its words.
///
/// Each node holds one child per following symbol and a flag marking whether a word ends there, so
/// `"ca"` is a prefix of a stored `"cat"` without being a word itself. Nodes are created the first
/// time an insert passes through them and are never removed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `m`: The number of symbols in the word or prefix in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(m)` |
/// | `search` | `O(m)` |
/// | `starts_with` | `O(m)` |
#[derive(Default)]
pub struct Trie {
    pub(crate) root: TrieNode,
    pub(crate) len: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Returns the number of distinct words stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `word`, creating nodes for any of its symbols not yet present. Inserting the empty
    /// string marks the root itself as the end of a word.
    ///
    /// Returns true if the word wasn't already stored.
    pub fn insert(&mut self, word: &str) -> bool {
        let node = self.root.walk_or_create(word);
        let added = !node.terminal;
        node.terminal = true;
        if added {
            self.len += 1;
        }
        added
    }

    /// Returns true if `word` was inserted as a whole word.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::trie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("cat");
    /// assert!(trie.search("cat"));
    /// assert!(!trie.search("ca"));
    /// ```
    pub fn search(&self, word: &str) -> bool {
        self.root.walk(word).is_some_and(|node| node.terminal)
    }

    /// Returns true if any stored word begins with `prefix`, including a word equal to it.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::trie::Trie;
    /// let mut trie = Trie::new();
    /// trie.insert("cat");
    /// assert!(trie.starts_with("ca"));
    /// assert!(!trie.starts_with("dog"));
    /// ```
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.root.walk(prefix).is_some()
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("root", &self.root)
            .field("len", &self.len)
            .finish()
    }
}
