use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    pub children: HashMap<char, TrieNode>,
    /// Set when a stored word ends at this node, rather than merely passing through it.
    pub terminal: bool,
}

impl TrieNode {
    /// Follows `symbols` from this node, returning the node reached or [`None`] as soon as a
    /// symbol has no child.
    pub fn walk(&self, symbols: &str) -> Option<&TrieNode> {
        let mut node = self;
        for symbol in symbols.chars() {
            node = node.children.get(&symbol)?;
        }
        Some(node)
    }

    /// Follows `symbols` from this node, creating any missing children on the way.
    pub fn walk_or_create(&mut self, symbols: &str) -> &mut TrieNode {
        let mut node = self;
        for symbol in symbols.chars() {
            node = node.children.entry(symbol).or_default();
        }
        node
    }
}
