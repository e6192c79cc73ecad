//! Prefix tree types. Namely [`Trie`], a set of words stored one symbol per node so that both
//! whole words and prefixes can be looked up in time proportional to their length.

mod node;
mod tests;
mod trie;

pub(crate) use node::*;
pub use trie::*;
