mod binary_search_tree;
mod node;

pub use binary_search_tree::*;
pub(crate) use node::*;
