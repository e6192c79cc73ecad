//! Binary tree collection types. Currently just [`BinarySearchTree`], an unbalanced tree which
//! keeps duplicates and offers the classic traversal orders.

pub mod search_tree;

#[doc(inline)]
pub use search_tree::BinarySearchTree;
