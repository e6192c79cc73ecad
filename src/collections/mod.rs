//! The collection types, one module per structure.
//!
//! # Method
//! Each module is gated behind a Cargo feature of the same name, all enabled by the default
//! `collections-all` feature. The modules share nothing but the crate's error types.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "trie")]
pub mod trie;
