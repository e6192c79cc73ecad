//! A small toolkit of hand-written, general-purpose containers.
//!
//! # Purpose
//! These collections are building blocks: each one is a standalone structure with a documented
//! complexity for every operation and a documented ordering for every traversal. None of them
//! depends on another, so they can be lifted out and used (or studied) one at a time.
//!
//! | Collection | Module | Feature |
//! |-|-|-|
//! | [`GrowableArray`](collections::contiguous::GrowableArray) | [`collections::contiguous`] | `contiguous` |
//! | [`SinglyLinkedList`](collections::linked::SinglyLinkedList) | [`collections::linked`] | `linked` |
//! | [`BinarySearchTree`](collections::binary_tree::BinarySearchTree) | [`collections::binary_tree`] | `binary-tree` |
//! | [`Trie`](collections::trie::Trie) | [`collections::trie`] | `trie` |
//! | [`MinStack`](collections::stack::MinStack) / [`MaxStack`](collections::stack::MaxStack) | [`collections::stack`] | `stack` |
//! | [`TriAccessQueue`](collections::queue::TriAccessQueue) | [`collections::queue`] | `queue` |
//!
//! # Error Handling
//! Specifically for a collections library, it is more ergonomic for some functions to panic,
//! because users don't want to be forced to handle an error every time they invoke a method. So
//! every fallible operation comes in two forms: `try_*`, which returns a [`Result`], and a plain
//! version which panics with the message of the same error.
//!
//! Errors are strongly typed, using small structs (mostly ZSTs) that implement
//! [`Error`](std::error::Error). A failing operation never leaves a collection partially modified.
//!
//! # Logging
//! The crate emits [`tracing`] events: growth of a
//! [`GrowableArray`](collections::contiguous::GrowableArray) at `DEBUG` and every visit step of the
//! tree searches at `TRACE`. No subscriber is installed here.
//!
//! # Concurrency
//! All collections are plain single-threaded values. They are [`Send`] and [`Sync`] when their
//! elements are, but contain no internal locking; shared mutation must be serialized by the caller.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::missing_const_for_fn)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds, ValueNotFound};
