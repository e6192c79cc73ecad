//! Linked collection types. Currently just [`SinglyLinkedList`], a forward-only chain of nodes
//! which tracks both ends.

pub mod list;

#[doc(inline)]
pub use list::SinglyLinkedList;
