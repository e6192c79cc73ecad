use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box<T> rather than alloc, because Box<T> has the special
// property that dereferencing it allows a value to be moved out of the heap.

/// A handle to a heap allocated [`Node`]. Each node is owned by exactly one list, through the
/// `next` link of its predecessor (or the list's head). The list's tail is a second handle to the
/// last node, used only to append.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Deallocates the node, moving its contents back onto the stack.
    ///
    /// # Safety
    /// The node must still be allocated, and no other handle to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node and the caller guarantees that
        // it hasn't been freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: A NodePtr is only held by the list that owns its node, which keeps the node
        // allocated for as long as the list is borrowed.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As for value, and the list hands out at most one reference to each node at a
        // time through &mut self methods.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: The node is allocated, see value.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: The node is allocated, see value. No references to the link itself are handed
        // out, so writing through the pointer can't alias one.
        unsafe { (*self.0.as_ptr()).next = next; }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
