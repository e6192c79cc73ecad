use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, Length, Link, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, ValueNotFound};
use crate::util::result::ResultExtension;

/// A list with links in one direction, from the front (head) to the back (tail).
///
/// Both ends are tracked, so adding at either end is `O(1)`. Without backwards links, removing
/// the last element has to walk the whole list to find the element before it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `append` | `O(1)` |
/// | `insert_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop` | `O(n)` |
/// | `get` | `O(i)` |
/// | `remove` | `O(n)` |
/// | `count` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Adds the provided element to the back of the SinglyLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn append(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::from_node(Node {
                    value,
                    next: None,
                });

                contents.tail.set_next(Some(node));
                contents.tail = node;
            },
        }
    }

    /// Adds the provided element to the front of the SinglyLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn insert_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                contents.head = NodePtr::from_node(Node {
                    value,
                    next: Some(contents.head),
                });
            },
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is owned by this list and is unlinked below, so the handle is
                // never used again.
                let node = unsafe { head.take_node() };

                match (len.checked_sub(1), node.next) {
                    (Some(new_len), Some(new_head)) => {
                        *head = new_head;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// This walks the entire list to find the element before the tail, which becomes the new
    /// tail.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::SinglyLinkedList;
    /// let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.pop(), Some(3));
    /// assert_eq!(list.back(), Some(&2));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => match contents.len.checked_sub(1) {
                Some(new_len) => {
                    let new_tail = contents.seek(new_len.get() - 1);
                    new_tail.set_next(None);

                    // SAFETY: The old tail has just been unlinked from the chain and is replaced
                    // as the tail below.
                    let node = unsafe { contents.tail.take_node() };
                    contents.tail = new_tail;
                    contents.len = new_len;

                    Some(node.value)
                },
                None => {
                    // SAFETY: The list only holds one node, the head is the tail and both handles
                    // are discarded when the state is reset.
                    let node = unsafe { contents.head.take_node() };
                    self.state = Empty;

                    Some(node.value)
                },
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Returns a forward iterator over the elements, from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Removes the first element equal to `value` and returns it, panicking if there is none.
    ///
    /// # Panics
    /// Panics if no element in the list is equal to `value`.
    pub fn remove(&mut self, value: &T) -> T {
        self.try_remove(value).throw()
    }

    /// Removes the first element equal to `value` and returns it, returning an [`Err`] rather than
    /// panicking if there is none. The list is left untouched on failure.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::linked::SinglyLinkedList;
    /// # use standard_collections::ValueNotFound;
    /// let mut list: SinglyLinkedList<_> = "abcb".chars().collect();
    /// assert_eq!(list.try_remove(&'b'), Ok('b'));
    /// assert_eq!(list.to_string(), "('a') -> ('c') -> ('b')");
    /// assert_eq!(list.try_remove(&'z'), Err(ValueNotFound));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn try_remove(&mut self, value: &T) -> Result<T, ValueNotFound> {
        let (prev, found) = self.find_with_prev(value).ok_or(ValueNotFound)?;

        match &mut self.state {
            Empty => return Err(ValueNotFound),
            Full(contents) => match (contents.len.checked_sub(1), prev, found.next()) {
                (None, ..) => self.state = Empty,
                (Some(new_len), None, Some(next)) => {
                    contents.head = next;
                    contents.len = new_len;
                },
                (Some(new_len), Some(prev), next) => {
                    prev.set_next(next);
                    if next.is_none() {
                        contents.tail = prev;
                    }
                    contents.len = new_len;
                },
                (Some(_), None, None) => unreachable!("only the sole node has no neighbours"),
            },
        }

        // SAFETY: The found node has been unlinked from the chain and is no longer referenced by
        // the head or tail.
        Ok(unsafe { found.take_node() }.value)
    }

    /// Returns the number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.iter().filter(|item| *item == value).count()
    }

    /// Returns true if any element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Finds the first node holding `value`, along with the node before it, if there is one.
    pub(crate) fn find_with_prev(&self, value: &T) -> Option<(Link<T>, NodePtr<T>)> {
        let Full(contents) = &self.state else { return None };

        let mut prev = None;
        let mut curr = Some(contents.head);
        while let Some(node) = curr {
            if node.value() == value {
                return Some((prev, node));
            }
            prev = curr;
            curr = node.next();
        }
        None
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Copies the values of the list into a [`Vec`], front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> SinglyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents.seek(index))
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    curr = next;
                    count += 1;
                }
                assert!(*tail == curr, "The tail should be the last node in the chain.");
                assert_eq!(count, len.get(), "The chain should contain exactly len nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Walks `index` links forward from the head. The caller is responsible for keeping `index`
    /// below the length, otherwise the walk stops at the tail.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        let mut node = self.head;
        for _ in 0..index {
            match node.next() {
                Some(next) => node = next,
                None => break,
            }
        }
        node
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                // SAFETY: Each node is visited exactly once and the list is being dropped, so no
                // handle is used after its node is freed.
                curr = unsafe { ptr.take_node() }.next;
            }
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

// SAFETY: SinglyLinkedList uniquely owns its nodes; the raw pointers are never shared outside of
// the list, so sending it is as safe as sending T.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
// SAFETY: Shared references only allow reading through the nodes, so no interior mutability
// occurs.
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
