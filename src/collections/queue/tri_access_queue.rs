use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::result::{OptionExtension, ResultExtension};

/// A queue with access to its front, back and middle.
///
/// The middle is always derived from the current length as `len / 2`, rounding down. Pushing to the
/// middle inserts at that index. Popping from the middle removes index `len / 2` when the length is
/// odd, which is the exact centre, but `len / 2 - 1` when it is even, so the front half keeps the
/// extra element.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the TriAccessQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push/pop_front` | `O(1)`* |
/// | `push/pop_back` | `O(1)`* |
/// | `push/pop_middle` | `O(n)` |
///
/// \* Amortized, the backing buffer occasionally grows.
pub struct TriAccessQueue<T> {
    pub(crate) inner: VecDeque<T>,
}

impl<T> TriAccessQueue<T> {
    pub const fn new() -> TriAccessQueue<T> {
        TriAccessQueue {
            inner: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn middle_index(&self) -> usize {
        self.len() / 2
    }

    /// Inserts `value` before every other element.
    pub fn push_front(&mut self, value: T) {
        self.inner.push_front(value);
    }

    /// Inserts `value` at index `len / 2`, so that it follows the front half of the queue.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::queue::TriAccessQueue;
    /// let mut queue = TriAccessQueue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// queue.push_middle(3);
    /// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [1, 3, 2]);
    /// ```
    pub fn push_middle(&mut self, value: T) {
        self.inner.insert(self.middle_index(), value);
    }

    /// Inserts `value` after every other element.
    pub fn push_back(&mut self, value: T) {
        self.inner.push_back(value);
    }

    /// Removes and returns the first element, panicking if the queue is empty.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes and returns the first element, returning an [`Err`] rather than panicking if the
    /// queue is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.inner.pop_front().or_empty()
    }

    /// Removes and returns the middle element, panicking if the queue is empty.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn pop_middle(&mut self) -> T {
        self.try_pop_middle().throw()
    }

    /// Removes and returns the middle element, returning an [`Err`] rather than panicking if the
    /// queue is empty. For an even length, the last element of the front half is removed.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::queue::TriAccessQueue;
    /// let mut queue: TriAccessQueue<_> = [1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(queue.try_pop_middle(), Ok(2));
    /// assert_eq!(queue.try_pop_middle(), Ok(3));
    /// assert_eq!(queue.try_pop_middle(), Ok(1));
    /// ```
    pub fn try_pop_middle(&mut self) -> Result<T, EmptyCollection> {
        let index = match self.len() {
            0 => return Err(EmptyCollection),
            len if len % 2 == 0 => self.middle_index() - 1,
            _ => self.middle_index(),
        };
        self.inner.remove(index).or_empty()
    }

    /// Removes and returns the last element, panicking if the queue is empty.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Removes and returns the last element, returning an [`Err`] rather than panicking if the
    /// queue is empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.inner.pop_back().or_empty()
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Extend<T> for TriAccessQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for TriAccessQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TriAccessQueue {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Default for TriAccessQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for TriAccessQueue<T> {
    fn clone(&self) -> Self {
        TriAccessQueue {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for TriAccessQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for TriAccessQueue<T> {}

impl<T: Debug> Debug for TriAccessQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriAccessQueue")
            .field("contents", &self.inner)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for TriAccessQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
