use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{Extremum, Max, Min};
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::result::{OptionExtension, ResultExtension};

/// A stack which can report its minimum value in `O(1)`.
pub type MinStack<T> = ExtremumStack<T, Min>;

/// A stack which can report its maximum value in `O(1)`.
pub type MaxStack<T> = ExtremumStack<T, Max>;

/// A last in, first out stack which also tracks the extreme value of its contents, as chosen by
/// `E`.
///
/// Alongside the values themselves, the stack keeps a second stack holding the positions of
/// extremes: a position is pushed onto it whenever its value supersedes (or equals) the current
/// extreme, and popped from it when the value at that position is popped from the main stack. The
/// top of the extremes therefore always locates the extreme of everything currently in the stack.
///
/// Only equality and a total order are required of `T`; values are never cloned.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
/// | `get_min/get_max` | `O(1)` |
///
/// \* Amortized, both stacks occasionally grow.
pub struct ExtremumStack<T, E: Extremum> {
    pub(crate) values: Vec<T>,
    pub(crate) extremes: Vec<usize>,
    pub(crate) _phantom: PhantomData<E>,
}

impl<T, E: Extremum> ExtremumStack<T, E> {
    pub const fn new() -> ExtremumStack<T, E> {
        ExtremumStack {
            values: Vec::new(),
            extremes: Vec::new(),
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.values.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the most recently pushed value, panicking if the stack is empty.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    /// Returns the most recently pushed value, returning an [`Err`] rather than panicking if the
    /// stack is empty.
    pub fn try_top(&self) -> Result<&T, EmptyCollection> {
        self.values.last().or_empty()
    }

    /// Returns the current extreme, returning an [`Err`] if the stack is empty. Prefer
    /// [`try_get_min`](ExtremumStack::try_get_min) or [`try_get_max`](ExtremumStack::try_get_max)
    /// on the concrete stack types.
    pub fn try_extremum(&self) -> Result<&T, EmptyCollection> {
        let index = *self.extremes.last().or_empty()?;
        self.values.get(index).or_empty()
    }
}

impl<T: Ord, E: Extremum> ExtremumStack<T, E> {
    /// Pushes `value`, recording it as the new extreme if it supersedes or equals the current one.
    pub fn push(&mut self, value: T) {
        let is_extreme = match self.try_extremum() {
            Ok(current) => E::supersedes(&value, current),
            Err(_) => true,
        };
        if is_extreme {
            self.extremes.push(self.values.len());
        }
        self.values.push(value);
    }

    /// Removes and returns the most recently pushed value, panicking if there isn't one.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Removes and returns the most recently pushed value, returning an [`Err`] rather than
    /// panicking if the stack is empty. If the value is the current extreme, the previous extreme
    /// is restored.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        let value = self.values.pop().or_empty()?;
        if self.extremes.last() == Some(&self.values.len()) {
            self.extremes.pop();
        }
        Ok(value)
    }
}

impl<T: Ord> ExtremumStack<T, Min> {
    /// Returns the smallest value in the stack, panicking if it is empty.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::stack::MinStack;
    /// let mut stack: MinStack<_> = [5, 3, 7, 2].into_iter().collect();
    /// assert_eq!(stack.get_min(), &2);
    /// stack.pop();
    /// assert_eq!(stack.get_min(), &3);
    /// ```
    pub fn get_min(&self) -> &T {
        self.try_get_min().throw()
    }

    /// Returns the smallest value in the stack, returning an [`Err`] rather than panicking if it is
    /// empty.
    pub fn try_get_min(&self) -> Result<&T, EmptyCollection> {
        self.try_extremum()
    }
}

impl<T: Ord> ExtremumStack<T, Max> {
    /// Returns the largest value in the stack, panicking if it is empty.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::stack::MaxStack;
    /// let mut stack: MaxStack<_> = [5, 3, 7, 2].into_iter().collect();
    /// assert_eq!(stack.get_max(), &7);
    /// stack.pop();
    /// stack.pop();
    /// assert_eq!(stack.get_max(), &5);
    /// ```
    pub fn get_max(&self) -> &T {
        self.try_get_max().throw()
    }

    /// Returns the largest value in the stack, returning an [`Err`] rather than panicking if it is
    /// empty.
    pub fn try_get_max(&self) -> Result<&T, EmptyCollection> {
        self.try_extremum()
    }
}

impl<T: Ord, E: Extremum> Extend<T> for ExtremumStack<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord, E: Extremum> FromIterator<T> for ExtremumStack<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = ExtremumStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T, E: Extremum> Default for ExtremumStack<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, E: Extremum> Clone for ExtremumStack<T, E> {
    fn clone(&self) -> Self {
        ExtremumStack {
            values: self.values.clone(),
            extremes: self.extremes.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Debug, E: Extremum> Debug for ExtremumStack<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtremumStack")
            .field("values", &self.values)
            .field("extremes", &self.extremes)
            .finish()
    }
}
