use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::ops::{Index, IndexMut};

use super::Iter;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::result::{OptionExtension, ResultExtension};

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A block of `cap` slots, of which the first `len` are occupied. Pushing into a full array doubles
/// its capacity, so appending is amortized `O(1)`. The capacity never shrinks.
///
/// Unlike a [`Vec`], every slot up to the capacity is addressable through
/// [`insert`](GrowableArray::insert), which overwrites a slot without touching the length.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the GrowableArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `insert` | `O(1)` |
/// | `len/cap` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `resize` | `O(n)` |
///
/// \* If the GrowableArray is full, `push_back` resizes first, which takes `O(n)`.
pub struct GrowableArray<T> {
    // Every slot below len is Some. Slots at or above len may hold values written by insert, which
    // are overwritten by later pushes.
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) len: usize,
}

impl<T> GrowableArray<T> {
    /// Creates a new GrowableArray with length and capacity 0. The first push will allocate.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<u8> = GrowableArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub fn new() -> GrowableArray<T> {
        GrowableArray::with_cap(0)
    }

    /// Creates a new, empty GrowableArray with capacity exactly equal to `cap`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(2);
    /// arr.push_back('a');
    /// arr.push_back('b');
    /// assert_eq!(arr.cap(), 2);
    /// arr.push_back('c');
    /// assert_eq!(arr.cap(), 4);
    /// ```
    pub fn with_cap(cap: usize) -> GrowableArray<T> {
        GrowableArray {
            slots: empty_slots(cap),
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the GrowableArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    pub const fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length of the GrowableArray.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] rather than
    /// panicking if it is not less than the length.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is not less than the length of the GrowableArray.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// rather than panicking if it is not less than the length.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.slots[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(IndexOutOfBounds { index, len })
    }

    /// Overwrites the slot at `index` with `value`, returning whatever the slot held before. The
    /// length is not changed, so writing past the length stores a value that the next push into
    /// that slot will replace.
    ///
    /// # Panics
    /// Panics if `index` is not less than the capacity of the GrowableArray.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(arr.insert(1, 20), Some(2));
    /// assert_eq!(arr[1], 20);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        self.try_insert(index, value).throw()
    }

    /// Overwrites the slot at `index` with `value`, returning an [`Err`] rather than panicking if
    /// `index` is not less than the capacity. The error reports the capacity as its length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<Option<T>, IndexOutOfBounds> {
        let cap = self.cap();
        match self.slots.get_mut(index) {
            Some(slot) => Ok(slot.replace(value)),
            None => Err(IndexOutOfBounds { index, len: cap }),
        }
    }

    /// Appends `value` after the last occupied slot, resizing first if the GrowableArray is full.
    ///
    /// # Panics
    /// Panics if doubling the capacity would overflow a [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::new();
    /// for i in 0..=5 {
    ///     arr.push_back(i);
    /// }
    /// assert_eq!(arr.len(), 6);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.resize();
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the last element, panicking if there isn't one.
    ///
    /// # Panics
    /// Panics if the GrowableArray is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Removes and returns the last element, returning an [`Err`] rather than panicking if the
    /// GrowableArray is empty. The capacity is unaffected.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::contiguous::GrowableArray;
    /// # use standard_collections::EmptyCollection;
    /// let mut arr: GrowableArray<_> = (0..3).collect();
    /// assert_eq!(arr.try_pop_back(), Ok(2));
    /// assert_eq!(arr.try_pop_back(), Ok(1));
    /// assert_eq!(arr.try_pop_back(), Ok(0));
    /// assert_eq!(arr.try_pop_back(), Err(EmptyCollection));
    /// ```
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        let last = self.len.checked_sub(1).or_empty()?;
        let value = self.slots[last].take().or_empty()?;
        self.len = last;
        Ok(value)
    }

    /// Doubles the capacity of the GrowableArray, keeping every element at its current index. An
    /// array with no capacity grows to hold a single element.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow a [`usize`].
    pub fn resize(&mut self) {
        let old_cap = self.cap();
        let new_cap = cmp::max(
            old_cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_CAP,
        );

        tracing::debug!(old_cap, new_cap, len = self.len, "growing array");

        let mut new_slots = empty_slots(new_cap);
        for (new, old) in new_slots.iter_mut().zip(self.slots.iter_mut()) {
            *new = old.take();
        }
        self.slots = new_slots;
    }

    /// Returns an iterator over references to the occupied elements, in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = GrowableArray::with_cap(iter.size_hint().0);
        arr.extend(iter);
        arr
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        GrowableArray {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

// Only occupied slots take part in equality, capacity and stale slots past len are ignored.
impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: Debug> Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("contents", &DebugList(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

struct DebugList<'a, T>(&'a GrowableArray<T>);

impl<T: Debug> Debug for DebugList<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
