use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

/// Returned when an index is beyond the valid range of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The requested index.
    pub index: usize,
    /// The bound it exceeded, usually the length.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Raised when a size calculation would overflow a [`usize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Returned when taking or inspecting an element of a collection that holds none.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to access an element of an empty collection!")]
pub struct EmptyCollection;

/// Returned when a value-based lookup reaches the end of a collection without a match.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No element matching the provided value!")]
pub struct ValueNotFound;
