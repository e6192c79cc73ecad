//! A module containing [`GrowableArray`] and its iterator types, [`Iter`] for borrowed iteration
//! and [`IntoIter`] for owned iteration.
//!
//! [`GrowableArray`] is also re-exported under the parent module.

mod growable_array;
mod iter;
mod tests;

pub use growable_array::*;
pub use iter::*;
