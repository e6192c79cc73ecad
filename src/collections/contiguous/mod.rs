//! Contiguous collection types. Namely [`GrowableArray`], a fixed block of slots which doubles in
//! size whenever a push would overflow it.
#![warn(missing_docs)]

pub mod growable_array;

#[doc(inline)]
pub use growable_array::GrowableArray;
