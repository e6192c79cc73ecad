//! Queue types. Namely [`TriAccessQueue`], which can be pushed to and popped from at its front, its
//! back and its middle.

mod iter;
mod tests;
mod tri_access_queue;

pub use iter::*;
pub use tri_access_queue::*;
