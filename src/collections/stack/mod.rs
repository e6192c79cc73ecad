//! Stacks which track an order statistic of their contents. [`MinStack`] and [`MaxStack`] are both
//! forms of [`ExtremumStack`], which keeps an auxiliary stack of running extremes alongside its
//! values.

mod extremum;
mod extremum_stack;
mod tests;

pub use extremum::*;
pub use extremum_stack::*;
