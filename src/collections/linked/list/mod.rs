mod iter;
mod length;
mod node;
mod singly_linked_list;

pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
pub use singly_linked_list::*;
