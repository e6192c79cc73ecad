#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A value which increments a shared counter when dropped, so tests can assert that a collection
/// drops every element exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new(counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop(Rc::clone(counter))
    }

    pub fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
