use std::cell::RefCell;
use std::rc::Rc;

/// A test fixture handing out tokens that bump a shared counter when dropped, for checking that
/// container operations drop values exactly once (or, for node-moving operations, not at all).
#[derive(Debug, Default)]
pub struct DropCounter(Rc<RefCell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(RefCell::new(0)))
    }

    pub fn token(&self) -> CountedDrop {
        CountedDrop(Rc::clone(&self.0))
    }

    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

#[derive(Debug)]
pub struct CountedDrop(Rc<RefCell<usize>>);

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;
