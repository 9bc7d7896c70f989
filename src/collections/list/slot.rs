use std::ptr::NonNull;

use super::Link;

/// A pointer to a *slot*: the storage location currently holding a link to a node, which is
/// either the list's `head` field or some node's `next` field.
///
/// Writing through a slot relinks the chain without special-casing head, middle or tail, so the
/// insertion and removal primitives on [`List`](super::List) are each written exactly once. A
/// slot stays valid until the list is mutated through a *different* slot; the crate never keeps
/// one across such a mutation.
#[derive(Debug)]
pub(crate) struct Slot<T>(NonNull<Link<T>>);

impl<T> Slot<T> {
    pub fn of(link: &mut Link<T>) -> Slot<T> {
        Slot(NonNull::from(link))
    }

    /// Returns a copy of the link currently stored in the slot.
    pub fn link(&self) -> Link<T> {
        // SAFETY: A slot always points into a list that the caller holds exclusively, either the
        // head field or a next field of a node that list owns.
        unsafe { *self.0.as_ptr() }
    }

    pub fn set(&self, link: Link<T>) {
        // SAFETY: As for link; the single-mutator discipline rules out aliasing writes.
        unsafe {
            *self.0.as_ptr() = link;
        }
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<T> {}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
