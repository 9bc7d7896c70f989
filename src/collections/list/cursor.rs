use super::{List, Slot};

/// A forward-only traversal handle over a mutably borrowed [`List`] that can remove the element
/// it last returned, splicing the chain in place.
///
/// The cursor tracks two slots: the one linking to the last-returned node and the one linking to
/// the node [`next`](Cursor::next) will return. Removing rewinds the latter onto the former, so
/// traversal continues seamlessly with the element that moved into the vacated position. This is
/// the supported way to delete while iterating; the borrowing iterators
/// ([`Iter`](super::Iter), [`IterMut`](super::IterMut)) freeze the list's structure instead.
pub struct Cursor<'a, T> {
    list: &'a mut List<T>,
    current: Option<Slot<T>>,
    next: Slot<T>,
    index: Option<usize>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Cursor<'a, T> {
        let next = list.head_slot();
        Cursor {
            list,
            current: None,
            next,
            index: None,
        }
    }

    /// Returns true if an unvisited element remains.
    pub fn has_next(&self) -> bool {
        self.next.link().is_some()
    }

    /// Advances onto the next element and returns a reference to it.
    ///
    /// # Panics
    /// Panics when called with no elements remaining; check [`has_next`](Cursor::has_next)
    /// first.
    pub fn next(&mut self) -> &T {
        let Some(node) = self.next.link() else {
            panic!("Cannot advance a cursor past the end of its List!");
        };

        self.current = Some(self.next);
        self.next = Slot::of(node.next_mut());
        self.index = Some(match self.index {
            Some(index) => index + 1,
            None => 0,
        });

        node.value()
    }

    /// The zero-based index of the last-returned element, or [`None`] before the first call to
    /// [`next`](Cursor::next). Kept consistent across removals: after
    /// [`remove`](Cursor::remove), it steps back so the following `next` reports the index the
    /// removed element occupied.
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Unlinks the last-returned element from the underlying List and returns it. The following
    /// [`next`](Cursor::next) yields the element that now occupies the vacated position.
    ///
    /// # Panics
    /// Panics if no element has been returned yet, or if the last-returned element was already
    /// removed.
    pub fn remove(&mut self) -> T {
        let Some(slot) = self.current.take() else {
            panic!("A cursor can only remove the element it last returned!");
        };

        self.next = slot;
        self.index = match self.index {
            Some(index) if index > 0 => Some(index - 1),
            _ => None,
        };

        self.list.unlink(slot).take_node().value
    }
}
