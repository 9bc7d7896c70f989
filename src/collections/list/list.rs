use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Cursor, Iter, IterMut, Link, NodeRef, Slot};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// An ordered, owning, singly linked list. See also: [`Cursor`] for traversal with in-place
/// removal.
///
/// Every structural operation is built from two O(1) splicing primitives over link slots (the
/// head field or a node's `next` field) plus a single position-seeking walker, so the sorting,
/// slicing and filtered-removal operations below move nodes between lists without ever copying
/// or cloning the values they carry. The `Clone`-bounded derivations (`take`, `slice`, `filter`,
/// `duplicate`, `sorted_by`) are the exception: they build new nodes around cloned values and
/// leave the source untouched. Callers that want the clone-family to share value identity with
/// the source should store [`Rc`](std::rc::Rc)s.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front`/`pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `get`/`insert`/`remove`/`replace` | `O(i)` |
/// | `add_sorted` | `O(n)` |
/// | `sort_by` | `O(n log n)` |
/// | `take`/`slice`/`take_out`/`slice_out` | `O(start + count)` |
///
/// There is no tail pointer: this list optimizes for splice-heavy workloads addressed through
/// slots, not for appending. Prefer a growable array when `push_back` dominates.
pub struct List<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> List<T> {
    /// Creates a new List with no elements.
    pub const fn new() -> List<T> {
        List {
            head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the List.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the List contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the List, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.head {
            Some(node) => Some(node.value()),
            None => None,
        }
    }

    /// Returns a mutable reference to the first element in the List, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.head {
            Some(mut node) => Some(node.value_mut()),
            None => None,
        }
    }

    /// Appends the provided element, returning the index it landed at (the previous length).
    pub fn push_back(&mut self, value: T) -> usize {
        let slot = self.tail_slot();
        self.link(slot, NodeRef::new(value));
        self.len - 1
    }

    /// Adds the provided element at the front of the List.
    pub fn push_front(&mut self, value: T) {
        let slot = self.head_slot();
        self.link(slot, NodeRef::new(value));
    }

    /// Removes the first element from the List and returns it, if the List isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match self.head {
            Some(_) => {
                let slot = self.head_slot();
                Some(self.unlink(slot).take_node().value)
            },
            None => None,
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: Bounds were checked above, so the element at `index` exists.
        Ok(unsafe { self.iter().nth(index).unreachable() })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a
    /// failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`]
    /// on a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: Bounds were checked above, so the element at `index` exists.
        Ok(unsafe { self.iter_mut().nth(index).unreachable() })
    }

    /// Inserts `value` before the element at `index`. The valid range is `[0, len]`: inserting
    /// at `len` is an append.
    ///
    /// # Panics
    /// Panics if `index` exceeds the length of the List.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` before the element at `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }
        let slot = self.slot_at(index);
        self.link(slot, NodeRef::new(value));
        Ok(())
    }

    /// Swaps the element at `index` for `value`, returning the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        self.try_replace(index, value).throw()
    }

    /// Swaps the element at `index` for `value`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Detaches the element at `index` from the List and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Detaches the element at `index` from the List, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        Ok(self.unlink(slot).take_node().value)
    }

    /// Returns a reference to the first element satisfying `pred`, or [`None`] when nothing
    /// does. Absence is an expected outcome, not an error.
    pub fn find<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Option<&T> {
        for value in self.iter() {
            if pred(value) {
                return Some(value);
            }
        }
        None
    }

    /// Returns a mutable reference to the first element satisfying `pred`, or [`None`].
    pub fn find_mut<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> Option<&mut T> {
        for value in self.iter_mut() {
            if pred(value) {
                return Some(value);
            }
        }
        None
    }

    /// Detaches and returns the first element satisfying `pred`, or [`None`] when nothing does.
    pub fn remove_by<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> Option<T> {
        let (slot, _) = self.seek(|value, _| pred(value));
        match slot.link() {
            Some(_) => Some(self.unlink(slot).take_node().value),
            None => None,
        }
    }

    /// Detaches every element satisfying `pred` in a single pass, preserving the relative order
    /// of both the kept and the removed elements. The removed elements are returned.
    pub fn remove_all_by<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> List<T> {
        let mut removed = List::new();
        let mut removed_slot = removed.head_slot();
        let mut slot = self.head_slot();

        while let Some(node) = slot.link() {
            if pred(node.value()) {
                let node = self.unlink(slot);
                removed.link(removed_slot, node);
                removed_slot = Slot::of(node.next_mut());
                // The vacated slot now links to the old successor; don't advance.
            } else {
                slot = Slot::of(node.next_mut());
            }
        }

        removed
    }

    /// Detaches and drops every element.
    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        self.len = 0;
        while let Some(node) = curr {
            curr = node.take_node().next;
        }
    }

    /// Moves every node of `other` to the end of this List. No values are copied or cloned.
    pub fn append(&mut self, mut other: List<T>) {
        let slot = self.tail_slot();
        slot.set(other.head.take());
        self.len += mem::take(&mut other.len);
    }

    /// Detaches the first `count` elements into a new List, leaving the remainder. If fewer than
    /// `count` elements exist, every element is moved; that truncation is deliberate.
    pub fn take_out(&mut self, count: usize) -> List<T> {
        self.slice_out(0, count)
    }

    /// Detaches `count` elements starting at `start` into a new List, preserving order.
    /// Selections reaching past the end are truncated to the elements that exist.
    pub fn slice_out(&mut self, start: usize, count: usize) -> List<T> {
        let mut out = List::new();
        let mut out_slot = out.head_slot();
        let (slot, _) = self.seek(|_, index| index == start);

        for _ in 0..count {
            match slot.link() {
                Some(_) => {
                    let node = self.unlink(slot);
                    out.link(out_slot, node);
                    out_slot = Slot::of(node.next_mut());
                },
                None => break,
            }
        }

        out
    }

    /// Inserts `value` before the first element for which `le(existing, value)` doesn't hold,
    /// keeping a list sorted under `le` sorted and placing ties after existing equal elements.
    /// Returns the insertion index.
    pub fn add_sorted<F: FnMut(&T, &T) -> bool>(&mut self, value: T, mut le: F) -> usize {
        let (slot, index) = self.seek(|existing, _| !le(existing, &value));
        self.link(slot, NodeRef::new(value));
        index
    }

    /// Sorts the List in place so that `le(a, b)` holds for every adjacent pair `(a, b)`.
    ///
    /// This is a top-down merge sort that splits by detaching halves and merges by relinking
    /// nodes, so it allocates no extra storage per value and runs in `O(n log n)`. Ties are
    /// resolved towards the earlier half, which makes the sort stable: elements comparing equal
    /// under `le` keep their original relative order.
    pub fn sort_by<F: FnMut(&T, &T) -> bool>(&mut self, mut le: F) {
        self.merge_sort(&mut le);
    }

    fn merge_sort<F: FnMut(&T, &T) -> bool>(&mut self, le: &mut F) {
        if self.len <= 1 {
            return;
        }

        let mut left = self.take_out(self.len / 2);
        left.merge_sort(le);
        self.merge_sort(le);

        let right = mem::take(self);
        *self = List::merge(left, right, le);
    }

    fn merge<F: FnMut(&T, &T) -> bool>(
        mut left: List<T>,
        mut right: List<T>,
        le: &mut F,
    ) -> List<T> {
        let mut out = List::new();
        let mut out_slot = out.head_slot();

        loop {
            let take_left = match (left.head, right.head) {
                // Ties pick the left half, keeping the merge stable.
                (Some(l), Some(r)) => le(l.value(), r.value()),
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };

            let source = if take_left { &mut left } else { &mut right };
            let slot = source.head_slot();
            let node = source.unlink(slot);

            out.link(out_slot, node);
            out_slot = Slot::of(node.next_mut());
        }

        out
    }

    /// Left-folds every element into `seed`, front to back.
    pub fn fold<A, F: FnMut(A, &T) -> A>(&self, seed: A, mut operation: F) -> A {
        let mut accumulated = seed;
        for value in self.iter() {
            accumulated = operation(accumulated, value);
        }
        accumulated
    }

    /// Left-folds the elements using the first one as the seed.
    ///
    /// # Panics
    /// Panics if the List is empty.
    pub fn fold1<'s, F>(&'s self, mut operation: F) -> &'s T
    where
        F: FnMut(&'s T, &'s T) -> &'s T,
    {
        let mut iter = self.iter();
        let Some(mut kept) = iter.next() else {
            panic!("Cannot fold a List with no elements!");
        };
        for value in iter {
            kept = operation(kept, value);
        }
        kept
    }

    /// Returns the first element `m` such that `le(m, x)` holds for every element `x`, or
    /// [`None`] when the List is empty.
    pub fn minimum_by<F: FnMut(&T, &T) -> bool>(&self, mut le: F) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.fold1(|kept, value| if le(kept, value) { kept } else { value }))
    }

    /// Returns the first element `m` such that `le(x, m)` holds for every element `x`, or
    /// [`None`] when the List is empty.
    pub fn maximum_by<F: FnMut(&T, &T) -> bool>(&self, mut le: F) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.fold1(|kept, value| if le(value, kept) { kept } else { value }))
    }

    /// Counts the elements satisfying `pred`.
    pub fn count_satisfying<F: FnMut(&T) -> bool>(&self, mut pred: F) -> usize {
        self.fold(0, |count, value| if pred(value) { count + 1 } else { count })
    }

    /// Returns true if at least one element satisfies `pred`. False on an empty List.
    pub fn any_satisfy<F: FnMut(&T) -> bool>(&self, pred: F) -> bool {
        self.find(pred).is_some()
    }

    /// Returns true if every element satisfies `pred`. Vacuously true on an empty List.
    pub fn all_satisfy<F: FnMut(&T) -> bool>(&self, mut pred: F) -> bool {
        for value in self.iter() {
            if !pred(value) {
                return false;
            }
        }
        true
    }

    /// Applies `transform` to every element, front to back, collecting the results into a new
    /// List. The source is unchanged.
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut transform: F) -> List<U> {
        let mut out = List::new();
        out.extend(self.iter().map(|value| transform(value)));
        out
    }

    /// Creates a [`Cursor`] over the List, positioned before the first element.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: Clone> List<T> {
    /// Builds a new List holding clones of the first `count` elements; the source is unchanged.
    /// If fewer than `count` elements exist, every element is cloned.
    pub fn take(&self, count: usize) -> List<T> {
        self.slice(0, count)
    }

    /// Builds a new List holding clones of `count` elements starting at `start`, in order; the
    /// source is unchanged. Selections reaching past the end are truncated.
    pub fn slice(&self, start: usize, count: usize) -> List<T> {
        let mut out = List::new();
        out.extend(self.iter().skip(start).take(count).cloned());
        out
    }

    /// Builds a new List holding clones of the elements satisfying `pred`, in order; the source
    /// is unchanged.
    pub fn filter<F: FnMut(&T) -> bool>(&self, mut pred: F) -> List<T> {
        let mut out = List::new();
        out.extend(self.iter().filter(|value| pred(value)).cloned());
        out
    }

    /// A clone of the whole List; equivalent to `take(len)`.
    pub fn duplicate(&self) -> List<T> {
        self.clone()
    }

    /// Returns a sorted duplicate of the List, leaving the source order untouched.
    pub fn sorted_by<F: FnMut(&T, &T) -> bool>(&self, le: F) -> List<T> {
        let mut out = self.duplicate();
        out.sort_by(le);
        out
    }
}

impl<T: Eq> List<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item {
                return Some(index);
            }
        }
        None
    }

    pub fn contains(&self, item: &T) -> bool {
        for i in self.iter() {
            if i == item {
                return true;
            }
        }
        false
    }
}

impl<T> List<T> {
    pub(crate) fn head_slot(&mut self) -> Slot<T> {
        Slot::of(&mut self.head)
    }

    /// The single insertion primitive: every add operation reduces to finding a slot and linking
    /// through it. O(1).
    pub(crate) fn link(&mut self, slot: Slot<T>, node: NodeRef<T>) {
        *node.next_mut() = slot.link();
        slot.set(Some(node));
        self.len += 1;
    }

    /// The single removal primitive. Detaches the node the slot links to and returns it; the
    /// caller decides whether to free the node or relink it into another list. O(1).
    ///
    /// Precondition: the slot is occupied.
    pub(crate) fn unlink(&mut self, slot: Slot<T>) -> NodeRef<T> {
        // SAFETY: Callers only unlink through slots they have observed to be occupied.
        let node = unsafe { slot.link().unreachable() };
        slot.set(*node.next());
        self.len -= 1;
        node
    }

    /// The one traversal walker: advances a slot from the head until the chain ends or `stop`
    /// holds for the linked node's value and index. Every position search (tail, index,
    /// predicate) is a different stop condition over this loop.
    pub(crate) fn seek<F>(&mut self, mut stop: F) -> (Slot<T>, usize)
    where
        F: FnMut(&T, usize) -> bool,
    {
        let mut slot = self.head_slot();
        let mut index = 0;

        while let Some(node) = slot.link() {
            if stop(node.value(), index) {
                break;
            }
            slot = Slot::of(node.next_mut());
            index += 1;
        }

        (slot, index)
    }

    /// The slot holding the empty link after the last node. O(n).
    pub(crate) fn tail_slot(&mut self) -> Slot<T> {
        self.seek(|_, _| false).0
    }

    /// The slot linking to the element at `index`; callers check bounds, except that the slot at
    /// `index == len` is the (valid, empty) tail slot.
    pub(crate) fn slot_at(&mut self, index: usize) -> Slot<T> {
        self.seek(|_, i| i == index).0
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    #[allow(unused)]
    pub(crate) fn verify_count(&self) {
        let mut count = 0;
        let mut curr = self.head;
        while let Some(node) = curr {
            count += 1;
            curr = *node.next();
        }
        assert!(count == self.len, "Traversable nodes must match the stored count.");
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut slot = self.tail_slot();
        for value in iter {
            let node = NodeRef::new(value);
            self.link(slot, node);
            slot = Slot::of(node.next_mut());
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
        // Terminate the variable length hashing sequence.
        0xFF_u8.hash(state);
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut first = true;
        for value in self.iter() {
            if !first {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
            first = false;
        }
        write!(f, ")")
    }
}
