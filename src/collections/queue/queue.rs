use std::fmt::{self, Debug, Formatter};

use crate::collections::list::{IntoIter, Iter, IterMut, List};

/// A first-in first-out queue, layered over a [`List`]. Arrivals append at the tail and
/// departures pop the head, so `pop` and `peek` are constant time while `push` walks the chain.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(n)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `len` | `O(1)` |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    items: List<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub const fn new() -> Queue<T> {
        Queue {
            items: List::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `value` behind every element already waiting.
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the element at the front of the Queue, or [`None`] if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the element at the front without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns a mutable reference to the element at the front without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    /// Removes every element from the Queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns a borrowing iterator from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a mutably borrowing iterator from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Queue<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: List::from_iter(iter),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
