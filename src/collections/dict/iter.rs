use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::{slice, vec};

use super::{Dictionary, Entry};
use crate::collections::list::{self, List};

/// An owning iterator over a [`Dictionary`]'s entries, in arbitrary order.
pub struct IntoIter<K, V> {
    buckets: vec::IntoIter<List<Entry<K, V>>>,
    current: Option<list::IntoIter<Entry<K, V>>>,
    remaining: usize,
}

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for Dictionary<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            buckets: self.buckets.into_iter(),
            current: None,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((entry.key, entry.value));
            }
            self.current = Some(self.buckets.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// A borrowing iterator over a [`Dictionary`]'s entries, in arbitrary order.
pub struct Iter<'a, K, V> {
    buckets: slice::Iter<'a, List<Entry<K, V>>>,
    current: Option<list::Iter<'a, Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new<B: BuildHasher>(dict: &'a Dictionary<K, V, B>) -> Iter<'a, K, V>
    where
        K: Hash + Eq,
    {
        Iter {
            buckets: dict.buckets.iter(),
            current: None,
            remaining: dict.len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a Dictionary<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing iterator over a [`Dictionary`]'s keys.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(super) fn new<B: BuildHasher>(dict: &'a Dictionary<K, V, B>) -> Keys<'a, K, V>
    where
        K: Hash + Eq,
    {
        Keys {
            inner: Iter::new(dict),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// A borrowing iterator over a [`Dictionary`]'s values.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(super) fn new<B: BuildHasher>(dict: &'a Dictionary<K, V, B>) -> Values<'a, K, V>
    where
        K: Hash + Eq,
    {
        Values {
            inner: Iter::new(dict),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
