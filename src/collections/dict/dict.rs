use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, iter, mem};

use super::{Iter, Keys, Values};
use crate::collections::list::List;

const MIN_BUCKETS: usize = 16;

const GROWTH_FACTOR: usize = 2;

// Grow when the entry count would exceed 3/4 of the bucket count.
const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values, chaining hash collisions through [`List`]s.
///
/// It is a logic error for keys to be mutated in a way that changes their hash while stored,
/// which is why the API never hands out mutable key access.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Dictionary.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)`** |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
///
/// \* Plus the length of the probed bucket's chain; chains stay short because the table grows
/// before the load factor passes 3/4.
///
/// \** When the insertion triggers a growth, every entry is relinked into a doubled table.
pub struct Dictionary<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Vec<List<Entry<K, V>>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Dictionary<K, V, B> {
    /// Creates a new Dictionary with no buckets and the default value for `B`. The table is
    /// allocated on first insertion.
    pub fn new() -> Dictionary<K, V, B> {
        Dictionary {
            buckets: Vec::new(),
            len: 0,
            hasher: B::default(),
        }
    }

    /// Creates a new Dictionary with `cap` buckets already allocated and the default hasher.
    pub fn with_cap(cap: usize) -> Dictionary<K, V, B> {
        Dictionary {
            buckets: Dictionary::<K, V, B>::allocate(cap),
            len: 0,
            hasher: B::default(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Dictionary<K, V, B> {
    /// Creates a new Dictionary with no buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> Dictionary<K, V, B> {
        Dictionary {
            buckets: Vec::new(),
            len: 0,
            hasher,
        }
    }

    /// Creates a new Dictionary with `cap` buckets already allocated and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Dictionary<K, V, B> {
        Dictionary {
            buckets: Dictionary::<K, V, B>::allocate(cap),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the Dictionary.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Dictionary contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Associates `key` with `value`. If the key was already present, the previous value is
    /// returned and the stored key is left unchanged, as with the standard library.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow();
        }

        let index = Self::index_for(&self.hasher, &key, self.buckets.len());
        let bucket = &mut self.buckets[index];

        for entry in bucket.iter_mut() {
            if entry.key == key {
                return Some(mem::replace(&mut entry.value, value));
            }
        }

        bucket.push_front(Entry { key, value });
        self.len += 1;
        None
    }

    /// Returns a reference to the value associated with `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.buckets.is_empty() {
            return None;
        }
        let index = Self::index_for(&self.hasher, key, self.buckets.len());
        self.buckets[index]
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with `key`, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.buckets.is_empty() {
            return None;
        }
        let index = Self::index_for(&self.hasher, key, self.buckets.len());
        self.buckets[index]
            .find_mut(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Removes the entry for `key`, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.buckets.is_empty() {
            return None;
        }
        let index = Self::index_for(&self.hasher, key, self.buckets.len());
        let removed = self.buckets[index].remove_by(|entry| entry.key.borrow() == key)?;
        self.len -= 1;
        Some(removed.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes every entry, keeping the allocated buckets.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self)
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Dictionary<K, V, B> {
    fn allocate(count: usize) -> Vec<List<Entry<K, V>>> {
        iter::repeat_with(List::new).take(count).collect()
    }

    fn index_for<Q: Hash + ?Sized>(hasher: &B, key: &Q, bucket_count: usize) -> usize {
        (hasher.hash_one(key) % bucket_count as u64) as usize
    }

    fn should_grow(&self) -> bool {
        self.buckets.is_empty()
            || (self.len + 1) * LOAD_FACTOR_DENOMINATOR
                > self.buckets.len() * LOAD_FACTOR_NUMERATOR
    }

    fn grow(&mut self) {
        let new_count = cmp::max(MIN_BUCKETS, self.buckets.len() * GROWTH_FACTOR);
        let old = mem::replace(&mut self.buckets, Self::allocate(new_count));

        for bucket in old {
            for entry in bucket {
                let index = Self::index_for(&self.hasher, &entry.key, new_count);
                // Relink without touching the load factor; the count of entries is unchanged.
                self.buckets[index].push_front(entry);
            }
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for Dictionary<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for Dictionary<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for Dictionary<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for Dictionary<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for Dictionary<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for Dictionary<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
