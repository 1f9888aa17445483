//! Struct-of-arrays map: keys and values live in separate vectors.

use std::{collections::HashMap, fmt, hash::Hash, iter, slice};

use crate::container::{Container, Measure};

// ////////////////////////////////////////////////////////////////////////////
// SoaMap
// ////////////////////////////////////////////////////////////////////////////

/// An insertion-ordered map storing its keys and its values in two parallel
/// vectors.
///
/// The entry at position `i` is `(keys[i], values[i])`. Walking the keys only
/// streams through the key vector, and walking the values only streams
/// through the value vector. A hashed slot index maps each key to its
/// position so that inserting an existing key replaces the value in place.
pub struct SoaMap<K, V> {
    slots: HashMap<K, usize>,
    keys: Vec<K>,
    values: Vec<V>,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<K, V> SoaMap<K, V> {
    /// Create an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use container_bench::SoaMap;
    ///
    /// let map: SoaMap<u64, String> = SoaMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create an empty map with room for `capacity` entries in each array.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Iterate the values in insertion order.
    #[inline]
    pub fn values(&self) -> slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Iterate the entries in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use container_bench::SoaMap;
    ///
    /// let map: SoaMap<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&2, &'b'), (&1, &'a')]);
    /// ```
    #[inline]
    pub fn iter(&self) -> iter::Zip<slice::Iter<'_, K>, slice::Iter<'_, V>> {
        self.keys.iter().zip(self.values.iter())
    }
}

impl<K, V> SoaMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Insert an entry, returning the previous value if the key was present.
    ///
    /// A replaced entry keeps its original position.
    ///
    /// # Examples
    ///
    /// ```
    /// use container_bench::SoaMap;
    ///
    /// let mut map = SoaMap::new();
    /// assert_eq!(map.insert(1, "Hello"), None);
    /// assert_eq!(map.insert(2, "World"), None);
    /// assert_eq!(map.insert(1, "Bonjour"), Some("Hello"));
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.slots.get(&key) {
            return self
                .values
                .get_mut(slot)
                .map(|old| std::mem::replace(old, value));
        }
        self.slots.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.values.push(value);
        None
    }

    /// Look up the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.slots.get(key).and_then(|&slot| self.values.get(slot))
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<K, V> Default for SoaMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Container for SoaMap<K, V>
where
    K: Hash + Eq + Clone + Measure,
    V: Measure,
{
    type Entry = (K, V);
    type Key = K;
    type Value = V;

    #[inline]
    fn add(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    #[inline]
    fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }
}

impl<K, V> Extend<(K, V)> for SoaMap<K, V>
where
    K: Hash + Eq + Clone,
{
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        for (key, value) in iterable {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for SoaMap<K, V>
where
    K: Hash + Eq + Clone,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> fmt::Debug for SoaMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::SoaMap;

    #[test]
    fn basic_small() {
        let mut map: SoaMap<i64, i64> = SoaMap::new();
        assert!(map.is_empty());
        assert!(map.get(&1).is_none());
        assert!(map.insert(1, 0).is_none());
        assert_eq!(map.insert(1, 5), Some(0));
        assert_eq!(map.get(&1), Some(&5));
        assert!(map.insert(2, 20).is_none());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn insert_existing_keeps_order() {
        let size = 100;
        let mut map = SoaMap::with_capacity(size);

        for i in 0..size {
            assert!(map.insert(i, format!("{i}")).is_none());
        }
        for i in (0..size).rev() {
            assert_eq!(map.insert(i, format!("{i}!")), Some(format!("{i}")));
        }

        assert_eq!(map.len(), size);
        assert!(map.keys().copied().eq(0..size));
        let expected: Vec<_> = (0..size).map(|i| format!("{i}!")).collect();
        assert!(map.values().eq(expected.iter()));
    }

    #[test]
    fn debug_display() {
        let map: SoaMap<_, _> = (0..3).map(|x| (x, x * 10)).collect();
        assert_eq!(format!("{map:?}"), "{0: 0, 1: 10, 2: 20}");
    }
}
