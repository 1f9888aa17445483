//! Array-of-structs map: keys and values interleaved in one vector.

use std::{collections::HashMap, fmt, hash::Hash, slice};

use crate::container::{Container, Measure};

// ////////////////////////////////////////////////////////////////////////////
// AosMap
// ////////////////////////////////////////////////////////////////////////////

/// An insertion-ordered map storing `(key, value)` pairs contiguously.
///
/// This is the layout counterpart to [`SoaMap`][crate::SoaMap]: walking only
/// the keys still strides over every value, so key scans pull value memory
/// into cache.
pub struct AosMap<K, V> {
    slots: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> AosMap<K, V> {
    /// Create an empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Create an empty map with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterate the values in insertion order.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterate the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }
}

impl<K, V> AosMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Insert an entry, returning the previous value if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use container_bench::AosMap;
    ///
    /// let mut map = AosMap::new();
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// assert_eq!(map.insert("b", 3), Some(2));
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"b", &"a"]);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.slots.get(&key) {
            return self
                .entries
                .get_mut(slot)
                .map(|(_, old)| std::mem::replace(old, value));
        }
        self.slots.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.slots
            .get(key)
            .and_then(|&slot| self.entries.get(slot))
            .map(|(_, value)| value)
    }
}

impl<K, V> Default for AosMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Container for AosMap<K, V>
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
        self.entries.iter().map(|(key, _)| key)
    }

    #[inline]
    fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K, V> Extend<(K, V)> for AosMap<K, V>
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

impl<K, V> FromIterator<(K, V)> for AosMap<K, V>
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

impl<K, V> fmt::Debug for AosMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::AosMap;

    #[test]
    fn basic_large() {
        let size = 10_000;
        let mut map = AosMap::with_capacity(size);
        assert!(map.is_empty());

        for i in 0..size {
            map.insert(i, i * 10);
            assert_eq!(map.len(), i + 1);
        }
        for i in 0..size {
            assert_eq!(map.get(&i), Some(&(i * 10)));
        }
        assert_eq!(map.get(&size), None);
    }

    #[test]
    fn iter_key_val() {
        let map: AosMap<_, _> = (0..5).rev().map(|x| (x, x + 100)).collect();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
        assert_eq!(
            map.values().rev().copied().collect::<Vec<_>>(),
            [100, 101, 102, 103, 104]
        );
        assert_eq!(map.iter().len(), 5);
        assert_eq!(format!("{map:?}"), "{4: 104, 3: 103, 2: 102, 1: 101, 0: 100}");
    }
}
