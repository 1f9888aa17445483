//! The capability every measured container exposes to the harness.
//!
//! The harness never looks inside a container: it adds entries while building
//! a [`Population`][crate::Population], then reads the size and walks the keys
//! and values while timing. Whatever layout a container uses internally is
//! precisely what the benchmarks compare.
//!
//! Two insertion-ordered map layouts are provided alongside the standard
//! library's collections:
//!
//! - [`SoaMap`] keeps keys and values in two parallel vectors
//!   (struct-of-arrays), so a key walk never touches value memory.
//! - [`AosMap`] keeps `(key, value)` pairs in a single vector
//!   (array-of-structs), so keys and values are interleaved.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

mod aos;
mod soa;

pub use aos::AosMap;
pub use soa::SoaMap;

// ////////////////////////////////////////////////////////////////////////////
// Measure
// ////////////////////////////////////////////////////////////////////////////

/// Reduce a key or value to the scalar that timed operations accumulate.
///
/// Integers measure as themselves and strings as their length in bytes, so
/// touching a string's magnitude requires dereferencing its heap buffer
/// header.
pub trait Measure {
    /// The scalar magnitude of this item.
    #[must_use]
    fn magnitude(&self) -> u128;
}

impl Measure for u32 {
    #[inline]
    fn magnitude(&self) -> u128 {
        u128::from(*self)
    }
}

impl Measure for u64 {
    #[inline]
    fn magnitude(&self) -> u128 {
        u128::from(*self)
    }
}

impl Measure for usize {
    #[inline]
    #[expect(clippy::as_conversions, reason = "usize always fits in u128")]
    fn magnitude(&self) -> u128 {
        *self as u128
    }
}

impl Measure for String {
    #[inline]
    fn magnitude(&self) -> u128 {
        self.len().magnitude()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Container
// ////////////////////////////////////////////////////////////////////////////

/// A map-like or set-like collection under measurement.
///
/// For set-like containers the keys and the values are the same items.
pub trait Container: Default {
    /// What a single insertion takes: `(key, value)` for maps, the item for
    /// sets.
    type Entry;
    /// Key type yielded by [`keys`][Container::keys].
    type Key: Measure;
    /// Value type yielded by [`values`][Container::values].
    type Value: Measure;

    /// Add an entry. Adding an existing key replaces it without changing the
    /// reported size.
    fn add(&mut self, entry: Self::Entry);

    /// Number of entries currently held.
    #[must_use]
    fn size(&self) -> usize;

    /// Iterate the keys in whatever order the container natively exposes.
    fn keys(&self) -> impl Iterator<Item = &Self::Key>;

    /// Iterate the values in whatever order the container natively exposes.
    fn values(&self) -> impl Iterator<Item = &Self::Value>;
}

impl<K, V, S> Container for HashMap<K, V, S>
where
    K: Hash + Eq + Measure,
    V: Measure,
    S: BuildHasher + Default,
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
        HashMap::keys(self)
    }

    #[inline]
    fn values(&self) -> impl Iterator<Item = &V> {
        HashMap::values(self)
    }
}

impl<K, V> Container for BTreeMap<K, V>
where
    K: Ord + Measure,
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
        BTreeMap::keys(self)
    }

    #[inline]
    fn values(&self) -> impl Iterator<Item = &V> {
        BTreeMap::values(self)
    }
}

impl<T, S> Container for HashSet<T, S>
where
    T: Hash + Eq + Measure,
    S: BuildHasher + Default,
{
    type Entry = T;
    type Key = T;
    type Value = T;

    #[inline]
    fn add(&mut self, item: T) {
        self.replace(item);
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn keys(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn values(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Container for BTreeSet<T>
where
    T: Ord + Measure,
{
    type Entry = T;
    type Key = T;
    type Value = T;

    #[inline]
    fn add(&mut self, item: T) {
        self.replace(item);
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn keys(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn values(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

    use pretty_assertions::assert_eq;

    use super::{AosMap, Container, Measure, SoaMap};

    fn fill<C: Container<Entry = (u64, String)>>() -> C {
        let mut container = C::default();
        for i in 0..10_u64 {
            container.add((i, "x".repeat(usize::try_from(i).unwrap_or(0))));
        }
        // Replacing must not change the size.
        container.add((3, "abc".to_owned()));
        container
    }

    fn check_map<C: Container<Entry = (u64, String)>>() {
        let container: C = fill();
        assert_eq!(container.size(), 10);
        assert_eq!(container.keys().map(Measure::magnitude).sum::<u128>(), 45);
        assert_eq!(
            container.values().map(Measure::magnitude).sum::<u128>(),
            45
        );
    }

    #[test]
    fn maps() {
        check_map::<SoaMap<u64, String>>();
        check_map::<AosMap<u64, String>>();
        check_map::<HashMap<u64, String>>();
        check_map::<BTreeMap<u64, String>>();
    }

    fn check_set<C: Container<Entry = u64>>() {
        let mut container = C::default();
        for i in [5, 1, 5, 9, 1] {
            container.add(i);
        }
        assert_eq!(container.size(), 3);
        assert_eq!(container.keys().map(Measure::magnitude).sum::<u128>(), 15);
        assert_eq!(
            container.values().map(Measure::magnitude).sum::<u128>(),
            15
        );
    }

    #[test]
    fn sets() {
        check_set::<HashSet<u64>>();
        check_set::<BTreeSet<u64>>();
    }

    #[test]
    fn magnitudes() {
        assert_eq!(7_u32.magnitude(), 7);
        assert_eq!(u64::MAX.magnitude(), u128::from(u64::MAX));
        assert_eq!(12_usize.magnitude(), 12);
        assert_eq!("héllo".to_owned().magnitude(), 6);
    }
}
