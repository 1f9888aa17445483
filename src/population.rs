//! Building the containers that the timed operations walk.
//!
//! A population of `N` containers with `M` entries each assigns container `i`
//! the keys `i*M .. (i+1)*M`. How those keys turn into entries is decided by
//! an [`EntryShape`]; the shapes here cover large string payloads, plain
//! integers, shuffled insertion orders and seeded integer values. All of them
//! are deterministic, so two populations built from the same parameters hold
//! the same entries in the same insertion order.

use std::ops::Range;

use log::debug;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::{
    config::{ConfigError, key_space},
    container::Container,
};

// ////////////////////////////////////////////////////////////////////////////
// Entry Shapes
// ////////////////////////////////////////////////////////////////////////////

/// Position of one container within its population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Index of the container in the population.
    pub index: usize,
    /// The keys owned by the container, one per entry.
    pub keys: Range<u64>,
}

/// A deterministic rule producing the entries of one container.
pub trait EntryShape<E> {
    /// Reject parameters the shape can not honour.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the rejected parameter.
    #[inline]
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Produce the entries of the container at `slot`, in insertion order.
    fn entries(&self, slot: Slot) -> impl Iterator<Item = E>;
}

/// Large string payloads, unique per entry.
///
/// The value of entry `j` in container `i` is `"value_{i}_{j}_"` followed by
/// `value_size - 20` padding bytes. Maps key it by its integer key; sets hold
/// the string alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddedStrings {
    /// Nominal payload size in bytes.
    pub value_size: usize,
}

impl PaddedStrings {
    /// Room reserved for the `value_{i}_{j}_` prefix.
    pub const PREFIX_ALLOWANCE: usize = 20;

    #[inline]
    fn padding(&self) -> String {
        "x".repeat(self.value_size.saturating_sub(Self::PREFIX_ALLOWANCE))
    }

    #[inline]
    fn check(&self) -> Result<(), ConfigError> {
        if self.value_size < Self::PREFIX_ALLOWANCE {
            return Err(ConfigError::PayloadTooSmall {
                value_size: self.value_size,
                minimum: Self::PREFIX_ALLOWANCE,
            });
        }
        Ok(())
    }
}

impl EntryShape<(u64, String)> for PaddedStrings {
    #[inline]
    fn validate(&self) -> Result<(), ConfigError> {
        self.check()
    }

    #[inline]
    fn entries(&self, slot: Slot) -> impl Iterator<Item = (u64, String)> {
        let padding = self.padding();
        let index = slot.index;
        slot.keys
            .enumerate()
            .map(move |(j, key)| (key, format!("value_{index}_{j}_{padding}")))
    }
}

impl EntryShape<String> for PaddedStrings {
    #[inline]
    fn validate(&self) -> Result<(), ConfigError> {
        self.check()
    }

    #[inline]
    fn entries(&self, slot: Slot) -> impl Iterator<Item = String> {
        EntryShape::<(u64, String)>::entries(self, slot).map(|(_, value)| value)
    }
}

/// The keys themselves, in ascending order.
///
/// Sets hold each key; maps map each key to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialIntegers;

impl EntryShape<u64> for SequentialIntegers {
    #[inline]
    fn entries(&self, slot: Slot) -> impl Iterator<Item = u64> {
        slot.keys
    }
}

impl EntryShape<(u64, u64)> for SequentialIntegers {
    #[inline]
    fn entries(&self, slot: Slot) -> impl Iterator<Item = (u64, u64)> {
        slot.keys.map(|key| (key, key))
    }
}

/// The keys themselves, inserted in a seeded random order.
///
/// Each container shuffles its own keys with a generator seeded from `seed`
/// and the container's first key, so the order differs between containers
/// but is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffledIntegers {
    /// Base seed.
    pub seed: u64,
}

impl EntryShape<u64> for ShuffledIntegers {
    #[inline]
    fn entries(&self, slot: Slot) -> impl Iterator<Item = u64> {
        let mut rng = SmallRng::seed_from_u64(self.seed ^ slot.keys.start);
        let mut values: Vec<u64> = slot.keys.collect();
        values.shuffle(&mut rng);
        values.into_iter()
    }
}

/// Map entries whose values are drawn from a seeded generator in
/// `0..bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededIntegers {
    /// Base seed.
    pub seed: u64,
    /// Exclusive upper bound of the values.
    pub bound: u64,
}

impl EntryShape<(u64, u64)> for SeededIntegers {
    #[inline]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.bound == 0 {
            return Err(ConfigError::EmptyValueRange);
        }
        Ok(())
    }

    #[inline]
    fn entries(&self, slot: Slot) -> impl Iterator<Item = (u64, u64)> {
        let mut rng = SmallRng::seed_from_u64(self.seed ^ slot.keys.start);
        let bound = self.bound;
        slot.keys
            .map(move |key| (key, rng.random_range(0..bound)))
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Population
// ////////////////////////////////////////////////////////////////////////////

/// An ordered collection of independently built containers.
///
/// The container at index `i` stays at index `i` for the lifetime of the
/// population, and the population is never mutated once built.
#[derive(Debug)]
pub struct Population<C> {
    containers: Vec<C>,
    entries_per_container: usize,
}

impl<C> Population<C> {
    /// Wrap already-built containers that nominally hold
    /// `entries_per_container` entries each.
    #[inline]
    #[must_use]
    pub fn from_containers(containers: Vec<C>, entries_per_container: usize) -> Self {
        Self {
            containers,
            entries_per_container,
        }
    }

    /// The containers in population order.
    #[inline]
    #[must_use]
    pub fn containers(&self) -> &[C] {
        &self.containers
    }

    /// Give the containers back, in population order.
    #[inline]
    #[must_use]
    pub fn into_containers(self) -> Vec<C> {
        self.containers
    }

    /// Nominal number of entries in each container.
    #[inline]
    #[must_use]
    pub fn entries_per_container(&self) -> usize {
        self.entries_per_container
    }

    /// Number of containers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns `true` if the population holds no containers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl<C: Container> Population<C> {
    /// Build `containers` containers holding `entries` entries each.
    ///
    /// Every container is created empty before any entry is added, then
    /// filled from `shape` one container at a time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the key space does not fit in a `u64` or
    /// if `shape` rejects its own parameters. Nothing is allocated in that
    /// case.
    ///
    /// # Examples
    ///
    /// ```
    /// use container_bench::{Container, PaddedStrings, Population, SoaMap};
    ///
    /// let population: Population<SoaMap<u64, String>> =
    ///     Population::build(3, 4, &PaddedStrings { value_size: 64 }).unwrap();
    /// assert_eq!(population.len(), 3);
    /// assert!(population.containers().iter().all(|map| map.size() == 4));
    /// ```
    #[inline]
    pub fn build<S>(containers: usize, entries: usize, shape: &S) -> Result<Self, ConfigError>
    where
        S: EntryShape<C::Entry>,
    {
        key_space(containers, entries)?;
        shape.validate()?;

        let mut population: Vec<C> = std::iter::repeat_with(C::default)
            .take(containers)
            .collect();
        let per_container = u64::try_from(entries).map_err(|_err| ConfigError::KeySpaceOverflow {
            containers,
            entries,
        })?;
        let mut first_key = 0_u64;
        for (index, container) in population.iter_mut().enumerate() {
            let end = first_key.saturating_add(per_container);
            for entry in shape.entries(Slot {
                index,
                keys: first_key..end,
            }) {
                container.add(entry);
            }
            first_key = end;
        }

        debug!("built {containers} containers of {entries} entries");
        Ok(Self::from_containers(population, entries))
    }

    /// Build `containers` empty containers.
    #[inline]
    #[must_use]
    pub fn empty(containers: usize) -> Self {
        Self::from_containers(
            std::iter::repeat_with(C::default).take(containers).collect(),
            0,
        )
    }
}
