//! The fixed catalogue of access patterns.
//!
//! Each [`Operation`] visits every container of a population once, in
//! population order, and reduces what it reads to a single `u128` result.
//! The result is not part of the report; it exists so that the work has an
//! observable output (see [`Sink`][crate::Sink]).

use crate::{
    container::{Container, Measure},
    population::Population,
};

/// One cross-container access pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Operation {
    /// Sum of the reported size of every container. Only touches per-container
    /// metadata.
    SizeRead,
    /// Sum of every key's magnitude.
    KeySum,
    /// Sum of every value's magnitude (string length or integer value).
    ValueSum,
    /// Number of keys above a per-container threshold.
    ///
    /// Container `i` of a population with `M` entries per container uses the
    /// threshold `i*M + M/2`, so roughly half of each container's keys pass.
    FilteredKeyCount,
    /// Number of values whose magnitude exceeds a fixed threshold.
    FilteredValueCount {
        /// Values strictly above this magnitude are counted.
        threshold: u128,
    },
    /// Largest value magnitude, or zero if there are no values.
    MaxValue,
    /// Number of values whose magnitude is even.
    EvenCount,
}

impl Operation {
    /// Run the access pattern once over `population`.
    #[inline]
    #[must_use]
    pub fn apply<C: Container>(self, population: &Population<C>) -> u128 {
        let containers = population.containers();
        match self {
            Self::SizeRead => containers
                .iter()
                .map(|container| container.size().magnitude())
                .sum(),
            Self::KeySum => containers
                .iter()
                .flat_map(Container::keys)
                .map(Measure::magnitude)
                .sum(),
            Self::ValueSum => containers
                .iter()
                .flat_map(Container::values)
                .map(Measure::magnitude)
                .sum(),
            Self::FilteredKeyCount => {
                let entries = population.entries_per_container().magnitude();
                let half = entries / 2;
                let mut count = 0_u128;
                let mut base = 0_u128;
                for container in containers {
                    let threshold = base.saturating_add(half);
                    count = count.saturating_add(
                        container
                            .keys()
                            .filter(|key| key.magnitude() > threshold)
                            .count()
                            .magnitude(),
                    );
                    base = base.saturating_add(entries);
                }
                count
            }
            Self::FilteredValueCount { threshold } => containers
                .iter()
                .flat_map(Container::values)
                .filter(|value| value.magnitude() > threshold)
                .count()
                .magnitude(),
            Self::MaxValue => containers
                .iter()
                .flat_map(Container::values)
                .map(Measure::magnitude)
                .max()
                .unwrap_or(0),
            Self::EvenCount => containers
                .iter()
                .flat_map(Container::values)
                .filter(|value| value.magnitude() % 2 == 0)
                .count()
                .magnitude(),
        }
    }
}

/// A labelled catalogue entry, one row of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Row label.
    pub label: &'static str,
    /// Access pattern timed under that label.
    pub operation: Operation,
}

/// Catalogue for maps with string values.
pub const MAP_STEPS: &[Step] = &[
    Step {
        label: "keys (all maps)",
        operation: Operation::KeySum,
    },
    Step {
        label: "values (all maps)",
        operation: Operation::ValueSum,
    },
    Step {
        label: "filter keys (all)",
        operation: Operation::FilteredKeyCount,
    },
    Step {
        label: "filter values (all)",
        operation: Operation::FilteredValueCount { threshold: 50 },
    },
    Step {
        label: "size (all maps)",
        operation: Operation::SizeRead,
    },
];

/// Catalogue for maps with integer values.
pub const MAP_INTEGER_STEPS: &[Step] = &[
    Step {
        label: "keys (all maps)",
        operation: Operation::KeySum,
    },
    Step {
        label: "values (all maps)",
        operation: Operation::ValueSum,
    },
    Step {
        label: "max value (all)",
        operation: Operation::MaxValue,
    },
    Step {
        label: "count even (all)",
        operation: Operation::EvenCount,
    },
    Step {
        label: "size (all maps)",
        operation: Operation::SizeRead,
    },
];

/// Catalogue for sets of integers.
pub const SET_STEPS: &[Step] = &[
    Step {
        label: "values (all sets)",
        operation: Operation::ValueSum,
    },
    Step {
        label: "filter values (all)",
        operation: Operation::FilteredKeyCount,
    },
    Step {
        label: "max value (all)",
        operation: Operation::MaxValue,
    },
    Step {
        label: "count even (all)",
        operation: Operation::EvenCount,
    },
    Step {
        label: "size (all sets)",
        operation: Operation::SizeRead,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap, HashSet};

    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
    use rstest::rstest;

    use super::Operation;
    use crate::{
        container::{AosMap, SoaMap},
        population::{PaddedStrings, Population, SequentialIntegers, ShuffledIntegers},
    };

    /// 3 containers of 2 keys each: `{0, 1}`, `{2, 3}`, `{4, 5}`.
    fn small_sets() -> Result<Population<BTreeSet<u64>>> {
        Ok(Population::build(3, 2, &SequentialIntegers)?)
    }

    #[rstest]
    #[case(Operation::SizeRead, 6)]
    #[case(Operation::KeySum, 15)]
    #[case(Operation::ValueSum, 15)]
    // Thresholds 1, 3, 5: nothing passes.
    #[case(Operation::FilteredKeyCount, 0)]
    #[case(Operation::FilteredValueCount { threshold: 2 }, 3)]
    #[case(Operation::MaxValue, 5)]
    #[case(Operation::EvenCount, 3)]
    fn catalogue_on_small_sets(#[case] operation: Operation, #[case] expected: u128) -> Result<()> {
        assert_eq!(operation.apply(&small_sets()?), expected);
        Ok(())
    }

    #[test]
    fn filtered_key_count_uses_per_container_threshold() -> Result<()> {
        // Container i holds 10i..10i+10 and uses threshold 10i + 5, so keys
        // 10i+6 ..= 10i+9 pass: 4 per container.
        let population: Population<HashSet<u64>> =
            Population::build(7, 10, &ShuffledIntegers { seed: 3 })?;
        assert_eq!(Operation::FilteredKeyCount.apply(&population), 28);
        Ok(())
    }

    #[test]
    fn string_values_measure_length() -> Result<()> {
        let population: Population<SoaMap<u64, String>> =
            Population::build(2, 3, &PaddedStrings { value_size: 20 })?;
        // "value_{i}_{j}_" is 10 bytes for single digit indices.
        assert_eq!(Operation::ValueSum.apply(&population), 60);
        assert_eq!(Operation::MaxValue.apply(&population), 10);
        assert_eq!(
            Operation::FilteredValueCount { threshold: 9 }.apply(&population),
            6
        );
        assert_eq!(Operation::EvenCount.apply(&population), 6);
        Ok(())
    }

    #[test]
    fn empty_population() {
        let population: Population<HashMap<u64, u64>> = Population::empty(0);
        for operation in [
            Operation::SizeRead,
            Operation::KeySum,
            Operation::MaxValue,
            Operation::FilteredKeyCount,
        ] {
            assert_eq!(operation.apply(&population), 0);
        }
    }

    #[test]
    fn key_sum_is_repeatable_and_order_independent() -> Result<()> {
        let population: Population<AosMap<u64, String>> =
            Population::build(40, 25, &PaddedStrings { value_size: 64 })?;
        let expected = Operation::KeySum.apply(&population);
        assert_eq!(expected, (0..1_000_u128).sum::<u128>());
        for _ in 0..3 {
            assert_eq!(Operation::KeySum.apply(&population), expected);
        }

        let mut containers = population.into_containers();
        containers.shuffle(&mut StdRng::seed_from_u64(0x1234_abcd));
        let shuffled = Population::from_containers(containers, 25);
        assert_eq!(Operation::KeySum.apply(&shuffled), expected);
        Ok(())
    }
}
