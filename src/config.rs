//! Benchmark parameters.
//!
//! Every variant is fully described by a [`Plan`] (or a [`ProbePlan`] for the
//! size probes) built from compile-time constants; there are no command-line
//! flags. The presets below are the ones the binaries run.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Parameters rejected before any container is built or any clock is read.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum ConfigError {
    /// Padded string payloads must be at least as long as their prefix
    /// allowance.
    #[error("value size must be at least {minimum} bytes, got {value_size}.")]
    PayloadTooSmall {
        /// Requested payload size.
        value_size: usize,
        /// Smallest accepted payload size.
        minimum: usize,
    },
    /// The keys `0..containers * entries` do not fit in a `u64`.
    #[error("{containers} containers of {entries} entries overflow the u64 key space.")]
    KeySpaceOverflow {
        /// Requested number of containers.
        containers: usize,
        /// Requested entries per container.
        entries: usize,
    },
    /// Seeded values must be drawn from a non-empty range.
    #[error("value bound must be non-zero.")]
    EmptyValueRange,
}

/// How the durations of the iterations within one run are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Sampling {
    /// One sample per run: the sum of that run's iteration durations. The
    /// min/max columns then show jitter across runs.
    PerRunSum,
    /// One sample per iteration. The min/max columns then show jitter across
    /// individual iterations.
    PerIteration,
}

/// When the population is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rebuild {
    /// Build once before the first run and reuse it for every run.
    Once,
    /// Build a fresh population at the start of every run and drop it at the
    /// end of that run.
    PerRun,
}

/// Parameters of one cross-container benchmark variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    /// First line of the printed header.
    pub title: &'static str,
    /// Plural noun for the containers, e.g. `"Maps"`.
    pub family: &'static str,
    /// Number of containers in the population.
    pub containers: usize,
    /// Entries added to each container.
    pub entries: usize,
    /// Timed repetitions of each operation within a run.
    pub iterations: usize,
    /// Independent repetitions of the whole measurement.
    pub runs: usize,
    /// Sample granularity.
    pub sampling: Sampling,
    /// Population lifecycle.
    pub rebuild: Rebuild,
}

impl Plan {
    /// Check the parameters that can be checked without knowing the entry
    /// shape.
    ///
    /// Zero iterations or zero runs are accepted: they produce empty duration
    /// sequences, which the report then rejects.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeySpaceOverflow`] if the population's keys do
    /// not fit in a `u64`.
    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        key_space(self.containers, self.entries).map(|_| ())
    }
}

/// Parameters of a size probe: many empty containers, one sample each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbePlan {
    /// Singular noun for the container, e.g. `"Map"`.
    pub noun: &'static str,
    /// Number of containers probed.
    pub containers: usize,
}

/// Size of the key space `containers × entries`.
///
/// # Errors
///
/// Returns [`ConfigError::KeySpaceOverflow`] if the product does not fit in a
/// `u64`.
#[inline]
pub fn key_space(containers: usize, entries: usize) -> Result<u64, ConfigError> {
    containers
        .checked_mul(entries)
        .and_then(|total| u64::try_from(total).ok())
        .ok_or(ConfigError::KeySpaceOverflow {
            containers,
            entries,
        })
}

// ////////////////////////////////////////////////////////////////////////////
// Presets
// ////////////////////////////////////////////////////////////////////////////

/// Bytes of each padded map value in [`MAP_ITERATION`].
pub const MAP_VALUE_SIZE: usize = 1_000;

/// Many small maps holding large string values.
pub const MAP_ITERATION: Plan = Plan {
    title: "Map Cross-Container Iteration Benchmark (String Values ~1KB each)",
    family: "Maps",
    containers: 5_000,
    entries: 100,
    iterations: 10,
    runs: 5,
    sampling: Sampling::PerRunSum,
    rebuild: Rebuild::PerRun,
};

/// Many small maps holding seeded integer values.
pub const MAP_INTEGER_ITERATION: Plan = Plan {
    title: "Map Cross-Container Iteration Benchmark (Seeded Integer Values)",
    family: "Maps",
    containers: 5_000,
    entries: 100,
    iterations: 10,
    runs: 5,
    sampling: Sampling::PerIteration,
    rebuild: Rebuild::Once,
};

/// Exclusive upper bound of the values in [`MAP_INTEGER_ITERATION`].
pub const MAP_VALUE_BOUND: u64 = 1 << 20;

/// Sets of integers inserted in shuffled order.
pub const SET_ITERATION: Plan = Plan {
    title: "Set Cross-Container Iteration Benchmark",
    family: "Sets",
    containers: 50,
    entries: 100,
    iterations: 10,
    runs: 5,
    sampling: Sampling::PerRunSum,
    rebuild: Rebuild::PerRun,
};

/// Seed for every seeded entry shape used by the binaries.
pub const SEED: u64 = 0x1234_abcd;

/// Size reads over many empty maps.
pub const MAP_SIZE_PROBE: ProbePlan = ProbePlan {
    noun: "Map",
    containers: 100_000,
};

/// Size reads over many empty sets.
pub const SET_SIZE_PROBE: ProbePlan = ProbePlan {
    noun: "Set",
    containers: 800_000,
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{ConfigError, MAP_INTEGER_ITERATION, MAP_ITERATION, Plan, SET_ITERATION, key_space};

    #[rstest]
    #[case(0, 0, 0)]
    #[case(3, 2, 6)]
    #[case(5_000, 100, 500_000)]
    fn key_space_fits(#[case] containers: usize, #[case] entries: usize, #[case] total: u64) {
        assert_eq!(key_space(containers, entries), Ok(total));
    }

    #[test]
    fn key_space_overflow() {
        assert_eq!(
            key_space(usize::MAX, 2),
            Err(ConfigError::KeySpaceOverflow {
                containers: usize::MAX,
                entries: 2
            })
        );
    }

    #[rstest]
    fn presets_are_valid(#[values(MAP_ITERATION, MAP_INTEGER_ITERATION, SET_ITERATION)] plan: Plan) {
        assert_eq!(plan.validate(), Ok(()));
    }

    #[test]
    fn zero_iterations_are_accepted() {
        let plan = Plan {
            iterations: 0,
            runs: 0,
            ..MAP_ITERATION
        };
        assert_eq!(plan.validate(), Ok(()));
    }

    #[test]
    fn messages() {
        assert_eq!(
            ConfigError::PayloadTooSmall {
                value_size: 4,
                minimum: 20
            }
            .to_string(),
            "value size must be at least 20 bytes, got 4."
        );
        assert_eq!(
            ConfigError::EmptyValueRange.to_string(),
            "value bound must be non-zero."
        );
    }
}
