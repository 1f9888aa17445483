//! Cross-container iteration benchmarks.
//!
//! Most container benchmarks time a single large container. This crate times
//! the opposite workload: a large [`Population`] of small, independently
//! built containers, walked one after the other. In that regime the memory
//! layout of each container (where its keys, values and metadata live
//! relative to each other) dominates the cost of an access pattern.
//!
//! A benchmark variant is described by a [`Plan`], populated through an
//! [`EntryShape`], and timed operation by operation by a [`Runner`] against a
//! [`Clock`]:
//!
//! ```text
//! for each run:
//!     (re)build population            <- untimed
//!     for each catalogue step:
//!         for each iteration:
//!             t0 = clock.now()
//!             result = operation(population)
//!             t1 = clock.now()        -> sample(s)
//! summarise samples -> report table   -> sink(results)
//! ```
//!
//! The [`harness`] module ties these together and is what the binaries call.
//! Any type implementing [`Container`] can be measured; the standard
//! library's maps and sets are supported out of the box, together with the
//! two insertion-ordered layouts [`SoaMap`] and [`AosMap`].
//!
//! # Examples
//!
//! ```
//! use container_bench::{
//!     Operation, PaddedStrings, Population, Runner, Sampling, SoaMap, SteppingClock,
//! };
//!
//! let population: Population<SoaMap<u64, String>> =
//!     Population::build(4, 10, &PaddedStrings { value_size: 32 })?;
//! let clock = SteppingClock::new(5);
//! let measurement = Runner::new(&clock, 3, Sampling::PerIteration)
//!     .time(Operation::KeySum, &population)?;
//!
//! assert_eq!(measurement.result, (0..40).sum::<u128>());
//! assert_eq!(measurement.samples.as_slice(), [5, 5, 5]);
//! # Ok::<(), container_bench::Error>(())
//! ```

use thiserror::Error;

pub mod clock;
pub mod config;
pub mod container;
pub mod harness;
pub mod operation;
pub mod population;
pub mod report;
pub mod runner;
pub mod sink;
pub mod stats;

pub use clock::{Clock, ClockError, MonotonicClock, Nanos, ScriptedClock, SteppingClock};
pub use config::{ConfigError, Plan, ProbePlan, Rebuild, Sampling};
pub use container::{AosMap, Container, Measure, SoaMap};
pub use operation::{Operation, Step};
pub use population::{
    EntryShape, PaddedStrings, Population, SeededIntegers, SequentialIntegers, ShuffledIntegers,
    Slot,
};
pub use runner::{Measurement, Runner};
pub use sink::Sink;
pub use stats::{DurationSequence, StatsError, Summary, summarize};

/// Everything that can abort a benchmark variant.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The parameters were rejected before any timing.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A clock reading was unusable.
    #[error(transparent)]
    Clock(#[from] ClockError),
    /// Samples could not be accumulated.
    #[error(transparent)]
    Stats(#[from] StatsError),
    /// A report row could not be produced.
    #[error("cannot report `{label}`: {source}")]
    Report {
        /// Label of the offending row.
        label: String,
        /// Why its samples could not be summarised.
        #[source]
        source: StatsError,
    },
    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
