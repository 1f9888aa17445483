//! Timing catalogue operations.
//!
//! Every execution of an operation is bracketed by exactly one clock reading
//! before and one after. Nothing else happens inside a bracket apart from
//! handing the result to [`black_box`], so population building, logging and
//! bookkeeping never contribute to a sample.

use std::hint::black_box;

use log::trace;

use crate::{
    Error,
    clock::{Clock, Nanos, elapsed},
    config::Sampling,
    container::{Container, Measure},
    operation::Operation,
    population::Population,
    stats::{DurationSequence, StatsError},
};

/// Samples and result of timing one operation.
///
/// Each call to [`Runner::time`] returns its own measurement; nothing is
/// carried over between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// The recorded samples.
    pub samples: DurationSequence,
    /// Result of the last timed execution, or zero if nothing was executed.
    pub result: u128,
}

/// Times operations against a clock.
#[derive(Debug)]
pub struct Runner<'c, K> {
    clock: &'c K,
    iterations: usize,
    sampling: Sampling,
}

impl<'c, K: Clock> Runner<'c, K> {
    /// Create a runner executing each operation `iterations` times per call.
    #[inline]
    #[must_use]
    pub fn new(clock: &'c K, iterations: usize, sampling: Sampling) -> Self {
        Self {
            clock,
            iterations,
            sampling,
        }
    }

    /// Time `operation` over `population` for one run.
    ///
    /// With [`Sampling::PerRunSum`] the result holds a single sample, the sum
    /// of every iteration's duration; with [`Sampling::PerIteration`] it holds
    /// one sample per iteration. Zero iterations produce no sample at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clock`] if the clock goes backwards within a bracket,
    /// and [`Error::Stats`] if the per-run sum overflows.
    #[inline]
    pub fn time<C: Container>(
        &self,
        operation: Operation,
        population: &Population<C>,
    ) -> Result<Measurement, Error> {
        let mut samples = DurationSequence::new();
        let mut sum: Nanos = 0;
        let mut result = 0;

        for _ in 0..self.iterations {
            let start = self.clock.now();
            result = black_box(operation.apply(black_box(population)));
            let stop = self.clock.now();

            let sample = elapsed(start, stop)?;
            trace!("{operation:?}: {sample} ns");
            match self.sampling {
                Sampling::PerRunSum => {
                    sum = sum.checked_add(sample).ok_or(StatsError::SumOverflow)?;
                }
                Sampling::PerIteration => samples.push(sample),
            }
        }

        if self.sampling == Sampling::PerRunSum && self.iterations > 0 {
            samples.push(sum);
        }
        Ok(Measurement { samples, result })
    }
}

/// Time a single size read of every container, one sample per container.
///
/// There is no iteration or run nesting: the sequence holds exactly one
/// sample per container, in population order. The result is the sum of the
/// sizes read.
///
/// # Errors
///
/// Returns [`Error::Clock`] if the clock goes backwards within a bracket.
#[inline]
pub fn probe_sizes<K, C>(clock: &K, population: &Population<C>) -> Result<Measurement, Error>
where
    K: Clock,
    C: Container,
{
    let mut samples = DurationSequence::new();
    let mut result: u128 = 0;
    for container in population.containers() {
        let start = clock.now();
        let size = black_box(black_box(container).size());
        let stop = clock.now();

        samples.push(elapsed(start, stop)?);
        result = result.wrapping_add(size.magnitude());
    }
    Ok(Measurement { samples, result })
}
