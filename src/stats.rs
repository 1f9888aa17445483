//! Summary statistics over duration samples.
//!
//! All arithmetic is exact integer arithmetic on [`Nanos`]: sums are checked
//! and the average truncates toward zero. An empty sequence has no
//! statistics and is reported as an error rather than as zero.

use thiserror::Error;

use crate::clock::Nanos;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors raised while reducing a duration sequence.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum StatsError {
    /// There are no samples to summarise.
    #[error("cannot summarise an empty duration sequence.")]
    EmptySequence,
    /// The sum of the samples does not fit in a `u128`.
    #[error("duration sum overflowed.")]
    SumOverflow,
}

// ////////////////////////////////////////////////////////////////////////////
// Duration Sequence
// ////////////////////////////////////////////////////////////////////////////

/// Samples of a single operation, in the order they were taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationSequence {
    samples: Vec<Nanos>,
}

impl DurationSequence {
    /// Create an empty sequence.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample.
    #[inline]
    pub fn push(&mut self, sample: Nanos) {
        self.samples.push(sample);
    }

    /// Append every sample of `other`, keeping their order.
    #[inline]
    pub fn append(&mut self, other: &mut Self) {
        self.samples.append(&mut other.samples);
    }

    /// The samples in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Nanos] {
        &self.samples
    }

    /// Number of samples.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no sample has been recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Summarise the samples, see [`summarize`].
    ///
    /// # Errors
    ///
    /// See [`summarize`].
    #[inline]
    pub fn summarize(&self) -> Result<Summary, StatsError> {
        summarize(&self.samples)
    }
}

impl From<Vec<Nanos>> for DurationSequence {
    #[inline]
    fn from(samples: Vec<Nanos>) -> Self {
        Self { samples }
    }
}

impl FromIterator<Nanos> for DurationSequence {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Nanos>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Summary
// ////////////////////////////////////////////////////////////////////////////

/// Average, minimum and maximum of a non-empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Truncated arithmetic mean.
    pub average: Nanos,
    /// Smallest sample.
    pub min: Nanos,
    /// Largest sample.
    pub max: Nanos,
}

/// Checked sum of `samples`. The sum of no samples is zero.
///
/// # Errors
///
/// Returns [`StatsError::SumOverflow`] if the sum does not fit in a `u128`.
#[inline]
pub fn total(samples: &[Nanos]) -> Result<Nanos, StatsError> {
    samples
        .iter()
        .try_fold(0, |acc: Nanos, &sample| acc.checked_add(sample))
        .ok_or(StatsError::SumOverflow)
}

/// Compute the average, minimum and maximum of `samples`.
///
/// # Errors
///
/// Returns [`StatsError::EmptySequence`] if `samples` is empty, and
/// [`StatsError::SumOverflow`] if their sum does not fit in a `u128`.
///
/// # Examples
///
/// ```
/// use container_bench::{Summary, summarize};
///
/// assert_eq!(
///     summarize(&[10, 21]),
///     Ok(Summary { average: 15, min: 10, max: 21 })
/// );
/// ```
#[inline]
pub fn summarize(samples: &[Nanos]) -> Result<Summary, StatsError> {
    let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
        return Err(StatsError::EmptySequence);
    };
    let count = Nanos::try_from(samples.len()).map_err(|_err| StatsError::SumOverflow)?;
    let average = total(samples)?
        .checked_div(count)
        .ok_or(StatsError::EmptySequence)?;
    Ok(Summary { average, min, max })
}
