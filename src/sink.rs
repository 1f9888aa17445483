//! Keeping timed results alive.
//!
//! A timed operation whose result is never read could be removed by the
//! optimizer, taking the measured work with it. Every result is therefore
//! folded into one scalar that goes through [`black_box`] and then guards a
//! print: the compiler can not prove the guard false, so it must keep the
//! computation that produced the results.

use std::{hint::black_box, io::Write};

/// Message printed if the guard ever fires.
pub const UNREACHABLE_MESSAGE: &str = "This should never print";

/// Consumes result accumulators.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sink;

impl Sink {
    /// Fold `results` together and print [`UNREACHABLE_MESSAGE`] to `out` if
    /// the combined value is `u128::MAX`.
    ///
    /// Returns whether the message was printed. Results are counts, sums and
    /// maxima of realistic populations, so their wrapping sum never reaches
    /// `u128::MAX` and this returns `false`.
    ///
    /// # Errors
    ///
    /// Propagates any failure to write to `out`.
    #[inline]
    pub fn observe<W: Write>(
        results: impl IntoIterator<Item = u128>,
        out: &mut W,
    ) -> std::io::Result<bool> {
        let combined = black_box(
            results
                .into_iter()
                .fold(0_u128, |acc, result| acc.wrapping_add(black_box(result))),
        );
        if combined == u128::MAX {
            writeln!(out, "{UNREACHABLE_MESSAGE}")?;
            return Ok(true);
        }
        Ok(false)
    }
}
