//! Fixed-width text rendering of the collected samples.

use std::fmt::Write as _;

use log::error;

use crate::{Error, stats::DurationSequence};

/// Width of the rule separating the header from the rows.
const RULE_WIDTH: usize = 76;

/// Render one row per operation under a header and a full-width rule.
///
/// Each row shows the left-aligned label, the right-aligned average and the
/// `[min - max]` range, all in nanoseconds.
///
/// # Errors
///
/// Returns [`Error::Report`] naming the first operation whose sequence can
/// not be summarised, e.g. because it is empty.
#[inline]
pub fn render<'a, I>(rows: I) -> Result<String, Error>
where
    I: IntoIterator<Item = (&'a str, &'a DurationSequence)>,
{
    let mut text = format!(
        "{:<20} {:>12}      {:>12}   {:>12}\n",
        "Operation", "Average", "Min", "Max"
    );
    text.push_str(&"─".repeat(RULE_WIDTH));
    text.push('\n');

    for (label, sequence) in rows {
        let summary = sequence.summarize().map_err(|source| {
            error!("no statistics for `{label}`: {source}");
            Error::Report {
                label: label.to_owned(),
                source,
            }
        })?;
        // Writing into a `String` can not fail.
        let _ = writeln!(
            text,
            "{label:<20} {:>12} ns  [{:>12} - {:>12}]",
            summary.average, summary.min, summary.max
        );
    }
    Ok(text)
}

/// Render the best, average and worst size read of a probe.
///
/// # Errors
///
/// Returns [`Error::Report`] if the probe recorded no sample.
#[inline]
pub fn render_probe(noun: &str, sequence: &DurationSequence) -> Result<String, Error> {
    let summary = sequence.summarize().map_err(|source| Error::Report {
        label: format!("size of {noun}"),
        source,
    })?;
    Ok(format!(
        "Best time to get size of {noun}: {} ns\n\
         Average time to get size of {noun}: {} ns\n\
         Worst time to get size of {noun}: {} ns\n",
        summary.min, summary.average, summary.max
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{render, render_probe};
    use crate::{Error, stats::DurationSequence, stats::StatsError};

    #[test]
    fn table() -> anyhow::Result<()> {
        let keys = DurationSequence::from(vec![10, 20, 30]);
        let size = DurationSequence::from(vec![10, 21]);
        let text = render([("keys (all maps)", &keys), ("size (all maps)", &size)])?;
        insta::assert_snapshot!(text, @r"
        Operation                 Average               Min            Max
        ────────────────────────────────────────────────────────────────────────────
        keys (all maps)                20 ns  [          10 -           30]
        size (all maps)                15 ns  [          10 -           21]
        ");
        Ok(())
    }

    #[test]
    fn long_labels_are_not_truncated() -> anyhow::Result<()> {
        let sequence = DurationSequence::from(vec![1]);
        let text = render([("a label longer than twenty", &sequence)])?;
        assert!(text.contains("a label longer than twenty            1 ns  ["));
        Ok(())
    }

    #[test]
    fn empty_sequence_names_the_operation() {
        let keys = DurationSequence::from(vec![1]);
        let empty = DurationSequence::new();
        let rendered = render([("keys", &keys), ("values", &empty)]);
        let Err(Error::Report { label, source }) = rendered else {
            panic!("expected a report error, got {rendered:?}");
        };
        assert_eq!(label, "values");
        assert_eq!(source, StatsError::EmptySequence);
    }

    #[test]
    fn probe() -> anyhow::Result<()> {
        let text = render_probe("Map", &DurationSequence::from(vec![40, 10, 25]))?;
        assert_eq!(
            text,
            "Best time to get size of Map: 10 ns\n\
             Average time to get size of Map: 25 ns\n\
             Worst time to get size of Map: 40 ns\n"
        );
        assert!(render_probe("Set", &DurationSequence::new()).is_err());
        Ok(())
    }
}
