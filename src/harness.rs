//! Driving a whole benchmark variant.
//!
//! [`execute`] runs a catalogue of operations over a population for every run
//! of a [`Plan`], then prints the table and hands the last run's results to
//! the [`Sink`]. [`probe`] does the same for the size probes. Both write
//! everything to the supplied writer, so a run against a deterministic clock
//! produces reproducible text.

use std::io::Write;

use log::{debug, info};

use crate::{
    Error,
    clock::Clock,
    config::{Plan, ProbePlan, Rebuild},
    container::Container,
    operation::Step,
    population::{EntryShape, Population},
    report,
    runner::{Measurement, Runner, probe_sizes},
    sink::Sink,
    stats::DurationSequence,
};

/// Everything collected by [`execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// One sequence per catalogue step, labelled, in catalogue order.
    pub rows: Vec<(&'static str, DurationSequence)>,
    /// Result of each step in the last run.
    pub results: Vec<u128>,
    /// Whether the sink's guard fired.
    pub guard_fired: bool,
}

/// Run `steps` over a population of `C` for every run of `plan`.
///
/// Parameters are validated before anything is written or built. The
/// population is built outside every timing bracket, either once up front or
/// at the start of each run depending on [`Plan::rebuild`].
///
/// # Errors
///
/// Returns [`Error::Config`] for rejected parameters, [`Error::Clock`] or
/// [`Error::Stats`] if a measurement fails, [`Error::Report`] if a step has
/// no sample (zero runs or zero iterations), and [`Error::Io`] if writing to
/// `out` fails.
#[inline]
pub fn execute<C, S, K, W>(
    plan: &Plan,
    steps: &[Step],
    layout: &str,
    shape: &S,
    clock: &K,
    out: &mut W,
) -> Result<Outcome, Error>
where
    C: Container,
    S: EntryShape<C::Entry>,
    K: Clock,
    W: Write,
{
    plan.validate()?;
    shape.validate()?;

    info!(
        "{} [{layout}]: {} x {} entries, {} iterations, {} runs, {:?}, rebuild {:?}",
        plan.title,
        plan.containers,
        plan.entries,
        plan.iterations,
        plan.runs,
        plan.sampling,
        plan.rebuild
    );
    writeln!(out, "{}", plan.title)?;
    writeln!(
        out,
        "{}: {} x {} entries | Iterations: {} | Runs: {}",
        plan.family, plan.containers, plan.entries, plan.iterations, plan.runs
    )?;
    writeln!(out, "Layout: {layout}")?;
    writeln!(out, "Running {} runs...", plan.runs)?;

    let shared: Option<Population<C>> = match plan.rebuild {
        Rebuild::Once => Some(Population::build(plan.containers, plan.entries, shape)?),
        Rebuild::PerRun => None,
    };

    let runner = Runner::new(clock, plan.iterations, plan.sampling);
    let mut sequences = vec![DurationSequence::new(); steps.len()];
    let mut results = vec![0_u128; steps.len()];

    for run in 1..=plan.runs {
        writeln!(out, "  Run {run}/{}", plan.runs)?;
        debug!("run {run}/{}", plan.runs);

        let fresh;
        let population = if let Some(population) = &shared {
            population
        } else {
            fresh = Population::<C>::build(plan.containers, plan.entries, shape)?;
            &fresh
        };

        for ((step, sequence), result) in steps.iter().zip(&mut sequences).zip(&mut results) {
            let mut measurement = runner.time(step.operation, population)?;
            sequence.append(&mut measurement.samples);
            *result = measurement.result;
        }
    }

    let rows: Vec<_> = steps
        .iter()
        .map(|step| step.label)
        .zip(sequences)
        .collect();
    let table = report::render(rows.iter().map(|(label, sequence)| (*label, sequence)))?;
    writeln!(out)?;
    out.write_all(table.as_bytes())?;

    let guard_fired = Sink::observe(results.iter().copied(), out)?;
    Ok(Outcome {
        rows,
        results,
        guard_fired,
    })
}

/// Time a size read of each of `plan.containers` empty containers.
///
/// # Errors
///
/// Returns [`Error::Clock`] if a measurement fails, [`Error::Report`] if
/// there are no containers, and [`Error::Io`] if writing to `out` fails.
#[inline]
pub fn probe<C, K, W>(plan: &ProbePlan, clock: &K, out: &mut W) -> Result<Measurement, Error>
where
    C: Container,
    K: Clock,
    W: Write,
{
    info!("size probe over {} empty {}s", plan.containers, plan.noun);
    let population: Population<C> = Population::empty(plan.containers);
    let measurement = probe_sizes(clock, &population)?;
    out.write_all(report::render_probe(plan.noun, &measurement.samples)?.as_bytes())?;
    Sink::observe([measurement.result], out)?;
    Ok(measurement)
}
