//! Cross-container iteration over many small integer sets.

use std::{
    collections::{BTreeSet, HashSet},
    io::{self, Write},
};

use container_bench::{
    MonotonicClock, ShuffledIntegers,
    config::{SEED, SET_ITERATION},
    harness::execute,
    operation::SET_STEPS,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let clock = MonotonicClock::new();
    let mut out = io::stdout().lock();
    let shape = ShuffledIntegers { seed: SEED };

    execute::<HashSet<u64>, _, _, _>(
        &SET_ITERATION,
        SET_STEPS,
        "HashSet",
        &shape,
        &clock,
        &mut out,
    )?;
    writeln!(out)?;
    execute::<BTreeSet<u64>, _, _, _>(
        &SET_ITERATION,
        SET_STEPS,
        "BTreeSet",
        &shape,
        &clock,
        &mut out,
    )?;
    Ok(())
}
