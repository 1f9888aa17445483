//! Cross-container iteration over many small maps.
//!
//! Times the map catalogue over the struct-of-arrays, array-of-structs and
//! B-tree layouts holding padded string values, then the integer catalogue
//! over seeded integer values. Set `RUST_LOG` for progress on stderr.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use container_bench::{
    AosMap, MonotonicClock, PaddedStrings, SeededIntegers, SoaMap,
    config::{MAP_INTEGER_ITERATION, MAP_ITERATION, MAP_VALUE_BOUND, MAP_VALUE_SIZE, SEED},
    harness::execute,
    operation::{MAP_INTEGER_STEPS, MAP_STEPS},
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let clock = MonotonicClock::new();
    let mut out = io::stdout().lock();

    let strings = PaddedStrings {
        value_size: MAP_VALUE_SIZE,
    };
    execute::<SoaMap<u64, String>, _, _, _>(
        &MAP_ITERATION,
        MAP_STEPS,
        "SoaMap (struct of arrays)",
        &strings,
        &clock,
        &mut out,
    )?;
    writeln!(out)?;
    execute::<AosMap<u64, String>, _, _, _>(
        &MAP_ITERATION,
        MAP_STEPS,
        "AosMap (array of structs)",
        &strings,
        &clock,
        &mut out,
    )?;
    writeln!(out)?;
    execute::<BTreeMap<u64, String>, _, _, _>(
        &MAP_ITERATION,
        MAP_STEPS,
        "BTreeMap",
        &strings,
        &clock,
        &mut out,
    )?;

    let integers = SeededIntegers {
        seed: SEED,
        bound: MAP_VALUE_BOUND,
    };
    writeln!(out)?;
    execute::<SoaMap<u64, u64>, _, _, _>(
        &MAP_INTEGER_ITERATION,
        MAP_INTEGER_STEPS,
        "SoaMap (struct of arrays)",
        &integers,
        &clock,
        &mut out,
    )?;
    writeln!(out)?;
    execute::<AosMap<u64, u64>, _, _, _>(
        &MAP_INTEGER_ITERATION,
        MAP_INTEGER_STEPS,
        "AosMap (array of structs)",
        &integers,
        &clock,
        &mut out,
    )?;
    Ok(())
}
