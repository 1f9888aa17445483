//! Size reads over many empty maps.

use std::{collections::HashMap, io};

use container_bench::{MonotonicClock, config::MAP_SIZE_PROBE, harness::probe};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    probe::<HashMap<u64, String>, _, _>(
        &MAP_SIZE_PROBE,
        &MonotonicClock::new(),
        &mut io::stdout().lock(),
    )?;
    Ok(())
}
