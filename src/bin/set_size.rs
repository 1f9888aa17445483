//! Size reads over many empty sets.

use std::{collections::HashSet, io};

use container_bench::{MonotonicClock, config::SET_SIZE_PROBE, harness::probe};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    probe::<HashSet<String>, _, _>(
        &SET_SIZE_PROBE,
        &MonotonicClock::new(),
        &mut io::stdout().lock(),
    )?;
    Ok(())
}
