//! Cost of building populations, which the harness keeps outside its timing.

use container_bench::{AosMap, PaddedStrings, Population, SoaMap};
use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};

/// Number of containers in each population.
const SIZES: [usize; 3] = [10, 100, 1000];

/// Benchmarking population building
pub fn build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Population Build");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));
    let shape = PaddedStrings { value_size: 256 };

    for size in SIZES {
        group.bench_function(BenchmarkId::new("SoaMap", size), |b| {
            b.iter(|| {
                let population: Result<Population<SoaMap<u64, String>>, _> =
                    Population::build(black_box(size), 100, &shape);
                black_box(population)
            });
        });
        group.bench_function(BenchmarkId::new("AosMap", size), |b| {
            b.iter(|| {
                let population: Result<Population<AosMap<u64, String>>, _> =
                    Population::build(black_box(size), 100, &shape);
                black_box(population)
            });
        });
    }
}
