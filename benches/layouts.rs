//! Cross-container scans compared across map layouts.

use std::collections::{BTreeMap, HashMap};

use container_bench::{AosMap, Container, Operation, PaddedStrings, Population, SoaMap};
use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};

/// Number of containers in each population.
const SIZES: [usize; 4] = [10, 100, 1000, 10_000];

/// Entries per container.
const ENTRIES: usize = 100;

/// Bytes per padded value.
const VALUE_SIZE: usize = 256;

fn populate<C: Container<Entry = (u64, String)>>(containers: usize) -> Population<C> {
    let shape = PaddedStrings {
        value_size: VALUE_SIZE,
    };
    Population::build(containers, ENTRIES, &shape).expect("benchmark parameters are valid")
}

fn compare(c: &mut Criterion, name: &str, operation: Operation) {
    let mut group = c.benchmark_group(name);
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        let soa: Population<SoaMap<u64, String>> = populate(size);
        group.bench_function(BenchmarkId::new("SoaMap", size), |b| {
            b.iter(|| black_box(operation.apply(black_box(&soa))));
        });
        drop(soa);

        let aos: Population<AosMap<u64, String>> = populate(size);
        group.bench_function(BenchmarkId::new("AosMap", size), |b| {
            b.iter(|| black_box(operation.apply(black_box(&aos))));
        });
        drop(aos);

        let hashed: Population<HashMap<u64, String>> = populate(size);
        group.bench_function(BenchmarkId::new("HashMap", size), |b| {
            b.iter(|| black_box(operation.apply(black_box(&hashed))));
        });
        drop(hashed);

        let ordered: Population<BTreeMap<u64, String>> = populate(size);
        group.bench_function(BenchmarkId::new("BTreeMap", size), |b| {
            b.iter(|| black_box(operation.apply(black_box(&ordered))));
        });
    }
}

/// Benchmarking key iteration
pub fn key_sum(c: &mut Criterion) {
    compare(c, "Key Sum", Operation::KeySum);
}

/// Benchmarking value iteration
pub fn value_sum(c: &mut Criterion) {
    compare(c, "Value Sum", Operation::ValueSum);
}

/// Benchmarking metadata reads
pub fn size_read(c: &mut Criterion) {
    compare(c, "Size Read", Operation::SizeRead);
}
