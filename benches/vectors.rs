//! Criterion benchmarks for the stimulus pipeline.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use spikegen::config::VectorConfig;
use spikegen::rom::{format_rom_entry, RomStyle};
use spikegen::sampler::{render_bits, Sampler};

/// Benchmark row sampling and rendering with varying population sizes.
fn bench_sample_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_row");

    for units in [64, 256, 1024].iter() {
        group.throughput(Throughput::Elements(*units as u64));

        group.bench_with_input(BenchmarkId::new("render", units), units, |b, &units| {
            let cfg = VectorConfig::with_size(units, 1).with_seed(42);
            let mut sampler = Sampler::new(cfg);

            b.iter(|| black_box(render_bits(&sampler.sample_row())));
        });
    }

    group.finish();
}

/// Benchmark the per-line ROM transform in both output styles.
fn bench_rom_entry(c: &mut Criterion) {
    let mut group = c.benchmark_group("rom_entry");

    let bits = "01".repeat(32);

    group.bench_function("preload_64", |b| {
        b.iter(|| {
            black_box(format_rom_entry(
                RomStyle::Preload,
                "spike_rom",
                black_box(512),
                64,
                &bits,
            ))
        });
    });

    group.bench_function("case_branch_64", |b| {
        b.iter(|| {
            black_box(format_rom_entry(
                RomStyle::CaseBranch,
                "spike_pattern",
                black_box(512),
                64,
                &bits,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sample_row, bench_rom_entry);

criterion_main!(benches);
