// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};

use silt::{apply, create, DeltaOptions};
use silt_test_utils::{random_bytes, with_point_edits};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench delta
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

const SIZES: [usize; 3] = [4 * 1024, 64 * 1024, 1024 * 1024];

fn inputs(size: usize) -> (Vec<u8>, Vec<u8>) {
    let source = random_bytes(size as u64, size);
    let target = with_point_edits(&source, size as u64 ^ 1, size / 100);
    (source, target)
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    configure_group(&mut group);

    let options = DeltaOptions::default();

    for size in SIZES {
        let (source, target) = inputs(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| create(black_box(&source), black_box(&target), &options).unwrap())
        });
    }

    group.finish();
}

fn bench_create_compressed(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_compressed");
    configure_group(&mut group);

    let options = DeltaOptions {
        compressed: true,
        ..DeltaOptions::default()
    };

    for size in SIZES {
        let (source, target) = inputs(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| create(black_box(&source), black_box(&target), &options).unwrap())
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    configure_group(&mut group);

    let options = DeltaOptions::default();

    for size in SIZES {
        let (source, target) = inputs(size);
        let delta = create(&source, &target, &options).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| apply(black_box(&source), black_box(&delta), &options).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create, bench_create_compressed, bench_apply);
criterion_main!(benches);
