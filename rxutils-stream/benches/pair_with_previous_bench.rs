// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use rxutils_core::Observable;
use rxutils_stream::PairWithPreviousExt;
use std::hint::black_box;

pub fn bench_pair_with_previous(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_with_previous");

    let sizes = [100usize, 1000, 10000];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        let id = BenchmarkId::from_parameter(format!("m{size}"));
        group.bench_with_input(id, &size, |bencher, &size| {
            let source = Observable::from_iter((0..size as u64).collect::<Vec<_>>());
            let pairs = source.pair_with_previous();

            bencher.iter(|| {
                pairs.subscribe_next(|pair| {
                    black_box(pair);
                })
            });
        });
    }

    group.finish();
}
