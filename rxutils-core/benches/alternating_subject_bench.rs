// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use rxutils_core::AlternatingSubject;
use std::hint::black_box;
use std::sync::{Arc, Barrier};

pub fn bench_alternating_subject(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternating_subject");

    // Uncontended grab/release cycle
    group.throughput(Throughput::Elements(2));
    group.bench_function("grab_release", |bencher| {
        let toggle = AlternatingSubject::new();
        let _first = toggle.first().subscribe_next(|()| black_box(()));
        let _second = toggle.second().subscribe_next(|()| black_box(()));

        bencher.iter(|| {
            toggle.trigger_first();
            toggle.trigger_second();
        });
    });

    // Contended triggers from several threads
    let thread_counts = [2usize, 4, 8];
    let rounds = 1_000usize;
    for &threads in &thread_counts {
        group.throughput(Throughput::Elements((threads * rounds) as u64));
        let id = BenchmarkId::from_parameter(format!("contended_threads_{threads}"));
        group.bench_with_input(id, &threads, |bencher, &threads| {
            bencher.iter(|| {
                let toggle = AlternatingSubject::new();
                let barrier = Arc::new(Barrier::new(threads));
                let handles: Vec<_> = (0..threads)
                    .map(|index| {
                        let toggle = toggle.clone();
                        let barrier = barrier.clone();
                        std::thread::spawn(move || {
                            barrier.wait();
                            for round in 0..rounds {
                                if (index + round) % 2 == 0 {
                                    toggle.trigger_first();
                                } else {
                                    toggle.trigger_second();
                                }
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
                black_box(toggle.is_first_active());
            });
        });
    }

    group.finish();
}
