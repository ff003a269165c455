// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification churn.
//!
//! Measures the performance of:
//! - Publishing bursts of notifications into a store
//! - Driving a busy center through expiry and exit with a virtual clock

use criterion::{criterion_group, criterion_main, Criterion};
use notify_center::clock::ManualClock;
use notify_center::ui::notifications::{
    NotificationCenter, Overrides, Publish, PublishAt, Store, Timings,
};
use std::hint::black_box;
use std::time::Instant;

/// Benchmark publishing a burst of notifications and expiring them.
fn bench_store_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    group.bench_function("publish_and_expire_100", |b| {
        b.iter(|| {
            let mut store = Store::new(Timings::default());
            let now = Instant::now();
            let mut publisher = PublishAt::new(&mut store, now);
            for i in 0..100 {
                let _ = publisher.notify_info(format!("notice {i}"), Overrides::default());
            }
            let expired = store.remove_expired(now + Timings::default().default_duration);
            black_box(expired);
        });
    });

    group.finish();
}

/// Benchmark full lifecycle ticks on a center with mixed kinds.
fn bench_center_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    group.bench_function("lifecycle_50_ticks", |b| {
        b.iter(|| {
            let clock = ManualClock::new();
            let mut center = NotificationCenter::with_clock(Timings::default(), clock.clone());
            for i in 0..20 {
                let _ = center.notify_success(format!("ok {i}"), Overrides::default());
                let _ = center.notify_error(format!("failed {i}"), Overrides::default());
            }
            for _ in 0..50 {
                clock.advance_ms(200);
                black_box(center.tick());
            }
            black_box(center.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_store_burst, bench_center_lifecycle);
criterion_main!(benches);
