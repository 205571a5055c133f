//! Scoring benchmarks
//!
//! Scoring runs on every profile query, so it should stay well under the
//! cost of a single provider read:
//! - Trust tier classification
//! - Feature eligibility
//! - Lending assessment
//! - Marketplace assessment

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use graphite_common::{Address, TrustProfile};
use graphite_scoring::{assess_lending, assess_marketplace, classify_trust, eligible_features};
use rust_decimal::Decimal;

fn profiles() -> Vec<TrustProfile> {
    (0..100u64)
        .map(|i| {
            TrustProfile::from_raw(
                Address::from_bytes([i as u8; 20]),
                i % 7 != 0,
                i * 10,
                (i % 4) as u8,
                0,
            )
        })
        .collect()
}

// ============ CLASSIFICATION BENCHMARKS ============

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("classify_trust", |b| {
        b.iter(|| {
            for reputation in (0..1_000u64).step_by(10) {
                for kyc in 0..=3u8 {
                    black_box(classify_trust(black_box(reputation), black_box(kyc)));
                }
            }
        });
    });

    group.bench_function("eligible_features", |b| {
        b.iter(|| black_box(eligible_features(black_box(800), black_box(2), black_box(true))));
    });

    group.finish();
}

// ============ ASSESSMENT BENCHMARKS ============

fn bench_assessments(c: &mut Criterion) {
    let mut group = c.benchmark_group("assessment");
    group.measurement_time(Duration::from_secs(5));
    let profiles = profiles();

    for amount in [1_000u64, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("lending", amount), amount, |b, &amount| {
            let amount = Decimal::from(amount);
            b.iter(|| {
                for profile in black_box(&profiles) {
                    black_box(assess_lending(profile, amount));
                }
            });
        });
    }

    group.bench_function("marketplace", |b| {
        b.iter(|| {
            for profile in black_box(&profiles) {
                black_box(assess_marketplace(profile));
            }
        });
    });

    group.finish();
}

criterion_group!(classification, bench_classification);
criterion_group!(assessments, bench_assessments);

criterion_main!(classification, assessments);
