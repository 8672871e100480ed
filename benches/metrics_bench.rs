// ABOUTME: Criterion benchmarks for the metrics engine calculators
// ABOUTME: Measures BMI, energy needs, strength classification, and batch report throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Criterion benchmarks for the metrics engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack_metrics::config::MetricsConfig;
use fittrack_metrics::intelligence::MetricsCalculator;
use fittrack_metrics::models::{AnthropometricProfile, Gender, LiftAttempt};

/// Deterministic spread of profiles for batch benchmarks
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_profiles(count: usize) -> Vec<AnthropometricProfile> {
    (0..count)
        .map(|index| {
            let height_cm = 150.0 + ((index * 7) % 50) as f64;
            let weight_kg = 45.0 + ((index * 13) % 70) as f64;
            let year = 1950 + (index % 55) as i32;
            let gender = if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            };
            let dob = NaiveDate::from_ymd_opt(year, 1 + (index % 12) as u32, 1).unwrap_or_default();
            AnthropometricProfile::new(height_cm, weight_kg, dob, gender)
        })
        .collect()
}

fn bench_single_calculations(c: &mut Criterion) {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
    let profile = generate_profiles(1).remove(0);

    let mut group = c.benchmark_group("single");

    group.bench_function("compute_bmi", |b| {
        b.iter(|| calculator.compute_bmi(black_box(175.0), black_box(70.0)));
    });

    group.bench_function("compute_bmr_and_tdee", |b| {
        b.iter(|| calculator.compute_bmr_and_tdee(black_box(&profile), black_box(today)));
    });

    group.bench_function("compute_strength_level", |b| {
        b.iter(|| {
            calculator.compute_strength_level(
                black_box(70.0),
                black_box(175.0),
                black_box(56.0),
                black_box(Gender::Male),
            )
        });
    });

    group.bench_function("assess_lift_attempt", |b| {
        let attempt = LiftAttempt::new(100.0, 8);
        b.iter(|| calculator.assess_lift_attempt(black_box(&profile), black_box(&attempt)));
    });

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_batch_reports(c: &mut Criterion) {
    let config = MetricsConfig::default();
    let calculator = MetricsCalculator::new(&config);
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();

    let mut group = c.benchmark_group("batch_reports");

    for count in [10, 100, 1000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("body_metrics_report", count),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    profiles
                        .iter()
                        .filter_map(|profile| {
                            calculator.body_metrics_report(black_box(profile), today).ok()
                        })
                        .count()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_calculations, bench_batch_reports);
criterion_main!(benches);
