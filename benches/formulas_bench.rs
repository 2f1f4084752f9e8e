// ABOUTME: Criterion micro-benchmarks for the hot formula paths
// ABOUTME: VDOT scoring, Daniels prediction, zone generation, ACWR, and running power
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use runmetrics::{
    acwr_from_weekly_loads, calculate_vdot, estimate_power, HrZoneMethod, KarvonenModel,
    PerformanceSample, PowerModelInput, RacePredictionMethod, Terrain,
};
use std::hint::black_box;

fn bench_vdot(c: &mut Criterion) {
    let sample = PerformanceSample {
        distance_km: 5.0,
        time_seconds: 1200.0,
    };
    c.bench_function("vdot_from_5k", |b| {
        b.iter(|| calculate_vdot(black_box(&sample)));
    });
}

fn bench_daniels_prediction(c: &mut Criterion) {
    let sample = PerformanceSample {
        distance_km: 5.0,
        time_seconds: 1200.0,
    };
    c.bench_function("daniels_marathon_prediction", |b| {
        b.iter(|| RacePredictionMethod::Daniels.predict(black_box(&sample), black_box(42.195)));
    });
}

fn bench_zone_generation(c: &mut Criterion) {
    let method = HrZoneMethod::Karvonen {
        max_hr: 185,
        resting_hr: 55,
        model: KarvonenModel::SevenZone,
    };
    c.bench_function("karvonen_seven_zone", |b| {
        b.iter(|| black_box(&method).compute());
    });
}

fn bench_acwr(c: &mut Criterion) {
    let weeks = [1200.0, 1350.0, 1100.0, 1500.0];
    c.bench_function("acwr_from_weekly_loads", |b| {
        b.iter(|| acwr_from_weekly_loads(black_box(&weeks)));
    });
}

fn bench_running_power(c: &mut Criterion) {
    let input = PowerModelInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        speed_kph: 14.0,
        incline_percent: 3.0,
        wind_kph: 8.0,
        terrain: Terrain::TrailPackedDirt,
        altitude_m: 800.0,
        temperature_c: 18.0,
    };
    c.bench_function("running_power_breakdown", |b| {
        b.iter(|| estimate_power(black_box(&input)));
    });
}

criterion_group!(
    benches,
    bench_vdot,
    bench_daniels_prediction,
    bench_zone_generation,
    bench_acwr,
    bench_running_power
);
criterion_main!(benches);
