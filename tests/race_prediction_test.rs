// ABOUTME: Integration tests for VDOT scoring, training paces, and race-time prediction
// ABOUTME: Pins the published reference outputs for the 5K-in-20:00 athlete
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runmetrics::algorithms::vdot::{calculate_vdot, percent_vo2max, training_paces, velocity_for_vo2};
use runmetrics::{ErrorCode, PerformanceSample, RacePredictionMethod};

fn five_k_in_20() -> PerformanceSample {
    PerformanceSample::new(5.0, 1200.0).unwrap()
}

#[test]
fn test_vdot_reference() {
    let vdot = calculate_vdot(&five_k_in_20()).unwrap();
    let expected = 49.806_233_428_066_335;
    assert!(
        ((vdot - expected) / expected).abs() < 1e-9,
        "VDOT for 5K in 20:00 should be {expected}, got {vdot}"
    );
}

#[test]
fn test_daniels_marathon_reference() {
    let predicted = RacePredictionMethod::Daniels
        .predict(&five_k_in_20(), 42.195)
        .unwrap();
    let expected = 11_477.189_555_760_488;
    assert!(
        ((predicted - expected) / expected).abs() < 1e-6,
        "Daniels marathon prediction should be {expected}, got {predicted}"
    );
}

#[test]
fn test_daniels_10k_reference() {
    let predicted = RacePredictionMethod::Daniels
        .predict(&five_k_in_20(), 10.0)
        .unwrap();
    let expected = 2487.856_508_943_542_4;
    assert!(
        ((predicted - expected) / expected).abs() < 1e-6,
        "Daniels 10K prediction should be {expected}, got {predicted}"
    );
}

#[test]
fn test_riegel_and_cameron_10k_references() {
    let riegel = RacePredictionMethod::Riegel
        .predict(&five_k_in_20(), 10.0)
        .unwrap();
    assert!(
        ((riegel - 2501.917_826_018_691_4) / riegel).abs() < 1e-9,
        "Riegel 10K mismatch: {riegel}"
    );

    let cameron = RacePredictionMethod::Cameron
        .predict(&five_k_in_20(), 10.0)
        .unwrap();
    assert!(
        ((cameron - 2519.320_040_695_361_5) / cameron).abs() < 1e-9,
        "Cameron 10K mismatch: {cameron}"
    );
}

#[test]
fn test_cameron_long_base_uses_lower_exponent() {
    // Half marathon in 1:30:00 to marathon: base > 10 km, exponent 1.05
    let half = PerformanceSample::new(21.0975, 5400.0).unwrap();
    let predicted = RacePredictionMethod::Cameron.predict(&half, 42.195).unwrap();
    let expected = 11_180.861_177_486_879;
    assert!(
        ((predicted - expected) / expected).abs() < 1e-9,
        "Cameron HM->marathon should be {expected}, got {predicted}"
    );
}

#[test]
fn test_riegel_at_base_distance_returns_base_time() {
    // (target/base)^1.06 is exactly 1 when target == base
    let base = five_k_in_20();
    let predicted = RacePredictionMethod::Riegel.predict(&base, 5.0).unwrap();
    assert!(
        (predicted - base.time_seconds).abs() < f64::EPSILON,
        "predicting the base distance must return the base time, got {predicted}"
    );
}

#[test]
fn test_vdot_increases_with_velocity_at_fixed_duration() {
    // Same 20-minute effort over longer distances means faster running
    let mut previous = 0.0;
    for distance_km in [4.8, 5.0, 5.2, 5.4] {
        let sample = PerformanceSample::new(distance_km, 1200.0).unwrap();
        let vdot = calculate_vdot(&sample).unwrap();
        assert!(
            vdot > previous,
            "VDOT must rise with velocity: {vdot} after {previous} at {distance_km} km"
        );
        previous = vdot;
    }
}

#[test]
fn test_predictions_scale_superlinearly_with_distance() {
    let base = five_k_in_20();
    for method in [
        RacePredictionMethod::Riegel,
        RacePredictionMethod::Cameron,
        RacePredictionMethod::Daniels,
    ] {
        let ten_k = method.predict(&base, 10.0).unwrap();
        assert!(
            ten_k > 2.0 * base.time_seconds,
            "{}: doubling distance must more than double time, got {ten_k}",
            method.name()
        );
    }
}

#[test]
fn test_training_paces_reference() {
    let vdot = calculate_vdot(&five_k_in_20()).unwrap();
    let paces = training_paces(vdot).unwrap();
    let expected = [
        (paces.easy_lower_s_per_km, 492.685),
        (paces.easy_upper_s_per_km, 480.043),
        (paces.marathon_s_per_km, 415.256),
        (paces.threshold_s_per_km, 374.179),
        (paces.interval_s_per_km, 336.870),
        (paces.repetition_s_per_km, 302.759),
    ];
    for (actual, reference) in expected {
        assert!(
            (actual - reference).abs() < 0.01,
            "pace mismatch: expected {reference}, got {actual}"
        );
    }
}

#[test]
fn test_percent_vo2max_near_one_around_11_minutes() {
    // The %VO2max curve crosses 100% near race durations of ~11 minutes
    let pct = percent_vo2max(11.0 * 60.0);
    assert!((pct - 1.0).abs() < 0.02, "got {pct}");
}

#[test]
fn test_velocity_inversion_rejects_non_positive_vo2() {
    let err = velocity_for_vo2(0.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_method_parsing_from_labels() {
    assert_eq!(
        "Riegel".parse::<RacePredictionMethod>().unwrap(),
        RacePredictionMethod::Riegel
    );
    assert_eq!(
        "vdot".parse::<RacePredictionMethod>().unwrap(),
        RacePredictionMethod::Daniels
    );
    assert!("magic".parse::<RacePredictionMethod>().is_err());
}
