// ABOUTME: Integration tests for the VO2max estimation protocols and max HR formulas
// ABOUTME: Checks published reference values, sex adjustments, and rejection paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runmetrics::{ErrorCode, MaxHrFormula, Sex, Vo2maxAlgorithm};

#[test]
fn test_cooper_reference_male() {
    let vo2max = Vo2maxAlgorithm::CooperTest {
        distance_meters: 2400.0,
        sex: Sex::Male,
    }
    .estimate_vo2max()
    .unwrap();
    let expected = 42.367_538_564_721_66;
    assert!(
        ((vo2max - expected) / expected).abs() < 1e-9,
        "Cooper 2400 m male should be {expected}, got {vo2max}"
    );
}

#[test]
fn test_cooper_female_is_85_percent_of_male() {
    let male = Vo2maxAlgorithm::CooperTest {
        distance_meters: 2800.0,
        sex: Sex::Male,
    }
    .estimate_vo2max()
    .unwrap();
    let female = Vo2maxAlgorithm::CooperTest {
        distance_meters: 2800.0,
        sex: Sex::Female,
    }
    .estimate_vo2max()
    .unwrap();
    assert!((female - male * 0.85).abs() < 1e-9);
}

#[test]
fn test_cooper_rejects_distance_below_floor() {
    for distance in [504.9, 400.0] {
        let err = Vo2maxAlgorithm::CooperTest {
            distance_meters: distance,
            sex: Sex::Male,
        }
        .estimate_vo2max()
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_bruce_protocol_reference_values() {
    // 12 minutes on the treadmill
    let male = Vo2maxAlgorithm::BruceProtocol {
        time_minutes: 12.0,
        sex: Sex::Male,
    }
    .estimate_vo2max()
    .unwrap();
    assert!(
        (male - 42.46).abs() < 1e-9,
        "Bruce male at 12 min should be 42.46, got {male}"
    );

    let female = Vo2maxAlgorithm::BruceProtocol {
        time_minutes: 12.0,
        sex: Sex::Female,
    }
    .estimate_vo2max()
    .unwrap();
    assert!(
        (female - 48.66).abs() < 1e-9,
        "Bruce female at 12 min should be 48.66, got {female}"
    );
}

#[test]
fn test_run_15_mile_reference() {
    let vo2max = Vo2maxAlgorithm::RunTest15Mile {
        time_minutes: 12.5,
        weight_kg: 70.0,
        sex: Sex::Male,
    }
    .estimate_vo2max()
    .unwrap();
    assert!(
        (vo2max - 45.644).abs() < 1e-9,
        "1.5-mile reference should be 45.644, got {vo2max}"
    );
}

#[test]
fn test_rockport_reference() {
    let vo2max = Vo2maxAlgorithm::RockportWalk {
        weight_lb: 154.0,
        age: 35,
        sex: Sex::Male,
        time_minutes: 15.0,
        heart_rate: 120.0,
    }
    .estimate_vo2max()
    .unwrap();
    assert!(
        (vo2max - 46.0024).abs() < 1e-6,
        "Rockport reference should be 46.0024, got {vo2max}"
    );
}

#[test]
fn test_astrand_reference_relative_and_absolute() {
    let algorithm = Vo2maxAlgorithm::AstrandRhyming {
        workload_watts: 150.0,
        steady_state_hr: 150.0,
        age: 40,
        weight_kg: 70.0,
        sex: Sex::Male,
    };

    let relative = algorithm.estimate_vo2max().unwrap();
    let expected = 66.882_857_142_857_13;
    assert!(
        ((relative - expected) / expected).abs() < 1e-9,
        "Astrand relative should be {expected}, got {relative}"
    );

    let absolute = algorithm.estimate_absolute_l_min().unwrap();
    assert!(
        (absolute - 4.6818).abs() < 1e-9,
        "Astrand absolute should be 4.6818 L/min, got {absolute}"
    );
}

#[test]
fn test_astrand_low_hr_applies_workload_offset() {
    let low_hr = Vo2maxAlgorithm::AstrandRhyming {
        workload_watts: 100.0,
        steady_state_hr: 120.0,
        age: 30,
        weight_kg: 70.0,
        sex: Sex::Female,
    }
    .estimate_vo2max()
    .unwrap();
    let above = Vo2maxAlgorithm::AstrandRhyming {
        workload_watts: 100.0,
        steady_state_hr: 121.0,
        age: 30,
        weight_kg: 70.0,
        sex: Sex::Female,
    }
    .estimate_vo2max()
    .unwrap();
    // The +300 kgm/min offset applies at or below 120 bpm only
    assert!(low_hr > above);
}

#[test]
fn test_absolute_value_rejected_for_other_protocols() {
    let err = Vo2maxAlgorithm::CooperTest {
        distance_meters: 2400.0,
        sex: Sex::Male,
    }
    .estimate_absolute_l_min()
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_invalid_inputs_rejected_before_formulas() {
    let cases: Vec<Vo2maxAlgorithm> = vec![
        Vo2maxAlgorithm::BruceProtocol {
            time_minutes: 0.0,
            sex: Sex::Male,
        },
        Vo2maxAlgorithm::RunTest15Mile {
            time_minutes: 12.0,
            weight_kg: -70.0,
            sex: Sex::Female,
        },
        Vo2maxAlgorithm::RockportWalk {
            weight_lb: 154.0,
            age: 0,
            sex: Sex::Male,
            time_minutes: 15.0,
            heart_rate: 120.0,
        },
        Vo2maxAlgorithm::AstrandRhyming {
            workload_watts: 150.0,
            steady_state_hr: 0.0,
            age: 40,
            weight_kg: 70.0,
            sex: Sex::Male,
        },
    ];
    for case in cases {
        let err = case.estimate_vo2max().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "case: {}", case.name());
    }
}

#[test]
fn test_max_hr_formulas() {
    assert!((MaxHrFormula::Fox.estimate(25).unwrap() - 195.0).abs() < 1e-12);
    assert!((MaxHrFormula::Tanaka.estimate(50).unwrap() - 173.0).abs() < 1e-12);
    assert!((MaxHrFormula::Gellish.estimate(50).unwrap() - 172.0).abs() < 1e-12);
    assert_eq!("tanaka".parse::<MaxHrFormula>().unwrap(), MaxHrFormula::Tanaka);
}

#[test]
fn test_algorithm_selection_serializes_snake_case() {
    let algorithm = Vo2maxAlgorithm::CooperTest {
        distance_meters: 2400.0,
        sex: Sex::Female,
    };
    let json = serde_json::to_string(&algorithm).unwrap();
    assert!(json.contains("cooper_test"), "got {json}");
    assert!(json.contains("\"sex\":\"female\""), "got {json}");
    let back: Vo2maxAlgorithm = serde_json::from_str(&json).unwrap();
    assert_eq!(back, algorithm);
}
