// ABOUTME: Integration tests for the heart-rate zone generators
// ABOUTME: Checks band boundaries, model shapes, and invalid-input rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runmetrics::{HrZone, HrZoneMethod, KarvonenModel};

fn bounds(zones: &[HrZone]) -> Vec<(Option<u32>, Option<u32>)> {
    zones.iter().map(|z| (z.lower_bpm, z.upper_bpm)).collect()
}

#[test]
fn test_percent_max_five_zones() {
    let zones = HrZoneMethod::PercentMax { max_hr: 190 }.compute().unwrap();
    assert_eq!(
        bounds(&zones),
        vec![
            (Some(95), Some(114)),
            (Some(115), Some(133)),
            (Some(134), Some(152)),
            (Some(153), Some(171)),
            (Some(172), Some(190)),
        ]
    );
    let names: Vec<&str> = zones.iter().map(|z| z.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Zone 1 (Recovery)",
            "Zone 2 (Aerobic)",
            "Zone 3 (Tempo)",
            "Zone 4 (Threshold)",
            "Zone 5 (Anaerobic)",
        ]
    );
}

#[test]
fn test_karvonen_five_zone_reference() {
    let zones = HrZoneMethod::Karvonen {
        max_hr: 180,
        resting_hr: 60,
        model: KarvonenModel::FiveZone,
    }
    .compute()
    .unwrap();
    assert_eq!(
        bounds(&zones),
        vec![
            (Some(120), Some(132)),
            (Some(133), Some(144)),
            (Some(145), Some(156)),
            (Some(157), Some(168)),
            (Some(169), Some(180)),
        ]
    );
}

#[test]
fn test_karvonen_models_zone_counts_and_names() {
    let base = |model| HrZoneMethod::Karvonen {
        max_hr: 185,
        resting_hr: 55,
        model,
    };

    let five = base(KarvonenModel::FiveZone).compute().unwrap();
    assert_eq!(five.len(), 5);
    assert_eq!(five[0].name, "Zone 1 (Recovery)");
    assert_eq!(five[4].name, "Zone 5 (Anaerobic)");

    let seven = base(KarvonenModel::SevenZone).compute().unwrap();
    assert_eq!(seven.len(), 7);
    assert_eq!(seven[6].name, "Zone 7 (Anaerobic)");

    let three = base(KarvonenModel::ThreeZonePolarized).compute().unwrap();
    assert_eq!(three.len(), 3);
    assert_eq!(three[1].name, "Zone 2 (Moderate)");
}

#[test]
fn test_all_closed_models_start_at_half_intensity_and_end_at_max() {
    for model in [
        KarvonenModel::FiveZone,
        KarvonenModel::SevenZone,
        KarvonenModel::ThreeZonePolarized,
    ] {
        let zones = HrZoneMethod::Karvonen {
            max_hr: 200,
            resting_hr: 50,
            model,
        }
        .compute()
        .unwrap();
        // 50% of a 150 bpm reserve above resting
        assert_eq!(zones.first().unwrap().lower_bpm, Some(125));
        assert_eq!(zones.last().unwrap().upper_bpm, Some(200));
    }
}

#[test]
fn test_lactate_threshold_band_shape() {
    let zones = HrZoneMethod::LactateThreshold { lthr: 165 }.compute().unwrap();
    assert_eq!(zones.len(), 7);

    // Open bottom and top, closed middle bands
    assert_eq!(bounds(&zones)[0], (None, Some(140)));
    assert_eq!(bounds(&zones)[1], (Some(140), Some(146)));
    assert_eq!(bounds(&zones)[6], (Some(174), None));
    assert_eq!(zones[0].name, "Zone 1 (Recovery)");
    assert_eq!(zones[3].name, "Zone 4 (Threshold)");
    assert_eq!(zones[4].name, "Zone 5a (VO2 Intervals)");
    assert_eq!(zones[5].name, "Zone 5b (Anaerobic)");
    assert_eq!(zones[6].name, "Zone 5c (Neuromuscular)");

    // Open bands render with comparison signs
    assert_eq!(zones[0].to_string(), "Zone 1 (Recovery): < 140 bpm");
    assert_eq!(zones[6].to_string(), "Zone 5c (Neuromuscular): > 174 bpm");
}

#[test]
fn test_zones_are_monotonically_increasing() {
    let zones = HrZoneMethod::Karvonen {
        max_hr: 192,
        resting_hr: 48,
        model: KarvonenModel::SevenZone,
    }
    .compute()
    .unwrap();
    for pair in zones.windows(2) {
        let upper = pair[0].upper_bpm.unwrap();
        let next_lower = pair[1].lower_bpm.unwrap();
        assert!(
            next_lower > upper,
            "zone bounds must not overlap: {upper} then {next_lower}"
        );
    }
}

#[test]
fn test_invalid_inputs_rejected() {
    assert!(HrZoneMethod::PercentMax { max_hr: 0 }.compute().is_err());
    assert!(HrZoneMethod::LactateThreshold { lthr: 0 }.compute().is_err());
    assert!(HrZoneMethod::Karvonen {
        max_hr: 170,
        resting_hr: 175,
        model: KarvonenModel::FiveZone,
    }
    .compute()
    .is_err());
}
