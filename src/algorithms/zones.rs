// ABOUTME: Heart-rate training zone generators
// ABOUTME: Implements %MaxHR, Karvonen (5/7/3-zone), and lactate-threshold models
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use crate::models::HrZone;
use crate::physiological_constants::zone_cut_points;
use serde::{Deserialize, Serialize};

/// Karvonen zone model selection
///
/// The Karvonen method anchors zone bounds on heart rate reserve
/// (`max_hr - resting_hr`) instead of raw max HR, which individualizes the
/// bands for athletes with low resting rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KarvonenModel {
    /// Classic five zones at 50-60-70-80-90-100% of reserve
    FiveZone,
    /// Seven zones at 50-55-65-75-82-89-94-100% of reserve
    SevenZone,
    /// Three-zone polarized model at 50-77-87-100% of reserve
    ThreeZonePolarized,
}

/// Heart-rate zone computation method selection
///
/// # Scientific References
///
/// - Karvonen, M.J., Kentala, E., & Mustala, O. (1957). "The effects of
///   training on heart rate." *Annales Medicinae Experimentalis et Biologiae
///   Fenniae*, 35(3), 307-315.
/// - Friel, J. (2009). *Total Heart Rate Training*. Ulysses Press
///   (lactate-threshold band multipliers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrZoneMethod {
    /// Five zones as straight percentages of max HR
    PercentMax {
        /// Maximum heart rate (bpm)
        max_hr: u32,
    },

    /// Heart-rate-reserve zones (Karvonen)
    Karvonen {
        /// Maximum heart rate (bpm)
        max_hr: u32,
        /// Resting heart rate (bpm), must be below max
        resting_hr: u32,
        /// Zone model to apply to the reserve
        model: KarvonenModel,
    },

    /// Seven bands as multiples of lactate threshold heart rate
    ///
    /// The bottom band is open below and the top band open above; the five
    /// middle bands are bounded on both sides. This shape is part of the
    /// model, not an artifact.
    LactateThreshold {
        /// Lactate threshold heart rate (bpm)
        lthr: u32,
    },
}

/// Five-zone display names, shared by the %MaxHR and Karvonen models
const FIVE_ZONE_NAMES: [&str; 5] = [
    "Zone 1 (Recovery)",
    "Zone 2 (Aerobic)",
    "Zone 3 (Tempo)",
    "Zone 4 (Threshold)",
    "Zone 5 (Anaerobic)",
];

const SEVEN_ZONE_NAMES: [&str; 7] = [
    "Zone 1 (Recovery)",
    "Zone 2 (Easy)",
    "Zone 3 (Aerobic)",
    "Zone 4 (Tempo)",
    "Zone 5 (Threshold)",
    "Zone 6 (VO2 Max)",
    "Zone 7 (Anaerobic)",
];

const THREE_ZONE_NAMES: [&str; 3] = ["Zone 1 (Easy)", "Zone 2 (Moderate)", "Zone 3 (Hard)"];

const LTHR_ZONE_NAMES: [&str; 7] = [
    "Zone 1 (Recovery)",
    "Zone 2 (Aerobic)",
    "Zone 3 (Tempo)",
    "Zone 4 (Threshold)",
    "Zone 5a (VO2 Intervals)",
    "Zone 5b (Anaerobic)",
    "Zone 5c (Neuromuscular)",
];

impl HrZoneMethod {
    /// Compute the heart-rate zones for this method
    ///
    /// Bounds are integer bpm: fractional values truncate, and each zone
    /// starts 1 bpm above the previous zone's upper bound so the bands never
    /// overlap.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for a zero max HR or LTHR, or when
    /// resting HR is not strictly below max HR.
    pub fn compute(&self) -> AppResult<Vec<HrZone>> {
        match self {
            Self::PercentMax { max_hr } => {
                if *max_hr == 0 {
                    return Err(AppError::invalid_input("Max HR must be positive"));
                }
                Ok(Self::banded_zones(
                    0.0,
                    f64::from(*max_hr),
                    &zone_cut_points::FIVE_ZONE,
                    &FIVE_ZONE_NAMES,
                ))
            }
            Self::Karvonen {
                max_hr,
                resting_hr,
                model,
            } => {
                if *max_hr == 0 {
                    return Err(AppError::invalid_input("Max HR must be positive"));
                }
                if resting_hr >= max_hr {
                    return Err(AppError::invalid_input(format!(
                        "Resting HR ({resting_hr}) must be below max HR ({max_hr})"
                    )));
                }
                let reserve = f64::from(max_hr - resting_hr);
                let (cut_points, names): (&[f64], &[&str]) = match model {
                    KarvonenModel::FiveZone => (&zone_cut_points::FIVE_ZONE, &FIVE_ZONE_NAMES),
                    KarvonenModel::SevenZone => (&zone_cut_points::SEVEN_ZONE, &SEVEN_ZONE_NAMES),
                    KarvonenModel::ThreeZonePolarized => {
                        (&zone_cut_points::THREE_ZONE, &THREE_ZONE_NAMES)
                    }
                };
                Ok(Self::banded_zones(
                    f64::from(*resting_hr),
                    reserve,
                    cut_points,
                    names,
                ))
            }
            Self::LactateThreshold { lthr } => {
                if *lthr == 0 {
                    return Err(AppError::invalid_input("LTHR must be positive"));
                }
                Ok(Self::lthr_zones(f64::from(*lthr)))
            }
        }
    }

    /// Closed bands over `base + scale x cut_point`
    fn banded_zones(base: f64, scale: f64, cut_points: &[f64], names: &[&str]) -> Vec<HrZone> {
        let mut zones = Vec::with_capacity(names.len());
        for (i, window) in cut_points.windows(2).enumerate() {
            let mut lower = scale.mul_add(window[0], base) as u32;
            if i > 0 {
                lower += 1;
            }
            let upper = scale.mul_add(window[1], base) as u32;
            zones.push(HrZone {
                name: names[i].to_owned(),
                lower_bpm: Some(lower),
                upper_bpm: Some(upper),
            });
        }
        zones
    }

    /// Seven LTHR bands: open bottom, five closed middles, open top
    fn lthr_zones(lthr: f64) -> Vec<HrZone> {
        let mut zones = Vec::with_capacity(LTHR_ZONE_NAMES.len());
        let bottom_ceiling = (lthr * zone_cut_points::LTHR_BANDS[0].0) as u32;
        zones.push(HrZone {
            name: LTHR_ZONE_NAMES[0].to_owned(),
            lower_bpm: None,
            upper_bpm: Some(bottom_ceiling),
        });
        for (i, (lo, hi)) in zone_cut_points::LTHR_BANDS.iter().enumerate() {
            zones.push(HrZone {
                name: LTHR_ZONE_NAMES[i + 1].to_owned(),
                lower_bpm: Some((lthr * lo) as u32),
                upper_bpm: Some((lthr * hi) as u32),
            });
        }
        let top_floor = (lthr * zone_cut_points::LTHR_BANDS[4].1) as u32;
        zones.push(HrZone {
            name: LTHR_ZONE_NAMES[6].to_owned(),
            lower_bpm: Some(top_floor),
            upper_bpm: None,
        });
        zones
    }

    /// Get method name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PercentMax { .. } => "percent_max",
            Self::Karvonen { .. } => "karvonen",
            Self::LactateThreshold { .. } => "lactate_threshold",
        }
    }
}
