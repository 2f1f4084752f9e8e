// ABOUTME: Recovery scoring from HRV, resting heart rate, and subjective wellness
// ABOUTME: Closed-form percentage scores with status bands and lifestyle adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recovery Scoring
//!
//! Three complementary recovery scores, each reduced to a percentage and a
//! status band:
//!
//! - **HRV**: morning RMSSD (or ln RMSSD) against an age-, sex-, and
//!   fitness-adjusted reference value
//! - **Resting heart rate**: elevation over the athlete's baseline, adjusted
//!   for sleep quality and life stress
//! - **Subjective (TQR)**: total quality recovery from five 1-5 wellness
//!   ratings, adjusted for recent training load and motivation
//!
//! # Scientific References
//!
//! - Plews, D.J., et al. (2013). "Training adaptation and heart rate
//!   variability in elite endurance athletes." *Sports Medicine*, 43(9), 773-781.
//! - Kentta, G., & Hassmen, P. (1998). "Overtraining and recovery: a
//!   conceptual model." *Sports Medicine*, 26(1), 1-16.

use crate::errors::{AppError, AppResult};
use crate::models::Sex;
use crate::physiological_constants::recovery;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fitness level shifting the HRV reference value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// Little structured training history
    Beginner,
    /// Regular recreational training
    Recreational,
    /// Consistent structured training
    Trained,
    /// Competitive, high training volume
    Elite,
}

impl FitnessLevel {
    /// Shift applied to the HRV reference baseline (ms)
    #[must_use]
    pub const fn hrv_adjustment(self) -> f64 {
        match self {
            Self::Beginner => -10.0,
            Self::Recreational => 0.0,
            Self::Trained => 10.0,
            Self::Elite => 20.0,
        }
    }
}

/// Morning HRV measurement, in either raw or log-transformed form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrvMeasure {
    /// Root mean square of successive differences (ms)
    Rmssd(f64),
    /// Natural log of RMSSD, as many HRV apps report
    LnRmssd(f64),
}

/// HRV recovery status band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrvRecoveryStatus {
    /// Below 80% of reference
    Low,
    /// 80% to below 90%
    BelowAverage,
    /// 90% to below 110%
    Normal,
    /// 110% to below 130%
    AboveAverage,
    /// 130% and above
    VeryHigh,
}

impl HrvRecoveryStatus {
    fn from_percentage(percentage: f64) -> Self {
        if percentage < 80.0 {
            Self::Low
        } else if percentage < 90.0 {
            Self::BelowAverage
        } else if percentage < 110.0 {
            Self::Normal
        } else if percentage < 130.0 {
            Self::AboveAverage
        } else {
            Self::VeryHigh
        }
    }
}

impl fmt::Display for HrvRecoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low (Significant Fatigue)"),
            Self::BelowAverage => write!(f, "Below Average (Moderate Fatigue)"),
            Self::Normal => write!(f, "Normal (Recovered)"),
            Self::AboveAverage => write!(f, "Above Average (Well Recovered)"),
            Self::VeryHigh => {
                write!(f, "Very High (Potential Parasympathetic Overtraining)")
            }
        }
    }
}

/// HRV recovery score against the athlete's reference value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HrvRecovery {
    /// Age-, sex-, and fitness-adjusted RMSSD reference (ms)
    pub reference_rmssd: f64,
    /// Measurement as a percentage of the reference
    pub percentage: f64,
    /// Status band for the percentage
    pub status: HrvRecoveryStatus,
}

/// Score a morning HRV measurement against a personalized reference
///
/// The reference is `65 - 0.2 x age` ms for males and `70 - 0.2 x age` for
/// females, shifted by fitness level. An `LnRmssd` measurement is compared
/// against the log of the reference, as the source nomogram does.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for a non-positive measurement or zero
/// age, and `AppError::ValueOutOfRange` when the adjusted reference is not
/// usable (at or below zero, or at or below 1 ms for the log form).
pub fn hrv_recovery(
    measure: HrvMeasure,
    age: u8,
    sex: Sex,
    fitness: FitnessLevel,
) -> AppResult<HrvRecovery> {
    let value = match measure {
        HrvMeasure::Rmssd(v) | HrvMeasure::LnRmssd(v) => v,
    };
    if value <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "HRV measurement must be positive, got {value:.2}"
        )));
    }
    if age == 0 {
        return Err(AppError::invalid_input("Age must be positive"));
    }

    let base = match sex {
        Sex::Male => recovery::HRV_MALE_BASE,
        Sex::Female => recovery::HRV_FEMALE_BASE,
    };
    let reference = recovery::HRV_AGE_DECAY_PER_YEAR.mul_add(-f64::from(age), base)
        + fitness.hrv_adjustment();
    if reference <= 0.0 {
        return Err(AppError::out_of_range(format!(
            "HRV reference value is non-positive ({reference:.1} ms) for these inputs"
        )));
    }

    let percentage = match measure {
        HrvMeasure::Rmssd(v) => v / reference * 100.0,
        HrvMeasure::LnRmssd(v) => {
            let reference_ln = reference.ln();
            if reference_ln <= 0.0 {
                return Err(AppError::out_of_range(format!(
                    "HRV reference value ({reference:.1} ms) is too low for the log scale"
                )));
            }
            v / reference_ln * 100.0
        }
    };

    Ok(HrvRecovery {
        reference_rmssd: reference,
        percentage,
        status: HrvRecoveryStatus::from_percentage(percentage),
    })
}

/// Sleep quality rating adjusting the resting-HR recovery score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    /// Very poor night
    VeryPoor,
    /// Poor night
    Poor,
    /// Average night
    Fair,
    /// Good night
    Good,
    /// Very good night
    VeryGood,
}

impl SleepQuality {
    /// Percentage-point adjustment to the recovery score
    #[must_use]
    pub const fn adjustment(self) -> f64 {
        match self {
            Self::VeryPoor => -15.0,
            Self::Poor => -10.0,
            Self::Fair => 0.0,
            Self::Good => 5.0,
            Self::VeryGood => 10.0,
        }
    }
}

/// Life stress rating adjusting the resting-HR recovery score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    /// Very relaxed
    VeryLow,
    /// Relaxed
    Low,
    /// Typical
    Moderate,
    /// Stressed
    High,
    /// Very stressed
    VeryHigh,
}

impl StressLevel {
    /// Percentage-point adjustment to the recovery score
    #[must_use]
    pub const fn adjustment(self) -> f64 {
        match self {
            Self::VeryLow => 10.0,
            Self::Low => 5.0,
            Self::Moderate => 0.0,
            Self::High => -10.0,
            Self::VeryHigh => -15.0,
        }
    }
}

/// Resting-HR recovery status band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RhrRecoveryStatus {
    /// Below 40%
    VeryPoor,
    /// 40% to below 60%
    Poor,
    /// 60% to below 80%
    Moderate,
    /// 80% and above
    Good,
}

impl RhrRecoveryStatus {
    fn from_percentage(percentage: f64) -> Self {
        if percentage < 40.0 {
            Self::VeryPoor
        } else if percentage < 60.0 {
            Self::Poor
        } else if percentage < 80.0 {
            Self::Moderate
        } else {
            Self::Good
        }
    }
}

impl fmt::Display for RhrRecoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VeryPoor => write!(f, "Very Poor (Significant Fatigue)"),
            Self::Poor => write!(f, "Poor (Moderate Fatigue)"),
            Self::Moderate => write!(f, "Moderate (Some Fatigue)"),
            Self::Good => write!(f, "Good (Well Recovered)"),
        }
    }
}

/// Resting-HR recovery score with its adjustment trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhrRecovery {
    /// Elevation over the baseline (bpm, negative when below baseline)
    pub elevation_bpm: i64,
    /// Score from the elevation alone, capped at 110%
    pub raw_percentage: f64,
    /// Score after sleep and stress adjustments, clamped to 0-100%
    pub adjusted_percentage: f64,
    /// Status band for the adjusted score
    pub status: RhrRecoveryStatus,
}

/// Score today's resting heart rate against the athlete's baseline
///
/// Each bpm of elevation over the baseline costs five percentage points from
/// a 100% starting score; sleep and stress then shift the result, which is
/// clamped to 0-100%.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if either heart rate is zero.
pub fn resting_hr_recovery(
    today_rhr: u32,
    baseline_rhr: u32,
    sleep: SleepQuality,
    stress: StressLevel,
) -> AppResult<RhrRecovery> {
    if today_rhr == 0 || baseline_rhr == 0 {
        return Err(AppError::invalid_input(format!(
            "Resting heart rates must be positive, got {today_rhr} and {baseline_rhr} bpm"
        )));
    }

    let elevation_bpm = i64::from(today_rhr) - i64::from(baseline_rhr);
    let raw_percentage = recovery::RHR_PCT_PER_BPM
        .mul_add(-(elevation_bpm as f64), 100.0)
        .clamp(0.0, recovery::RHR_RAW_CEILING);
    let adjusted_percentage =
        (raw_percentage + sleep.adjustment() + stress.adjustment()).clamp(0.0, 100.0);

    Ok(RhrRecovery {
        elevation_bpm,
        raw_percentage,
        adjusted_percentage,
        status: RhrRecoveryStatus::from_percentage(adjusted_percentage),
    })
}

/// Recent training load rating adjusting the TQR score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecentTrainingLoad {
    /// Very light recent training
    VeryLight,
    /// Light recent training
    Light,
    /// Typical recent training
    Moderate,
    /// Heavy recent training
    Heavy,
    /// Very heavy recent training
    VeryHeavy,
}

impl RecentTrainingLoad {
    /// Percentage-point adjustment to the TQR score
    #[must_use]
    pub const fn adjustment(self) -> f64 {
        match self {
            Self::VeryLight => 5.0,
            Self::Light => 2.5,
            Self::Moderate => 0.0,
            Self::Heavy => -5.0,
            Self::VeryHeavy => -10.0,
        }
    }
}

/// Motivation to train, a central nervous system readiness indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motivation {
    /// No desire to train
    VeryLow,
    /// Low desire to train
    Low,
    /// Neutral
    Moderate,
    /// Keen to train
    High,
    /// Very keen to train
    VeryHigh,
}

impl Motivation {
    /// Percentage-point adjustment to the TQR score
    #[must_use]
    pub const fn adjustment(self) -> f64 {
        match self {
            Self::VeryLow => -10.0,
            Self::Low => -5.0,
            Self::Moderate => 0.0,
            Self::High => 2.5,
            Self::VeryHigh => 5.0,
        }
    }
}

/// Five subjective wellness ratings, each on a 1-5 scale (5 = best)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessRatings {
    /// Sleep quality
    pub sleep: u8,
    /// Muscle soreness (5 = none)
    pub soreness: u8,
    /// Fatigue level (5 = fresh)
    pub fatigue: u8,
    /// Mood state
    pub mood: u8,
    /// Stress level (5 = very relaxed)
    pub stress: u8,
}

impl WellnessRatings {
    /// Validate every rating is on the 1-5 scale
    ///
    /// # Errors
    ///
    /// Returns `AppError::ValueOutOfRange` for any rating outside 1-5.
    pub fn validate(&self) -> AppResult<()> {
        let components = [
            ("sleep", self.sleep),
            ("soreness", self.soreness),
            ("fatigue", self.fatigue),
            ("mood", self.mood),
            ("stress", self.stress),
        ];
        for (name, rating) in components {
            if !(1..=5).contains(&rating) {
                return Err(AppError::out_of_range(format!(
                    "Wellness rating '{name}' must be between 1 and 5, got {rating}"
                )));
            }
        }
        Ok(())
    }

    /// Sum of the five ratings (5 to 25 points)
    #[must_use]
    pub const fn total_points(&self) -> u8 {
        self.sleep + self.soreness + self.fatigue + self.mood + self.stress
    }
}

/// TQR recovery status band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TqrStatus {
    /// Below 40%
    Poor,
    /// 40% to below 60%
    Low,
    /// 60% to below 80%
    Moderate,
    /// 80% and above
    High,
}

impl TqrStatus {
    fn from_percentage(percentage: f64) -> Self {
        if percentage < 40.0 {
            Self::Poor
        } else if percentage < 60.0 {
            Self::Low
        } else if percentage < 80.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

impl fmt::Display for TqrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poor => write!(f, "Poor (Not Recovered)"),
            Self::Low => write!(f, "Low (Partially Recovered)"),
            Self::Moderate => write!(f, "Moderate (Adequately Recovered)"),
            Self::High => write!(f, "High (Well Recovered)"),
        }
    }
}

/// Total quality recovery score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TqrScore {
    /// Raw points out of 25
    pub base_points: u8,
    /// Raw points as a percentage
    pub base_percentage: f64,
    /// Score after training-load and motivation adjustments, clamped to 0-100%
    pub adjusted_percentage: f64,
    /// Status band for the adjusted score
    pub status: TqrStatus,
}

/// Total quality recovery from subjective wellness ratings
///
/// The five ratings sum to a 25-point base converted to a percentage, then
/// recent training load and motivation shift the result, clamped to 0-100%.
///
/// # Errors
///
/// Returns `AppError::ValueOutOfRange` if any rating is outside the 1-5 scale.
pub fn tqr_score(
    ratings: &WellnessRatings,
    recent_training: RecentTrainingLoad,
    motivation: Motivation,
) -> AppResult<TqrScore> {
    ratings.validate()?;

    let base_points = ratings.total_points();
    let base_percentage = f64::from(base_points) / recovery::TQR_MAX_POINTS * 100.0;
    let adjusted_percentage = (base_percentage
        + recent_training.adjustment()
        + motivation.adjustment())
    .clamp(0.0, 100.0);

    Ok(TqrScore {
        base_points,
        base_percentage,
        adjusted_percentage,
        status: TqrStatus::from_percentage(adjusted_percentage),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrv_reference_shifts_with_fitness() {
        // Trained male at 30: (65 - 6) + 10 = 69 ms
        let result = hrv_recovery(
            HrvMeasure::Rmssd(60.0),
            30,
            Sex::Male,
            FitnessLevel::Trained,
        )
        .unwrap();
        assert!((result.reference_rmssd - 69.0).abs() < 1e-12);
        assert!((result.percentage - 60.0 / 69.0 * 100.0).abs() < 1e-9);
        assert_eq!(result.status, HrvRecoveryStatus::BelowAverage);
    }

    #[test]
    fn test_rhr_elevation_costs_five_points_per_bpm() {
        let result =
            resting_hr_recovery(58, 52, SleepQuality::Fair, StressLevel::Moderate).unwrap();
        assert_eq!(result.elevation_bpm, 6);
        assert!((result.raw_percentage - 70.0).abs() < 1e-12);
        assert!((result.adjusted_percentage - 70.0).abs() < 1e-12);
        assert_eq!(result.status, RhrRecoveryStatus::Moderate);
    }

    #[test]
    fn test_tqr_rejects_off_scale_rating() {
        let ratings = WellnessRatings {
            sleep: 4,
            soreness: 6,
            fatigue: 3,
            mood: 4,
            stress: 3,
        };
        assert!(tqr_score(&ratings, RecentTrainingLoad::Moderate, Motivation::Moderate).is_err());
    }
}
