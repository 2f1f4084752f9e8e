// ABOUTME: Training-load quantification: session RPE, weekly monotony/strain, ACWR
// ABOUTME: Windowed acute:chronic workload ratio with injury-risk categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Training Load Analysis
//!
//! Session load is quantified by the session-RPE method (duration x perceived
//! exertion). Weekly structure is summarized by Foster's monotony and strain,
//! and medium-term ramp rate by the acute:chronic workload ratio (ACWR).
//!
//! # Scientific References
//!
//! - Foster, C. (1998). "Monitoring training in athletes with reference to
//!   overtraining syndrome." *Medicine & Science in Sports & Exercise*, 30(7), 1164-1168.
//! - Hulin, B.T., Gabbett, T.J., et al. (2016). "The acute:chronic workload
//!   ratio predicts injury." *British Journal of Sports Medicine*, 50(4), 231-236.

use crate::errors::{AppError, AppResult};
use crate::models::LoadSample;
use crate::physiological_constants::acwr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Days per week in the weekly summaries
pub const DAYS_PER_WEEK: usize = 7;

/// Session-RPE load: duration multiplied by perceived exertion
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for a non-positive duration and
/// `AppError::ValueOutOfRange` for an RPE outside the 1-10 scale.
pub fn session_rpe_load(duration_minutes: f64, rpe: f64) -> AppResult<f64> {
    if duration_minutes <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Duration must be positive, got {duration_minutes:.1} min"
        )));
    }
    if !(1.0..=10.0).contains(&rpe) {
        return Err(AppError::out_of_range(format!(
            "RPE must be between 1 and 10, got {rpe:.1}"
        )));
    }
    Ok(duration_minutes * rpe)
}

/// Weekly training-load category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadCategory {
    /// Weekly total below 1000
    Low,
    /// Weekly total 1000 to below 2000
    Moderate,
    /// Weekly total 2000 to below 3000
    High,
    /// Weekly total 3000 and above
    VeryHigh,
}

impl fmt::Display for LoadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// Foster monotony assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonotonyAssessment {
    /// Below 1.0: good day-to-day variability
    Good,
    /// 1.0 to below 1.5: moderate variability
    Moderate,
    /// 1.5 and above: monotonous loading, elevated overtraining risk
    High,
}

impl fmt::Display for MonotonyAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "Good variability"),
            Self::Moderate => write!(f, "Moderate variability"),
            Self::High => write!(f, "High monotony"),
        }
    }
}

/// Foster strain assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrainAssessment {
    /// Below 2000
    Low,
    /// 2000 to below 3500
    Moderate,
    /// 3500 to below 5000
    High,
    /// 5000 and above
    VeryHigh,
}

impl fmt::Display for StrainAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low strain"),
            Self::Moderate => write!(f, "Moderate strain"),
            Self::High => write!(f, "High strain"),
            Self::VeryHigh => write!(f, "Very high strain"),
        }
    }
}

/// One week of daily loads summarized by Foster's monotony and strain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLoad {
    /// Sum of the seven daily loads
    pub total: f64,
    /// Mean daily load (rest days count as zero, n is always 7)
    pub mean: f64,
    /// Population standard deviation of the daily loads
    pub stdev: f64,
    /// `mean / stdev`; 0 when every day carries the same load
    pub monotony: f64,
    /// `total x monotony`
    pub strain: f64,
}

impl WeeklyLoad {
    /// Summarize seven daily loads (Monday through Sunday, zeros for rest days)
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if any daily load is negative.
    pub fn from_daily_loads(daily_loads: &[f64; DAYS_PER_WEEK]) -> AppResult<Self> {
        for (i, load) in daily_loads.iter().enumerate() {
            if *load < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Daily load must be non-negative, got {load:.1} on day {}",
                    i + 1
                )));
            }
        }

        let total: f64 = daily_loads.iter().sum();
        let mean = total / DAYS_PER_WEEK as f64;
        let variance = daily_loads
            .iter()
            .map(|load| (load - mean) * (load - mean))
            .sum::<f64>()
            / DAYS_PER_WEEK as f64;
        let stdev = variance.sqrt();
        // Identical loads every day give stdev 0; report monotony 0 rather
        // than dividing by zero
        let monotony = if stdev > 0.0 { mean / stdev } else { 0.0 };
        let strain = total * monotony;

        Ok(Self {
            total,
            mean,
            stdev,
            monotony,
            strain,
        })
    }

    /// Categorize the weekly total
    #[must_use]
    pub fn load_category(&self) -> LoadCategory {
        if self.total < 1000.0 {
            LoadCategory::Low
        } else if self.total < 2000.0 {
            LoadCategory::Moderate
        } else if self.total < 3000.0 {
            LoadCategory::High
        } else {
            LoadCategory::VeryHigh
        }
    }

    /// Assess day-to-day variability
    #[must_use]
    pub fn monotony_assessment(&self) -> MonotonyAssessment {
        if self.monotony < 1.0 {
            MonotonyAssessment::Good
        } else if self.monotony < 1.5 {
            MonotonyAssessment::Moderate
        } else {
            MonotonyAssessment::High
        }
    }

    /// Assess combined volume-and-monotony stress
    #[must_use]
    pub fn strain_assessment(&self) -> StrainAssessment {
        if self.strain < 2000.0 {
            StrainAssessment::Low
        } else if self.strain < 3500.0 {
            StrainAssessment::Moderate
        } else if self.strain < 5000.0 {
            StrainAssessment::High
        } else {
            StrainAssessment::VeryHigh
        }
    }
}

/// ACWR injury-risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcwrCategory {
    /// Ratio below 0.8
    Undertraining,
    /// Ratio 0.8 to 1.3
    SweetSpot,
    /// Ratio above 1.3 up to 1.5
    Caution,
    /// Ratio above 1.5
    Danger,
}

impl AcwrCategory {
    fn from_ratio(ratio: f64) -> Self {
        if ratio < acwr::UNDERTRAINING_CEILING {
            Self::Undertraining
        } else if ratio <= acwr::SWEET_SPOT_CEILING {
            Self::SweetSpot
        } else if ratio <= acwr::CAUTION_CEILING {
            Self::Caution
        } else {
            Self::Danger
        }
    }
}

impl fmt::Display for AcwrCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undertraining => write!(f, "Undertraining"),
            Self::SweetSpot => write!(f, "Optimal Loading (Sweet Spot)"),
            Self::Caution => write!(f, "Potential Injury Risk (Caution)"),
            Self::Danger => write!(f, "High Injury Risk (Danger)"),
        }
    }
}

/// Acute:chronic workload ratio with its risk category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcwrResult {
    /// Most recent week's load
    pub acute: f64,
    /// Mean weekly load over the four-week chronic window
    pub chronic: f64,
    /// `acute / chronic`; 0 when the chronic load is 0
    pub ratio: f64,
    /// Risk category for the ratio
    pub category: AcwrCategory,
}

/// ACWR from four weekly load totals, oldest first
///
/// The acute load is the last (most recent) week; the chronic load is the
/// mean of all four. A zero chronic load resolves to ratio 0 instead of an
/// error so a training-history gap reads as undertraining.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if any weekly load is negative.
pub fn acwr_from_weekly_loads(weekly_loads: &[f64; acwr::CHRONIC_WEEKS]) -> AppResult<AcwrResult> {
    for (i, load) in weekly_loads.iter().enumerate() {
        if *load < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weekly load must be non-negative, got {load:.1} in week {}",
                i + 1
            )));
        }
    }

    let acute = weekly_loads[acwr::CHRONIC_WEEKS - 1];
    let chronic = weekly_loads.iter().sum::<f64>() / acwr::CHRONIC_WEEKS as f64;
    let ratio = if chronic > 0.0 { acute / chronic } else { 0.0 };

    debug!(acute, chronic, ratio, "calculated ACWR");
    Ok(AcwrResult {
        acute,
        chronic,
        ratio,
        category: AcwrCategory::from_ratio(ratio),
    })
}

/// ACWR from dated load samples
///
/// Buckets the trailing 28 days before `as_of` (inclusive) into four weekly
/// totals and delegates to [`acwr_from_weekly_loads`]. Samples outside the
/// window, or dated after `as_of`, are ignored.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if any sample carries a negative load.
pub fn acwr_from_samples(
    samples: &[LoadSample],
    as_of: DateTime<Utc>,
) -> AppResult<AcwrResult> {
    let mut weekly_loads = [0.0_f64; acwr::CHRONIC_WEEKS];
    for sample in samples {
        if sample.load < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Load sample on {} must be non-negative, got {:.1}",
                sample.date.date_naive(),
                sample.load
            )));
        }
        let days_ago = (as_of - sample.date).num_days();
        if days_ago < 0 || days_ago >= acwr::ACUTE_DAYS * acwr::CHRONIC_WEEKS as i64 {
            continue;
        }
        // Bucket 0 is the oldest week, the last bucket the acute week
        let weeks_ago = (days_ago / acwr::ACUTE_DAYS) as usize;
        weekly_loads[acwr::CHRONIC_WEEKS - 1 - weeks_ago] += sample.load;
    }
    acwr_from_weekly_loads(&weekly_loads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_weekly_load_reference_values() {
        let week = WeeklyLoad::from_daily_loads(&[300.0, 200.0, 0.0, 400.0, 250.0, 0.0, 350.0])
            .unwrap();
        assert!((week.total - 1500.0).abs() < 1e-12);
        assert!(
            (week.monotony - 1.446_728_466_511_236_3).abs() < 1e-9,
            "monotony mismatch: {}",
            week.monotony
        );
        assert!(
            (week.strain - 2170.092_699_766_854_4).abs() < 1e-6,
            "strain mismatch: {}",
            week.strain
        );
        assert_eq!(week.monotony_assessment(), MonotonyAssessment::Moderate);
        assert_eq!(week.strain_assessment(), StrainAssessment::Moderate);
        assert_eq!(week.load_category(), LoadCategory::Moderate);
    }

    #[test]
    fn test_uniform_week_has_zero_monotony() {
        let week = WeeklyLoad::from_daily_loads(&[200.0; 7]).unwrap();
        assert!((week.stdev - 0.0).abs() < 1e-12);
        assert!((week.monotony - 0.0).abs() < 1e-12);
        assert!((week.strain - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_acwr_zero_chronic_resolves_to_zero() {
        let result = acwr_from_weekly_loads(&[0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!((result.ratio - 0.0).abs() < 1e-12);
        assert_eq!(result.category, AcwrCategory::Undertraining);
    }

    #[test]
    fn test_acwr_category_boundaries() {
        // acute 1300 over chronic 1000 sits exactly on the sweet-spot ceiling
        let sweet = acwr_from_weekly_loads(&[900.0, 900.0, 900.0, 1300.0]).unwrap();
        assert!((sweet.ratio - 1.3).abs() < 1e-12);
        assert_eq!(sweet.category, AcwrCategory::SweetSpot);

        let danger = acwr_from_weekly_loads(&[500.0, 500.0, 500.0, 1700.0]).unwrap();
        assert!(danger.ratio > 1.5);
        assert_eq!(danger.category, AcwrCategory::Danger);
    }

    #[test]
    fn test_acwr_from_samples_buckets_by_week() {
        let as_of = Utc::now();
        let mut samples = Vec::new();
        // 100 per day in the acute week, 50 per day in the three weeks before
        for days_ago in 0..28 {
            samples.push(LoadSample {
                date: as_of - Duration::days(days_ago),
                load: if days_ago < 7 { 100.0 } else { 50.0 },
            });
        }
        // Outside the window, must be ignored
        samples.push(LoadSample {
            date: as_of - Duration::days(40),
            load: 10_000.0,
        });
        let result = acwr_from_samples(&samples, as_of).unwrap();
        assert!((result.acute - 700.0).abs() < 1e-12);
        assert!((result.chronic - 437.5).abs() < 1e-12);
        assert_eq!(result.category, AcwrCategory::Danger);
    }

    #[test]
    fn test_session_rpe_rejects_off_scale_rpe() {
        assert!(session_rpe_load(60.0, 11.0).is_err());
        assert!(session_rpe_load(60.0, 0.5).is_err());
        let load = session_rpe_load(60.0, 7.0).unwrap();
        assert!((load - 420.0).abs() < 1e-12);
    }
}
