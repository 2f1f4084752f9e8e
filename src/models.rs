// ABOUTME: Core value records shared by the formula set
// ABOUTME: Athlete parameters, performance samples, zones, paces, power breakdown, load samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable value records constructed per call. Nothing here has persisted
//! identity or lifecycle beyond the call stack.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex category used by sex-specific formulas
///
/// The source formulas (Cooper, Bruce, Rockport, Astrand, Banister) were
/// validated on two categories only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male reference equations
    Male,
    /// Female reference equations
    Female,
}

impl Sex {
    /// Indicator variable used by regression formulas (1 = male, 0 = female)
    #[must_use]
    pub const fn indicator(self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex category: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Demographic and cardiac parameters for one athlete
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteParams {
    /// Age in years
    pub age: u8,
    /// Sex category for sex-specific equations
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Resting heart rate (bpm)
    pub resting_hr: u32,
    /// Maximum heart rate (bpm), must exceed resting
    pub max_hr: u32,
}

impl AthleteParams {
    /// Validate the record before use in any formula
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if age, weight, or height is
    /// non-positive, or if resting HR is not strictly below max HR.
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::invalid_input("Age must be positive"));
        }
        if self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be positive, got {:.1} kg",
                self.weight_kg
            )));
        }
        if self.height_cm <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Height must be positive, got {:.1} cm",
                self.height_cm
            )));
        }
        if self.resting_hr >= self.max_hr {
            return Err(AppError::invalid_input(format!(
                "Resting HR ({}) must be below max HR ({})",
                self.resting_hr, self.max_hr
            )));
        }
        Ok(())
    }

    /// Heart rate reserve: max HR minus resting HR (bpm)
    #[must_use]
    pub const fn hr_reserve(&self) -> u32 {
        self.max_hr - self.resting_hr
    }
}

/// A single race or time-trial performance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Elapsed time in seconds
    pub time_seconds: f64,
}

impl PerformanceSample {
    /// Create a validated sample
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if distance or time is non-positive.
    pub fn new(distance_km: f64, time_seconds: f64) -> AppResult<Self> {
        let sample = Self {
            distance_km,
            time_seconds,
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Validate distance and time are positive
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if distance or time is non-positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.distance_km <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Distance must be positive, got {:.3} km",
                self.distance_km
            )));
        }
        if self.time_seconds <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Time must be positive, got {:.1} s",
                self.time_seconds
            )));
        }
        Ok(())
    }

    /// Average velocity in meters per minute (the unit Daniels' equations use)
    #[must_use]
    pub fn velocity_m_per_min(&self) -> f64 {
        (self.distance_km * 1000.0) / (self.time_seconds / 60.0)
    }

    /// Average pace in seconds per kilometer
    #[must_use]
    pub fn pace_s_per_km(&self) -> f64 {
        self.time_seconds / self.distance_km
    }
}

/// One named heart-rate intensity band
///
/// `lower_bpm`/`upper_bpm` are `None` for open-ended bands: the lactate
/// threshold model's bottom zone has no floor and its top zone has no ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrZone {
    /// Display name, e.g. "Zone 2 (Aerobic)"
    pub name: String,
    /// Inclusive lower bound (bpm), `None` when the band is open below
    pub lower_bpm: Option<u32>,
    /// Inclusive upper bound (bpm), `None` when the band is open above
    pub upper_bpm: Option<u32>,
}

impl fmt::Display for HrZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower_bpm, self.upper_bpm) {
            (Some(lo), Some(hi)) => write!(f, "{}: {lo} - {hi} bpm", self.name),
            (None, Some(hi)) => write!(f, "{}: < {hi} bpm", self.name),
            (Some(lo), None) => write!(f, "{}: > {lo} bpm", self.name),
            (None, None) => write!(f, "{}: unbounded", self.name),
        }
    }
}

/// Daniels training paces derived from a VDOT value, in seconds per kilometer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingPaces {
    /// Slow end of the easy range
    pub easy_lower_s_per_km: f64,
    /// Fast end of the easy range
    pub easy_upper_s_per_km: f64,
    /// Marathon pace
    pub marathon_s_per_km: f64,
    /// Lactate threshold pace
    pub threshold_s_per_km: f64,
    /// VO2max interval pace
    pub interval_s_per_km: f64,
    /// Repetition pace
    pub repetition_s_per_km: f64,
}

/// Running power estimate decomposed into additive components
///
/// The components already include the metabolic efficiency division, so
/// `total_watts` equals their sum exactly. The gravity component is signed:
/// negative on downhill grades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerBreakdown {
    /// Total metabolic power output (watts)
    pub total_watts: f64,
    /// Power against gravity (watts, signed by incline)
    pub gravity_watts: f64,
    /// Power against air resistance (watts)
    pub air_watts: f64,
    /// Power against rolling resistance (watts)
    pub rolling_watts: f64,
}

impl PowerBreakdown {
    /// Power-to-weight ratio (W/kg)
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if weight is non-positive.
    pub fn power_to_weight(&self, weight_kg: f64) -> AppResult<f64> {
        if weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be positive, got {weight_kg:.1} kg"
            )));
        }
        Ok(self.total_watts / weight_kg)
    }
}

/// A dated training-load measurement for windowed workload analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSample {
    /// Date of the training session
    pub date: DateTime<Utc>,
    /// Scalar load for this session (session-RPE units or TRIMP)
    pub load: f64,
}
