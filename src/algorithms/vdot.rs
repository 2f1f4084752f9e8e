// ABOUTME: Jack Daniels' VDOT model: fitness scoring from a race performance
// ABOUTME: VO2 curve, %VO2max duration curve, velocity inversion, and training paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # VDOT Calculation
//!
//! VDOT is Daniels' "pseudo-VO2max": the `VO2max` implied by a race
//! performance, folding running economy into a single fitness score. It is
//! computed by dividing the oxygen cost of the race velocity by the fraction
//! of `VO2max` sustainable for the race duration.
//!
//! # Scientific References
//!
//! - Daniels, J., & Gilbert, J. (1979). *Oxygen Power: Performance Tables for
//!   Distance Runners*.
//! - Daniels, J. (2013). *Daniels' Running Formula* (3rd ed.). Human Kinetics.

use crate::errors::{AppError, AppResult};
use crate::models::{PerformanceSample, TrainingPaces};
use crate::physiological_constants::daniels;
use tracing::debug;

/// Calculate VDOT from a race performance
///
/// # Returns
///
/// VDOT score in ml/kg/min equivalents
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the sample's distance or time is
/// non-positive.
pub fn calculate_vdot(sample: &PerformanceSample) -> AppResult<f64> {
    sample.validate()?;

    let velocity = sample.velocity_m_per_min();
    let vo2 = oxygen_cost(velocity);
    let pct = percent_vo2max(sample.time_seconds);
    let vdot = vo2 / pct;

    debug!(
        distance_km = sample.distance_km,
        time_seconds = sample.time_seconds,
        velocity_m_per_min = velocity,
        vdot,
        "calculated VDOT"
    );
    Ok(vdot)
}

/// Oxygen cost of running at a velocity (m/min), in ml/kg/min
///
/// `VO2 = -4.60 + 0.182258 x v + 0.000104 x v^2`
#[must_use]
pub fn oxygen_cost(velocity_m_per_min: f64) -> f64 {
    daniels::VO2_A.mul_add(
        velocity_m_per_min * velocity_m_per_min,
        daniels::VO2_B.mul_add(velocity_m_per_min, daniels::VO2_C),
    )
}

/// Fraction of `VO2max` sustainable for a given race duration
///
/// Double-exponential decay in duration: short races run near (or above) 100%
/// of `VO2max`, long races settle toward the 80% asymptote.
#[must_use]
pub fn percent_vo2max(time_seconds: f64) -> f64 {
    let minutes = time_seconds / 60.0;
    daniels::PCT_FAST_AMPLITUDE.mul_add(
        (daniels::PCT_FAST_RATE * minutes).exp(),
        daniels::PCT_SLOW_AMPLITUDE.mul_add(
            (daniels::PCT_SLOW_RATE * minutes).exp(),
            daniels::PCT_ASYMPTOTE,
        ),
    )
}

/// Invert the oxygen-cost curve: velocity (m/min) that costs a given VO2
///
/// Solves `0.000104 v^2 + 0.182258 v + (-4.60 - vo2) = 0` for the positive
/// root.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for non-positive VO2 and
/// `AppError::InternalError` if the discriminant is negative, which cannot
/// happen for positive VO2 and would indicate a coefficient bug.
pub fn velocity_for_vo2(vo2: f64) -> AppResult<f64> {
    if vo2 <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "VO2 must be positive, got {vo2:.2}"
        )));
    }

    let a = daniels::VO2_A;
    let b = daniels::VO2_B;
    let c = daniels::VO2_C - vo2;
    let discriminant = b.mul_add(b, -4.0 * a * c);
    if discriminant < 0.0 {
        return Err(AppError::internal(format!(
            "Negative discriminant ({discriminant:.6}) inverting VO2 curve for vo2 = {vo2:.2}"
        )));
    }
    Ok((-b + discriminant.sqrt()) / (2.0 * a))
}

/// Derive Daniels training paces from a VDOT score
///
/// Each pace is a power law `k x vdot^p` in minutes per kilometer, converted
/// to seconds per kilometer.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for non-positive VDOT.
pub fn training_paces(vdot: f64) -> AppResult<TrainingPaces> {
    if vdot <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "VDOT must be positive, got {vdot:.2}"
        )));
    }

    let pace = |(k, p): (f64, f64)| k * vdot.powf(p) * 60.0;
    Ok(TrainingPaces {
        easy_lower_s_per_km: pace(daniels::paces::EASY_LOWER),
        easy_upper_s_per_km: pace(daniels::paces::EASY_UPPER),
        marathon_s_per_km: pace(daniels::paces::MARATHON),
        threshold_s_per_km: pace(daniels::paces::THRESHOLD),
        interval_s_per_km: pace(daniels::paces::INTERVAL),
        repetition_s_per_km: pace(daniels::paces::REPETITION),
    })
}
