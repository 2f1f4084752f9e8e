// ABOUTME: Training impulse (TRIMP) calculations from heart-rate data
// ABOUTME: Implements the Banister exponential and Edwards zone-weighted models
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use crate::models::{AthleteParams, Sex};
use crate::physiological_constants::trimp;
use tracing::debug;

/// Banister TRIMP: exponentially weighted heart-rate-reserve load
///
/// `r = (avg_hr - resting) / (max - resting)`, then
/// `trimp = duration x r x base x e^(factor x r)` with sex-specific base and
/// factor reflecting blood-lactate response profiles.
///
/// # Scientific References
///
/// - Banister, E.W. (1991). "Modeling elite athletic performance."
///   *Physiological Testing of Elite Athletes*, 403-424.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for a non-positive duration or an invalid
/// athlete record, and `AppError::ValueOutOfRange` when the average heart
/// rate falls outside the athlete's resting-to-max band.
pub fn banister_trimp(
    duration_minutes: f64,
    avg_hr: f64,
    athlete: &AthleteParams,
) -> AppResult<f64> {
    athlete.validate()?;
    if duration_minutes <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Duration must be positive, got {duration_minutes:.1} min"
        )));
    }
    if avg_hr < f64::from(athlete.resting_hr) || avg_hr > f64::from(athlete.max_hr) {
        return Err(AppError::out_of_range(format!(
            "Average HR {avg_hr:.0} is outside the athlete's range ({} - {})",
            athlete.resting_hr, athlete.max_hr
        )));
    }

    let hr_ratio = (avg_hr - f64::from(athlete.resting_hr)) / f64::from(athlete.hr_reserve());
    let (base, factor) = match athlete.sex {
        Sex::Male => (trimp::MALE_BASE, trimp::MALE_EXPONENT),
        Sex::Female => (trimp::FEMALE_BASE, trimp::FEMALE_EXPONENT),
    };
    let intensity = base * (factor * hr_ratio).exp();
    let value = duration_minutes * hr_ratio * intensity;

    debug!(
        duration_minutes,
        avg_hr,
        hr_ratio,
        trimp = value,
        "calculated Banister TRIMP"
    );
    Ok(value)
}

/// Edwards TRIMP: minutes in each of five zones, weighted by zone number
///
/// `trimp = sum(minutes_i x i)` for zones 1 through 5.
///
/// # Scientific References
///
/// - Edwards, S. (1993). *The Heart Rate Monitor Book*. Polar Electro Oy.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if any zone's minutes are negative.
pub fn edwards_trimp(zone_minutes: &[f64; trimp::EDWARDS_ZONES]) -> AppResult<f64> {
    for (i, minutes) in zone_minutes.iter().enumerate() {
        if *minutes < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Zone {} minutes must be non-negative, got {minutes:.1}",
                i + 1
            )));
        }
    }
    Ok(zone_minutes
        .iter()
        .enumerate()
        .map(|(i, minutes)| minutes * (i + 1) as f64)
        .sum())
}
