// ABOUTME: Canned weekly training guidance driven by load metrics and athlete profile
// ABOUTME: Pure selection over WeeklyLoad summaries, no stored state
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::algorithms::training_load::WeeklyLoad;
use crate::config::{AthleteProfile, ExperienceLevel};
use crate::errors::AppResult;

/// Monotony above which variability advice fires
const HIGH_MONOTONY: f64 = 1.5;
/// Strain above which recovery advice fires
const VERY_HIGH_STRAIN: f64 = 4000.0;
/// Weekly load above which the ramp warning can fire
const HIGH_WEEKLY_LOAD: f64 = 3000.0;
/// Monotony above which a high load compounds into a risk warning
const RISKY_MONOTONY: f64 = 1.3;
/// Weekly load below which more volume is suggested
const LOW_WEEKLY_LOAD: f64 = 1000.0;
/// Session count from which a low load reads as undertraining rather than
/// a deliberate recovery week
const LOW_LOAD_SESSION_FLOOR: u32 = 4;

/// Select weekly guidance from a load summary and the athlete's profile
///
/// Returns zero or more advice strings; an empty vector means the week looks
/// well structured. Selection is stateless: the same inputs always produce
/// the same advice.
///
/// # Errors
///
/// Returns `AppError::ConfigInvalid` if the profile is invalid.
pub fn weekly_guidance(
    profile: &AthleteProfile,
    week: &WeeklyLoad,
) -> AppResult<Vec<&'static str>> {
    profile.validate()?;

    let mut advice = Vec::new();
    if week.monotony > HIGH_MONOTONY {
        advice.push(
            "Training monotony is high. Vary daily load: alternate hard sessions with easy or rest days.",
        );
    }
    if week.strain > VERY_HIGH_STRAIN {
        advice.push(
            "Weekly strain is very high. Schedule additional recovery before the next hard block.",
        );
    }
    if week.total > HIGH_WEEKLY_LOAD && week.monotony > RISKY_MONOTONY {
        advice.push(
            "High load combined with low variability raises overtraining risk. Cut volume or add variation.",
        );
    }
    // Beginners are not pushed toward more volume; a low week is fine
    if week.total < LOW_WEEKLY_LOAD
        && profile.weekly_sessions >= LOW_LOAD_SESSION_FLOOR
        && profile.experience != ExperienceLevel::Beginner
    {
        advice.push(
            "Weekly load is low for the planned session count. Consider longer or harder sessions.",
        );
    }
    Ok(advice)
}
