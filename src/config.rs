// ABOUTME: Athlete profile configuration with environment-variable overrides
// ABOUTME: Replaces implicit session state with an explicit record passed per call
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Guidance configuration. Nothing here is required by the formulas
//! themselves; the profile only parameterizes the weekly-guidance selection.
//!
//! Environment variables (all optional, defaults apply when unset or
//! unparseable):
//!
//! - `RUNMETRICS_EXPERIENCE_LEVEL`: `beginner` | `intermediate` | `advanced`
//! - `RUNMETRICS_WEEKLY_SESSIONS`: planned sessions per week

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default planned sessions per week
const DEFAULT_WEEKLY_SESSIONS: u32 = 4;

/// Training experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Under roughly a year of structured training
    Beginner,
    /// Several years of consistent training
    #[default]
    Intermediate,
    /// Competitive background with high training tolerance
    Advanced,
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::config(format!(
                "Unknown experience level: '{other}'. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}

/// Athlete profile driving the weekly-guidance selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Training experience level
    pub experience: ExperienceLevel,
    /// Planned training sessions per week
    pub weekly_sessions: u32,
}

impl Default for AthleteProfile {
    fn default() -> Self {
        Self {
            experience: ExperienceLevel::default(),
            weekly_sessions: DEFAULT_WEEKLY_SESSIONS,
        }
    }
}

impl AthleteProfile {
    /// Load the profile from environment variables, falling back to defaults
    /// for anything unset or unparseable
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            experience: env::var("RUNMETRICS_EXPERIENCE_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            weekly_sessions: env::var("RUNMETRICS_WEEKLY_SESSIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_WEEKLY_SESSIONS),
        }
    }

    /// Validate the profile
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigInvalid` for zero weekly sessions or more
    /// sessions than days in a week.
    pub fn validate(&self) -> AppResult<()> {
        if self.weekly_sessions == 0 || self.weekly_sessions > 7 {
            return Err(AppError::config(format!(
                "Weekly sessions must be between 1 and 7, got {}",
                self.weekly_sessions
            )));
        }
        Ok(())
    }
}
