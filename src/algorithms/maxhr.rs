// ABOUTME: Age-predicted maximum heart rate formulas
// ABOUTME: Implements the Fox, Tanaka, and Gellish regressions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum heart rate estimation formula selection
///
/// # Scientific References
///
/// - Fox, S.M., Naughton, J.P., & Haskell, W.L. (1971). "Physical activity and
///   the prevention of coronary heart disease." *Annals of Clinical Research*, 3, 404-432.
/// - Tanaka, H., Monahan, K.D., & Seals, D.R. (2001). "Age-predicted maximal
///   heart rate revisited." *Journal of the American College of Cardiology*, 37(1), 153-156.
/// - Gellish, R.L., et al. (2007). "Longitudinal modeling of the relationship
///   between age and maximal heart rate." *Medicine & Science in Sports & Exercise*, 39(5), 822-829.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxHrFormula {
    /// Classic `220 - age`; simple but high individual variance
    Fox,
    /// `208 - 0.7 x age`; better fit for older adults
    Tanaka,
    /// `207 - 0.7 x age`; longitudinal cohort refinement of Tanaka
    Gellish,
}

impl MaxHrFormula {
    /// Estimate maximum heart rate from age
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for age 0 and
    /// `AppError::ValueOutOfRange` when age exceeds the formula's positive
    /// domain (Fox at 220 and beyond).
    pub fn estimate(self, age: u8) -> AppResult<f64> {
        if age == 0 {
            return Err(AppError::invalid_input("Age must be positive"));
        }

        let max_hr = match self {
            Self::Fox => f64::from(220_i32 - i32::from(age)),
            Self::Tanaka => 0.7_f64.mul_add(-f64::from(age), 208.0),
            Self::Gellish => 0.7_f64.mul_add(-f64::from(age), 207.0),
        };
        if max_hr <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "Age {age} yields a non-positive max HR estimate"
            )));
        }
        Ok(max_hr)
    }

    /// Get formula name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fox => "fox",
            Self::Tanaka => "tanaka",
            Self::Gellish => "gellish",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Fox => "max_hr = 220 - age",
            Self::Tanaka => "max_hr = 208 - 0.7 x age",
            Self::Gellish => "max_hr = 207 - 0.7 x age",
        }
    }
}

impl FromStr for MaxHrFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fox" | "220-age" => Ok(Self::Fox),
            "tanaka" => Ok(Self::Tanaka),
            "gellish" => Ok(Self::Gellish),
            other => Err(AppError::invalid_input(format!(
                "Unknown max HR formula: '{other}'. Valid options: fox, tanaka, gellish"
            ))),
        }
    }
}
