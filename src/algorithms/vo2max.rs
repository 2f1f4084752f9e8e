// ABOUTME: VO2max estimation algorithms for aerobic fitness assessment
// ABOUTME: Implements Cooper, Bruce, 1.5-mile run, Rockport walk, and Astrand-Rhyming protocols
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use crate::models::Sex;
use crate::physiological_constants::{astrand, bruce, cooper, rockport, run_15_mile};
use serde::{Deserialize, Serialize};

/// `VO2max` estimation protocol selection
///
/// Each variant carries the measurements its field test produces and yields an
/// estimate in ml/kg/min:
///
/// - `CooperTest`: 12-minute run distance test
/// - `BruceProtocol`: graded treadmill test to exhaustion
/// - `RunTest15Mile`: 1.5-mile timed run
/// - `RockportWalk`: 1-mile walk test with finish heart rate
/// - `AstrandRhyming`: submaximal cycle ergometer test
///
/// # Scientific References
///
/// - Cooper, K.H. (1968). "A means of assessing maximal oxygen intake." *JAMA*, 203(3), 201-204.
/// - Bruce, R.A., Kusumi, F., & Hosmer, D. (1973). "Maximal oxygen intake and nomographic
///   assessment of functional aerobic impairment." *American Heart Journal*, 85(4), 546-562.
/// - Kline, G.M., et al. (1987). "Estimation of `VO2max` from a one-mile track walk."
///   *Medicine & Science in Sports & Exercise*, 19(3), 253-259.
/// - Astrand, P.O., & Ryhming, I. (1954). "A nomogram for calculation of aerobic capacity."
///   *Journal of Applied Physiology*, 7(2), 218-221.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Vo2maxAlgorithm {
    /// Cooper 12-Minute Run Test
    ///
    /// Formula: `VO2max = (distance_m - 504.9) / 44.73`, x0.85 for females
    ///
    /// Run as far as possible in 12 minutes on a flat track.
    CooperTest {
        /// Distance covered in 12 minutes (meters)
        distance_meters: f64,
        /// Sex category for the female adjustment
        sex: Sex,
    },

    /// Bruce graded treadmill protocol
    ///
    /// Male: `14.8 - 1.379t + 0.451t^2 - 0.012t^3`; female: `4.38t - 3.9`
    /// where t is total treadmill time in minutes.
    BruceProtocol {
        /// Time completed on the treadmill (minutes)
        time_minutes: f64,
        /// Sex category selecting the regression
        sex: Sex,
    },

    /// 1.5-Mile Run Test
    ///
    /// Formula: `88.02 - 0.1656 x weight_kg - 2.76 x time_min + 3.716 x is_male`
    RunTest15Mile {
        /// Time to run 1.5 miles (minutes)
        time_minutes: f64,
        /// Body weight in kilograms
        weight_kg: f64,
        /// Sex category for the male indicator term
        sex: Sex,
    },

    /// Rockport 1-Mile Walk Test
    ///
    /// Formula: `132.853 - 0.0769 x weight_lb - 0.3877 x age + 6.315 x is_male
    /// - 3.2649 x time_min - 0.1565 x hr_end`
    ///
    /// Submaximal; suitable for untrained individuals.
    RockportWalk {
        /// Body weight in pounds (the published regression uses lb)
        weight_lb: f64,
        /// Age in years
        age: u8,
        /// Sex category for the male indicator term
        sex: Sex,
        /// Time to walk 1 mile (minutes)
        time_minutes: f64,
        /// Heart rate immediately after the walk (bpm)
        heart_rate: f64,
    },

    /// Astrand-Rhyming submaximal cycle ergometer test
    ///
    /// Workload is converted to kgm/min, submaximal VO2 is read from a sex-
    /// and heart-rate-banded linear lookup, extrapolated to max via
    /// `hr_max / hr_steady`, then age-corrected and normalized to body mass.
    AstrandRhyming {
        /// Power output during the test (watts)
        workload_watts: f64,
        /// Steady-state heart rate during the test (bpm)
        steady_state_hr: f64,
        /// Age in years
        age: u8,
        /// Body weight in kilograms
        weight_kg: f64,
        /// Sex category selecting the oxygen-cost divisor
        sex: Sex,
    },
}

impl Vo2maxAlgorithm {
    /// Estimate `VO2max` from the protocol's test data
    ///
    /// # Returns
    ///
    /// Estimated `VO2max` in ml/kg/min
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for non-positive times, weights,
    /// distances, or heart rates, and `AppError::ValueOutOfRange` when a
    /// structurally valid input falls outside the formula's physiological
    /// domain (e.g. a Cooper distance at or below the 504.9 m floor).
    pub fn estimate_vo2max(&self) -> AppResult<f64> {
        match self {
            Self::CooperTest {
                distance_meters,
                sex,
            } => Self::calculate_cooper(*distance_meters, *sex),
            Self::BruceProtocol { time_minutes, sex } => {
                Self::calculate_bruce(*time_minutes, *sex)
            }
            Self::RunTest15Mile {
                time_minutes,
                weight_kg,
                sex,
            } => Self::calculate_run_15_mile(*time_minutes, *weight_kg, *sex),
            Self::RockportWalk {
                weight_lb,
                age,
                sex,
                time_minutes,
                heart_rate,
            } => Self::calculate_rockport(*weight_lb, *age, *sex, *time_minutes, *heart_rate),
            Self::AstrandRhyming {
                workload_watts,
                steady_state_hr,
                age,
                weight_kg,
                sex,
            } => {
                let absolute =
                    Self::astrand_absolute(*workload_watts, *steady_state_hr, *age, *sex)?;
                if *weight_kg <= 0.0 {
                    return Err(AppError::invalid_input(format!(
                        "Weight must be positive, got {weight_kg:.1} kg"
                    )));
                }
                Ok(absolute * 1000.0 / weight_kg)
            }
        }
    }

    /// Absolute `VO2max` in L/min for the Astrand-Rhyming protocol
    ///
    /// The test reports both absolute (L/min) and relative (ml/kg/min)
    /// capacity; other protocols only produce the relative value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` unless called on `AstrandRhyming`, or
    /// if the test measurements are non-positive.
    pub fn estimate_absolute_l_min(&self) -> AppResult<f64> {
        match self {
            Self::AstrandRhyming {
                workload_watts,
                steady_state_hr,
                age,
                sex,
                ..
            } => Self::astrand_absolute(*workload_watts, *steady_state_hr, *age, *sex),
            _ => Err(AppError::invalid_input(
                "Absolute VO2max is only defined for the Astrand-Rhyming protocol",
            )),
        }
    }

    fn calculate_cooper(distance_meters: f64, sex: Sex) -> AppResult<f64> {
        if distance_meters <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Cooper test distance must be positive, got {distance_meters:.0} m"
            )));
        }
        if distance_meters <= cooper::DISTANCE_OFFSET_M {
            return Err(AppError::out_of_range(format!(
                "Cooper test distance {distance_meters:.0} m is at or below the formula floor ({} m); the estimate would be non-positive",
                cooper::DISTANCE_OFFSET_M
            )));
        }

        let mut vo2max = (distance_meters - cooper::DISTANCE_OFFSET_M) / cooper::DISTANCE_DIVISOR;
        if sex == Sex::Female {
            vo2max *= cooper::FEMALE_ADJUSTMENT;
        }
        Ok(vo2max)
    }

    fn calculate_bruce(time_minutes: f64, sex: Sex) -> AppResult<f64> {
        if time_minutes <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Bruce protocol time must be positive, got {time_minutes:.1} min"
            )));
        }

        let t = time_minutes;
        let vo2max = match sex {
            Sex::Male => {
                bruce::MALE_C3.mul_add(
                    t * t * t,
                    bruce::MALE_C2.mul_add(t * t, bruce::MALE_C1.mul_add(t, bruce::MALE_C0)),
                )
            }
            Sex::Female => bruce::FEMALE_SLOPE.mul_add(t, bruce::FEMALE_INTERCEPT),
        };

        // The published polynomials have no domain guard; reject the
        // non-physiological region instead of returning a negative capacity.
        if vo2max <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "Bruce protocol time {time_minutes:.1} min yields a non-positive VO2max estimate"
            )));
        }
        Ok(vo2max)
    }

    fn calculate_run_15_mile(time_minutes: f64, weight_kg: f64, sex: Sex) -> AppResult<f64> {
        if time_minutes <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Run time must be positive, got {time_minutes:.1} min"
            )));
        }
        if weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be positive, got {weight_kg:.1} kg"
            )));
        }

        let vo2max = run_15_mile::MALE_COEF.mul_add(
            sex.indicator(),
            run_15_mile::INTERCEPT
                - run_15_mile::WEIGHT_COEF * weight_kg
                - run_15_mile::TIME_COEF * time_minutes,
        );
        if vo2max <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "1.5-mile time {time_minutes:.1} min yields a non-positive VO2max estimate"
            )));
        }
        Ok(vo2max)
    }

    fn calculate_rockport(
        weight_lb: f64,
        age: u8,
        sex: Sex,
        time_minutes: f64,
        heart_rate: f64,
    ) -> AppResult<f64> {
        if weight_lb <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be positive, got {weight_lb:.1} lb"
            )));
        }
        if age == 0 {
            return Err(AppError::invalid_input("Age must be positive"));
        }
        if time_minutes <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Walk time must be positive, got {time_minutes:.1} min"
            )));
        }
        if heart_rate <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Finish heart rate must be positive, got {heart_rate:.0} bpm"
            )));
        }

        let vo2max = rockport::INTERCEPT - rockport::WEIGHT_COEF * weight_lb
            - rockport::AGE_COEF * f64::from(age)
            + rockport::MALE_COEF * sex.indicator()
            - rockport::TIME_COEF * time_minutes
            - rockport::HR_COEF * heart_rate;
        if vo2max <= 0.0 {
            return Err(AppError::out_of_range(
                "Rockport inputs yield a non-positive VO2max estimate",
            ));
        }
        Ok(vo2max)
    }

    /// Astrand-Rhyming absolute capacity (L/min)
    fn astrand_absolute(
        workload_watts: f64,
        steady_state_hr: f64,
        age: u8,
        sex: Sex,
    ) -> AppResult<f64> {
        if workload_watts <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Workload must be positive, got {workload_watts:.0} W"
            )));
        }
        if steady_state_hr <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Steady-state heart rate must be positive, got {steady_state_hr:.0} bpm"
            )));
        }
        if age < 10 {
            return Err(AppError::out_of_range(format!(
                "Age {age} is below the protocol's validated range"
            )));
        }

        let workload_kgm = workload_watts * astrand::WATTS_TO_KGM_PER_MIN;

        // Submaximal VO2 lookup, banded on sex and steady-state HR
        let vo2_test = match sex {
            Sex::Male if steady_state_hr <= astrand::LOW_HR_THRESHOLD => {
                (workload_kgm + astrand::LOW_HR_WORKLOAD_OFFSET) / astrand::MALE_DIVISOR
            }
            Sex::Male => workload_kgm / astrand::MALE_DIVISOR,
            Sex::Female if steady_state_hr <= astrand::LOW_HR_THRESHOLD => {
                (workload_kgm + astrand::LOW_HR_WORKLOAD_OFFSET) / astrand::FEMALE_DIVISOR
            }
            Sex::Female => workload_kgm / astrand::FEMALE_DIVISOR,
        };

        // Extrapolate to maximum via age-predicted max HR (Fox formula)
        let hr_max = f64::from(220 - u32::from(age).min(219));
        let mut vo2max_l = vo2_test * hr_max / steady_state_hr;

        // Nomogram decay correction; below the floor the factor stays 1.0
        if age >= astrand::AGE_CORRECTION_FLOOR {
            let age_factor = astrand::AGE_DECAY_PER_YEAR
                .mul_add(-f64::from(age - astrand::AGE_CORRECTION_FLOOR), 1.0);
            vo2max_l *= age_factor;
        }

        if vo2max_l <= 0.0 {
            return Err(AppError::out_of_range(
                "Astrand-Rhyming inputs yield a non-positive VO2max estimate",
            ));
        }
        Ok(vo2max_l)
    }

    /// Get algorithm name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CooperTest { .. } => "cooper_test",
            Self::BruceProtocol { .. } => "bruce_protocol",
            Self::RunTest15Mile { .. } => "run_test_1_5_mile",
            Self::RockportWalk { .. } => "rockport_walk",
            Self::AstrandRhyming { .. } => "astrand_rhyming",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CooperTest {
                distance_meters, ..
            } => format!("Cooper 12-Min Test ({distance_meters:.0} m)"),
            Self::BruceProtocol { time_minutes, .. } => {
                format!("Bruce Protocol ({time_minutes:.1} min)")
            }
            Self::RunTest15Mile { time_minutes, .. } => {
                format!("1.5-Mile Run ({time_minutes:.1} min)")
            }
            Self::RockportWalk {
                time_minutes,
                heart_rate,
                ..
            } => format!("Rockport Walk ({time_minutes:.1} min, {heart_rate:.0} bpm)"),
            Self::AstrandRhyming {
                workload_watts,
                steady_state_hr,
                ..
            } => format!("Astrand-Rhyming ({workload_watts:.0} W, {steady_state_hr:.0} bpm)"),
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::CooperTest { .. } => "VO2max = (distance_m - 504.9) / 44.73",
            Self::BruceProtocol { .. } => {
                "male: 14.8 - 1.379t + 0.451t^2 - 0.012t^3; female: 4.38t - 3.9"
            }
            Self::RunTest15Mile { .. } => {
                "VO2max = 88.02 - 0.1656 x weight - 2.76 x time + 3.716 x is_male"
            }
            Self::RockportWalk { .. } => {
                "VO2max = 132.853 - 0.0769 x weight - 0.3877 x age + 6.315 x is_male - 3.2649 x time - 0.1565 x HR"
            }
            Self::AstrandRhyming { .. } => {
                "VO2max = vo2_test x hr_max / hr_steady x age_factor x 1000 / weight"
            }
        }
    }
}
