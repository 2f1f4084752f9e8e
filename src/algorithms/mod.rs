// ABOUTME: Algorithm modules implementing the exercise-physiology formula set
// ABOUTME: VO2max, max HR, VDOT, race prediction, HR zones, TRIMP, training load, running power
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formula implementations, grouped by concern. Selection within a family is
//! an enum whose variants carry their inputs; free functions cover the
//! single-formula areas.

pub mod maxhr;
pub mod power;
pub mod race_prediction;
pub mod recovery;
pub mod training_load;
pub mod trimp;
pub mod vdot;
pub mod vo2max;
pub mod zones;

pub use maxhr::MaxHrFormula;
pub use power::{estimate_power, PowerModelInput, Terrain};
pub use race_prediction::RacePredictionMethod;
pub use recovery::{
    hrv_recovery, resting_hr_recovery, tqr_score, FitnessLevel, HrvMeasure, HrvRecovery,
    HrvRecoveryStatus, Motivation, RecentTrainingLoad, RhrRecovery, RhrRecoveryStatus,
    SleepQuality, StressLevel, TqrScore, TqrStatus, WellnessRatings,
};
pub use training_load::{
    acwr_from_samples, acwr_from_weekly_loads, session_rpe_load, AcwrCategory, AcwrResult,
    LoadCategory, MonotonyAssessment, StrainAssessment, WeeklyLoad,
};
pub use trimp::{banister_trimp, edwards_trimp};
pub use vdot::{calculate_vdot, percent_vo2max, training_paces, velocity_for_vo2};
pub use vo2max::Vo2maxAlgorithm;
pub use zones::{HrZoneMethod, KarvonenModel};
