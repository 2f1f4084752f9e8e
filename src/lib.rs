// ABOUTME: Library root for runmetrics, an exercise-physiology formula crate
// ABOUTME: Pure, stateless calculations: VO2max, VDOT, HR zones, training load, running power
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # runmetrics
//!
//! A pure, stateless library of exercise-physiology formulas for runners:
//!
//! - **VO2max estimation** ([`Vo2maxAlgorithm`]): Cooper, Bruce, 1.5-mile run,
//!   Rockport walk, and Astrand-Rhyming protocols
//! - **VDOT and race prediction** ([`algorithms::vdot`],
//!   [`RacePredictionMethod`]): Daniels' fitness scoring, training paces, and
//!   Riegel/Cameron/Daniels race-time prediction
//! - **Heart-rate zones** ([`HrZoneMethod`]): %MaxHR, Karvonen 5/7/3-zone, and
//!   lactate-threshold models
//! - **Training load** ([`algorithms::training_load`],
//!   [`algorithms::trimp`]): session RPE, weekly monotony/strain, Banister and
//!   Edwards TRIMP, and the acute:chronic workload ratio
//! - **Recovery scoring** ([`algorithms::recovery`]): HRV, resting-HR, and
//!   subjective (TQR) recovery percentages with status bands
//! - **Running power** ([`algorithms::power`]): physics-based estimation with
//!   a per-component breakdown
//!
//! Every calculation takes explicit inputs and returns [`AppResult`]; there
//! is no shared state, I/O, or persistence. Callers own input collection,
//! formatting, and any `tracing` subscriber.
//!
//! ```
//! use runmetrics::{calculate_vdot, PerformanceSample, RacePredictionMethod};
//!
//! let five_k = PerformanceSample::new(5.0, 1200.0)?;
//! let vdot = calculate_vdot(&five_k)?;
//! assert!((vdot - 49.8).abs() < 0.1);
//!
//! let marathon_s = RacePredictionMethod::Daniels.predict(&five_k, 42.195)?;
//! assert!(marathon_s > 10_000.0);
//! # Ok::<(), runmetrics::AppError>(())
//! ```

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod models;
pub mod physiological_constants;
pub mod recommendation;

pub use algorithms::{
    acwr_from_samples, acwr_from_weekly_loads, banister_trimp, calculate_vdot, edwards_trimp,
    estimate_power, hrv_recovery, resting_hr_recovery, session_rpe_load, tqr_score,
    training_paces, AcwrCategory, AcwrResult, FitnessLevel, HrZoneMethod, HrvMeasure, HrvRecovery,
    HrvRecoveryStatus, KarvonenModel, LoadCategory, MaxHrFormula, MonotonyAssessment, Motivation,
    PowerModelInput, RacePredictionMethod, RecentTrainingLoad, RhrRecovery, RhrRecoveryStatus,
    SleepQuality, StrainAssessment, StressLevel, Terrain, TqrScore, TqrStatus, Vo2maxAlgorithm,
    WeeklyLoad, WellnessRatings,
};
pub use config::{AthleteProfile, ExperienceLevel};
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    AthleteParams, HrZone, LoadSample, PerformanceSample, PowerBreakdown, Sex, TrainingPaces,
};
pub use recommendation::weekly_guidance;
