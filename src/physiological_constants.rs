// ABOUTME: Physiological constants used across the formula set, grouped by concern
// ABOUTME: Values are taken from the published equations each algorithm implements
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Physiological constants based on sports science research
//!
//! This module contains the published coefficients the formula set is built
//! on. Grouping them here keeps every magic number named and referenced.

/// Cooper 12-minute run test coefficients
///
/// Reference: Cooper, K.H. (1968). "A means of assessing maximal oxygen
/// intake." *JAMA*, 203(3), 201-204.
pub mod cooper {
    /// Distance offset in meters; distances at or below this yield no valid estimate
    pub const DISTANCE_OFFSET_M: f64 = 504.9;
    /// Divisor converting offset distance to ml/kg/min
    pub const DISTANCE_DIVISOR: f64 = 44.73;
    /// Female adjustment multiplier (women average ~15% lower VO2max)
    pub const FEMALE_ADJUSTMENT: f64 = 0.85;
}

/// Bruce treadmill protocol coefficients
///
/// Reference: Bruce, R.A., Kusumi, F., & Hosmer, D. (1973). "Maximal oxygen
/// intake and nomographic assessment of functional aerobic impairment in
/// cardiovascular disease." *American Heart Journal*, 85(4), 546-562.
pub mod bruce {
    /// Male cubic polynomial: constant term
    pub const MALE_C0: f64 = 14.8;
    /// Male cubic polynomial: linear coefficient
    pub const MALE_C1: f64 = -1.379;
    /// Male cubic polynomial: quadratic coefficient
    pub const MALE_C2: f64 = 0.451;
    /// Male cubic polynomial: cubic coefficient
    pub const MALE_C3: f64 = -0.012;
    /// Female linear slope
    pub const FEMALE_SLOPE: f64 = 4.38;
    /// Female linear intercept
    pub const FEMALE_INTERCEPT: f64 = -3.9;
}

/// 1.5-mile run test regression coefficients
pub mod run_15_mile {
    /// Regression intercept
    pub const INTERCEPT: f64 = 88.02;
    /// Weight coefficient (per kg)
    pub const WEIGHT_COEF: f64 = 0.1656;
    /// Time coefficient (per minute)
    pub const TIME_COEF: f64 = 2.76;
    /// Male indicator coefficient
    pub const MALE_COEF: f64 = 3.716;
}

/// Rockport 1-mile walk test regression coefficients
///
/// Reference: Kline, G.M., et al. (1987). "Estimation of VO2max from a
/// one-mile track walk." *Medicine & Science in Sports & Exercise*, 19(3), 253-259.
pub mod rockport {
    /// Regression intercept
    pub const INTERCEPT: f64 = 132.853;
    /// Weight coefficient (per lb)
    pub const WEIGHT_COEF: f64 = 0.0769;
    /// Age coefficient (per year)
    pub const AGE_COEF: f64 = 0.3877;
    /// Male indicator coefficient
    pub const MALE_COEF: f64 = 6.315;
    /// Time coefficient (per minute)
    pub const TIME_COEF: f64 = 3.2649;
    /// Finish heart rate coefficient (per bpm)
    pub const HR_COEF: f64 = 0.1565;
}

/// Astrand-Rhyming submaximal cycle test constants
///
/// Reference: Astrand, P.O., & Ryhming, I. (1954). "A nomogram for
/// calculation of aerobic capacity." *Journal of Applied Physiology*, 7(2), 218-221.
pub mod astrand {
    /// Watts to kgm/min conversion (1 W = 6.12 kgm/min)
    pub const WATTS_TO_KGM_PER_MIN: f64 = 6.12;
    /// Workload offset (kgm/min) applied at steady-state HR <= 120 bpm
    pub const LOW_HR_WORKLOAD_OFFSET: f64 = 300.0;
    /// Male oxygen-cost divisor (kgm/min per L/min)
    pub const MALE_DIVISOR: f64 = 200.0;
    /// Female oxygen-cost divisor (kgm/min per L/min)
    pub const FEMALE_DIVISOR: f64 = 170.0;
    /// Steady-state heart rate at or below which the workload offset applies (bpm)
    pub const LOW_HR_THRESHOLD: f64 = 120.0;
    /// Age above which the nomogram decay correction applies (years)
    pub const AGE_CORRECTION_FLOOR: u8 = 25;
    /// Per-year decay applied above the correction floor
    pub const AGE_DECAY_PER_YEAR: f64 = 0.01;
}

/// Jack Daniels' VDOT equations
///
/// Reference: Daniels, J., & Gilbert, J. (1979). *Oxygen Power: Performance
/// Tables for Distance Runners*.
pub mod daniels {
    /// VO2 formula coefficient for the velocity-squared term
    pub const VO2_A: f64 = 0.000_104;
    /// VO2 formula coefficient for the velocity term
    pub const VO2_B: f64 = 0.182_258;
    /// VO2 formula constant term
    pub const VO2_C: f64 = -4.60;

    /// %VO2max-vs-duration regression: asymptote
    pub const PCT_ASYMPTOTE: f64 = 0.8;
    /// %VO2max regression: slow-decay amplitude
    pub const PCT_SLOW_AMPLITUDE: f64 = 0.189_439_3;
    /// %VO2max regression: slow-decay rate (per minute)
    pub const PCT_SLOW_RATE: f64 = -0.012_778;
    /// %VO2max regression: fast-decay amplitude
    pub const PCT_FAST_AMPLITUDE: f64 = 0.298_955_8;
    /// %VO2max regression: fast-decay rate (per minute)
    pub const PCT_FAST_RATE: f64 = -0.193_260_5;

    /// Training pace constants (multiplier, exponent) applied as
    /// `k * vdot^p` minutes per kilometer.
    pub mod paces {
        /// Easy pace, slow end
        pub const EASY_LOWER: (f64, f64) = (180.0, -0.79);
        /// Easy pace, fast end
        pub const EASY_UPPER: (f64, f64) = (150.0, -0.75);
        /// Marathon pace
        pub const MARATHON: (f64, f64) = (120.0, -0.73);
        /// Threshold pace
        pub const THRESHOLD: (f64, f64) = (100.0, -0.71);
        /// Interval pace
        pub const INTERVAL: (f64, f64) = (77.0, -0.67);
        /// Repetition pace
        pub const REPETITION: (f64, f64) = (64.0, -0.65);
    }
}

/// Race-time prediction fatigue exponents
///
/// References:
/// - Riegel, P.S. (1981). "Athletic records and human endurance."
///   *American Scientist*, 69(3), 285-290.
/// - Cameron, D. (1998). Running prediction formula, rec.running archive.
pub mod race_prediction {
    /// Riegel power-law fatigue exponent
    pub const RIEGEL_EXPONENT: f64 = 1.06;
    /// Cameron exponent for base races at or below 10 km
    pub const CAMERON_SHORT_EXPONENT: f64 = 1.07;
    /// Cameron exponent for base races above 10 km
    pub const CAMERON_LONG_EXPONENT: f64 = 1.05;
    /// Base distance (km) at which the Cameron exponent switches
    pub const CAMERON_DISTANCE_SPLIT_KM: f64 = 10.0;
    /// Daniels fixed-point refinement iterations; fixed by design, not
    /// convergence-checked, to preserve output parity with published values
    pub const DANIELS_ITERATIONS: u32 = 3;
}

/// Banister and Edwards TRIMP coefficients
///
/// References:
/// - Banister, E.W. (1991). "Modeling elite athletic performance."
///   *Physiological Testing of Elite Athletes*.
/// - Edwards, S. (1993). *The Heart Rate Monitor Book*. Polar Electro Oy.
pub mod trimp {
    /// Banister male base multiplier
    pub const MALE_BASE: f64 = 0.64;
    /// Banister male exponential factor
    pub const MALE_EXPONENT: f64 = 1.92;
    /// Banister female base multiplier
    pub const FEMALE_BASE: f64 = 0.86;
    /// Banister female exponential factor
    pub const FEMALE_EXPONENT: f64 = 1.67;
    /// Edwards model zone count (weights are the zone numbers 1..=5)
    pub const EDWARDS_ZONES: usize = 5;
}

/// Acute:chronic workload ratio thresholds
///
/// Reference: Hulin, B.T., Gabbett, T.J., et al. (2016). "The acute:chronic
/// workload ratio predicts injury." *British Journal of Sports Medicine*, 50(4), 231-236.
pub mod acwr {
    /// Below this ratio: undertraining
    pub const UNDERTRAINING_CEILING: f64 = 0.8;
    /// Upper bound of the "sweet spot"
    pub const SWEET_SPOT_CEILING: f64 = 1.3;
    /// Upper bound of the caution band; above is the danger zone
    pub const CAUTION_CEILING: f64 = 1.5;
    /// Number of weekly buckets in the chronic window
    pub const CHRONIC_WEEKS: usize = 4;
    /// Days per acute window
    pub const ACUTE_DAYS: i64 = 7;
}

/// Heart-rate zone cut points as fractions of the reference intensity
pub mod zone_cut_points {
    /// Five-zone model (%MaxHR and Karvonen): 50-60-70-80-90-100
    pub const FIVE_ZONE: [f64; 6] = [0.50, 0.60, 0.70, 0.80, 0.90, 1.00];
    /// Seven-zone Karvonen model: 50-55-65-75-82-89-94-100
    pub const SEVEN_ZONE: [f64; 8] = [0.50, 0.55, 0.65, 0.75, 0.82, 0.89, 0.94, 1.00];
    /// Three-zone polarized model: 50-77-87-100
    pub const THREE_ZONE: [f64; 4] = [0.50, 0.77, 0.87, 1.00];
    /// Lactate-threshold multipliers: band edges around LTHR
    /// (<0.85, 0.85-0.89, 0.90-0.94, 0.95-0.99, 1.00-1.02, 1.03-1.06, >1.06)
    pub const LTHR_BANDS: [(f64, f64); 5] = [
        (0.85, 0.89),
        (0.90, 0.94),
        (0.95, 0.99),
        (1.00, 1.02),
        (1.03, 1.06),
    ];
}

/// Recovery scoring constants
///
/// References:
/// - Plews, D.J., et al. (2013). "Training adaptation and heart rate
///   variability in elite endurance athletes." *Sports Medicine*, 43(9), 773-781.
/// - Kentta, G., & Hassmen, P. (1998). "Overtraining and recovery: a
///   conceptual model." *Sports Medicine*, 26(1), 1-16.
pub mod recovery {
    /// HRV (RMSSD) reference baseline for males (ms)
    pub const HRV_MALE_BASE: f64 = 65.0;
    /// HRV (RMSSD) reference baseline for females (ms)
    pub const HRV_FEMALE_BASE: f64 = 70.0;
    /// Per-year decline applied to the HRV reference baseline (ms)
    pub const HRV_AGE_DECAY_PER_YEAR: f64 = 0.2;
    /// Recovery-percentage points lost per bpm of resting HR elevation
    pub const RHR_PCT_PER_BPM: f64 = 5.0;
    /// Ceiling on the raw resting-HR recovery percentage before adjustments
    pub const RHR_RAW_CEILING: f64 = 110.0;
    /// Total quality recovery scale: five 1-5 components
    pub const TQR_MAX_POINTS: f64 = 25.0;
}

/// Physics constants for the running power model
///
/// Reference: Cerezuela-Espejo, V., et al. (2020). "Running power meters and
/// theoretical models based on laws of physics." *Scandinavian Journal of
/// Medicine & Science in Sports*, 30(11), 2113-2121.
pub mod power {
    /// Gravitational acceleration (m/s^2)
    pub const GRAVITY: f64 = 9.81;
    /// Air density at sea level, 15 C (kg/m^3)
    pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;
    /// Exponential scale height for altitude density decay (m)
    pub const DENSITY_SCALE_HEIGHT_M: f64 = 7000.0;
    /// Drag coefficient for a runner
    pub const DRAG_COEFFICIENT: f64 = 0.9;
    /// Base rolling resistance coefficient on firm ground
    pub const BASE_ROLLING_COEFFICIENT: f64 = 0.01;
    /// Mechanical efficiency of running (metabolic power = mechanical / efficiency)
    pub const RUNNING_EFFICIENCY: f64 = 0.25;
    /// Frontal-area allometric scale factor
    pub const FRONTAL_AREA_FACTOR: f64 = 0.266;
    /// Frontal-area weight exponent
    pub const FRONTAL_AREA_WEIGHT_EXP: f64 = 0.425;
    /// Frontal-area height exponent
    pub const FRONTAL_AREA_HEIGHT_EXP: f64 = 0.725;
    /// Frontal-area unit divisor
    pub const FRONTAL_AREA_DIVISOR: f64 = 10_000.0;
    /// km/h to m/s divisor
    pub const KPH_TO_MS: f64 = 3.6;
}
