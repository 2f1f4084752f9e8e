// ABOUTME: Physics-based running power estimation
// ABOUTME: Gravity, air resistance, and rolling resistance components with terrain and altitude effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Running Power Model
//!
//! Estimates metabolic running power from first principles: the mechanical
//! work against gravity, air drag, and rolling resistance, divided by the
//! mechanical efficiency of running. The result is decomposed per component
//! so the total always reconciles with the breakdown exactly.
//!
//! # Scientific References
//!
//! - Cerezuela-Espejo, V., et al. (2020). "Running power meters and
//!   theoretical models based on laws of physics." *Scandinavian Journal of
//!   Medicine & Science in Sports*, 30(11), 2113-2121.
//! - Du Bois, D., & Du Bois, E.F. (1916). "A formula to estimate the
//!   approximate surface area if height and weight be known." *Archives of
//!   Internal Medicine*, 17, 863-871 (frontal-area allometry).

use crate::errors::{AppError, AppResult};
use crate::models::PowerBreakdown;
use crate::physiological_constants::power;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Running surface, as a rolling-resistance multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    /// Track or paved road (baseline)
    TrackRoad,
    /// Grass
    Grass,
    /// Packed-dirt trail
    TrailPackedDirt,
    /// Soft sand
    SandSoft,
    /// Snow or mud
    SnowMud,
    /// Caller-supplied multiplier for surfaces not listed
    Custom(f64),
}

impl Terrain {
    /// Rolling-resistance multiplier relative to track/road
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::TrackRoad => 1.0,
            Self::Grass => 1.05,
            Self::TrailPackedDirt => 1.1,
            Self::SandSoft => 1.2,
            Self::SnowMud => 1.25,
            Self::Custom(coefficient) => coefficient,
        }
    }
}

/// Inputs to the running power model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerModelInput {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters (frontal-area allometry)
    pub height_cm: f64,
    /// Running speed in km/h
    pub speed_kph: f64,
    /// Grade in percent; negative for downhill
    pub incline_percent: f64,
    /// Wind speed in km/h; positive is a headwind, negative a tailwind
    pub wind_kph: f64,
    /// Running surface
    pub terrain: Terrain,
    /// Altitude above sea level in meters (air-density decay)
    pub altitude_m: f64,
    /// Air temperature in Celsius (air-density scaling)
    pub temperature_c: f64,
}

impl PowerModelInput {
    fn validate(&self) -> AppResult<()> {
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
        if self.speed_kph <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Speed must be positive, got {:.1} km/h",
                self.speed_kph
            )));
        }
        if self.temperature_c <= -273.0 {
            return Err(AppError::out_of_range(format!(
                "Temperature must be above absolute zero, got {:.1} C",
                self.temperature_c
            )));
        }
        if self.terrain.coefficient() <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Terrain coefficient must be positive, got {:.2}",
                self.terrain.coefficient()
            )));
        }
        Ok(())
    }
}

/// Estimate running power, decomposed into its force components
///
/// Each component is the corresponding force times ground speed, divided by
/// the metabolic efficiency of running; the total is their sum, so the
/// breakdown reconciles exactly. The gravity component is signed and goes
/// negative on downhill grades.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for non-positive weight, height, speed,
/// or terrain coefficient, and `AppError::ValueOutOfRange` for a temperature
/// at or below absolute zero.
pub fn estimate_power(input: &PowerModelInput) -> AppResult<PowerBreakdown> {
    input.validate()?;

    let speed_ms = input.speed_kph / power::KPH_TO_MS;
    let wind_ms = input.wind_kph / power::KPH_TO_MS;
    let incline_rad = (input.incline_percent / 100.0).atan();

    // Gravity: signed by the grade
    let gravity_force = input.weight_kg * power::GRAVITY * incline_rad.sin();

    // Air drag: density decays exponentially with altitude, scales inversely
    // with absolute temperature; frontal area is allometric in weight and height
    let air_density = power::SEA_LEVEL_AIR_DENSITY
        * (-input.altitude_m / power::DENSITY_SCALE_HEIGHT_M).exp()
        * (273.0 / (273.0 + input.temperature_c));
    let height_m = input.height_cm / 100.0;
    let frontal_area = power::FRONTAL_AREA_FACTOR
        * input.weight_kg.powf(power::FRONTAL_AREA_WEIGHT_EXP)
        * height_m.powf(power::FRONTAL_AREA_HEIGHT_EXP)
        / power::FRONTAL_AREA_DIVISOR;
    let relative_wind = speed_ms + wind_ms;
    let air_force = 0.5
        * air_density
        * power::DRAG_COEFFICIENT
        * frontal_area
        * relative_wind
        * relative_wind;

    // Rolling resistance, scaled by the surface
    let rolling_force = power::BASE_ROLLING_COEFFICIENT
        * input.terrain.coefficient()
        * input.weight_kg
        * power::GRAVITY
        * incline_rad.cos();

    let to_power = |force: f64| force * speed_ms / power::RUNNING_EFFICIENCY;
    let gravity_watts = to_power(gravity_force);
    let air_watts = to_power(air_force);
    let rolling_watts = to_power(rolling_force);
    let total_watts = gravity_watts + air_watts + rolling_watts;

    debug!(
        speed_ms,
        air_density,
        frontal_area,
        total_watts,
        "estimated running power"
    );
    Ok(PowerBreakdown {
        total_watts,
        gravity_watts,
        air_watts,
        rolling_watts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_input() -> PowerModelInput {
        PowerModelInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            speed_kph: 12.0,
            incline_percent: 0.0,
            wind_kph: 0.0,
            terrain: Terrain::TrackRoad,
            altitude_m: 0.0,
            temperature_c: 20.0,
        }
    }

    #[test]
    fn test_flat_calm_reference() {
        let breakdown = estimate_power(&flat_input()).unwrap();
        assert!((breakdown.gravity_watts - 0.0).abs() < 1e-12);
        let expected_total = 91.578_475_267_928_98;
        assert!(
            ((breakdown.total_watts - expected_total) / expected_total).abs() < 1e-9,
            "total mismatch: {}",
            breakdown.total_watts
        );
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let input = PowerModelInput {
            incline_percent: 5.0,
            wind_kph: 10.0,
            terrain: Terrain::TrailPackedDirt,
            altitude_m: 1500.0,
            temperature_c: 30.0,
            ..flat_input()
        };
        let breakdown = estimate_power(&input).unwrap();
        let sum = breakdown.gravity_watts + breakdown.air_watts + breakdown.rolling_watts;
        assert!(
            (breakdown.total_watts - sum).abs() < 1e-9,
            "components must sum to the total exactly"
        );
    }

    #[test]
    fn test_downhill_gravity_is_negative() {
        let input = PowerModelInput {
            incline_percent: -5.0,
            ..flat_input()
        };
        let breakdown = estimate_power(&input).unwrap();
        assert!(breakdown.gravity_watts < 0.0);
        assert!(breakdown.total_watts < estimate_power(&flat_input()).unwrap().total_watts);
    }

    #[test]
    fn test_soft_surfaces_cost_more() {
        let road = estimate_power(&flat_input()).unwrap();
        let sand = estimate_power(&PowerModelInput {
            terrain: Terrain::SandSoft,
            ..flat_input()
        })
        .unwrap();
        assert!(sand.rolling_watts > road.rolling_watts);
    }

    #[test]
    fn test_rejects_non_positive_custom_terrain() {
        let input = PowerModelInput {
            terrain: Terrain::Custom(0.0),
            ..flat_input()
        };
        assert!(estimate_power(&input).is_err());
    }
}
