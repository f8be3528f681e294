//! # Constants and type definitions for dishplan
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **unit
//! aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Physical constants (Boltzmann, Jansky)
//! - Unit conversions (degrees ↔ radians, hours ↔ degrees, MHz ↔ Hz)
//! - Sampling policy of the visibility profile
//! - Type aliases documenting the unit carried by a bare `f64`

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Boltzmann constant in J/K (exact, SI 2019)
pub const BOLTZMANN: f64 = 1.380649e-23;

/// One Jansky expressed in W·m⁻²·Hz⁻¹
pub const JANSKY: f64 = 1e-26;

/// MHz → Hz
pub const MHZ_TO_HZ: f64 = 1e6;

/// Number of polarizations summed by the receiver in the radiometer equation
pub const N_POLARIZATIONS: f64 = 2.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Hours of right ascension → degrees
pub const HOUR_TO_DEG: f64 = 15.0;

// -------------------------------------------------------------------------------------------------
// Visibility sampling policy
// -------------------------------------------------------------------------------------------------

/// Spacing between two altitude samples, in seconds (30 minutes)
pub const SAMPLING_STEP_SECONDS: f64 = 1800.0;

/// Number of altitude samples covering one UTC day, `[00:00, 24:00)`
pub const SAMPLES_PER_DAY: usize = 48;

/// Geometric horizon, in degrees
pub const HORIZON_ALTITUDE: Degree = 0.0;

/// Conventional low-elevation limit for single-dish observing, in degrees
pub const LOW_ELEVATION_LIMIT: Degree = 10.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Area in square meters
pub type SquareMeter = f64;
/// Frequency in megahertz
pub type Megahertz = f64;
/// Temperature in Kelvin
pub type Kelvin = f64;
/// Flux density in Jansky
pub type Jansky = f64;
/// Telescope gain in K/Jy
pub type KelvinPerJansky = f64;
/// Duration in seconds
pub type Second = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

#[cfg(test)]
mod constants_test {
    use super::*;

    #[test]
    fn test_samples_per_day() {
        assert_eq!(SAMPLES_PER_DAY as f64 * SAMPLING_STEP_SECONDS, SECONDS_PER_DAY);
    }
}
