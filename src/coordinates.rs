//! # Geodetic and equatorial value types
//!
//! Plain immutable positions used by the telescope and source models:
//!
//! - [`GeodeticLocation`]: where the dish stands (latitude, longitude).
//! - [`EquatorialPosition`]: where the source is on the sky (right ascension, declination),
//!   referred to the mean equator and equinox of J2000 (ICRS-aligned).
//!
//! Both types store **decimal degrees** in `NotNan<f64>` so that a constructed value can never
//! hold a NaN, and both validate their ranges at construction. Textual inputs (DMS / HMS
//! strings) are accepted through the `parse` constructors, which delegate to
//! [`crate::conversion`].
//!
//! ## Conventions
//!
//! - Longitude is **east positive**. Inputs in `[-180°, 180°]` or `[0°, 360°)` are accepted and
//!   normalized to `[-180°, 180°]`.
//! - Right ascension is stored in degrees, `[0°, 360°)`, i.e. `[0h, 24h)`.
use ordered_float::NotNan;

use crate::constants::Degree;
use crate::conversion::{parse_dms_to_deg, parse_hms_to_deg};
use crate::planner_errors::PlannerError;

/// Observer position on the Earth, in geodetic decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeodeticLocation {
    latitude: NotNan<f64>,
    longitude: NotNan<f64>,
}

impl GeodeticLocation {
    /// Create a location from decimal degrees.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: geodetic latitude in degrees, `[-90, 90]`.
    /// * `longitude`: longitude in degrees east, `[-180, 180]` or `[0, 360)`.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] if a value is NaN or outside its range.
    pub fn new(latitude: Degree, longitude: Degree) -> Result<Self, PlannerError> {
        let latitude = NotNan::new(latitude)?;
        let longitude = NotNan::new(longitude)?;

        if !(-90.0..=90.0).contains(&*latitude) {
            return Err(PlannerError::ConfigurationError(format!(
                "latitude must lie in [-90°, 90°], got {latitude}°"
            )));
        }
        if !(-180.0..360.0).contains(&*longitude) {
            return Err(PlannerError::ConfigurationError(format!(
                "longitude must lie in [-180°, 180°] or [0°, 360°), got {longitude}°"
            )));
        }

        let normalized = if *longitude > 180.0 {
            *longitude - 360.0
        } else {
            *longitude
        };

        Ok(GeodeticLocation {
            latitude,
            longitude: NotNan::new(normalized)?,
        })
    }

    /// Create a location from DMS strings (e.g. `"53d 14m 10.5s"`) or decimal-degree strings.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] if a string cannot be parsed, or on range violation.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, PlannerError> {
        let lat = parse_dms_to_deg(latitude).ok_or_else(|| {
            PlannerError::ConfigurationError(format!("unparseable latitude '{latitude}'"))
        })?;
        let lon = parse_dms_to_deg(longitude).ok_or_else(|| {
            PlannerError::ConfigurationError(format!("unparseable longitude '{longitude}'"))
        })?;
        GeodeticLocation::new(lat, lon)
    }

    /// Geodetic latitude in degrees.
    pub fn latitude(&self) -> Degree {
        self.latitude.into_inner()
    }

    /// Longitude in degrees east, `[-180, 180]`.
    pub fn longitude(&self) -> Degree {
        self.longitude.into_inner()
    }
}

/// Source position on the celestial sphere (J2000), in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EquatorialPosition {
    ra: NotNan<f64>,
    dec: NotNan<f64>,
}

impl EquatorialPosition {
    /// Create a position from decimal degrees.
    ///
    /// Arguments
    /// -----------------
    /// * `ra`: right ascension in degrees, `[0, 360)`.
    /// * `dec`: declination in degrees, `[-90, 90]`.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] if a value is NaN or outside its range.
    pub fn new(ra: Degree, dec: Degree) -> Result<Self, PlannerError> {
        let ra = NotNan::new(ra)?;
        let dec = NotNan::new(dec)?;

        if !(0.0..360.0).contains(&*ra) {
            return Err(PlannerError::ConfigurationError(format!(
                "right ascension must lie in [0h, 24h), got {ra}°"
            )));
        }
        if !(-90.0..=90.0).contains(&*dec) {
            return Err(PlannerError::ConfigurationError(format!(
                "declination must lie in [-90°, 90°], got {dec}°"
            )));
        }

        Ok(EquatorialPosition { ra, dec })
    }

    /// Create a position from an HMS right ascension (`"08:35:20.6"`) and a DMS declination
    /// (`"-45:10:34.8"`). Decimal strings are read as degrees.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] if a string cannot be parsed, or on range violation.
    pub fn parse(ra: &str, dec: &str) -> Result<Self, PlannerError> {
        let ra_deg = parse_hms_to_deg(ra).ok_or_else(|| {
            PlannerError::ConfigurationError(format!("unparseable right ascension '{ra}'"))
        })?;
        let dec_deg = parse_dms_to_deg(dec).ok_or_else(|| {
            PlannerError::ConfigurationError(format!("unparseable declination '{dec}'"))
        })?;
        EquatorialPosition::new(ra_deg, dec_deg)
    }

    /// Right ascension in degrees, `[0, 360)`.
    pub fn ra(&self) -> Degree {
        self.ra.into_inner()
    }

    /// Declination in degrees.
    pub fn dec(&self) -> Degree {
        self.dec.into_inner()
    }
}
