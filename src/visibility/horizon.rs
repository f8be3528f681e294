//! Built-in [`CoordinateTransform`]: altitude from mean sidereal time and IAU 1976 precession.
//!
//! The J2000 position is precessed to the mean equator and equinox of date, the local hour angle
//! is taken from the Greenwich mean sidereal time, and the altitude follows from
//!
//! ```text
//! sin h = sin φ · sin δ + cos φ · cos δ · cos H
//! ```
//!
//! Nutation, aberration and polar motion are neglected, as is the UT1 − UTC offset; each stays
//! below 0.01°. The result is the geometric altitude, no refraction is applied.
use hifitime::Epoch;

use super::CoordinateTransform;
use crate::constants::{Degree, Radian, DPI};
use crate::coordinates::{EquatorialPosition, GeodeticLocation};
use crate::earth_orientation::{precession_matrix, to_ra_dec, unit_vector};
use crate::planner_errors::PlannerError;
use crate::time::gmst;

/// Mean-of-date horizon transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanHorizonTransform;

impl MeanHorizonTransform {
    pub fn new() -> Self {
        MeanHorizonTransform
    }

    /// Local mean sidereal time at `location` and `instant`, in radians within `[0, 2π)`.
    pub fn local_sidereal_time(&self, location: &GeodeticLocation, instant: &Epoch) -> Radian {
        (gmst(instant.to_mjd_utc_days()) + location.longitude().to_radians()).rem_euclid(DPI)
    }

    /// Position of date `(ra, dec)` in radians, precessed from J2000.
    pub fn position_of_date(&self, instant: &Epoch, position: &EquatorialPosition) -> (Radian, Radian) {
        let j2000 = unit_vector(position.ra().to_radians(), position.dec().to_radians());
        to_ra_dec(&(precession_matrix(instant.to_mjd_tt_days()) * j2000))
    }
}

impl CoordinateTransform for MeanHorizonTransform {
    fn altitude_at(
        &self,
        location: &GeodeticLocation,
        instant: &Epoch,
        position: &EquatorialPosition,
    ) -> Result<Degree, PlannerError> {
        let (ra, dec) = self.position_of_date(instant, position);
        let hour_angle = self.local_sidereal_time(location, instant) - ra;
        let lat = location.latitude().to_radians();

        let sin_alt = lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos();
        Ok(sin_alt.clamp(-1.0, 1.0).asin().to_degrees())
    }
}
