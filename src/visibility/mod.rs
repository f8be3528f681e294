//! # Visibility profile of a source over one UTC day
//!
//! This module samples the **altitude** of a [`Source`] seen from a [`Telescope`] on a fixed time
//! grid covering one civil UTC day, to judge when the source can be observed.
//!
//! ## Overview
//!
//! - [`CoordinateTransform`] is the port through which all astronomy is delegated: given the
//!   observer location, an instant, and an equatorial position, it returns the altitude above
//!   the horizon. The sampler never computes sidereal time or frame rotations itself.
//! - [`sample_altitude`] drives the port across the grid `00:00, 00:30, …, 23:30 UTC`
//!   (48 samples, half-open interval `[00:00, 24:00)`) and returns a [`VisibilityProfile`].
//! - [`horizon::MeanHorizonTransform`] is a ready-to-use implementation of the port.
//! - [`display`] renders a profile as a table.
//!
//! ## Failure policy
//!
//! - The date is validated before any call to the port: a [`CivilDate`] cannot hold an invalid
//!   calendar date, and [`sample_altitude_on`] parses its text first.
//! - Sampling is **fail-fast**: the first port error is returned unchanged and the remaining
//!   timestamps are not evaluated. No partial profile is ever returned.
//! - A port returning NaN or an altitude outside `[-90°, 90°]` aborts sampling with
//!   [`PlannerError::TransformError`].
//!
//! ## Example
//!
//! ```rust
//! use dishplan::coordinates::{EquatorialPosition, GeodeticLocation};
//! use dishplan::source::Source;
//! use dishplan::telescope::Telescope;
//! use dishplan::time::CivilDate;
//! use dishplan::visibility::{horizon::MeanHorizonTransform, sample_altitude};
//!
//! let site = GeodeticLocation::parse("53d 14m 10.5s", "2d 18m 25.7s")?;
//! let dish = Telescope::new("42-ft telescope", site, 12.8, 610.0, 10.0, 0.55, 130.0)?;
//! let vela = Source::new("B0833-45", EquatorialPosition::parse("08:35:20.6", "-45:10:34.8")?, 1.1)?;
//!
//! let date: CivilDate = "2024-03-01".parse()?;
//! let profile = sample_altitude(&vela, &dish, &date, &MeanHorizonTransform::new())?;
//! assert_eq!(profile.len(), 48);
//! # Ok::<(), dishplan::planner_errors::PlannerError>(())
//! ```
pub mod display;
pub mod horizon;

use hifitime::{Duration, Epoch};

use crate::constants::{Degree, SAMPLING_STEP_SECONDS};
use crate::coordinates::{EquatorialPosition, GeodeticLocation};
use crate::planner_errors::PlannerError;
use crate::source::Source;
use crate::telescope::Telescope;
use crate::time::CivilDate;

/// Port converting an equatorial position into an altitude for one observer and instant.
///
/// Implementations own every piece of astronomy involved (sidereal time, precession, frame
/// rotation). Sub-0.1° accuracy is enough for visibility planning.
///
/// Any closure `Fn(&GeodeticLocation, &Epoch, &EquatorialPosition) -> Result<Degree, PlannerError>`
/// is a port, which makes deterministic fakes trivial to write.
pub trait CoordinateTransform {
    /// Altitude above the horizon, in degrees, of `position` seen from `location` at `instant`.
    ///
    /// Errors
    /// ----------
    /// * Any [`PlannerError`]; it is propagated unchanged to the caller of the sampler.
    fn altitude_at(
        &self,
        location: &GeodeticLocation,
        instant: &Epoch,
        position: &EquatorialPosition,
    ) -> Result<Degree, PlannerError>;
}

impl<F> CoordinateTransform for F
where
    F: Fn(&GeodeticLocation, &Epoch, &EquatorialPosition) -> Result<Degree, PlannerError>,
{
    fn altitude_at(
        &self,
        location: &GeodeticLocation,
        instant: &Epoch,
        position: &EquatorialPosition,
    ) -> Result<Degree, PlannerError> {
        self(location, instant, position)
    }
}

/// Altitude of a source at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeSample {
    epoch: Epoch,
    altitude: Degree,
}

impl AltitudeSample {
    /// Create a sample.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::TransformError`] if `altitude` is NaN or outside `[-90°, 90°]`.
    pub fn new(epoch: Epoch, altitude: Degree) -> Result<Self, PlannerError> {
        if !(-90.0..=90.0).contains(&altitude) {
            return Err(PlannerError::TransformError(format!(
                "altitude {altitude}° at {epoch} lies outside [-90°, 90°]"
            )));
        }
        Ok(AltitudeSample { epoch, altitude })
    }

    /// Timestamp of the sample (UTC).
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Altitude above the horizon, in degrees.
    pub fn altitude(&self) -> Degree {
        self.altitude
    }
}

/// Altitude samples of one source, for one telescope and one UTC date, in ascending time order.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityProfile {
    date: CivilDate,
    step_seconds: f64,
    samples: Vec<AltitudeSample>,
}

impl VisibilityProfile {
    /// The civil date covered by the profile.
    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// Spacing between two consecutive samples, in seconds.
    pub fn step_seconds(&self) -> f64 {
        self.step_seconds
    }

    pub fn samples(&self) -> &[AltitudeSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AltitudeSample> {
        self.samples.iter()
    }

    /// The highest sample of the day (first one on ties).
    pub fn culmination(&self) -> Option<&AltitudeSample> {
        self.samples
            .iter()
            .reduce(|best, s| if s.altitude > best.altitude { s } else { best })
    }

    /// Samples whose altitude is at or above `threshold` degrees, in time order.
    pub fn above(&self, threshold: Degree) -> impl Iterator<Item = &AltitudeSample> {
        self.samples.iter().filter(move |s| s.altitude >= threshold)
    }

    /// Whether at least one sample reaches `threshold` degrees.
    pub fn is_visible(&self, threshold: Degree) -> bool {
        self.above(threshold).next().is_some()
    }

    /// Time spent at or above `threshold` degrees, counted as whole sampling steps.
    pub fn time_above(&self, threshold: Degree) -> Duration {
        let count = self.above(threshold).count();
        Duration::from_seconds(count as f64 * self.step_seconds)
    }
}

impl<'a> IntoIterator for &'a VisibilityProfile {
    type Item = &'a AltitudeSample;
    type IntoIter = std::slice::Iter<'a, AltitudeSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Sample the altitude of `source` seen by `telescope` across one UTC day.
///
/// Timestamps start at `date 00:00:00 UTC` and are spaced by
/// [`SAMPLING_STEP_SECONDS`] (30 minutes); the day is covered as the half-open interval
/// `[00:00, 24:00)`, giving [`SAMPLES_PER_DAY`](crate::constants::SAMPLES_PER_DAY) = 48 samples,
/// the last one at `23:30:00 UTC`.
///
/// Arguments
/// -----------------
/// * `source`: provides the equatorial position.
/// * `telescope`: provides the observer location.
/// * `date`: a validated civil date.
/// * `transform`: the [`CoordinateTransform`] port evaluating each altitude.
///
/// Return
/// ----------
/// * A [`VisibilityProfile`] with one [`AltitudeSample`] per timestamp, in ascending order.
///   For a deterministic port, the profile is bit-for-bit reproducible.
///
/// Errors
/// ----------
/// * The first error produced by `transform`, unchanged; later timestamps are not evaluated.
/// * [`PlannerError::TransformError`] if the port returns an altitude outside `[-90°, 90°]`.
pub fn sample_altitude<T>(
    source: &Source,
    telescope: &Telescope,
    date: &CivilDate,
    transform: &T,
) -> Result<VisibilityProfile, PlannerError>
where
    T: CoordinateTransform + ?Sized,
{
    let location = telescope.location();
    let position = source.position();

    let samples = date
        .day_grid(SAMPLING_STEP_SECONDS)?
        .into_iter()
        .map(|epoch| {
            let altitude = transform.altitude_at(location, &epoch, position)?;
            AltitudeSample::new(epoch, altitude)
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "sampled {} altitudes of '{}' from '{}' on {date}",
        samples.len(),
        source.name(),
        telescope.name()
    );

    Ok(VisibilityProfile {
        date: *date,
        step_seconds: SAMPLING_STEP_SECONDS,
        samples,
    })
}

/// Parse a `YYYY-MM-DD` date, then run [`sample_altitude`].
///
/// Errors
/// ----------
/// * [`PlannerError::InvalidDateError`] if `date` is not a valid civil date; the port is not
///   called in that case.
/// * Any error of [`sample_altitude`].
pub fn sample_altitude_on<T>(
    source: &Source,
    telescope: &Telescope,
    date: &str,
    transform: &T,
) -> Result<VisibilityProfile, PlannerError>
where
    T: CoordinateTransform + ?Sized,
{
    let date: CivilDate = date.parse()?;
    sample_altitude(source, telescope, &date, transform)
}

#[cfg(test)]
mod visibility_test {
    use super::*;
    use crate::constants::SAMPLES_PER_DAY;
    use std::cell::Cell;

    fn telescope() -> Telescope {
        let site = GeodeticLocation::new(53.23625, 2.307138888888889).unwrap();
        Telescope::new("42-ft telescope", site, 12.8, 610.0, 10.0, 0.55, 130.0).unwrap()
    }

    fn source() -> Source {
        let pos = EquatorialPosition::new(128.83583333333334, -45.17633333333333).unwrap();
        Source::new("B0833-45", pos, 1.1).unwrap()
    }

    /// Fake port: altitude grows by one degree per sample from -24°.
    fn ramp(
        _: &GeodeticLocation,
        instant: &Epoch,
        _: &EquatorialPosition,
    ) -> Result<Degree, PlannerError> {
        let (_, _, _, h, m, _, _) = instant.to_gregorian_utc();
        Ok(-24.0 + (h as f64 * 2.0 + m as f64 / 30.0))
    }

    #[test]
    fn test_sample_altitude_grid() {
        let date = CivilDate::new(2024, 3, 1).unwrap();
        let profile = sample_altitude(&source(), &telescope(), &date, &ramp).unwrap();

        assert_eq!(profile.len(), SAMPLES_PER_DAY);
        assert_eq!(profile.date(), date);
        assert_eq!(profile.samples()[0].epoch(), date.midnight_utc());
        assert_eq!(profile.samples()[0].altitude(), -24.0);
        assert_eq!(profile.samples()[47].altitude(), 23.0);

        let last = profile.samples()[47].epoch().to_gregorian_utc();
        assert_eq!((last.3, last.4, last.5), (23, 30, 0));

        assert!(profile
            .samples()
            .windows(2)
            .all(|w| w[0].epoch() < w[1].epoch()));
    }

    #[test]
    fn test_profile_queries() {
        let date = CivilDate::new(2024, 3, 1).unwrap();
        let profile = sample_altitude(&source(), &telescope(), &date, &ramp).unwrap();

        let top = profile.culmination().unwrap();
        assert_eq!(top.altitude(), 23.0);

        // altitudes 0..=23 are at or above the horizon: 24 samples, 12 hours
        assert_eq!(profile.above(0.0).count(), 24);
        assert_eq!(profile.time_above(0.0), Duration::from_seconds(12.0 * 3600.0));
        assert_eq!(profile.above(10.0).count(), 14);
        assert!(profile.is_visible(23.0));
        assert!(!profile.is_visible(23.5));
        assert_eq!(profile.iter().count(), (&profile).into_iter().count());
    }

    #[test]
    fn test_fail_fast_on_port_error() {
        let calls = Cell::new(0usize);
        let failing = |_: &GeodeticLocation, _: &Epoch, _: &EquatorialPosition| {
            calls.set(calls.get() + 1);
            if calls.get() == 5 {
                Err(PlannerError::TransformError("ephemeris unavailable".into()))
            } else {
                Ok(12.0)
            }
        };

        let date = CivilDate::new(2024, 3, 1).unwrap();
        let result = sample_altitude(&source(), &telescope(), &date, &failing);

        assert_eq!(
            result,
            Err(PlannerError::TransformError("ephemeris unavailable".into()))
        );
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_out_of_range_altitude_is_rejected() {
        let broken = |_: &GeodeticLocation, _: &Epoch, _: &EquatorialPosition| {
            Ok::<Degree, PlannerError>(f64::NAN)
        };
        let date = CivilDate::new(2024, 3, 1).unwrap();
        assert!(matches!(
            sample_altitude(&source(), &telescope(), &date, &broken),
            Err(PlannerError::TransformError(_))
        ));

        assert!(AltitudeSample::new(date.midnight_utc(), 90.5).is_err());
        assert!(AltitudeSample::new(date.midnight_utc(), -90.0).is_ok());
    }

    #[test]
    fn test_invalid_date_never_calls_port() {
        let calls = Cell::new(0usize);
        let counting = |_: &GeodeticLocation, _: &Epoch, _: &EquatorialPosition| {
            calls.set(calls.get() + 1);
            Ok::<Degree, PlannerError>(0.0)
        };

        let result = sample_altitude_on(&source(), &telescope(), "2024-02-30", &counting);
        assert!(matches!(result, Err(PlannerError::InvalidDateError(_))));
        assert_eq!(calls.get(), 0);

        let profile = sample_altitude_on(&source(), &telescope(), "2024-03-01", &counting).unwrap();
        assert_eq!(profile.len(), 48);
        assert_eq!(calls.get(), 48);
    }
}
