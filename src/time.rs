use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use hifitime::{Duration, Epoch};
use regex::Regex;

use crate::constants::{Radian, DPI, MJD, SECONDS_PER_DAY, T2000};
use crate::planner_errors::PlannerError;

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("date pattern is a valid regex")
});

/// A civil calendar date in UTC, without time of day.
///
/// A `CivilDate` can only be obtained through [`CivilDate::new`] or [`str::parse`], both of
/// which reject dates that do not exist in the Gregorian calendar (e.g. `2024-02-30`).
/// Holding a `CivilDate` therefore guarantees that the date is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Build a validated civil date.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::InvalidDateError`] if hifitime rejects the date as a Gregorian calendar
    ///   date (month outside `1..=12`, day not in that month).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, PlannerError> {
        Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0).map_err(|err| {
            PlannerError::InvalidDateError(format!("{year:04}-{month:02}-{day:02}: {err}"))
        })?;

        Ok(CivilDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// The instant `00:00:00 UTC` of this date.
    pub fn midnight_utc(&self) -> Epoch {
        Epoch::from_gregorian_utc_at_midnight(self.year, self.month, self.day)
    }

    /// Timestamps covering this UTC day at a fixed cadence.
    ///
    /// The grid starts at `00:00:00 UTC` and covers the half-open interval `[00:00, 24:00)`:
    /// the instant `24:00:00` (midnight of the next day) is never included.
    ///
    /// Arguments
    /// -----------------
    /// * `step_seconds`: spacing between two timestamps, in seconds. Must be strictly positive.
    ///
    /// Return
    /// ----------
    /// * `ceil(86400 / step_seconds)` epochs in ascending order.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::InvalidParameterError`] if `step_seconds` is not strictly positive.
    pub fn day_grid(&self, step_seconds: f64) -> Result<Vec<Epoch>, PlannerError> {
        if step_seconds.partial_cmp(&0.0) != Some(std::cmp::Ordering::Greater) {
            return Err(PlannerError::InvalidParameterError(format!(
                "sampling step must be > 0 s, got {step_seconds}"
            )));
        }

        let start = self.midnight_utc();
        let count = (SECONDS_PER_DAY / step_seconds).ceil() as usize;
        Ok((0..count)
            .map(|i| start + Duration::from_seconds(step_seconds * i as f64))
            .collect())
    }
}

impl FromStr for CivilDate {
    type Err = PlannerError;

    /// Parse a `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATE_REGEX.captures(s.trim()).ok_or_else(|| {
            PlannerError::InvalidDateError(format!("'{s}' is not in YYYY-MM-DD format"))
        })?;

        let year = i32::from_str(&caps[1])
            .map_err(|_| PlannerError::InvalidDateError(format!("invalid year in '{s}'")))?;
        let month = u8::from_str(&caps[2])
            .map_err(|_| PlannerError::InvalidDateError(format!("invalid month in '{s}'")))?;
        let day = u8::from_str(&caps[3])
            .map_err(|_| PlannerError::InvalidDateError(format!("invalid day in '{s}'")))?;

        CivilDate::new(year, month, day)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT1 time scale).
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT1 time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST at 0h UT1 is a cubic polynomial (IAU 1982) in Julian centuries since J2000.0,
/// to which the Earth rotation accumulated during the fraction of the day is added,
/// scaled by the ratio of the sidereal to the solar day.
pub fn gmst(tjm: MJD) -> Radian {
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // sidereal day / solar day
    const RAP: f64 = 1.00273790934;

    let day = tjm.floor();
    let t = (day - T2000) / 36525.0;

    // seconds of sidereal time at 0h UT1, then radians
    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * DPI / SECONDS_PER_DAY;

    let fraction = (tjm - day) * DPI;
    (gmst0 + fraction * RAP).rem_euclid(DPI)
}
