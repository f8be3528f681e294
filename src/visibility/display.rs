//! # Tabular display for visibility profiles
//!
//! [`ProfileTable`] borrows a [`VisibilityProfile`] and renders it as a `comfy-table` table when
//! used with `{}`. One row per sample:
//!
//! `# | UTC | MJD (UTC) | Altitude [deg] | Up | ≥ limit`
//!
//! - `Up` marks samples at or above the geometric horizon.
//! - `≥ limit` marks samples at or above the configured minimum altitude
//!   ([`LOW_ELEVATION_LIMIT`] by default).
//!
//! A footer line summarizes the culmination and the time spent above the limit.
//!
//! ```rust,ignore
//! println!("{}", profile.table().with_min_altitude(15.0).with_precision(1));
//! ```
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use hifitime::Epoch;

use super::VisibilityProfile;
use crate::constants::{Degree, HORIZON_ALTITUDE, LOW_ELEVATION_LIMIT};

/// Display adaptor rendering a [`VisibilityProfile`] as a table.
#[derive(Debug, Clone, Copy)]
pub struct ProfileTable<'a> {
    profile: &'a VisibilityProfile,
    min_altitude: Degree,
    precision: usize,
}

impl<'a> ProfileTable<'a> {
    pub fn new(profile: &'a VisibilityProfile) -> Self {
        ProfileTable {
            profile,
            min_altitude: LOW_ELEVATION_LIMIT,
            precision: 2,
        }
    }

    /// Minimum usable altitude in degrees, used by the `≥ limit` column and the footer.
    pub fn with_min_altitude(mut self, min_altitude: Degree) -> Self {
        self.min_altitude = min_altitude;
        self
    }

    /// Number of fractional digits of the altitude column.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn render(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("#"),
            Cell::new("UTC"),
            Cell::new("MJD (UTC)"),
            Cell::new("Altitude [deg]"),
            Cell::new("Up"),
            Cell::new(format!("≥ {}°", self.min_altitude)),
        ]);

        for (i, s) in self.profile.iter().enumerate() {
            let alt = s.altitude();
            table.add_row(Row::from(vec![
                Cell::new(i).set_alignment(CellAlignment::Right),
                Cell::new(hour_minute(&s.epoch())),
                Cell::new(format!("{:.5}", s.epoch().to_mjd_utc_days()))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.*}", self.precision, alt)).set_alignment(CellAlignment::Right),
                Cell::new(marker(alt >= HORIZON_ALTITUDE)).set_alignment(CellAlignment::Center),
                Cell::new(marker(alt >= self.min_altitude)).set_alignment(CellAlignment::Center),
            ]));
        }

        table.to_string()
    }
}

fn marker(flag: bool) -> &'static str {
    if flag {
        "*"
    } else {
        ""
    }
}

fn hour_minute(epoch: &Epoch) -> String {
    let (_, _, _, h, m, _, _) = epoch.to_gregorian_utc();
    format!("{h:02}:{m:02}")
}

impl fmt::Display for ProfileTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visibility on {} (UTC)", self.profile.date())?;
        writeln!(f, "{}", self.render())?;

        match self.profile.culmination() {
            Some(top) => write!(
                f,
                "Culmination: {:.*} deg at {} UTC, {:.1} h at or above {}°",
                self.precision,
                top.altitude(),
                hour_minute(&top.epoch()),
                self.profile.time_above(self.min_altitude).to_seconds() / 3600.0,
                self.min_altitude
            ),
            None => write!(f, "No samples"),
        }
    }
}

impl VisibilityProfile {
    /// Borrow the profile as a printable [`ProfileTable`].
    pub fn table(&self) -> ProfileTable<'_> {
        ProfileTable::new(self)
    }
}
