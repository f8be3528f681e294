#![allow(dead_code)]

use std::cell::Cell;

use dishplan::constants::Degree;
use dishplan::coordinates::{EquatorialPosition, GeodeticLocation};
use dishplan::planner_errors::PlannerError;
use dishplan::source::Source;
use dishplan::telescope::Telescope;
use hifitime::Epoch;

/// The 42-ft telescope at Jodrell Bank, 610 MHz receiver.
pub fn jodrell_42ft() -> Telescope {
    let site = GeodeticLocation::parse("53d 14m 10.5s", "2d 18m 25.7s").unwrap();
    Telescope::new("42-ft telescope", site, 12.8, 610.0, 10.0, 0.55, 130.0).unwrap()
}

/// The Vela pulsar.
pub fn vela() -> Source {
    let position = EquatorialPosition::parse("08:35:20.6", "-45:10:34.8").unwrap();
    Source::new("B0833-45", position, 1.1).unwrap()
}

/// Port returning the hour of day (UTC) as an altitude in degrees, shifted by `offset`.
pub fn hour_of_day_port(
    offset: Degree,
) -> impl Fn(&GeodeticLocation, &Epoch, &EquatorialPosition) -> Result<Degree, PlannerError> {
    move |_, instant, _| {
        let (_, _, _, h, m, _, _) = instant.to_gregorian_utc();
        Ok(h as f64 + m as f64 / 60.0 + offset)
    }
}

/// Port counting its calls, failing with a `TransformError` on call number `fail_at`.
pub struct FailingPort {
    pub fail_at: usize,
    pub calls: Cell<usize>,
}

impl FailingPort {
    pub fn new(fail_at: usize) -> Self {
        FailingPort {
            fail_at,
            calls: Cell::new(0),
        }
    }
}

impl dishplan::visibility::CoordinateTransform for FailingPort {
    fn altitude_at(
        &self,
        _: &GeodeticLocation,
        _: &Epoch,
        _: &EquatorialPosition,
    ) -> Result<Degree, PlannerError> {
        let n = self.calls.get() + 1;
        self.calls.set(n);
        if n == self.fail_at {
            Err(PlannerError::TransformError(format!("no ephemeris for call {n}")))
        } else {
            Ok(30.0)
        }
    }
}
