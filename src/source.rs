use std::fmt;

use crate::constants::Jansky;
use crate::conversion::{format_dms, format_hms};
use crate::coordinates::EquatorialPosition;
use crate::planner_errors::PlannerError;

/// An astronomical radio source: where it is and how bright it is at the observing frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    name: String,
    position: EquatorialPosition,
    flux_density: Jansky,
}

impl Source {
    /// Create a source.
    ///
    /// Arguments
    /// -----------------
    /// * `name`: identifier of the source, non-empty.
    /// * `position`: J2000 equatorial position.
    /// * `flux_density`: flux density at the telescope observing frequency, in **Jansky**.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] if the name is empty or `flux_density` is not a
    ///   finite number > 0.
    pub fn new(
        name: impl Into<String>,
        position: EquatorialPosition,
        flux_density: Jansky,
    ) -> Result<Self, PlannerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlannerError::ConfigurationError(
                "source name must not be empty".into(),
            ));
        }
        if !(flux_density.is_finite() && flux_density > 0.0) {
            return Err(PlannerError::ConfigurationError(format!(
                "flux density must be a finite number > 0 Jy, got {flux_density}"
            )));
        }

        Ok(Source {
            name,
            position,
            flux_density,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &EquatorialPosition {
        &self.position
    }

    /// Flux density in Jansky.
    pub fn flux_density(&self) -> Jansky {
        self.flux_density
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ra = self.position.ra();
        let dec = self.position.dec();

        writeln!(f, "=========================================")?;
        writeln!(f, "SOURCE")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(
            f,
            "RA / Dec: {ra:.3} deg / {dec:.3} deg ({} / {})",
            format_hms(ra, 1),
            format_dms(dec, 1)
        )?;
        writeln!(
            f,
            "Flux density (at telescope observing frequency): {} Jy",
            self.flux_density
        )?;
        write!(f, "=========================================")
    }
}
