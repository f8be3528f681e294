//! # Observation planner
//!
//! [`ObservationPlanner`] is the caller-facing surface of the crate: it owns one [`Telescope`],
//! one [`Source`] and a [`CoordinateTransform`] port, and answers the two planning questions
//! from boundary strings:
//!
//! - *when is the source up?* ([`ObservationPlanner::visibility`], a `YYYY-MM-DD` date)
//! - *how long to integrate?* ([`ObservationPlanner::integration_time`], a SNR target)
//!
//! Rendering stays with the caller; entities and estimates implement `Display` and profiles
//! offer [`VisibilityProfile::table`].
//!
//! ## Example
//!
//! ```rust
//! use dishplan::config::PlanConfig;
//! use dishplan::planner::ObservationPlanner;
//!
//! let planner = ObservationPlanner::from_config(&PlanConfig::example()?)?;
//! let profile = planner.visibility("2024-03-01")?;
//! assert_eq!(profile.len(), 48);
//!
//! let estimate = planner.integration_time("10")?;
//! assert!((estimate.seconds - 106.3).abs() < 0.1);
//! # Ok::<(), dishplan::planner_errors::PlannerError>(())
//! ```
use crate::config::PlanConfig;
use crate::planner_errors::PlannerError;
use crate::sensitivity::{integration_time_from_str, IntegrationEstimate};
use crate::source::Source;
use crate::telescope::Telescope;
use crate::time::CivilDate;
use crate::visibility::horizon::MeanHorizonTransform;
use crate::visibility::{sample_altitude, CoordinateTransform, VisibilityProfile};

/// One telescope observing one source through a coordinate transform port.
#[derive(Debug, Clone)]
pub struct ObservationPlanner<T = MeanHorizonTransform> {
    telescope: Telescope,
    source: Source,
    transform: T,
}

impl ObservationPlanner<MeanHorizonTransform> {
    /// Build a planner from a configuration, using the [`MeanHorizonTransform`] port.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] if the telescope or the source is invalid.
    pub fn from_config(config: &PlanConfig) -> Result<Self, PlannerError> {
        let planner = ObservationPlanner::new(
            config.telescope()?,
            config.source()?,
            MeanHorizonTransform::new(),
        );
        log::info!(
            "planning '{}' with '{}'",
            planner.source.name(),
            planner.telescope.name()
        );
        Ok(planner)
    }
}

impl<T: CoordinateTransform> ObservationPlanner<T> {
    pub fn new(telescope: Telescope, source: Source, transform: T) -> Self {
        ObservationPlanner {
            telescope,
            source,
            transform,
        }
    }

    pub fn telescope(&self) -> &Telescope {
        &self.telescope
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Altitude profile of the source for a `YYYY-MM-DD` UTC date.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::InvalidDateError`] if `date` is not a valid civil date; no profile is
    ///   produced and the port is never queried.
    /// * Any port error, see [`sample_altitude`].
    pub fn visibility(&self, date: &str) -> Result<VisibilityProfile, PlannerError> {
        let date: CivilDate = date.parse()?;
        self.visibility_on(&date)
    }

    /// Altitude profile of the source for an already validated date.
    pub fn visibility_on(&self, date: &CivilDate) -> Result<VisibilityProfile, PlannerError> {
        sample_altitude(&self.source, &self.telescope, date, &self.transform)
    }

    /// Integration time needed to reach the SNR target given as text.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::InvalidParameterError`] if `snr` is not a number > 0.
    pub fn integration_time(&self, snr: &str) -> Result<IntegrationEstimate, PlannerError> {
        integration_time_from_str(&self.telescope, &self.source, snr)
    }
}
