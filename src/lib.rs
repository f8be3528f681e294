//! # dishplan
//!
//! Observation planning for single-dish radio telescopes.
//!
//! Given a [`telescope::Telescope`] (location, diameter, observing frequency, bandwidth,
//! aperture efficiency, system temperature) and a [`source::Source`] (J2000 position and flux
//! density), the crate
//!
//! * derives the dish sensitivity (effective area, gain in K/Jy),
//! * estimates the integration time reaching a target SNR with the radiometer equation
//!   ([`sensitivity`]),
//! * samples the source altitude every 30 minutes over one UTC day ([`visibility`]) through a
//!   pluggable [`visibility::CoordinateTransform`] port.
//!
//! [`planner::ObservationPlanner`] bundles the three from boundary strings, and [`config`] loads
//! telescope and source from TOML.
pub mod config;
pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod earth_orientation;
pub mod planner;
pub mod planner_errors;
pub mod sensitivity;
pub mod source;
pub mod telescope;
pub mod time;
pub mod visibility;
