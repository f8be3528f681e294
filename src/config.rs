//! # Observation configuration files
//!
//! A plan is described by a TOML document with one `[telescope]` and one `[source]` table:
//!
//! ```toml
//! [telescope]
//! name = "42-ft telescope"
//! latitude = "53d 14m 10.5s"      # or 53.23625
//! longitude = "2d 18m 25.7s"      # degrees east
//! diameter = 12.8                 # m
//! frequency = 610.0               # MHz
//! bandwidth = 10.0                # MHz
//! aperture_efficiency = 0.55
//! system_temperature = 130.0      # K
//!
//! [source]
//! name = "B0833-45"
//! ra = "08:35:20.6"               # hours, or decimal degrees
//! dec = "-45:10:34.8"
//! flux_density = 1.1              # Jy
//! ```
//!
//! Angles accept either a number (decimal degrees) or a sexagesimal string, see [`AngleValue`].
//! Parsing only checks the document shape; [`PlanConfig::telescope`] and [`PlanConfig::source`]
//! apply the construction invariants of [`Telescope`] and [`Source`].
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{Degree, Jansky, Kelvin, Megahertz, Meter};
use crate::conversion::{parse_dms_to_deg, parse_hms_to_deg};
use crate::coordinates::{EquatorialPosition, GeodeticLocation};
use crate::planner_errors::PlannerError;
use crate::source::Source;
use crate::telescope::Telescope;

const EXAMPLE_CONFIG: &str = include_str!("../configs/42ft_b0833-45.toml");

/// An angle written either as decimal degrees or as a sexagesimal string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AngleValue {
    Degrees(f64),
    Text(String),
}

impl AngleValue {
    /// Angle in degrees, reading strings as degrees/minutes/seconds.
    pub fn dms_degrees(&self, field: &str) -> Result<Degree, PlannerError> {
        self.to_degrees(field, parse_dms_to_deg)
    }

    /// Angle in degrees, reading strings as hours/minutes/seconds.
    pub fn hms_degrees(&self, field: &str) -> Result<Degree, PlannerError> {
        self.to_degrees(field, parse_hms_to_deg)
    }

    fn to_degrees(
        &self,
        field: &str,
        parse: fn(&str) -> Option<Degree>,
    ) -> Result<Degree, PlannerError> {
        match self {
            AngleValue::Degrees(deg) => Ok(*deg),
            AngleValue::Text(text) => parse(text).ok_or_else(|| {
                PlannerError::ConfigurationError(format!("unparseable {field} '{text}'"))
            }),
        }
    }
}

impl fmt::Display for AngleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleValue::Degrees(deg) => write!(f, "{deg}°"),
            AngleValue::Text(text) => write!(f, "{text}"),
        }
    }
}

/// `[telescope]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelescopeConfig {
    pub name: String,
    pub latitude: AngleValue,
    pub longitude: AngleValue,
    pub diameter: Meter,
    pub frequency: Megahertz,
    pub bandwidth: Megahertz,
    pub aperture_efficiency: f64,
    pub system_temperature: Kelvin,
}

/// `[source]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub name: String,
    pub ra: AngleValue,
    pub dec: AngleValue,
    pub flux_density: Jansky,
}

/// A complete observation plan: one telescope and one source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    pub telescope: TelescopeConfig,
    pub source: SourceConfig,
}

impl PlanConfig {
    /// Parse a TOML document.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigParsingError`] if the document is not valid TOML or a table/field
    ///   is missing, mistyped or unknown.
    pub fn from_toml_str(text: &str) -> Result<Self, PlannerError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::IoError`] if the file cannot be read.
    /// * [`PlannerError::ConfigParsingError`], see [`PlanConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PlannerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded observation plan from {}", path.display());
        Ok(config)
    }

    /// The bundled plan: the 42-ft telescope at Jodrell Bank observing the Vela pulsar B0833-45.
    pub fn example() -> Result<Self, PlannerError> {
        Self::from_toml_str(EXAMPLE_CONFIG)
    }

    /// Build the validated [`Telescope`].
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] on unparseable angles or violated invariants.
    pub fn telescope(&self) -> Result<Telescope, PlannerError> {
        let t = &self.telescope;
        let location = GeodeticLocation::new(
            t.latitude.dms_degrees("latitude")?,
            t.longitude.dms_degrees("longitude")?,
        )?;

        Telescope::builder(t.name.clone(), location)
            .diameter(t.diameter)
            .frequency(t.frequency)
            .bandwidth(t.bandwidth)
            .aperture_efficiency(t.aperture_efficiency)
            .system_temperature(t.system_temperature)
            .build()
    }

    /// Build the validated [`Source`].
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] on unparseable angles or violated invariants.
    pub fn source(&self) -> Result<Source, PlannerError> {
        let s = &self.source;
        let position = EquatorialPosition::new(
            s.ra.hms_degrees("right ascension")?,
            s.dec.dms_degrees("declination")?,
        )?;
        Source::new(s.name.clone(), position, s.flux_density)
    }
}

#[cfg(test)]
mod config_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_example_builds_reference_pair() {
        let config = PlanConfig::example().unwrap();
        let dish = config.telescope().unwrap();
        let vela = config.source().unwrap();

        assert_eq!(dish.name(), "42-ft telescope");
        assert_relative_eq!(dish.location().latitude(), 53.236_25, epsilon = 1e-9);
        assert_relative_eq!(dish.location().longitude(), 2.307_138_888_888_889, epsilon = 1e-9);
        assert_relative_eq!(dish.effective_area(), 70.7738, epsilon = 1e-3);

        assert_eq!(vela.name(), "B0833-45");
        assert_relative_eq!(vela.position().ra(), 128.835_833_333, epsilon = 1e-8);
        assert_relative_eq!(vela.position().dec(), -45.176_333_333, epsilon = 1e-8);
        assert_eq!(vela.flux_density(), 1.1);
    }

    #[test]
    fn test_numeric_angles() {
        let text = r#"
            [telescope]
            name = "dish"
            latitude = -30.7
            longitude = 21
            diameter = 13.5
            frequency = 1400
            bandwidth = 50
            aperture_efficiency = 0.7
            system_temperature = 20

            [source]
            name = "src"
            ra = 83.6
            dec = 22.0
            flux_density = 3
        "#;
        let config = PlanConfig::from_toml_str(text).unwrap();
        assert_eq!(config.telescope.latitude, AngleValue::Degrees(-30.7));
        assert_eq!(config.telescope.longitude, AngleValue::Degrees(21.0));
        assert_eq!(config.source().unwrap().position().ra(), 83.6);
        assert_eq!(config.telescope().unwrap().diameter(), 13.5);
    }

    #[test]
    fn test_invalid_values_are_configuration_errors() {
        let bad_efficiency = EXAMPLE_CONFIG.replace("aperture_efficiency = 0.55", "aperture_efficiency = 1.5");
        let config = PlanConfig::from_toml_str(&bad_efficiency).unwrap();
        assert!(matches!(
            config.telescope(),
            Err(PlannerError::ConfigurationError(_))
        ));

        let bad_ra = EXAMPLE_CONFIG.replace("\"08:35:20.6\"", "\"08:75:20.6\"");
        let config = PlanConfig::from_toml_str(&bad_ra).unwrap();
        assert_eq!(
            config.source(),
            Err(PlannerError::ConfigurationError(
                "unparseable right ascension '08:75:20.6'".into()
            ))
        );
    }

    #[test]
    fn test_non_finite_values_are_configuration_errors() {
        for (field, value) in [
            ("system_temperature = 130.0", "system_temperature = inf"),
            ("diameter = 12.8", "diameter = inf"),
            ("bandwidth = 10.0", "bandwidth = inf"),
        ] {
            let text = EXAMPLE_CONFIG.replace(field, value);
            let config = PlanConfig::from_toml_str(&text).unwrap();
            assert!(
                matches!(config.telescope(), Err(PlannerError::ConfigurationError(_))),
                "{value}"
            );
        }

        let text = EXAMPLE_CONFIG.replace("flux_density = 1.1", "flux_density = inf");
        let config = PlanConfig::from_toml_str(&text).unwrap();
        assert!(matches!(
            config.source(),
            Err(PlannerError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            PlanConfig::from_toml_str("[telescope]\nname = \"dish\""),
            Err(PlannerError::ConfigParsingError(_))
        ));

        let unknown = format!("{EXAMPLE_CONFIG}\n[extra]\nkey = 1\n");
        assert!(matches!(
            PlanConfig::from_toml_str(&unknown),
            Err(PlannerError::ConfigParsingError(_))
        ));

        assert!(matches!(
            PlanConfig::from_file("does/not/exist.toml"),
            Err(PlannerError::IoError(_))
        ));
    }
}
