//! # Single-dish telescope model
//!
//! A [`Telescope`] gathers the physical and radiometric parameters of one dish and derives its
//! sensitivity from them:
//!
//! - [`Telescope::effective_area`] – geometric collecting area after aperture losses, in m².
//! - [`Telescope::gain`] – temperature response per unit flux density, in K/Jy.
//!
//! A telescope is immutable once built. Both construction paths, [`Telescope::new`] and the
//! fluent [`TelescopeBuilder`], run the same validation so that every derived quantity is
//! strictly positive:
//!
//! * `name` non-empty,
//! * `diameter > 0`, `frequency > 0`, `bandwidth > 0`, `system_temperature > 0`,
//! * `0 < aperture_efficiency ≤ 1`.
//!
//! ## Example
//!
//! ```rust
//! use dishplan::coordinates::GeodeticLocation;
//! use dishplan::telescope::Telescope;
//!
//! let site = GeodeticLocation::parse("53d 14m 10.5s", "2d 18m 25.7s")?;
//! let dish = Telescope::builder("42-ft telescope", site)
//!     .diameter(12.8)
//!     .frequency(610.0)
//!     .bandwidth(10.0)
//!     .aperture_efficiency(0.55)
//!     .system_temperature(130.0)
//!     .build()?;
//!
//! assert!((dish.gain() - 0.0256).abs() < 1e-3);
//! # Ok::<(), dishplan::planner_errors::PlannerError>(())
//! ```
use std::cmp::Ordering::{Equal, Greater, Less};
use std::f64::consts::PI;
use std::fmt;

use crate::constants::{
    Kelvin, KelvinPerJansky, Megahertz, Meter, SquareMeter, BOLTZMANN, JANSKY,
};
use crate::coordinates::GeodeticLocation;
use crate::planner_errors::PlannerError;

/// Physical and radiometric description of a single dish.
#[derive(Debug, Clone, PartialEq)]
pub struct Telescope {
    name: String,
    location: GeodeticLocation,
    diameter: Meter,
    frequency: Megahertz,
    bandwidth: Megahertz,
    aperture_efficiency: f64,
    system_temperature: Kelvin,
}

/// Return true iff x > 0.0 and finite (i.e., neither NaN nor ±∞).
#[inline]
fn gt0(x: f64) -> bool {
    x.is_finite() && x.partial_cmp(&0.0) == Some(Greater)
}

/// Return true iff a <= b and comparable (i.e., not NaN).
#[inline]
fn le(a: f64, b: f64) -> bool {
    matches!(a.partial_cmp(&b), Some(Less) | Some(Equal))
}

impl Telescope {
    /// Create a telescope from all of its parameters.
    ///
    /// Arguments
    /// -----------------
    /// * `name`: identifier of the dish, non-empty.
    /// * `location`: geodetic position of the dish.
    /// * `diameter`: dish diameter in **meters**.
    /// * `frequency`: observing frequency in **MHz** (descriptive only).
    /// * `bandwidth`: receiver bandwidth in **MHz**.
    /// * `aperture_efficiency`: dimensionless, in `(0, 1]`.
    /// * `system_temperature`: system noise temperature in **Kelvin**.
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] naming the first violated invariant.
    pub fn new(
        name: impl Into<String>,
        location: GeodeticLocation,
        diameter: Meter,
        frequency: Megahertz,
        bandwidth: Megahertz,
        aperture_efficiency: f64,
        system_temperature: Kelvin,
    ) -> Result<Self, PlannerError> {
        let telescope = Telescope {
            name: name.into(),
            location,
            diameter,
            frequency,
            bandwidth,
            aperture_efficiency,
            system_temperature,
        };
        telescope.validate()?;
        Ok(telescope)
    }

    /// Start a [`TelescopeBuilder`] for the dish `name` standing at `location`.
    pub fn builder(name: impl Into<String>, location: GeodeticLocation) -> TelescopeBuilder {
        TelescopeBuilder::new(name, location)
    }

    fn validate(&self) -> Result<(), PlannerError> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::ConfigurationError(
                "telescope name must not be empty".into(),
            ));
        }
        if !gt0(self.diameter) {
            return Err(PlannerError::ConfigurationError(format!(
                "diameter must be > 0 m, got {}",
                self.diameter
            )));
        }
        if !gt0(self.frequency) {
            return Err(PlannerError::ConfigurationError(format!(
                "frequency must be > 0 MHz, got {}",
                self.frequency
            )));
        }
        if !gt0(self.bandwidth) {
            return Err(PlannerError::ConfigurationError(format!(
                "bandwidth must be > 0 MHz, got {}",
                self.bandwidth
            )));
        }
        if !(gt0(self.aperture_efficiency) && le(self.aperture_efficiency, 1.0)) {
            return Err(PlannerError::ConfigurationError(format!(
                "aperture efficiency must lie in (0, 1], got {}",
                self.aperture_efficiency
            )));
        }
        if !gt0(self.system_temperature) {
            return Err(PlannerError::ConfigurationError(format!(
                "system temperature must be > 0 K, got {}",
                self.system_temperature
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &GeodeticLocation {
        &self.location
    }

    /// Dish diameter in meters.
    pub fn diameter(&self) -> Meter {
        self.diameter
    }

    /// Observing frequency in MHz.
    pub fn frequency(&self) -> Megahertz {
        self.frequency
    }

    /// Receiver bandwidth in MHz.
    pub fn bandwidth(&self) -> Megahertz {
        self.bandwidth
    }

    pub fn aperture_efficiency(&self) -> f64 {
        self.aperture_efficiency
    }

    /// System temperature in Kelvin.
    pub fn system_temperature(&self) -> Kelvin {
        self.system_temperature
    }

    /// Effective collecting area of the dish, in m².
    ///
    /// ```text
    /// A_eff = η · π · (D / 2)²
    /// ```
    pub fn effective_area(&self) -> SquareMeter {
        let radius = self.diameter / 2.0;
        self.aperture_efficiency * PI * radius * radius
    }

    /// Gain of the dish, in K/Jy.
    ///
    /// ```text
    /// G = A_eff / (2 k_B) · 10⁻²⁶
    /// ```
    ///
    /// The `10⁻²⁶` factor converts the SI flux-density unit (W·m⁻²·Hz⁻¹) into Jansky.
    pub fn gain(&self) -> KelvinPerJansky {
        self.effective_area() / (2.0 * BOLTZMANN) * JANSKY
    }
}

impl fmt::Display for Telescope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=========================================")?;
        writeln!(f, "TELESCOPE")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(
            f,
            "Lat / Lon: {:.3} deg / {:.3} deg",
            self.location.latitude(),
            self.location.longitude()
        )?;
        writeln!(f, "Diameter: {} m", self.diameter)?;
        writeln!(f, "Observing frequency: {} MHz", self.frequency)?;
        writeln!(f, "Bandwidth: {} MHz", self.bandwidth)?;
        writeln!(f, "Aperture efficiency: {}", self.aperture_efficiency)?;
        writeln!(f, "System temperature: {} K", self.system_temperature)?;
        if f.alternate() {
            writeln!(f, "Effective area: {:.3} m^2", self.effective_area())?;
            writeln!(f, "Gain: {:.5} K/Jy", self.gain())?;
        }
        write!(f, "=========================================")
    }
}

/// Builder for [`Telescope`], with validation.
///
/// Every radiometric field is required; [`TelescopeBuilder::build`] reports the first missing
/// one as a [`PlannerError::ConfigurationError`] and then applies the same invariants as
/// [`Telescope::new`].
#[derive(Debug, Clone)]
pub struct TelescopeBuilder {
    name: String,
    location: GeodeticLocation,
    diameter: Option<Meter>,
    frequency: Option<Megahertz>,
    bandwidth: Option<Megahertz>,
    aperture_efficiency: Option<f64>,
    system_temperature: Option<Kelvin>,
}

impl TelescopeBuilder {
    pub fn new(name: impl Into<String>, location: GeodeticLocation) -> Self {
        TelescopeBuilder {
            name: name.into(),
            location,
            diameter: None,
            frequency: None,
            bandwidth: None,
            aperture_efficiency: None,
            system_temperature: None,
        }
    }

    pub fn diameter(mut self, v: Meter) -> Self {
        self.diameter = Some(v);
        self
    }
    pub fn frequency(mut self, v: Megahertz) -> Self {
        self.frequency = Some(v);
        self
    }
    pub fn bandwidth(mut self, v: Megahertz) -> Self {
        self.bandwidth = Some(v);
        self
    }
    pub fn aperture_efficiency(mut self, v: f64) -> Self {
        self.aperture_efficiency = Some(v);
        self
    }
    pub fn system_temperature(mut self, v: Kelvin) -> Self {
        self.system_temperature = Some(v);
        self
    }

    /// Finalize the builder and produce a validated [`Telescope`].
    ///
    /// Errors
    /// ----------
    /// * [`PlannerError::ConfigurationError`] if a field was never set or violates its invariant.
    pub fn build(self) -> Result<Telescope, PlannerError> {
        fn required<T>(value: Option<T>, field: &str) -> Result<T, PlannerError> {
            value.ok_or_else(|| {
                PlannerError::ConfigurationError(format!("telescope {field} is not set"))
            })
        }

        Telescope::new(
            self.name,
            self.location,
            required(self.diameter, "diameter")?,
            required(self.frequency, "frequency")?,
            required(self.bandwidth, "bandwidth")?,
            required(self.aperture_efficiency, "aperture efficiency")?,
            required(self.system_temperature, "system temperature")?,
        )
    }
}

#[cfg(test)]
mod telescope_test {
    use super::*;
    use approx::assert_relative_eq;

    fn site() -> GeodeticLocation {
        GeodeticLocation::new(53.23625, 2.307138888888889).unwrap()
    }

    fn dish(diameter: f64, efficiency: f64, tsys: f64) -> Result<Telescope, PlannerError> {
        Telescope::new("42-ft telescope", site(), diameter, 610.0, 10.0, efficiency, tsys)
    }

    #[test]
    fn test_effective_area_and_gain() {
        let telescope = dish(12.8, 0.55, 130.0).unwrap();
        assert_relative_eq!(telescope.effective_area(), 70.774, epsilon = 1e-3);
        assert_relative_eq!(
            telescope.effective_area(),
            0.55 * PI * 6.4 * 6.4,
            max_relative = 1e-12
        );
        assert_relative_eq!(telescope.gain(), 0.025631, epsilon = 1e-5);
    }

    #[test]
    fn test_gain_scales_with_diameter_squared() {
        let small = dish(10.0, 0.6, 50.0).unwrap();
        let large = dish(20.0, 0.6, 50.0).unwrap();
        assert_relative_eq!(large.gain() / small.gain(), 4.0, max_relative = 1e-12);
        assert!(small.gain() > 0.0);
    }

    #[test]
    fn test_construction_rejects_invalid_parameters() {
        for result in [
            dish(0.0, 0.55, 130.0),
            dish(-3.0, 0.55, 130.0),
            dish(12.8, 1.5, 130.0),
            dish(12.8, 0.0, 130.0),
            dish(12.8, 0.55, -5.0),
            dish(f64::NAN, 0.55, 130.0),
            dish(f64::INFINITY, 0.55, 130.0),
            dish(12.8, 0.55, f64::INFINITY),
            dish(12.8, 0.55, f64::NEG_INFINITY),
            Telescope::new("dish", site(), 12.8, 610.0, f64::INFINITY, 0.55, 130.0),
            Telescope::new("dish", site(), 12.8, f64::INFINITY, 10.0, 0.55, 130.0),
            Telescope::new("dish", site(), 12.8, 610.0, 0.0, 0.55, 130.0),
            Telescope::new("dish", site(), 12.8, -1.0, 10.0, 0.55, 130.0),
            Telescope::new("  ", site(), 12.8, 610.0, 10.0, 0.55, 130.0),
        ] {
            assert!(matches!(result, Err(PlannerError::ConfigurationError(_))));
        }

        assert!(dish(12.8, 1.0, 130.0).is_ok());
    }

    #[test]
    fn test_builder() {
        let built = Telescope::builder("42-ft telescope", site())
            .diameter(12.8)
            .frequency(610.0)
            .bandwidth(10.0)
            .aperture_efficiency(0.55)
            .system_temperature(130.0)
            .build()
            .unwrap();
        assert_eq!(built, dish(12.8, 0.55, 130.0).unwrap());

        let missing = Telescope::builder("42-ft telescope", site())
            .diameter(12.8)
            .frequency(610.0)
            .aperture_efficiency(0.55)
            .system_temperature(130.0)
            .build();
        assert_eq!(
            missing,
            Err(PlannerError::ConfigurationError(
                "telescope bandwidth is not set".into()
            ))
        );
    }

    #[test]
    fn test_display() {
        let telescope = dish(12.8, 0.55, 130.0).unwrap();
        let summary = telescope.to_string();
        assert!(summary.contains("Name: 42-ft telescope"));
        assert!(summary.contains("Lat / Lon: 53.236 deg / 2.307 deg"));
        assert!(summary.contains("System temperature: 130 K"));
        assert!(!summary.contains("Gain"));

        let detailed = format!("{telescope:#}");
        assert!(detailed.contains("Effective area: 70.774 m^2"));
    }
}
