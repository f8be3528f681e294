//! # Radiometer-equation sensitivity
//!
//! Integration time needed by a [`Telescope`] to detect a [`Source`] at a target signal-to-noise
//! ratio. With a dual-polarization receiver the radiometer equation reads
//!
//! ```text
//! SNR = G · S · √(n_pol · Δν · t) / T_sys
//! ```
//!
//! which, solved for the integration time, gives
//!
//! ```text
//! t = SNR² · T_sys² / (G² · S² · n_pol · Δν)
//! ```
//!
//! with `G` the gain in K/Jy, `S` the flux density in Jy, `Δν` the bandwidth in Hz and
//! `n_pol` = [`N_POLARIZATIONS`].
use std::fmt;

use crate::constants::{Second, MHZ_TO_HZ, N_POLARIZATIONS};
use crate::planner_errors::PlannerError;
use crate::source::Source;
use crate::telescope::Telescope;

/// Integration time in seconds to reach `snr` on `source` with `telescope`.
///
/// Arguments
/// -----------------
/// * `telescope`: provides gain, system temperature and bandwidth.
/// * `source`: provides the flux density.
/// * `snr`: target signal-to-noise ratio, strictly positive and finite.
///
/// Return
/// ----------
/// * The integration time in seconds. It scales exactly with `snr²` and `T_sys²`, and with
///   `1 / (G² · S² · Δν)`. No upper bound is applied.
///
/// Errors
/// ----------
/// * [`PlannerError::InvalidParameterError`] if `snr` is not a finite number > 0.
pub fn integration_time(
    telescope: &Telescope,
    source: &Source,
    snr: f64,
) -> Result<Second, PlannerError> {
    if !snr.is_finite() || snr <= 0.0 {
        return Err(PlannerError::InvalidParameterError(format!(
            "SNR target must be a finite number > 0, got {snr}"
        )));
    }

    let bandwidth_hz = telescope.bandwidth() * MHZ_TO_HZ;
    let gain = telescope.gain();
    let flux = source.flux_density();
    let tsys = telescope.system_temperature();

    let seconds =
        snr.powi(2) * tsys.powi(2) / (gain.powi(2) * flux.powi(2) * N_POLARIZATIONS * bandwidth_hz);

    log::debug!(
        "integration time for '{}' with '{}' at SNR {snr}: {seconds:.3} s",
        source.name(),
        telescope.name()
    );
    Ok(seconds)
}

/// Parse a SNR target given as text.
///
/// Errors
/// ----------
/// * [`PlannerError::InvalidParameterError`] if `text` is not a number, or not > 0.
pub fn parse_snr(text: &str) -> Result<f64, PlannerError> {
    let snr: f64 = text.trim().parse().map_err(|_| {
        PlannerError::InvalidParameterError(format!("SNR target '{text}' is not a number"))
    })?;

    if !snr.is_finite() || snr <= 0.0 {
        return Err(PlannerError::InvalidParameterError(format!(
            "SNR target must be a finite number > 0, got '{text}'"
        )));
    }
    Ok(snr)
}

/// A SNR target together with the integration time it requires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationEstimate {
    pub snr: f64,
    pub seconds: Second,
}

impl IntegrationEstimate {
    /// Compute the estimate for a numeric SNR target, see [`integration_time`].
    pub fn compute(telescope: &Telescope, source: &Source, snr: f64) -> Result<Self, PlannerError> {
        let seconds = integration_time(telescope, source, snr)?;
        Ok(IntegrationEstimate { snr, seconds })
    }

    /// Integration time in minutes.
    pub fn minutes(&self) -> f64 {
        self.seconds / 60.0
    }
}

impl fmt::Display for IntegrationEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The integration time for observing at SNR of {:.1} is {:.3} seconds.",
            self.snr, self.seconds
        )
    }
}

/// Parse `snr_text` with [`parse_snr`] and compute the matching [`IntegrationEstimate`].
pub fn integration_time_from_str(
    telescope: &Telescope,
    source: &Source,
    snr_text: &str,
) -> Result<IntegrationEstimate, PlannerError> {
    let snr = parse_snr(snr_text)?;
    IntegrationEstimate::compute(telescope, source, snr)
}
