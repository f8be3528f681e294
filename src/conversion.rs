//! # Angle parsing and sexagesimal formatting
//!
//! Boundary helpers converting the textual angle notations accepted in configuration
//! files into **decimal degrees**, and back into sexagesimal strings for summaries.
//!
//! Accepted notations
//! -----------------
//! * Degrees/minutes/seconds: `"53d 14m 10.5s"`, `"-45:10:34.8"`, `"-45 10 34.8"`, `"12°30'15\""`.
//! * Hours/minutes/seconds (right ascension): `"08:35:20.6"`, `"08h35m20.6s"`, `"08 35 20.6"`.
//! * A plain decimal number, always read as **degrees**.
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{Degree, HOUR_TO_DEG};

static DMS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^([+-])?\s*(\d+(?:\.\d*)?)(?:\s*[d°:]\s*|\s+)(\d+(?:\.\d*)?)(?:\s*['m:]\s*|\s+)(\d+(?:\.\d*)?)\s*["s]?$"#,
    )
    .expect("DMS pattern is a valid regex")
});

static HMS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\+?(\d+(?:\.\d*)?)(?:\s*[h:]\s*|\s+)(\d+(?:\.\d*)?)(?:\s*[m:]\s*|\s+)(\d+(?:\.\d*)?)\s*s?$",
    )
    .expect("HMS pattern is a valid regex")
});

/// Parse a plain decimal number, rejecting NaN and infinities.
fn parse_decimal(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Combine three sexagesimal fields, rejecting minutes or seconds outside `[0, 60)`.
fn sexagesimal_to_units(units: &str, minutes: &str, seconds: &str) -> Option<f64> {
    let u: f64 = units.parse().ok()?;
    let m: f64 = minutes.parse().ok()?;
    let s: f64 = seconds.parse().ok()?;
    if m >= 60.0 || s >= 60.0 {
        return None;
    }
    Some(u + m / 60.0 + s / 3600.0)
}

/// Parse a degree angle to decimal degrees.
///
/// Arguments
/// ---------
/// * `text`: a DMS string (`"53d 14m 10.5s"`, `"-45:10:34.8"`, `"-45 10 34.8"`) or a decimal number.
///
/// Returns
/// -------
/// * `Option<Degree>`: the signed angle in degrees, or `None` if the input is malformed or
///   if the minutes/seconds fields are not below 60.
pub fn parse_dms_to_deg(text: &str) -> Option<Degree> {
    let text = text.trim();
    if let Some(value) = parse_decimal(text) {
        return Some(value);
    }

    let caps = DMS_REGEX.captures(text)?;
    let sign = match caps.get(1).map(|m| m.as_str()) {
        Some("-") => -1.0,
        _ => 1.0,
    };
    let magnitude = sexagesimal_to_units(&caps[2], &caps[3], &caps[4])?;
    Some(sign * magnitude)
}

/// Parse a right ascension to decimal degrees.
///
/// Arguments
/// ---------
/// * `text`: an HMS string (`"08:35:20.6"`, `"08h35m20.6s"`, `"08 35 20.6"`) or a decimal number.
///   A decimal number is taken as degrees, not hours.
///
/// Returns
/// -------
/// * `Option<Degree>`: the right ascension in degrees, `None` if the input is malformed.
pub fn parse_hms_to_deg(text: &str) -> Option<Degree> {
    let text = text.trim();
    if let Some(value) = parse_decimal(text) {
        return Some(value);
    }

    let caps = HMS_REGEX.captures(text)?;
    let hours = sexagesimal_to_units(&caps[1], &caps[2], &caps[3])?;
    Some(hours * HOUR_TO_DEG)
}

/// Split a non-negative value into (units, minutes, seconds) with carry, rounding
/// the seconds to `prec` decimals first so that `59.9999` never prints as `60.00`.
fn split_sexagesimal(value: f64, prec: usize) -> (u32, u32, f64) {
    let scale = 10f64.powi(prec as i32);
    let total_seconds = (value * 3600.0 * scale).round() / scale;

    let units = (total_seconds / 3600.0).floor();
    let rest = total_seconds - units * 3600.0;
    let minutes = (rest / 60.0).floor();
    let seconds = rest - minutes * 60.0;

    (units as u32, minutes as u32, seconds.max(0.0))
}

/// Format a right ascension given in degrees as `HHhMMmSS.sss s`.
///
/// Arguments
/// ---------
/// * `ra_deg`: right ascension in degrees, `[0, 360)`.
/// * `prec`: number of decimals on the seconds field.
pub fn format_hms(ra_deg: Degree, prec: usize) -> String {
    let (h, m, s) = split_sexagesimal(ra_deg.rem_euclid(360.0) / HOUR_TO_DEG, prec);
    let width = if prec == 0 { 2 } else { prec + 3 };
    format!("{:02}h{:02}m{:0width$.prec$}s", h % 24, m, s)
}

/// Format a signed angle given in degrees as `±DD°MM'SS.sss"`.
///
/// Arguments
/// ---------
/// * `deg`: the angle in degrees.
/// * `prec`: number of decimals on the seconds field.
pub fn format_dms(deg: Degree, prec: usize) -> String {
    let sign = if deg < 0.0 { '-' } else { '+' };
    let (d, m, s) = split_sexagesimal(deg.abs(), prec);
    let width = if prec == 0 { 2 } else { prec + 3 };
    format!("{sign}{d:02}°{m:02}'{s:0width$.prec$}\"")
}
