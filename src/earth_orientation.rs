use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Radian, MJD, RADEG, T2000};

/// Active rotation matrix of angle `alpha` (radians) around the coordinate axis `axis`.
///
/// The matrix rotates a **vector** within a fixed frame (right-hand rule), it does not
/// describe a change of basis.
///
/// # Arguments
/// * `alpha` - rotation angle in radians
/// * `axis` - one of [`Vector3::x_axis`], [`Vector3::y_axis`], [`Vector3::z_axis`]
pub fn rotmt(alpha: Radian, axis: &nalgebra::Unit<Vector3<f64>>) -> Matrix3<f64> {
    Rotation3::from_axis_angle(axis, alpha).into()
}

/// IAU 1976 precession angles (ζ, z, θ) in radians for a Modified Julian Date in TT.
///
/// ```text
/// ζ(T) = (0.6406161 + 0.0000839·T + 0.0000050·T²) · T  [deg]
/// z(T) = (0.6406161 + 0.0003041·T + 0.0000051·T²) · T  [deg]
/// θ(T) = (0.5567530 - 0.0001185·T - 0.0000116·T²) · T  [deg]
/// ```
/// with `T` in Julian centuries since J2000.0.
pub fn precession_angles(tjm: MJD) -> (Radian, Radian, Radian) {
    let t = (tjm - T2000) / 36525.0;

    let zeta = ((0.0000050 * t + 0.0000839) * t + 0.6406161) * t * RADEG;
    let z = ((0.0000051 * t + 0.0003041) * t + 0.6406161) * t * RADEG;
    let theta = ((-0.0000116 * t - 0.0001185) * t + 0.5567530) * t * RADEG;

    (zeta, z, theta)
}

/// Precession matrix from the mean equator and equinox of J2000 to the mean equator and
/// equinox of date (IAU 1976).
///
/// For a unit vector `x_J2000` pointing at a source, `x_date = P · x_J2000`.
/// `P` is the composition of three vector rotations: `+ζ` about Z, `−θ` about Y, then `+z`
/// about Z.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (TT time scale)
pub fn precession_matrix(tjm: MJD) -> Matrix3<f64> {
    let (zeta, z, theta) = precession_angles(tjm);

    rotmt(z, &Vector3::z_axis()) * rotmt(-theta, &Vector3::y_axis()) * rotmt(zeta, &Vector3::z_axis())
}

/// Unit vector pointing at the equatorial direction `(ra, dec)`, both in radians.
pub fn unit_vector(ra: Radian, dec: Radian) -> Vector3<f64> {
    Vector3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin())
}

/// Equatorial direction `(ra, dec)` in radians of a (not necessarily unit) vector,
/// with `ra` in `[0, 2π)`.
pub fn to_ra_dec(v: &Vector3<f64>) -> (Radian, Radian) {
    let ra = v.y.atan2(v.x).rem_euclid(std::f64::consts::TAU);
    let dec = v.z.atan2(v.x.hypot(v.y));
    (ra, dec)
}
