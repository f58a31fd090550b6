// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversions between rotation representations
//!
//! Five equivalent representations of a 3D rotation are supported:
//!
//! - **Orthonormal frame**: the rotated x, y and z axes ([`OrthonormalFrame`])
//! - **Euler angles** in the ZXZ and ZYZ conventions ([`EulerAngles`])
//! - **Quaternion** `(q0, q1, q2, q3)` with `q0` the scalar part
//! - **Axis-angle** ([`AxisAngle`])
//! - **Pointing vectors**: two approximate directions for the x and y axes
//!
//! ## Composition convention
//!
//! [`q_prod`]`(q1, q2)` is the Hamilton product `q1 ⊗ q2`. Acting on column
//! vectors it applies `q2` first and `q1` second. Read as frame composition it
//! rotates by `q1`, then by `q2` about the already rotated axes, which is how
//! Euler angles compose: `q = q_z(phi) ⊗ q_x(theta) ⊗ q_z(psi)` for ZXZ and
//! `q_z(phi) ⊗ q_y(theta) ⊗ q_z(psi)` for ZYZ.
//!
//! ## Degenerate input
//!
//! Conversions never fail. Collinear pointing vectors, gimbal lock and
//! zero rotations return the deterministic fallbacks documented on each
//! function. [`OrthonormalFrame::try_from_pointing`] is the strict variant.

use crate::error::{Error, Result};
use crate::types::{Quaternion, Vector3};
use crate::vector::{normalize_vector, ZERO_NORM_TOL};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// `hypot(z.x, z.y)` below which Euler extraction is in gimbal lock
pub const GIMBAL_TOL: f64 = 1e-12;

/// Vector part norm below which a quaternion is treated as no rotation
pub const ZERO_ANGLE_TOL: f64 = 1e-12;

/// Cross product norm below which pointing vectors count as collinear
pub const POINTING_TOL: f64 = 1e-12;

// ============================================================================
// Angles
// ============================================================================

/// Degrees to radians
#[inline]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Radians to degrees
#[inline]
pub fn rad2deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Two-argument arctangent with signed zeros normalized
///
/// Inputs smaller than `f64::EPSILON` in magnitude are replaced by `+0.0`
/// so that `atan2(±0, ±0)` is always `0` and round-off noise cannot flip a
/// result between `π` and `-π`.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    let y = if y.abs() < f64::EPSILON { 0.0 } else { y };
    let x = if x.abs() < f64::EPSILON { 0.0 } else { x };
    y.atan2(x)
}

// ============================================================================
// Representations
// ============================================================================

/// Right-handed orthonormal triplet of axes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthonormalFrame {
    pub x_axis: Vector3,
    pub y_axis: Vector3,
    pub z_axis: Vector3,
}

impl Default for OrthonormalFrame {
    fn default() -> Self {
        Self::identity()
    }
}

impl OrthonormalFrame {
    /// The global axes
    pub fn identity() -> Self {
        Self {
            x_axis: Vector3::x(),
            y_axis: Vector3::y(),
            z_axis: Vector3::z(),
        }
    }

    /// Frame from approximate x and y directions, see [`pointing_to_axis`]
    pub fn from_pointing(x_pointing: &Vector3, y_pointing: &Vector3) -> Self {
        pointing_to_axis(x_pointing, y_pointing)
    }

    /// Like [`from_pointing`](Self::from_pointing) but rejects degenerate input
    pub fn try_from_pointing(x_pointing: &Vector3, y_pointing: &Vector3) -> Result<Self> {
        if x_pointing.norm() < ZERO_NORM_TOL {
            return Err(Error::degenerate("x pointing vector has zero length"));
        }
        let cross = normalize_vector(x_pointing).cross(&normalize_vector(y_pointing));
        if cross.norm() < POINTING_TOL {
            return Err(Error::degenerate("x and y pointing vectors are collinear"));
        }
        Ok(pointing_to_axis(x_pointing, y_pointing))
    }

    /// Rotation matrix with the axes as columns
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.x_axis, self.y_axis, self.z_axis])
    }

    /// Frame from the columns of a rotation matrix
    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        Self {
            x_axis: m.column(0).into_owned(),
            y_axis: m.column(1).into_owned(),
            z_axis: m.column(2).into_owned(),
        }
    }

    /// Euler angles of this frame in `convention`
    pub fn to_euler(&self, convention: EulerConvention) -> EulerAngles {
        match convention {
            EulerConvention::Zxz => axis_to_euler_zxz(self),
            EulerConvention::Zyz => axis_to_euler_zyz(self),
        }
    }

    /// Whether all axes are unit length, pairwise orthogonal and right-handed
    pub fn is_orthonormal(&self, tol: f64) -> bool {
        let units = [self.x_axis, self.y_axis, self.z_axis]
            .iter()
            .all(|a| (a.norm() - 1.0).abs() < tol);
        let orthogonal = self.x_axis.dot(&self.y_axis).abs() < tol
            && self.y_axis.dot(&self.z_axis).abs() < tol
            && self.z_axis.dot(&self.x_axis).abs() < tol;
        let right_handed = (self.x_axis.cross(&self.y_axis) - self.z_axis).norm() < tol;
        units && orthogonal && right_handed
    }
}

/// Euler angle convention
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EulerConvention {
    /// Rotate about z, then the new x, then the new z
    #[serde(rename = "ZXZ")]
    Zxz,
    /// Rotate about z, then the new y, then the new z
    #[serde(rename = "ZYZ")]
    Zyz,
}

impl EulerConvention {
    /// Convention tag, `"ZXZ"` or `"ZYZ"`
    pub fn as_str(self) -> &'static str {
        match self {
            EulerConvention::Zxz => "ZXZ",
            EulerConvention::Zyz => "ZYZ",
        }
    }

    /// Axis of the middle (theta) rotation
    pub fn nutation_axis(self) -> Vector3 {
        match self {
            EulerConvention::Zxz => Vector3::x(),
            EulerConvention::Zyz => Vector3::y(),
        }
    }
}

impl fmt::Display for EulerConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EulerConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ZXZ" => Ok(EulerConvention::Zxz),
            "ZYZ" => Ok(EulerConvention::Zyz),
            _ => Err(Error::UnknownConvention(s.to_string())),
        }
    }
}

/// Euler angles in radians, tagged with their convention
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub phi: f64,
    pub theta: f64,
    pub psi: f64,
    pub convention: EulerConvention,
}

impl EulerAngles {
    /// Create Euler angles from radians
    pub fn new(phi: f64, theta: f64, psi: f64, convention: EulerConvention) -> Self {
        Self {
            phi,
            theta,
            psi,
            convention,
        }
    }

    /// Create Euler angles from degrees
    pub fn from_degrees(phi: f64, theta: f64, psi: f64, convention: EulerConvention) -> Self {
        Self::new(deg2rad(phi), deg2rad(theta), deg2rad(psi), convention)
    }

    /// `(phi, theta, psi)` in degrees
    pub fn to_degrees(&self) -> (f64, f64, f64) {
        (rad2deg(self.phi), rad2deg(self.theta), rad2deg(self.psi))
    }

    /// Extract angles of `convention` from a frame
    pub fn from_frame(frame: &OrthonormalFrame, convention: EulerConvention) -> Self {
        frame.to_euler(convention)
    }

    /// Extract angles of `convention` from a unit quaternion
    pub fn from_quaternion(q: &Quaternion, convention: EulerConvention) -> Self {
        Self::from_frame(&quaternion_to_axis(q), convention)
    }

    /// Quaternion of the composed elementary rotations
    pub fn to_quaternion(&self) -> Quaternion {
        let nutation = self.convention.nutation_axis();
        let q_phi = elementary_rotation(&Vector3::z(), self.phi);
        let q_theta = elementary_rotation(&nutation, self.theta);
        let q_psi = elementary_rotation(&Vector3::z(), self.psi);
        q_prod(&q_prod(&q_phi, &q_theta), &q_psi)
    }

    /// Same rotation expressed in another convention
    pub fn convert(&self, convention: EulerConvention) -> Self {
        if convention == self.convention {
            return *self;
        }
        Self::from_quaternion(&self.to_quaternion(), convention)
    }
}

/// Rotation by `angle` radians about `axis`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAngle {
    pub axis: Vector3,
    pub angle: f64,
}

impl AxisAngle {
    /// Create an axis-angle rotation
    pub fn new(axis: Vector3, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Unit quaternion of this rotation, see [`axis_angle_to_quaternion`]
    pub fn to_quaternion(&self) -> Quaternion {
        axis_angle_to_quaternion(&self.axis, self.angle)
    }

    /// Axis and angle of a unit quaternion, see [`quaternion_to_axis_angle`]
    pub fn from_quaternion(q: &Quaternion) -> Self {
        quaternion_to_axis_angle(q)
    }
}

/// Quaternion of a rotation about a unit axis
#[inline]
fn elementary_rotation(unit_axis: &Vector3, angle: f64) -> Quaternion {
    let (s, c) = (0.5 * angle).sin_cos();
    Quaternion::from_parts(c, unit_axis * s)
}

/// Coordinate axis least aligned with `v`
#[inline]
fn least_aligned_axis(v: &Vector3) -> Vector3 {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    if ax <= ay && ax <= az {
        Vector3::x()
    } else if ay <= az {
        Vector3::y()
    } else {
        Vector3::z()
    }
}

// ============================================================================
// Frame conversions
// ============================================================================

/// Build a right-handed orthonormal frame from two approximate directions
///
/// Gram-Schmidt: `x = normalize(x_pointing)`,
/// `z = normalize(x × y_pointing)`, `y = z × x`.
///
/// Fallbacks: a zero `x_pointing` uses `+X`; a `y_pointing` collinear with
/// `x_pointing` is replaced by the coordinate axis least aligned with `x`.
pub fn pointing_to_axis(x_pointing: &Vector3, y_pointing: &Vector3) -> OrthonormalFrame {
    let mut x_axis = normalize_vector(x_pointing);
    if x_axis.norm() < ZERO_NORM_TOL {
        log::debug!("pointing_to_axis: zero x pointing vector, using +X");
        x_axis = Vector3::x();
    }

    let mut z_dir = x_axis.cross(&normalize_vector(y_pointing));
    if z_dir.norm() < POINTING_TOL {
        log::debug!("pointing_to_axis: collinear pointing vectors, choosing reference axis");
        z_dir = x_axis.cross(&least_aligned_axis(&x_axis));
    }

    let z_axis = z_dir.normalize();
    let y_axis = z_axis.cross(&x_axis);

    OrthonormalFrame {
        x_axis,
        y_axis,
        z_axis,
    }
}

/// ZXZ Euler angles of a frame
///
/// `R = Rz(phi) Rx(theta) Rz(psi)` with the frame axes as columns of `R`.
/// In gimbal lock (`theta` of 0 or π) `psi` is set to 0 and the whole
/// in-plane rotation goes to `phi`.
pub fn axis_to_euler_zxz(frame: &OrthonormalFrame) -> EulerAngles {
    let (x, y, z) = (&frame.x_axis, &frame.y_axis, &frame.z_axis);
    let sin_theta = z.x.hypot(z.y);

    if sin_theta < GIMBAL_TOL {
        log::debug!("axis_to_euler_zxz: gimbal lock, psi set to 0");
        let theta = if z.z >= 0.0 { 0.0 } else { PI };
        let phi = atan2(x.y, x.x);
        return EulerAngles::new(phi, theta, 0.0, EulerConvention::Zxz);
    }

    let phi = atan2(z.x, -z.y);
    let theta = atan2(sin_theta, z.z);
    let psi = atan2(x.z, y.z);
    EulerAngles::new(phi, theta, psi, EulerConvention::Zxz)
}

/// ZYZ Euler angles of a frame
///
/// `R = Rz(phi) Ry(theta) Rz(psi)`; gimbal lock handled as in
/// [`axis_to_euler_zxz`].
pub fn axis_to_euler_zyz(frame: &OrthonormalFrame) -> EulerAngles {
    let (x, y, z) = (&frame.x_axis, &frame.y_axis, &frame.z_axis);
    let sin_theta = z.x.hypot(z.y);

    if sin_theta < GIMBAL_TOL {
        log::debug!("axis_to_euler_zyz: gimbal lock, psi set to 0");
        let (phi, theta) = if z.z >= 0.0 {
            (atan2(x.y, x.x), 0.0)
        } else {
            (atan2(-x.y, -x.x), PI)
        };
        return EulerAngles::new(phi, theta, 0.0, EulerConvention::Zyz);
    }

    let phi = atan2(z.y, z.x);
    let theta = atan2(sin_theta, z.z);
    let psi = atan2(y.z, -x.z);
    EulerAngles::new(phi, theta, psi, EulerConvention::Zyz)
}

/// Rotated axes of a unit quaternion (columns of its rotation matrix)
pub fn quaternion_to_axis(q: &Quaternion) -> OrthonormalFrame {
    let (w, i, j, k) = (q.w, q.i, q.j, q.k);
    let (ww, ii, jj, kk) = (w * w, i * i, j * j, k * k);

    OrthonormalFrame {
        x_axis: Vector3::new(
            ww + ii - jj - kk,
            2.0 * (i * j + w * k),
            2.0 * (i * k - w * j),
        ),
        y_axis: Vector3::new(
            2.0 * (i * j - w * k),
            ww - ii + jj - kk,
            2.0 * (j * k + w * i),
        ),
        z_axis: Vector3::new(
            2.0 * (i * k + w * j),
            2.0 * (j * k - w * i),
            ww - ii - jj + kk,
        ),
    }
}

// ============================================================================
// Euler <-> quaternion
// ============================================================================

/// Quaternion of ZXZ Euler angles: `q_z(phi) ⊗ q_x(theta) ⊗ q_z(psi)`
pub fn euler_zxz_to_quaternion(phi: f64, theta: f64, psi: f64) -> Quaternion {
    EulerAngles::new(phi, theta, psi, EulerConvention::Zxz).to_quaternion()
}

/// Quaternion of ZYZ Euler angles: `q_z(phi) ⊗ q_y(theta) ⊗ q_z(psi)`
pub fn euler_zyz_to_quaternion(phi: f64, theta: f64, psi: f64) -> Quaternion {
    EulerAngles::new(phi, theta, psi, EulerConvention::Zyz).to_quaternion()
}

/// ZXZ Euler angles of a unit quaternion
pub fn quaternion_to_euler_zxz(q: &Quaternion) -> EulerAngles {
    axis_to_euler_zxz(&quaternion_to_axis(q))
}

/// ZYZ Euler angles of a unit quaternion
pub fn quaternion_to_euler_zyz(q: &Quaternion) -> EulerAngles {
    axis_to_euler_zyz(&quaternion_to_axis(q))
}

// ============================================================================
// Axis-angle <-> quaternion
// ============================================================================

/// Axis and angle of a unit quaternion
///
/// `angle = 2 atan2(|(q1, q2, q3)|, q0)`, which equals `2 acos(q0)` for unit
/// quaternions and stays accurate near 0. A (near) zero rotation has no
/// defined axis and returns `+X`.
pub fn quaternion_to_axis_angle(q: &Quaternion) -> AxisAngle {
    let v = q.imag();
    let s = v.norm();
    if s < ZERO_ANGLE_TOL {
        log::debug!("quaternion_to_axis_angle: zero rotation, axis set to +X");
        return AxisAngle::new(Vector3::x(), 0.0);
    }
    AxisAngle::new(v / s, 2.0 * atan2(s, q.w))
}

/// Unit quaternion of a rotation by `angle` about `axis`
///
/// The axis is normalized first; a zero axis gives the identity.
pub fn axis_angle_to_quaternion(axis: &Vector3, angle: f64) -> Quaternion {
    let u = normalize_vector(axis);
    if u.norm() < ZERO_NORM_TOL {
        log::debug!("axis_angle_to_quaternion: zero axis, returning identity");
        return Quaternion::identity();
    }
    elementary_rotation(&u, angle)
}

// ============================================================================
// Quaternion algebra
// ============================================================================

/// Hamilton product `q1 ⊗ q2`
#[inline]
pub fn q_prod(q1: &Quaternion, q2: &Quaternion) -> Quaternion {
    q1 * q2
}

/// Rotate `v` by the unit quaternion `q`: vector part of `q ⊗ (0, v) ⊗ q*`
pub fn q_rotation(v: &Vector3, q: &Quaternion) -> Vector3 {
    let p = Quaternion::from_imag(*v);
    q_prod(&q_prod(q, &p), &q.conjugate()).imag()
}

/// Rotate `v` by the inverse of the unit quaternion `q`
pub fn q_rotation_inv(v: &Vector3, q: &Quaternion) -> Vector3 {
    q_rotation(v, &q.conjugate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quaternion_from_array;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const TOL: f64 = 1e-12;

    const Q: [f64; 4] = [
        0.9069661433330367,
        -0.17345092325178477,
        -0.3823030778615049,
        -0.03422789400943274,
    ];
    const Q2: [f64; 4] = [0.9238795325112867, 0.0, -0.3826834323650898, 0.0];

    fn reference_frame() -> OrthonormalFrame {
        pointing_to_axis(&Vector3::new(1.0, 0.1, 1.0), &Vector3::new(0.5, 1.0, 0.0))
    }

    fn assert_quaternion_eq(q: &Quaternion, expected: [f64; 4]) {
        assert_abs_diff_eq!(q.coords, quaternion_from_array(expected).coords, epsilon = TOL);
    }

    #[test]
    fn test_pointing_to_axis() {
        let frame = reference_frame();
        assert_abs_diff_eq!(
            frame.x_axis,
            Vector3::new(0.7053456158585983, 0.07053456158585983, 0.7053456158585983),
            epsilon = TOL
        );
        assert_abs_diff_eq!(
            frame.y_axis,
            Vector3::new(0.19470872568244801, 0.9374864569895649, -0.28845737138140465),
            epsilon = TOL
        );
        assert_abs_diff_eq!(
            frame.z_axis,
            Vector3::new(-0.681598176590997, 0.3407990882954985, 0.6475182677614472),
            epsilon = TOL
        );
        assert!(frame.is_orthonormal(TOL));
    }

    #[test]
    fn test_pointing_to_axis_collinear_fallback() {
        let frame = pointing_to_axis(&Vector3::new(2.0, 0.0, 0.0), &Vector3::new(-5.0, 0.0, 0.0));
        assert!(frame.is_orthonormal(TOL));
        assert_abs_diff_eq!(frame.x_axis, Vector3::x(), epsilon = TOL);

        let frame = pointing_to_axis(&Vector3::zeros(), &Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(frame, OrthonormalFrame::identity());
    }

    #[test]
    fn test_try_from_pointing() {
        assert!(OrthonormalFrame::try_from_pointing(&Vector3::x(), &Vector3::y()).is_ok());
        assert!(matches!(
            OrthonormalFrame::try_from_pointing(&Vector3::x(), &(Vector3::x() * 3.0)),
            Err(Error::DegenerateInput(_))
        ));
        assert!(matches!(
            OrthonormalFrame::try_from_pointing(&Vector3::zeros(), &Vector3::y()),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_axis_to_euler_zxz() {
        let e = axis_to_euler_zxz(&reference_frame());
        assert_abs_diff_eq!(e.phi, -2.0344439357957027, epsilon = TOL);
        assert_abs_diff_eq!(e.theta, 0.8664730673456006, epsilon = TOL);
        assert_abs_diff_eq!(e.psi, 1.9590019609437583, epsilon = TOL);
        assert_eq!(e.convention, EulerConvention::Zxz);
    }

    #[test]
    fn test_axis_to_euler_zyz() {
        let e = axis_to_euler_zyz(&reference_frame());
        assert_abs_diff_eq!(e.phi, 2.677945044588987, epsilon = TOL);
        assert_abs_diff_eq!(e.theta, 0.8664730673456006, epsilon = TOL);
        assert_abs_diff_eq!(e.psi, -2.7533870194409316, epsilon = TOL);
    }

    #[test]
    fn test_quaternion_to_axis() {
        let frame = quaternion_to_axis(&quaternion_from_array(Q));
        assert_abs_diff_eq!(
            frame.x_axis,
            Vector3::new(0.7053456158585982, 0.07053456158585963, 0.7053456158585982),
            epsilon = TOL
        );
        assert_abs_diff_eq!(
            frame.y_axis,
            Vector3::new(0.19470872568244832, 0.937486456989565, -0.2884573713814046),
            epsilon = TOL
        );
        assert_abs_diff_eq!(
            frame.z_axis,
            Vector3::new(-0.681598176590997, 0.34079908829549865, 0.6475182677614472),
            epsilon = TOL
        );
    }

    #[test]
    fn test_quaternion_to_axis_angle() {
        let aa = quaternion_to_axis_angle(&quaternion_from_array(Q));
        assert_abs_diff_eq!(
            aa.axis,
            Vector3::new(-0.41179835953227295, -0.9076445218972716, -0.0812621249808417),
            epsilon = TOL
        );
        assert_abs_diff_eq!(aa.angle, 0.8695437956599169, epsilon = TOL);
    }

    #[test]
    fn test_zero_rotation_axis_angle() {
        let aa = quaternion_to_axis_angle(&Quaternion::identity());
        assert_eq!(aa.axis, Vector3::x());
        assert_eq!(aa.angle, 0.0);
    }

    #[test]
    fn test_axis_angle_to_quaternion() {
        let u = Vector3::new(-0.41179835953227295, -0.9076445218972716, -0.0812621249808417);
        let q = axis_angle_to_quaternion(&u, 0.8695437956599169);
        assert_quaternion_eq(&q, Q);
        assert_abs_diff_eq!(q.norm_squared(), 1.0, epsilon = TOL);

        // Zero axis
        assert_eq!(axis_angle_to_quaternion(&Vector3::zeros(), 1.0), Quaternion::identity());
    }

    #[test]
    fn test_quaternion_to_euler_zxz() {
        let e = quaternion_to_euler_zxz(&quaternion_from_array(Q));
        assert_abs_diff_eq!(e.phi, -2.0344439357957027, epsilon = TOL);
        assert_abs_diff_eq!(e.theta, 0.8664730673456006, epsilon = TOL);
        assert_abs_diff_eq!(e.psi, 1.9590019609437583, epsilon = TOL);
    }

    #[test]
    fn test_euler_zxz_to_quaternion() {
        let q = euler_zxz_to_quaternion(
            -2.0344439357957027,
            0.8664730673456006,
            1.9590019609437583,
        );
        assert_quaternion_eq(
            &q,
            [
                0.9069661433330367,
                -0.17345092325178468,
                -0.38230307786150497,
                -0.03422789400943264,
            ],
        );
        assert_abs_diff_eq!(q.norm_squared(), 1.0, epsilon = TOL);
    }

    #[test]
    fn test_quaternion_to_euler_zyz() {
        let e = quaternion_to_euler_zyz(&quaternion_from_array(Q));
        assert_abs_diff_eq!(e.phi, 2.677945044588987, epsilon = TOL);
        assert_abs_diff_eq!(e.theta, 0.8664730673456006, epsilon = TOL);
        assert_abs_diff_eq!(e.psi, -2.7533870194409316, epsilon = TOL);
    }

    #[test]
    fn test_euler_zyz_to_quaternion() {
        let q = euler_zyz_to_quaternion(2.677945044588987, 0.8664730673456006, -2.7533870194409316);
        assert_quaternion_eq(&q, Q);
        assert_abs_diff_eq!(q.norm_squared(), 1.0, epsilon = TOL);
    }

    #[test]
    fn test_gimbal_lock_zxz() {
        // theta = 0: only phi + psi is determined
        let q = euler_zxz_to_quaternion(0.3, 0.0, 0.4);
        let e = quaternion_to_euler_zxz(&q);
        assert_abs_diff_eq!(e.theta, 0.0, epsilon = TOL);
        assert_eq!(e.psi, 0.0);
        assert_abs_diff_eq!(e.phi, 0.7, epsilon = TOL);

        // theta = π: only phi - psi is determined
        let q = euler_zxz_to_quaternion(0.3, PI, 0.1);
        let e = quaternion_to_euler_zxz(&q);
        assert_abs_diff_eq!(e.theta, PI, epsilon = TOL);
        assert_eq!(e.psi, 0.0);
        assert_abs_diff_eq!(e.phi, 0.2, epsilon = TOL);
    }

    #[test]
    fn test_gimbal_lock_zyz() {
        let q = euler_zyz_to_quaternion(0.3, PI, 0.1);
        let e = quaternion_to_euler_zyz(&q);
        assert_abs_diff_eq!(e.theta, PI, epsilon = TOL);
        assert_eq!(e.psi, 0.0);
        let back = e.to_quaternion();
        let same = (back.coords - q.coords).norm().min((back.coords + q.coords).norm());
        assert!(same < 1e-9);
    }

    #[test]
    fn test_deg_rad() {
        assert_abs_diff_eq!(deg2rad(180.0), PI, epsilon = TOL);
        assert_abs_diff_eq!(rad2deg(PI), 180.0, epsilon = TOL);
    }

    #[test]
    fn test_atan2() {
        assert_eq!(atan2(0.0, 0.0), 0.0);
        assert_eq!(atan2(-0.0, 0.0), 0.0);
        assert_eq!(atan2(0.0, -0.0), 0.0);
        assert_eq!(atan2(-0.0, -0.0), 0.0);
        assert_eq!(atan2(1.0, 2.0), 1f64.atan2(2.0));
        // Noise below machine epsilon does not flip the branch
        assert_eq!(atan2(-1e-17, -1.0), PI);
    }

    #[test]
    fn test_q_prod() {
        let q = q_prod(&quaternion_from_array(Q), &quaternion_from_array(Q2));
        assert_quaternion_eq(
            &q,
            [
                0.6916264024663118,
                -0.1733462058496682,
                -0.7002829056219277,
                0.03475434394060616,
            ],
        );
        assert_abs_diff_eq!(q.norm_squared(), 1.0, epsilon = TOL);
    }

    #[test]
    fn test_q_prod_composes_rotations() {
        // Acting on vectors, q1 ⊗ q2 applies q2 first
        let q1 = quaternion_from_array(Q);
        let q2 = quaternion_from_array(Q2);
        let v = Vector3::new(0.3, -1.2, 2.0);
        assert_abs_diff_eq!(
            q_rotation(&v, &q_prod(&q1, &q2)),
            q_rotation(&q_rotation(&v, &q2), &q1),
            epsilon = TOL
        );
    }

    #[test]
    fn test_q_rotation() {
        let q2 = quaternion_from_array(Q2);
        assert_abs_diff_eq!(
            q_rotation(&Vector3::x(), &q2),
            Vector3::new(0.7071067811865475, 0.0, 0.7071067811865476),
            epsilon = TOL
        );
        assert_abs_diff_eq!(
            q_rotation_inv(&Vector3::x(), &q2),
            Vector3::new(0.7071067811865475, 0.0, -0.7071067811865476),
            epsilon = TOL
        );
    }

    #[test]
    fn test_convention_from_str() {
        assert_eq!("ZXZ".parse::<EulerConvention>().unwrap(), EulerConvention::Zxz);
        assert_eq!(" zyz ".parse::<EulerConvention>().unwrap(), EulerConvention::Zyz);
        assert_eq!(
            "XYZ".parse::<EulerConvention>(),
            Err(Error::UnknownConvention("XYZ".to_string()))
        );
        assert_eq!(EulerConvention::Zyz.to_string(), "ZYZ");
    }

    #[test]
    fn test_convert_between_conventions() {
        let zxz = EulerAngles::new(
            -2.0344439357957027,
            0.8664730673456006,
            1.9590019609437583,
            EulerConvention::Zxz,
        );
        let zyz = zxz.convert(EulerConvention::Zyz);
        assert_relative_eq!(zyz.phi, 2.677945044588987, epsilon = 1e-10);
        assert_relative_eq!(zyz.theta, 0.8664730673456006, epsilon = 1e-10);
        assert_relative_eq!(zyz.psi, -2.7533870194409316, epsilon = 1e-10);
        assert_eq!(zyz.convert(EulerConvention::Zyz), zyz);
    }

    #[test]
    fn test_frame_matrix_roundtrip() {
        let frame = reference_frame();
        let m = frame.to_matrix();
        assert_eq!(m.column(2).into_owned(), frame.z_axis);
        assert_eq!(OrthonormalFrame::from_matrix(&m), frame);
    }
}
