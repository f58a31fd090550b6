// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point/line relationships: collinearity, parallelism, betweenness, projection

use crate::types::{Point3, Vector3};
use crate::vector::{v_cross, v_points, ZERO_NORM_TOL};

/// Default bound on `|v1 × v2|` for [`is_collinear`]
pub const DEFAULT_COLLINEAR_TOL: f64 = 1e-12;

/// Default tolerance for [`is_parallel`]; compared as `tol²` against `1 - |cos|`
pub const DEFAULT_PARALLEL_TOL: f64 = 1e-6;

/// Whether two vectors are parallel or anti-parallel
///
/// A zero vector is collinear with everything.
#[inline]
pub fn is_collinear(v1: &Vector3, v2: &Vector3) -> bool {
    is_collinear_tol(v1, v2, DEFAULT_COLLINEAR_TOL)
}

/// [`is_collinear`] with an explicit bound on the cross product norm
#[inline]
pub fn is_collinear_tol(v1: &Vector3, v2: &Vector3, tol: f64) -> bool {
    v_cross(v1, v2).norm() < tol
}

/// Relative bound on `|ap × ab| / (|ap| |ab|)` for [`is_between_points`]
pub const DEFAULT_BETWEEN_TOL: f64 = 1e-9;

/// Whether `p` lies on the closed segment `[a, b]`
///
/// Collinearity is judged on the sine of the angle between `p - a` and
/// `b - a`, so the test does not depend on the coordinate scale.
pub fn is_between_points(p: &Point3, a: &Point3, b: &Point3) -> bool {
    let ap = v_points(a, p);
    let ab = v_points(a, b);
    if ab.norm() < ZERO_NORM_TOL {
        return ap.norm() < ZERO_NORM_TOL;
    }
    let scale = ap.norm() * ab.norm();
    if v_cross(&ap, &ab).norm() > DEFAULT_BETWEEN_TOL * scale {
        return false;
    }
    let along = ap.dot(&ab);
    (0.0..=ab.norm_squared()).contains(&along)
}

/// Cosine of the angle between directions `a2 - a1` and `b2 - b1`
///
/// `1` for equally oriented directions, `-1` for opposite ones. Returns `0`
/// when either direction has zero length.
pub fn parallel_coeff(a1: &Point3, a2: &Point3, b1: &Point3, b2: &Point3) -> f64 {
    let va = v_points(a1, a2);
    let vb = v_points(b1, b2);
    let na = va.norm();
    let nb = vb.norm();
    if na < ZERO_NORM_TOL || nb < ZERO_NORM_TOL {
        return 0.0;
    }
    va.dot(&vb) / na / nb
}

/// Whether directions `a2 - a1` and `b2 - b1` are collinear within `tol`
///
/// Opposite directions count as parallel.
pub fn is_parallel(a1: &Point3, a2: &Point3, b1: &Point3, b2: &Point3, tol: f64) -> bool {
    1.0 - parallel_coeff(a1, a2, b1, b2).abs() < tol * tol
}

/// Whether the projection of `[b1, b2]` onto line `(a1, a2)` overlaps `[a1, a2]`
///
/// Only parallel segments (within [`DEFAULT_PARALLEL_TOL`], either
/// orientation) qualify. Always `false` when `a1 == a2` or `b1 == b2`.
pub fn is_projection_inside(a1: &Point3, a2: &Point3, b1: &Point3, b2: &Point3) -> bool {
    let axis = v_points(a1, a2);
    let len_sq = axis.norm_squared();
    if len_sq < ZERO_NORM_TOL * ZERO_NORM_TOL {
        return false;
    }
    if !is_parallel(a1, a2, b1, b2, DEFAULT_PARALLEL_TOL) {
        return false;
    }
    let t1 = v_points(a1, b1).dot(&axis) / len_sq;
    let t2 = v_points(a1, b2).dot(&axis) / len_sq;
    t1.max(t2) >= 0.0 && t1.min(t2) <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::get_mid_point;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn test_is_collinear() {
        assert!(is_collinear(&v(1.0, 0.0, 0.0), &v(1.0, 0.0, 0.0)));
        assert!(is_collinear(&v(1.0, 0.0, 0.0), &v(-1.0, 0.0, 0.0)));
        assert!(!is_collinear(&v(1.0, 0.0, 0.0), &v(0.0, 1.0, 0.0)));
        assert!(is_collinear(&v(1.0, 1.0, 1.0), &v(-2.0, -2.0, -2.0)));
        assert!(!is_collinear(&v(1.0, 2.0, 3.0), &v(3.0, 2.0, 1.0)));
    }

    #[test]
    fn test_zero_vector_is_collinear() {
        assert!(is_collinear(&Vector3::zeros(), &v(0.3, -2.0, 7.0)));
    }

    #[test]
    fn test_collinear_symmetry() {
        let pairs = [
            (v(0.1, 0.2, 0.3), v(0.3, 0.6, 0.9)),
            (v(1.0, 2.0, 3.0), v(3.0, 2.0, 1.0)),
            (v(-4.0, 0.5, 1e-3), v(8.0, -1.0, -2e-3)),
        ];
        for (a, b) in pairs {
            assert!(is_collinear(&a, &a));
            assert_eq!(is_collinear(&a, &b), is_collinear(&b, &a));
        }
    }

    #[test]
    fn test_is_between_points() {
        let a = v(1.0, 0.0, 0.0);
        let b = v(3.0, 0.0, 0.0);
        assert!(is_between_points(&v(2.0, 0.0, 0.0), &a, &b));
        assert!(!is_between_points(&v(0.0, 1.0, 0.0), &a, &b));
        assert!(!is_between_points(&v(4.0, 0.0, 0.0), &a, &b));
        assert!(is_between_points(&a, &a, &b));
        assert!(is_between_points(&b, &a, &b));
        // Zero-length segment
        assert!(is_between_points(&a, &a, &a));
        assert!(!is_between_points(&b, &a, &a));
        assert!(is_between_points(
            &v(2.0, 2.0, 2.0),
            &v(1.0, 1.0, 1.0),
            &v(3.0, 3.0, 3.0)
        ));
    }

    #[test]
    fn test_is_between_points_large_coordinates() {
        let segments = [
            (v(120.5, 3400.25, -870.0), v(9876.5, -1234.75, 4321.0)),
            (v(1e4, 1e4, 1e4), v(-2.5e3, 7.75e3, 3.3e2)),
            (v(0.0, 0.0, 0.0), v(2540.0, 1270.0, 635.0)),
        ];
        for (a, b) in segments {
            let mid = get_mid_point(&a, &b);
            assert!(is_between_points(&mid, &a, &b));
            assert!(!is_between_points(&(mid + v(0.0, 0.0, 1.0)), &a, &b));
        }
        for n in 1..200 {
            let t = n as f64;
            let a = v(100.0 * t.sin(), 1e3 * (0.7 * t).cos(), 37.0 * t);
            let b = v(-50.0 * t, 1e4 * (1.3 * t).sin(), 9.5);
            assert!(is_between_points(&get_mid_point(&a, &b), &a, &b));
        }
    }

    #[test]
    fn test_is_parallel() {
        let a1 = v(1.0, 0.0, 0.0);
        let a2 = v(3.0, 0.0, 0.0);
        let b1 = v(2.0, 1.1, 0.0);
        let b2 = v(12.0, 1.1, 0.0);
        let b3 = v(12.0, 1.01, 0.0);
        assert!(is_parallel(&a1, &a2, &b1, &b2, DEFAULT_PARALLEL_TOL));
        assert!(!is_parallel(&a1, &a2, &b1, &b3, DEFAULT_PARALLEL_TOL));
        // Opposite orientation
        assert!(is_parallel(&a1, &a2, &b2, &b1, DEFAULT_PARALLEL_TOL));
    }

    #[test]
    fn test_parallel_coeff() {
        let a1 = v(1.0, 0.0, 0.0);
        let a2 = v(3.0, 0.0, 0.0);
        assert_relative_eq!(
            parallel_coeff(&a1, &a2, &v(1.0, 1.0, 0.0), &v(3.0, 1.0, 0.0)),
            1.0
        );
        assert_relative_eq!(
            parallel_coeff(&a1, &a2, &v(0.0, 0.0, 0.0), &v(0.0, 5.0, 0.0)),
            0.0
        );
        assert_eq!(parallel_coeff(&a1, &a1, &a1, &a2), 0.0);
    }

    #[test]
    fn test_is_projection_inside() {
        let a1 = v(10.0, 0.0, 2.0);
        let a2 = v(20.0, 0.0, 2.0);
        assert!(is_projection_inside(&a1, &a2, &v(1.0, 1.0, 0.0), &v(30.0, 1.0, 0.0)));
        assert!(is_projection_inside(&a1, &a2, &v(15.0, 4.0, 0.0), &v(16.0, 4.0, 0.0)));
        assert!(!is_projection_inside(&a1, &a2, &v(25.0, 1.0, 0.0), &v(30.0, 1.0, 0.0)));
        assert!(!is_projection_inside(&a1, &a1, &v(1.0, 1.0, 0.0), &v(30.0, 1.0, 0.0)));
        // Segment ending on a2 but skewed to the reference line
        assert!(!is_projection_inside(&a1, &a2, &v(1.0, 1.0, 0.0), &a2));
        // Opposite orientation still overlaps
        assert!(is_projection_inside(&a1, &a2, &v(30.0, 1.0, 0.0), &v(1.0, 1.0, 0.0)));
    }
}
