// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Elementary 3-vector arithmetic and metrics
//!
//! Points and free vectors share the [`Vector3`] representation. Functions
//! here never fail: near-zero inputs produce the fallbacks documented on each
//! function.

use crate::types::{Axis, Point3, Vector3};

/// Norm below which a vector is treated as zero
pub const ZERO_NORM_TOL: f64 = 1e-15;

/// Spread below which coordinates count as shared in [`find_point_on_plane`]
pub const PLANE_TOL: f64 = 1e-9;

/// Component-wise sum
#[inline]
pub fn v_sum(a: &Vector3, b: &Vector3) -> Vector3 {
    a + b
}

/// Component-wise difference `a - b`
#[inline]
pub fn v_sub(a: &Vector3, b: &Vector3) -> Vector3 {
    a - b
}

/// Scale `v` by `scalar`
#[inline]
pub fn v_prod(scalar: f64, v: &Vector3) -> Vector3 {
    v * scalar
}

/// Dot product
#[inline]
pub fn v_dot(a: &Vector3, b: &Vector3) -> f64 {
    a.dot(b)
}

/// Cross product (right-hand rule); zero for parallel inputs
#[inline]
pub fn v_cross(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

/// Euclidean norm
#[inline]
pub fn v_norm(v: &Vector3) -> f64 {
    v.norm()
}

/// Unit vector along `v`
///
/// Returns the zero vector when `v` has (near) zero length.
pub fn normalize_vector(v: &Vector3) -> Vector3 {
    let norm = v.norm();
    if norm < ZERO_NORM_TOL {
        log::debug!("normalize_vector: zero-length input, returning zero vector");
        return Vector3::zeros();
    }
    v / norm
}

/// Vector from `p1` to `p2`
#[inline]
pub fn v_points(p1: &Point3, p2: &Point3) -> Vector3 {
    p2 - p1
}

/// Distance between two points
#[inline]
pub fn points_distance(p1: &Point3, p2: &Point3) -> f64 {
    v_points(p1, p2).norm()
}

/// Midpoint of two points
#[inline]
pub fn get_mid_point(p1: &Point3, p2: &Point3) -> Point3 {
    (p1 + p2) * 0.5
}

/// Area of the triangle `p1 p2 p3`; zero for collinear points
pub fn get_triangle_area(p1: &Point3, p2: &Point3, p3: &Point3) -> f64 {
    0.5 * v_cross(&v_points(p1, p2), &v_points(p1, p3)).norm()
}

/// Angle between two vectors in `[0, π]`
///
/// The cosine is clamped to `[-1, 1]` before `acos`. Returns `0` if either
/// vector has zero length.
pub fn v_angle(a: &Vector3, b: &Vector3) -> f64 {
    let na = a.norm();
    let nb = b.norm();
    if na < ZERO_NORM_TOL || nb < ZERO_NORM_TOL {
        return 0.0;
    }
    (a.dot(b) / (na * nb)).clamp(-1.0, 1.0).acos()
}

/// Shortest vector from `p` to the infinite line through `a` and `b`
///
/// If `a == b` the line degenerates to the point `a` and `a - p` is returned.
pub fn distance_vector(p: &Point3, a: &Point3, b: &Point3) -> Vector3 {
    let ab = v_points(a, b);
    let len_sq = ab.norm_squared();
    if len_sq < ZERO_NORM_TOL * ZERO_NORM_TOL {
        return a - p;
    }
    let t = v_points(a, p).dot(&ab) / len_sq;
    let on_line = a + ab * t;
    on_line - p
}

/// Mean distance between index-matched points of two lists
///
/// Only the common prefix is used when the lengths differ; empty input
/// gives `0`.
pub fn arrays_positions_sum(list1: &[Point3], list2: &[Point3]) -> f64 {
    let count = list1.len().min(list2.len());
    if count == 0 {
        return 0.0;
    }
    let total: f64 = list1
        .iter()
        .zip(list2)
        .map(|(p1, p2)| points_distance(p1, p2))
        .sum();
    total / count as f64
}

/// Coordinate shared by all points along `axis`
///
/// Returns `Some(c)` when every point lies on the plane `axis = c` (within
/// [`PLANE_TOL`]), `None` for empty input or points off a common plane.
pub fn find_point_on_plane(points: &[Point3], axis: Axis) -> Option<f64> {
    let index = axis.index();
    let first = points.first()?[index];
    let (min, max) = points.iter().fold((first, first), |(lo, hi), p| {
        (lo.min(p[index]), hi.max(p[index]))
    });
    if max - min > PLANE_TOL {
        return None;
    }
    Some(first)
}
