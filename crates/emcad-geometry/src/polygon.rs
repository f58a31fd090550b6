// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon centroid and winding utilities

use crate::error::{Error, Result};
use crate::types::{Point3, Vector3};
use serde::{Deserialize, Serialize};

pub use crate::vector::get_triangle_area;

/// Polygon vertex traversal direction
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Winding {
    /// Signed area ≤ 0
    Clockwise,
    /// Signed area ≥ 0
    CounterClockwise,
}

/// Arithmetic mean of the vertices (not area weighted)
///
/// Returns the origin for an empty polygon.
pub fn get_polygon_centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Vector3::zeros();
    }
    let sum = points.iter().fold(Vector3::zeros(), |acc, p| acc + p);
    sum / points.len() as f64
}

/// Signed area of a closed 2D polygon (shoelace formula)
///
/// Positive for counter-clockwise vertex order. The closing edge from the
/// last vertex back to the first is implied. Slices of different length are
/// truncated to the shorter one.
pub fn signed_area(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    let mut twice_area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        twice_area += xs[i] * ys[j] - xs[j] * ys[i];
    }
    0.5 * twice_area
}

/// Return the polygon with the requested winding
///
/// The vertex order is reversed when the signed area disagrees with
/// `winding`; polygons that already match (or have zero area) are returned
/// unchanged.
pub fn orient_polygon(xs: &[f64], ys: &[f64], winding: Winding) -> Result<(Vec<f64>, Vec<f64>)> {
    if xs.len() != ys.len() {
        return Err(Error::polygon(format!(
            "coordinate lists differ in length ({} x, {} y)",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 3 {
        return Err(Error::polygon("need at least 3 vertices"));
    }

    let area = signed_area(xs, ys);
    let reverse = match winding {
        Winding::Clockwise => area > 0.0,
        Winding::CounterClockwise => area < 0.0,
    };

    let mut xs = xs.to_vec();
    let mut ys = ys.to_vec();
    if reverse {
        xs.reverse();
        ys.reverse();
    }
    Ok((xs, ys))
}
