// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared value types: vectors, quaternions, cartesian axes and planes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D vector
///
/// Points use the same representation; see [`Point3`].
pub type Vector3 = nalgebra::Vector3<f64>;

/// A 3D point, interchangeable with [`Vector3`]
pub type Point3 = Vector3;

/// A quaternion `(q0, q1, q2, q3)` with `w = q0` as the scalar part
pub type Quaternion = nalgebra::Quaternion<f64>;

/// Build a quaternion from `[q0, q1, q2, q3]`
#[inline]
pub fn quaternion_from_array(q: [f64; 4]) -> Quaternion {
    Quaternion::new(q[0], q[1], q[2], q[3])
}

/// Flatten a quaternion into `[q0, q1, q2, q3]`
#[inline]
pub fn quaternion_to_array(q: &Quaternion) -> [f64; 4] {
    [q.w, q.i, q.j, q.k]
}

/// Cartesian axis
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index (X = 0)
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along the axis
    pub fn unit_vector(self) -> Vector3 {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }

    /// Axis name as used by the CAD application
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cartesian plane
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Plane {
    XY,
    YZ,
    ZX,
}

impl Plane {
    /// Axis orthogonal to the plane
    pub fn normal_axis(self) -> Axis {
        match self {
            Plane::XY => Axis::Z,
            Plane::YZ => Axis::X,
            Plane::ZX => Axis::Y,
        }
    }

    /// Plane name as used by the CAD application
    pub fn as_str(self) -> &'static str {
        match self {
            Plane::XY => "XY",
            Plane::YZ => "YZ",
            Plane::ZX => "ZX",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
