// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # emcad Geometry
//!
//! Vector, polygon and rotation geometry for placing and orienting CAD
//! objects in electromagnetic simulation scripts.
//!
//! ## Overview
//!
//! - **Vector algebra**: sums, products, norms, distances and angles on
//!   [`Vector3`] (points share the representation)
//! - **Predicates**: collinearity, betweenness, parallelism, projection overlap
//! - **Polygons**: centroid, triangle area, winding orientation
//! - **Rotations**: frames, ZXZ/ZYZ Euler angles, quaternions, axis-angle
//! - **Coordinate systems**: named frames with property bags of dimension
//!   literals
//!
//! ## Quick Start
//!
//! ```rust
//! use emcad_geometry::{pointing_to_axis, axis_to_euler_zxz, euler_zxz_to_quaternion, Vector3};
//!
//! let frame = pointing_to_axis(&Vector3::new(1.0, 0.1, 1.0), &Vector3::new(0.5, 1.0, 0.0));
//! let e = axis_to_euler_zxz(&frame);
//! let q = euler_zxz_to_quaternion(e.phi, e.theta, e.psi);
//! assert!((q.norm() - 1.0).abs() < 1e-12);
//! ```

pub mod coordinate_system;
pub mod error;
pub mod polygon;
pub mod predicates;
pub mod rotation;
pub mod types;
pub mod vector;

pub use error::{Error, Result};
pub use types::{
    quaternion_from_array, quaternion_to_array, Axis, Plane, Point3, Quaternion, Vector3,
};

pub use vector::{
    arrays_positions_sum, distance_vector, find_point_on_plane, get_mid_point, get_triangle_area,
    normalize_vector, points_distance, v_angle, v_cross, v_dot, v_norm, v_points, v_prod, v_sub,
    v_sum,
};

pub use predicates::{
    is_between_points, is_collinear, is_collinear_tol, is_parallel, is_projection_inside,
    parallel_coeff, DEFAULT_BETWEEN_TOL, DEFAULT_COLLINEAR_TOL, DEFAULT_PARALLEL_TOL,
};

pub use polygon::{get_polygon_centroid, orient_polygon, signed_area, Winding};

pub use rotation::{
    atan2, axis_angle_to_quaternion, axis_to_euler_zxz, axis_to_euler_zyz, deg2rad,
    euler_zxz_to_quaternion, euler_zyz_to_quaternion, pointing_to_axis, q_prod, q_rotation,
    q_rotation_inv, quaternion_to_axis, quaternion_to_axis_angle, quaternion_to_euler_zxz,
    quaternion_to_euler_zyz, rad2deg, AxisAngle, EulerAngles, EulerConvention, OrthonormalFrame,
    GIMBAL_TOL, ZERO_ANGLE_TOL,
};

pub use coordinate_system::{
    CoordinateSystem, CoordinateSystemProps, CsMode, Orientation, View, GLOBAL_CS,
};
