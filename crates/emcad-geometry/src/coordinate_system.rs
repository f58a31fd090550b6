// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relative coordinate systems
//!
//! A [`CoordinateSystem`] is a named frame placed at an origin with an
//! orientation given in one of the CAD application's modes: a view preset,
//! two axis pointing vectors, Euler angles or an axis rotation. Every
//! orientation resolves to a single unit quaternion, which drives the
//! point mappings and mode changes.
//!
//! Property bags ([`CoordinateSystemProps`]) hold dimension literals keyed
//! the way the application names them:
//!
//! ```
//! use emcad_geometry::coordinate_system::{CoordinateSystem, CoordinateSystemProps, CsMode};
//!
//! let props = CoordinateSystemProps {
//!     origin_x: Some("10mm".into()),
//!     mode: Some(CsMode::EulerZxz),
//!     phi: Some("90deg".into()),
//!     ..Default::default()
//! };
//! let cs = CoordinateSystem::from_props("CS1", &props, "mm").unwrap();
//! assert_eq!(cs.origin.x, 10.0);
//! ```

use crate::error::{Error, Result};
use crate::rotation::{
    axis_angle_to_quaternion, axis_to_euler_zyz, euler_zyz_to_quaternion, q_prod, q_rotation,
    q_rotation_inv, quaternion_to_axis, quaternion_to_euler_zxz, quaternion_to_euler_zyz, rad2deg,
    AxisAngle, EulerAngles, EulerConvention, OrthonormalFrame,
};
use crate::types::{Point3, Quaternion, Vector3};
use emcad_units::{lookup_unit, DimensionLiteral, UnitCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard view orientations
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum View {
    #[serde(rename = "XY")]
    Xy,
    #[serde(rename = "XZ")]
    Xz,
    #[serde(rename = "YZ")]
    Yz,
    #[serde(rename = "iso")]
    Iso,
}

impl View {
    /// `(x_pointing, y_pointing)` of the preset
    pub fn pointing(self) -> (Vector3, Vector3) {
        match self {
            View::Xy => (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
            View::Xz => (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, -1.0, 0.0)),
            View::Yz => (Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 1.0, 0.0)),
            View::Iso => (Vector3::new(1.0, 1.0, -2.0), Vector3::new(-1.0, 1.0, 0.0)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Xy => "XY",
            View::Xz => "XZ",
            View::Yz => "YZ",
            View::Iso => "iso",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XY" => Ok(View::Xy),
            "XZ" => Ok(View::Xz),
            "YZ" => Ok(View::Yz),
            "ISO" | "ISOMETRIC" => Ok(View::Iso),
            _ => Err(Error::coordinate_system(format!("unknown view '{}'", s))),
        }
    }
}

/// Coordinate system mode as reported to the CAD application
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CsMode {
    #[serde(rename = "Axis/Position")]
    AxisPosition,
    #[serde(rename = "Euler Angle ZXZ")]
    EulerZxz,
    #[serde(rename = "Euler Angle ZYZ")]
    EulerZyz,
}

impl CsMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CsMode::AxisPosition => "Axis/Position",
            CsMode::EulerZxz => "Euler Angle ZXZ",
            CsMode::EulerZyz => "Euler Angle ZYZ",
        }
    }
}

impl fmt::Display for CsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CsMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Axis/Position" | "axis" => Ok(CsMode::AxisPosition),
            "Euler Angle ZXZ" | "zxz" => Ok(CsMode::EulerZxz),
            "Euler Angle ZYZ" | "zyz" => Ok(CsMode::EulerZyz),
            _ => Err(Error::coordinate_system(format!("unknown mode '{}'", s))),
        }
    }
}

/// How the orientation of a coordinate system is specified
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    /// View preset
    View(View),
    /// Approximate directions of the x and y axes
    Axis {
        x_pointing: Vector3,
        y_pointing: Vector3,
    },
    /// Euler angles in radians
    Euler(EulerAngles),
    /// Rotation about an arbitrary axis
    AxisRotation(AxisAngle),
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::View(View::Xy)
    }
}

/// Name of the implicit root coordinate system
pub const GLOBAL_CS: &str = "Global";

/// Named frame placed at `origin` with `orientation`
///
/// `origin` and `orientation` are expressed in the `reference` system, or
/// in global coordinates when there is none.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateSystem {
    pub name: String,
    pub origin: Point3,
    pub orientation: Orientation,
    pub reference: Option<Box<CoordinateSystem>>,
}

impl CoordinateSystem {
    /// Coordinate system aligned with the global axes at the global origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: Point3::zeros(),
            orientation: Orientation::default(),
            reference: None,
        }
    }

    /// Set the origin
    pub fn with_origin(mut self, origin: Point3) -> Self {
        self.origin = origin;
        self
    }

    /// Set the orientation
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Place this coordinate system relative to `reference`
    pub fn with_reference(mut self, reference: CoordinateSystem) -> Self {
        self.reference = Some(Box::new(reference));
        self
    }

    /// Name of the reference system, [`GLOBAL_CS`] at the root
    pub fn reference_name(&self) -> &str {
        self.reference.as_deref().map_or(GLOBAL_CS, |r| r.name.as_str())
    }

    /// Mode the orientation is reported in
    ///
    /// Views and axis pointing are reported as axis/position; axis rotations
    /// are stored by the application as ZYZ Euler angles.
    pub fn mode(&self) -> CsMode {
        match self.orientation {
            Orientation::View(_) | Orientation::Axis { .. } => CsMode::AxisPosition,
            Orientation::Euler(e) => match e.convention {
                EulerConvention::Zxz => CsMode::EulerZxz,
                EulerConvention::Zyz => CsMode::EulerZyz,
            },
            Orientation::AxisRotation(_) => CsMode::EulerZyz,
        }
    }

    /// Unit quaternion of the orientation relative to the reference system
    ///
    /// Fails with [`Error::DegenerateInput`] for collinear pointing vectors.
    pub fn quaternion(&self) -> Result<Quaternion> {
        match self.orientation {
            Orientation::View(view) => {
                let (x, y) = view.pointing();
                pointing_quaternion(&x, &y)
            }
            Orientation::Axis {
                x_pointing,
                y_pointing,
            } => pointing_quaternion(&x_pointing, &y_pointing),
            Orientation::Euler(e) => Ok(e.to_quaternion()),
            Orientation::AxisRotation(aa) => Ok(axis_angle_to_quaternion(&aa.axis, aa.angle)),
        }
    }

    /// Axes of the coordinate system in its reference system
    pub fn frame(&self) -> Result<OrthonormalFrame> {
        Ok(quaternion_to_axis(&self.quaternion()?))
    }

    /// Re-express the orientation in `mode`, keeping the same rotation
    pub fn change_mode(&mut self, mode: CsMode) -> Result<()> {
        let q = self.quaternion()?;
        log::debug!("coordinate system '{}': mode {} -> {}", self.name, self.mode(), mode);

        self.orientation = match mode {
            CsMode::AxisPosition => {
                let frame = quaternion_to_axis(&q);
                Orientation::Axis {
                    x_pointing: frame.x_axis,
                    y_pointing: frame.y_axis,
                }
            }
            CsMode::EulerZxz => Orientation::Euler(quaternion_to_euler_zxz(&q)),
            CsMode::EulerZyz => Orientation::Euler(quaternion_to_euler_zyz(&q)),
        };
        Ok(())
    }

    /// Map a point given in this coordinate system to its reference system
    pub fn to_reference(&self, p: &Point3) -> Result<Point3> {
        Ok(self.origin + q_rotation(p, &self.quaternion()?))
    }

    /// Map a point of the reference system into this coordinate system
    pub fn from_reference(&self, p: &Point3) -> Result<Point3> {
        Ok(q_rotation_inv(&(p - self.origin), &self.quaternion()?))
    }

    /// Map a point given in this coordinate system to global coordinates,
    /// walking up the reference chain
    pub fn to_global(&self, p: &Point3) -> Result<Point3> {
        let in_reference = self.to_reference(p)?;
        match &self.reference {
            Some(reference) => reference.to_global(&in_reference),
            None => Ok(in_reference),
        }
    }

    /// Map a global point into this coordinate system
    pub fn to_local(&self, p: &Point3) -> Result<Point3> {
        let in_reference = match &self.reference {
            Some(reference) => reference.to_local(p)?,
            None => *p,
        };
        self.from_reference(&in_reference)
    }

    /// Orientation relative to the global axes, composed along the reference chain
    pub fn global_quaternion(&self) -> Result<Quaternion> {
        let q = self.quaternion()?;
        match &self.reference {
            Some(reference) => Ok(q_prod(&reference.global_quaternion()?, &q)),
            None => Ok(q),
        }
    }

    /// Build a coordinate system from a property bag
    ///
    /// Bare lengths are read in `model_units`, bare angles in degrees.
    /// Missing entries default to the origin and the global axes.
    pub fn from_props(
        name: impl Into<String>,
        props: &CoordinateSystemProps,
        model_units: &str,
    ) -> Result<Self> {
        check_length_unit(model_units)?;

        let length = |value: &Option<String>, default: f64| -> Result<f64> {
            match value {
                Some(literal) => parse_length(literal, model_units),
                None => Ok(default),
            }
        };
        let angle = |value: &Option<String>| -> Result<f64> {
            match value {
                Some(literal) => parse_angle(literal),
                None => Ok(0.0),
            }
        };

        let origin = Point3::new(
            length(&props.origin_x, 0.0)?,
            length(&props.origin_y, 0.0)?,
            length(&props.origin_z, 0.0)?,
        );

        let orientation = match props.mode.unwrap_or(CsMode::AxisPosition) {
            CsMode::AxisPosition => {
                let x_pointing = Vector3::new(
                    length(&props.x_axis_xvec, 1.0)?,
                    length(&props.x_axis_yvec, 0.0)?,
                    length(&props.x_axis_zvec, 0.0)?,
                );
                let y_pointing = Vector3::new(
                    length(&props.y_axis_xvec, 0.0)?,
                    length(&props.y_axis_yvec, 1.0)?,
                    length(&props.y_axis_zvec, 0.0)?,
                );
                OrthonormalFrame::try_from_pointing(&x_pointing, &y_pointing)?;
                Orientation::Axis {
                    x_pointing,
                    y_pointing,
                }
            }
            mode => {
                let convention = match mode {
                    CsMode::EulerZxz => EulerConvention::Zxz,
                    _ => EulerConvention::Zyz,
                };
                Orientation::Euler(EulerAngles::new(
                    angle(&props.phi)?,
                    angle(&props.theta)?,
                    angle(&props.psi)?,
                    convention,
                ))
            }
        };

        Ok(Self {
            name: name.into(),
            origin,
            orientation,
            reference: None,
        })
    }

    /// Property bag of this coordinate system
    ///
    /// Lengths are written in `model_units` and angles in degrees. View
    /// presets are written as axis pointing vectors and axis rotations as
    /// ZYZ angles.
    pub fn to_props(&self, model_units: &str) -> Result<CoordinateSystemProps> {
        check_length_unit(model_units)?;
        let length = |v: f64| Some(format!("{}{}", v, model_units));
        let angle = |v: f64| Some(format!("{}deg", rad2deg(v)));

        let mut props = CoordinateSystemProps {
            origin_x: length(self.origin.x),
            origin_y: length(self.origin.y),
            origin_z: length(self.origin.z),
            mode: Some(self.mode()),
            ..Default::default()
        };

        let (x_pointing, y_pointing) = match self.orientation {
            Orientation::View(view) => view.pointing(),
            Orientation::Axis {
                x_pointing,
                y_pointing,
            } => (x_pointing, y_pointing),
            Orientation::Euler(e) => {
                props.phi = angle(e.phi);
                props.theta = angle(e.theta);
                props.psi = angle(e.psi);
                return Ok(props);
            }
            Orientation::AxisRotation(_) => {
                let e = quaternion_to_euler_zyz(&self.quaternion()?);
                props.phi = angle(e.phi);
                props.theta = angle(e.theta);
                props.psi = angle(e.psi);
                return Ok(props);
            }
        };

        props.x_axis_xvec = length(x_pointing.x);
        props.x_axis_yvec = length(x_pointing.y);
        props.x_axis_zvec = length(x_pointing.z);
        props.y_axis_xvec = length(y_pointing.x);
        props.y_axis_yvec = length(y_pointing.y);
        props.y_axis_zvec = length(y_pointing.z);
        Ok(props)
    }
}

/// Quaternion of a pointing pair, via the ZYZ angles of its frame
fn pointing_quaternion(x_pointing: &Vector3, y_pointing: &Vector3) -> Result<Quaternion> {
    let frame = OrthonormalFrame::try_from_pointing(x_pointing, y_pointing)?;
    let e = axis_to_euler_zyz(&frame);
    Ok(euler_zyz_to_quaternion(e.phi, e.theta, e.psi))
}

fn check_length_unit(model_units: &str) -> Result<()> {
    match lookup_unit(model_units) {
        Some(unit) if unit.category == UnitCategory::Length => Ok(()),
        _ => Err(Error::coordinate_system(format!(
            "'{}' is not a length unit",
            model_units
        ))),
    }
}

fn parse_length(literal: &str, model_units: &str) -> Result<f64> {
    let dim = DimensionLiteral::parse(literal)?.with_default_unit(model_units)?;
    Ok(dim.to_unit(model_units)?)
}

fn parse_angle(literal: &str) -> Result<f64> {
    let dim = DimensionLiteral::parse(literal)?.with_default_unit("deg")?;
    Ok(dim.to_unit("rad")?)
}

/// Coordinate system properties as dimension literals
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CoordinateSystemProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_z: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<CsMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_xvec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_yvec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_zvec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_xvec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_yvec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_zvec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psi: Option<String>,
}
