// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for geometry operations

use thiserror::Error;

/// Geometry result type
pub type Result<T> = std::result::Result<T, Error>;

/// Geometry errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input too degenerate for a strict operation (zero vector, collinear axes)
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Polygon coordinates are unusable
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    /// Rotation convention tag not recognized
    #[error("Unknown rotation convention: {0}")]
    UnknownConvention(String),

    /// Coordinate system definition error
    #[error("Coordinate system error: {0}")]
    CoordinateSystem(String),

    /// Dimension literal or unit error
    #[error(transparent)]
    Units(#[from] emcad_units::Error),
}

impl Error {
    /// Create a degenerate input error
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Error::DegenerateInput(msg.into())
    }

    /// Create an invalid polygon error
    pub fn polygon(msg: impl Into<String>) -> Self {
        Error::InvalidPolygon(msg.into())
    }

    /// Create a coordinate system error
    pub fn coordinate_system(msg: impl Into<String>) -> Self {
        Error::CoordinateSystem(msg.into())
    }
}
