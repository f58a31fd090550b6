// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for dimension parsing and unit conversion

use thiserror::Error;

/// Result type alias for unit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing dimension literals or converting units
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Literal is not `<number><optional unit>`
    #[error("Invalid dimension string: {0:?}")]
    InvalidDimensionString(String),

    /// Unit category is not registered
    #[error("Unknown unit category: {0}")]
    UnknownUnitCategory(String),

    /// Unit name is not registered in the category
    #[error("Unknown unit {unit:?} in category {category}")]
    UnknownUnit { category: String, unit: String },

    /// Unit suffix is not registered in any category
    #[error("Unknown unit suffix {0:?}")]
    UnknownUnitSuffix(String),

    /// Units belong to different categories
    #[error("Cannot convert {from} to {to}: units belong to different categories")]
    IncompatibleUnits { from: String, to: String },
}

impl Error {
    /// Create an invalid dimension string error
    pub fn invalid_dimension(literal: impl Into<String>) -> Self {
        Error::InvalidDimensionString(literal.into())
    }

    /// Create an unknown unit error
    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        Error::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Create an unknown unit suffix error
    pub fn unknown_suffix(unit: impl Into<String>) -> Self {
        Error::UnknownUnitSuffix(unit.into())
    }

    /// Create an incompatible units error
    pub fn incompatible(from: impl Into<String>, to: impl Into<String>) -> Self {
        Error::IncompatibleUnits {
            from: from.into(),
            to: to.into(),
        }
    }
}
