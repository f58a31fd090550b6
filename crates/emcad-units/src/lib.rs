// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # emcad Units
//!
//! Parsing of physical dimension literals and conversion between units.
//!
//! ## Overview
//!
//! - **Dimension literals**: `"2mm"`, `"1.5MHz"`, `"180deg"` are split into a
//!   mantissa and a unit suffix using `nom`, the mantissa is parsed with
//!   `lexical-core`
//! - **Unit tables**: static, read-only tables per [`UnitCategory`] with the
//!   factor to the SI base unit of the category
//! - **Conversion**: [`unit_converter`] and the [`UnitConverter`] builder
//!
//! ## Quick Start
//!
//! ```rust
//! use emcad_units::parse_dim_arg;
//!
//! assert_eq!(parse_dim_arg("2mm", None).unwrap(), 0.002);
//! assert_eq!(parse_dim_arg("2mm", Some("mm")).unwrap(), 2.0);
//! assert_eq!(parse_dim_arg("1.5MHz", None).unwrap(), 1.5e6);
//! ```

pub mod convert;
pub mod dimension;
pub mod error;
pub mod tables;

pub use convert::{unit_converter, UnitConverter};
pub use dimension::{parse_dim_arg, DimensionLiteral};
pub use error::{Error, Result};
pub use tables::{lookup_unit, Unit, UnitCategory};
