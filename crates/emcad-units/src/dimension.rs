// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimension literal parsing using nom combinators
//!
//! A dimension literal is a number followed by an optional unit suffix:
//! `"2mm"`, `"1.5 MHz"`, `"-3.4e-2"`, `"180deg"`.

use crate::error::{Error, Result};
use crate::tables::{lookup_unit, Unit};
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit1, one_of, space0},
    combinator::{opt, recognize},
    IResult, Parser,
};
use std::fmt;
use std::str::FromStr;

/// A parsed dimension literal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionLiteral {
    /// Numeric mantissa as written
    pub value: f64,
    /// Unit suffix, `None` for dimensionless literals
    pub unit: Option<&'static Unit>,
}

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Parse a signed decimal number with optional exponent
///
/// Accepts `1`, `1.`, `1.5` and `.5`; an `e` not followed by digits is left
/// to the unit suffix.
fn number(input: &str) -> IResult<&str, &str> {
    recognize((
        opt(one_of("+-")),
        alt((
            recognize((digit1, opt((char('.'), opt(digit1))))),
            recognize((char('.'), digit1)),
        )),
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
    ))
    .parse(input)
}

/// Parse a unit suffix (may be empty)
fn unit_suffix(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_ascii_alphabetic() || c == '_').parse(input)
}

/// Split a literal into its number and unit parts
fn dimension(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, (_, num, _, unit, _)) =
        (space0, number, space0, unit_suffix, space0).parse(input)?;
    Ok((input, (num, unit)))
}

/// Parse the mantissa with lexical-core
fn parse_mantissa(num: &str) -> Option<f64> {
    // The grammar allows an explicit '+', the float parser does not need it
    let num = num.strip_prefix('+').unwrap_or(num);
    lexical_core::parse::<f64>(num.as_bytes()).ok()
}

impl DimensionLiteral {
    /// Parse a literal such as `"2mm"` or `"-3.4e-2"`
    pub fn parse(literal: &str) -> Result<Self> {
        let (rest, (num, suffix)) =
            dimension(literal).map_err(|_| Error::invalid_dimension(literal))?;
        if !rest.is_empty() {
            return Err(Error::invalid_dimension(literal));
        }

        let value = parse_mantissa(num).ok_or_else(|| Error::invalid_dimension(literal))?;

        let unit = if suffix.is_empty() {
            None
        } else {
            Some(lookup_unit(suffix).ok_or_else(|| Error::invalid_dimension(literal))?)
        };

        Ok(Self { value, unit })
    }

    /// Whether the literal carries no unit
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_none()
    }

    /// Attach `unit` to a dimensionless literal; literals with a unit are kept
    pub fn with_default_unit(self, unit: &str) -> Result<Self> {
        if self.unit.is_some() {
            return Ok(self);
        }
        let unit = lookup_unit(unit).ok_or_else(|| Error::unknown_suffix(unit))?;
        Ok(Self {
            value: self.value,
            unit: Some(unit),
        })
    }

    /// Value in the SI base unit of its category (dimensionless values are returned as is)
    pub fn to_si(&self) -> f64 {
        match self.unit {
            Some(unit) => unit.to_base(self.value),
            None => self.value,
        }
    }

    /// Value expressed in `target`
    ///
    /// Dimensionless literals are taken to be in the base unit of the
    /// target's category.
    pub fn to_unit(&self, target: &str) -> Result<f64> {
        let target_unit = lookup_unit(target).ok_or_else(|| Error::unknown_suffix(target))?;
        if let Some(unit) = self.unit {
            if unit.category != target_unit.category {
                return Err(Error::incompatible(unit.name, target_unit.name));
            }
            if unit.name == target_unit.name {
                return Ok(self.value);
            }
        }
        Ok(target_unit.from_base(self.to_si()))
    }
}

impl FromStr for DimensionLiteral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DimensionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{}{}", self.value, unit.name),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Parse a dimension literal into a float
///
/// Without `target_unit` the value is returned in the SI base unit of the
/// literal's category (`"2mm"` -> `0.002`). With `target_unit` it is
/// expressed in that unit instead (`"2mm"`, `"mm"` -> `2.0`).
pub fn parse_dim_arg(literal: &str, target_unit: Option<&str>) -> Result<f64> {
    let dim = DimensionLiteral::parse(literal)?;
    match target_unit {
        Some(target) => dim.to_unit(target),
        None => Ok(dim.to_si()),
    }
}
