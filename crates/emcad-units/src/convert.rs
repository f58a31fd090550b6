// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion of bare values between named units of one category

use crate::error::Result;
use crate::tables::{Unit, UnitCategory};

/// Converter between two units of the same category
///
/// Defaults to lengths, meters to millimeters.
///
/// # Example
///
/// ```
/// use emcad_units::{UnitCategory, UnitConverter};
///
/// let converter = UnitConverter::new()
///     .with_category(UnitCategory::Frequency)
///     .with_units("GHz", "MHz");
/// assert_eq!(converter.convert(2.0).unwrap(), 2000.0);
/// ```
#[derive(Clone, Debug)]
pub struct UnitConverter {
    /// Category both units belong to
    pub category: UnitCategory,
    /// Unit of the input values
    pub input_unit: String,
    /// Unit of the converted values
    pub output_unit: String,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self {
            category: UnitCategory::Length,
            input_unit: "meter".to_string(),
            output_unit: "mm".to_string(),
        }
    }
}

impl UnitConverter {
    /// Create a converter with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unit category
    pub fn with_category(mut self, category: UnitCategory) -> Self {
        self.category = category;
        self
    }

    /// Set input and output units
    pub fn with_units(
        mut self,
        input_unit: impl Into<String>,
        output_unit: impl Into<String>,
    ) -> Self {
        self.input_unit = input_unit.into();
        self.output_unit = output_unit.into();
        self
    }

    fn resolve(&self) -> Result<(&'static Unit, &'static Unit)> {
        let from = self.category.unit(&self.input_unit)?;
        let to = self.category.unit(&self.output_unit)?;
        Ok((from, to))
    }

    /// Convert a single value
    pub fn convert(&self, value: f64) -> Result<f64> {
        let (from, to) = self.resolve()?;
        Ok(to.from_base(from.to_base(value)))
    }

    /// Convert a list of values
    pub fn convert_all(&self, values: &[f64]) -> Result<Vec<f64>> {
        let (from, to) = self.resolve()?;
        Ok(values
            .iter()
            .map(|v| to.from_base(from.to_base(*v)))
            .collect())
    }
}

/// Convert `value` from `input_unit` to `output_unit` within `category`
///
/// Fails with `UnknownUnitCategory` or `UnknownUnit` when a name is not in
/// the tables.
pub fn unit_converter(
    value: f64,
    category: &str,
    input_unit: &str,
    output_unit: &str,
) -> Result<f64> {
    let category: UnitCategory = category.parse()?;
    UnitConverter::new()
        .with_category(category)
        .with_units(input_unit, output_unit)
        .convert(value)
}
