// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static unit tables
//!
//! Every unit is stored with the factor that converts one of it into the
//! SI base unit of its category. Unit suffixes are unique across all
//! categories, so a bare suffix such as `"mm"` or `"MHz"` identifies both
//! the category and the scale.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// A named unit with its conversion factor to the category base unit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit {
    /// Suffix as written in dimension literals
    pub name: &'static str,
    /// Physical category
    pub category: UnitCategory,
    /// Multiply by this to get the SI base unit
    pub factor: f64,
}

impl Unit {
    const fn new(name: &'static str, category: UnitCategory, factor: f64) -> Self {
        Self {
            name,
            category,
            factor,
        }
    }

    /// Convert a value expressed in this unit to the category base unit
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Convert a value expressed in the category base unit to this unit
    #[inline]
    pub fn from_base(&self, value: f64) -> f64 {
        value / self.factor
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Physical quantity category
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UnitCategory {
    Length,
    Angle,
    #[serde(rename = "Freq")]
    Frequency,
    Time,
    Mass,
    Voltage,
    Current,
    Resistance,
    Capacitance,
    Inductance,
    Power,
}

use UnitCategory::*;

const LENGTH_UNITS: &[Unit] = &[
    Unit::new("fm", Length, 1e-15),
    Unit::new("pm", Length, 1e-12),
    Unit::new("nm", Length, 1e-9),
    Unit::new("um", Length, 1e-6),
    Unit::new("mm", Length, 1e-3),
    Unit::new("cm", Length, 1e-2),
    Unit::new("dm", Length, 1e-1),
    Unit::new("meter", Length, 1.0),
    Unit::new("meters", Length, 1.0),
    Unit::new("km", Length, 1e3),
    Unit::new("uin", Length, 2.54e-8),
    Unit::new("mil", Length, 2.54e-5),
    Unit::new("in", Length, 2.54e-2),
    Unit::new("ft", Length, 0.3048),
    Unit::new("yd", Length, 0.9144),
    Unit::new("mile", Length, 1609.344),
];

const ANGLE_UNITS: &[Unit] = &[
    Unit::new("deg", Angle, PI / 180.0),
    Unit::new("rad", Angle, 1.0),
    Unit::new("degmin", Angle, PI / 180.0 / 60.0),
    Unit::new("degsec", Angle, PI / 180.0 / 3600.0),
];

const FREQUENCY_UNITS: &[Unit] = &[
    Unit::new("Hz", Frequency, 1.0),
    Unit::new("kHz", Frequency, 1e3),
    Unit::new("MHz", Frequency, 1e6),
    Unit::new("GHz", Frequency, 1e9),
    Unit::new("THz", Frequency, 1e12),
    Unit::new("rps", Frequency, 1.0),
    Unit::new("per_sec", Frequency, 1.0),
];

const TIME_UNITS: &[Unit] = &[
    Unit::new("fs", Time, 1e-15),
    Unit::new("ps", Time, 1e-12),
    Unit::new("ns", Time, 1e-9),
    Unit::new("us", Time, 1e-6),
    Unit::new("ms", Time, 1e-3),
    Unit::new("s", Time, 1.0),
    Unit::new("min", Time, 60.0),
    Unit::new("hour", Time, 3600.0),
    Unit::new("day", Time, 86400.0),
];

const MASS_UNITS: &[Unit] = &[
    Unit::new("ug", Mass, 1e-9),
    Unit::new("mg", Mass, 1e-6),
    Unit::new("g", Mass, 1e-3),
    Unit::new("kg", Mass, 1.0),
    Unit::new("ton", Mass, 1e3),
    Unit::new("lbm", Mass, 0.453_592_37),
];

const VOLTAGE_UNITS: &[Unit] = &[
    Unit::new("nV", Voltage, 1e-9),
    Unit::new("uV", Voltage, 1e-6),
    Unit::new("mV", Voltage, 1e-3),
    Unit::new("V", Voltage, 1.0),
    Unit::new("kV", Voltage, 1e3),
];

const CURRENT_UNITS: &[Unit] = &[
    Unit::new("fA", Current, 1e-15),
    Unit::new("pA", Current, 1e-12),
    Unit::new("nA", Current, 1e-9),
    Unit::new("uA", Current, 1e-6),
    Unit::new("mA", Current, 1e-3),
    Unit::new("A", Current, 1.0),
    Unit::new("kA", Current, 1e3),
];

const RESISTANCE_UNITS: &[Unit] = &[
    Unit::new("uOhm", Resistance, 1e-6),
    Unit::new("mOhm", Resistance, 1e-3),
    Unit::new("ohm", Resistance, 1.0),
    Unit::new("kOhm", Resistance, 1e3),
    Unit::new("MegOhm", Resistance, 1e6),
    Unit::new("GOhm", Resistance, 1e9),
];

const CAPACITANCE_UNITS: &[Unit] = &[
    Unit::new("fF", Capacitance, 1e-15),
    Unit::new("pF", Capacitance, 1e-12),
    Unit::new("nF", Capacitance, 1e-9),
    Unit::new("uF", Capacitance, 1e-6),
    Unit::new("mF", Capacitance, 1e-3),
    Unit::new("F", Capacitance, 1.0),
];

const INDUCTANCE_UNITS: &[Unit] = &[
    Unit::new("fH", Inductance, 1e-15),
    Unit::new("pH", Inductance, 1e-12),
    Unit::new("nH", Inductance, 1e-9),
    Unit::new("uH", Inductance, 1e-6),
    Unit::new("mH", Inductance, 1e-3),
    Unit::new("H", Inductance, 1.0),
];

const POWER_UNITS: &[Unit] = &[
    Unit::new("fW", Power, 1e-15),
    Unit::new("pW", Power, 1e-12),
    Unit::new("nW", Power, 1e-9),
    Unit::new("uW", Power, 1e-6),
    Unit::new("mW", Power, 1e-3),
    Unit::new("W", Power, 1.0),
    Unit::new("kW", Power, 1e3),
    Unit::new("MegW", Power, 1e6),
    Unit::new("GW", Power, 1e9),
];

/// Suffix -> unit index across every category
static SUFFIX_INDEX: Lazy<FxHashMap<&'static str, &'static Unit>> = Lazy::new(|| {
    UnitCategory::ALL
        .iter()
        .flat_map(|category| category.units())
        .map(|unit| (unit.name, unit))
        .collect()
});

impl UnitCategory {
    /// Every registered category
    pub const ALL: [UnitCategory; 11] = [
        Length,
        Angle,
        Frequency,
        Time,
        Mass,
        Voltage,
        Current,
        Resistance,
        Capacitance,
        Inductance,
        Power,
    ];

    /// Category name as used by the CAD application
    pub fn name(self) -> &'static str {
        match self {
            Length => "Length",
            Angle => "Angle",
            Frequency => "Freq",
            Time => "Time",
            Mass => "Mass",
            Voltage => "Voltage",
            Current => "Current",
            Resistance => "Resistance",
            Capacitance => "Capacitance",
            Inductance => "Inductance",
            Power => "Power",
        }
    }

    /// Name of the SI base unit (factor 1.0)
    pub fn base_unit(self) -> &'static str {
        match self {
            Length => "meter",
            Angle => "rad",
            Frequency => "Hz",
            Time => "s",
            Mass => "kg",
            Voltage => "V",
            Current => "A",
            Resistance => "ohm",
            Capacitance => "F",
            Inductance => "H",
            Power => "W",
        }
    }

    /// All units of this category
    pub fn units(self) -> &'static [Unit] {
        match self {
            Length => LENGTH_UNITS,
            Angle => ANGLE_UNITS,
            Frequency => FREQUENCY_UNITS,
            Time => TIME_UNITS,
            Mass => MASS_UNITS,
            Voltage => VOLTAGE_UNITS,
            Current => CURRENT_UNITS,
            Resistance => RESISTANCE_UNITS,
            Capacitance => CAPACITANCE_UNITS,
            Inductance => INDUCTANCE_UNITS,
            Power => POWER_UNITS,
        }
    }

    /// Find a unit of this category by name
    pub fn unit(self, name: &str) -> Result<&'static Unit> {
        self.units()
            .iter()
            .find(|u| u.name == name)
            .ok_or_else(|| Error::unknown_unit(self.name(), name))
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(Length),
            "angle" => Ok(Angle),
            "freq" | "frequency" => Ok(Frequency),
            "time" => Ok(Time),
            "mass" => Ok(Mass),
            "voltage" => Ok(Voltage),
            "current" => Ok(Current),
            "resistance" => Ok(Resistance),
            "capacitance" => Ok(Capacitance),
            "inductance" => Ok(Inductance),
            "power" => Ok(Power),
            _ => Err(Error::UnknownUnitCategory(s.to_string())),
        }
    }
}

/// Find a unit by suffix in any category
///
/// Suffixes are case-sensitive: `"MHz"` is a frequency, `"mHz"` is unknown.
pub fn lookup_unit(name: &str) -> Option<&'static Unit> {
    SUFFIX_INDEX.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_suffixes_are_unique() {
        let total: usize = UnitCategory::ALL.iter().map(|c| c.units().len()).sum();
        assert_eq!(SUFFIX_INDEX.len(), total);
    }

    #[test]
    fn test_base_unit_has_unit_factor() {
        for category in UnitCategory::ALL {
            let base = category.unit(category.base_unit()).unwrap();
            assert_eq!(base.factor, 1.0);
            assert_eq!(base.category, category);
        }
    }

    #[test]
    fn test_lookup_unit() {
        let mm = lookup_unit("mm").unwrap();
        assert_eq!(mm.category, UnitCategory::Length);
        assert_relative_eq!(mm.factor, 1e-3);

        let deg = lookup_unit("deg").unwrap();
        assert_relative_eq!(deg.to_base(180.0), PI, epsilon = 1e-12);

        assert!(lookup_unit("mHz").is_none());
        assert!(lookup_unit("").is_none());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Length".parse::<UnitCategory>().unwrap(), Length);
        assert_eq!("freq".parse::<UnitCategory>().unwrap(), Frequency);
        assert_eq!("Frequency".parse::<UnitCategory>().unwrap(), Frequency);
        assert_eq!(
            "Lenghts".parse::<UnitCategory>(),
            Err(Error::UnknownUnitCategory("Lenghts".to_string()))
        );
    }

    #[test]
    fn test_unknown_unit_in_category() {
        let err = Length.unit("Hz").unwrap_err();
        assert_eq!(err, Error::unknown_unit("Length", "Hz"));
    }
}
