//! Unit table and conversion constants
//!
//! Maps unit names to grams per unit. Volume units use the density of water
//! (1 ml = 1 g), which is the convention of the reference tables.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::corpus::LoadError;

/// The canonical mass unit every quantity is normalized to
pub const CANONICAL_MASS_UNIT: &str = "gram";

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Volume Conversion Constants (to grams, water density)
// ============================================================================

/// Grams per teaspoon
pub const G_PER_TSP: f64 = 5.0;
/// Grams per tablespoon
pub const G_PER_TBSP: f64 = 15.0;
/// Grams per fluid ounce
pub const G_PER_FL_OZ: f64 = 29.5735;
/// Grams per cup
pub const G_PER_CUP: f64 = 240.0;
/// Grams per liter
pub const G_PER_LITER: f64 = 1000.0;

const BUILTIN_UNITS: &[(&[&str], f64)] = &[
    (&["g", "gram", "grams", "gm"], 1.0),
    (&["mg", "milligram", "milligrams"], G_PER_MG),
    (&["kg", "kilogram", "kilograms"], G_PER_KG),
    (&["oz", "ounce", "ounces"], G_PER_OZ),
    (&["lb", "lbs", "pound", "pounds"], G_PER_LB),
    (&["tsp", "teaspoon", "teaspoons"], G_PER_TSP),
    (&["tbsp", "tablespoon", "tablespoons"], G_PER_TBSP),
    (&["fl oz", "floz", "fluid ounce", "fluid ounces"], G_PER_FL_OZ),
    (&["cup", "cups"], G_PER_CUP),
    (&["ml", "milliliter", "milliliters", "millilitre", "millilitres"], 1.0),
    (&["l", "liter", "liters", "litre", "litres"], G_PER_LITER),
];

/// Unit name to grams-per-unit table.
///
/// Keys are stored lower-cased; every factor is finite and positive.
#[derive(Debug, Clone, Serialize)]
pub struct UnitTable {
    grams_per_unit: BTreeMap<String, f64>,
}

impl UnitTable {
    /// The built-in table of common kitchen and metric units
    pub fn standard() -> Self {
        let grams_per_unit = BUILTIN_UNITS
            .iter()
            .flat_map(|(names, factor)| names.iter().map(move |n| (n.to_string(), *factor)))
            .collect();
        Self { grams_per_unit }
    }

    /// Build a table from explicit entries, rejecting non-positive factors
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut table = Self {
            grams_per_unit: BTreeMap::new(),
        };
        table.extend(entries)?;
        Ok(table)
    }

    /// Add or replace entries, rejecting non-positive factors
    pub fn extend<I, S>(&mut self, entries: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (unit, factor) in entries {
            let unit = normalize_unit(unit.as_ref());
            if !factor.is_finite() || factor <= 0.0 {
                return Err(LoadError::InvalidUnitFactor { unit, factor });
            }
            self.grams_per_unit.insert(unit, factor);
        }
        Ok(())
    }

    /// Get the conversion factor to grams for a unit
    pub fn grams_per_unit(&self, unit: &str) -> Option<f64> {
        self.grams_per_unit.get(&normalize_unit(unit)).copied()
    }

    /// Iterate over `(unit, grams_per_unit)` in unit name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.grams_per_unit.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.grams_per_unit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams_per_unit.is_empty()
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lower-case and trim a unit name for table lookups
pub fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Whether the unit names the canonical mass unit
pub fn is_canonical_unit(unit: &str) -> bool {
    unit.trim().eq_ignore_ascii_case(CANONICAL_MASS_UNIT)
}
