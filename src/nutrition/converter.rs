//! Unit conversion functions
//!
//! Normalizes a user-supplied quantity and unit to grams.

use super::error::{CompositionError, CompositionResult};
use super::units::{is_canonical_unit, normalize_unit, UnitTable};

/// Convert a quantity in the given unit to grams
///
/// Quantities already in the canonical unit are returned unchanged without a
/// table lookup. Sign and zero are not validated here.
pub fn to_grams(table: &UnitTable, unit: &str, quantity: f64) -> CompositionResult<f64> {
    if is_canonical_unit(unit) {
        return Ok(quantity);
    }

    table
        .grams_per_unit(unit)
        .map(|grams_per| quantity * grams_per)
        .ok_or_else(|| CompositionError::UnknownUnit {
            unit: normalize_unit(unit),
        })
}

/// Multiplier that turns a per-100 g value into a value for `grams`
pub fn per_hundred_multiplier(grams: f64) -> f64 {
    grams / 100.0
}
