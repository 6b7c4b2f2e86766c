//! Raw composition record
//!
//! One row of the reference table: nutrient values per 100 g of an ingredient.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ScaledNutrientEntry;

/// A reference composition record with values per 100 grams
///
/// Fields keep the order they had in the source file. Numeric fields are nutrient
/// values; string fields (code, scientific name, group, ...) are identity data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCompositionRecord {
    pub name: String,
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl RawCompositionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style helper for adding a numeric field
    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.fields.insert(key.into(), Value::from(value));
        self
    }

    /// Builder-style helper for adding an identity field
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Numeric value of a field, if present and numeric
    pub fn value(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    /// Reference code (e.g. "A001"), if the source provides one
    pub fn code(&self) -> Option<&str> {
        self.fields.get("code").and_then(Value::as_str)
    }

    /// Numeric fields in source order
    pub fn nutrient_values(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields
            .iter()
            .filter_map(|(k, v)| v.as_f64().map(|n| (k.as_str(), n)))
    }
}

/// Result of a composition query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    /// Canonical reference name the query resolved to
    pub ingredient: String,
    pub code: Option<String>,
    /// Requested quantity normalized to grams
    pub grams: f64,
    pub nutrients: Vec<ScaledNutrientEntry>,
}
