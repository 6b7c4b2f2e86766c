//! Nutrient metadata and scaled output entries

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptive record for one raw nutrient field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientDescriptor {
    #[serde(alias = "displayName", alias = "name")]
    pub display_name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Any other descriptor fields, passed through untouched
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl NutrientDescriptor {
    pub fn new(display_name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            unit: unit.into(),
            category: None,
            extra: IndexMap::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Raw nutrient key to descriptor table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientMetadata {
    descriptors: HashMap<String, NutrientDescriptor>,
}

impl NutrientMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, descriptor: NutrientDescriptor) {
        self.descriptors.insert(key.into(), descriptor);
    }

    pub fn get(&self, key: &str) -> Option<&NutrientDescriptor> {
        self.descriptors.get(key)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, NutrientDescriptor)> for NutrientMetadata {
    fn from_iter<I: IntoIterator<Item = (K, NutrientDescriptor)>>(iter: I) -> Self {
        Self {
            descriptors: iter.into_iter().map(|(k, d)| (k.into(), d)).collect(),
        }
    }
}

/// A nutrient value scaled to the requested quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledNutrientEntry {
    pub key: String,
    #[serde(flatten)]
    pub descriptor: NutrientDescriptor,
    pub value: f64,
}

impl ScaledNutrientEntry {
    pub fn display_name(&self) -> &str {
        &self.descriptor.display_name
    }

    pub fn unit(&self) -> &str {
        &self.descriptor.unit
    }

    pub fn category(&self) -> Option<&str> {
        self.descriptor.category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_from_json() {
        let json = r#"{
            "enerc": {"name": "Energy", "unit": "kcal", "category": "Proximates"},
            "vitc": {"displayName": "Vitamin C", "unit": "mg", "category": "Vitamins", "tags": ["water soluble"]}
        }"#;
        let metadata: NutrientMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(metadata.len(), 2);
        let energy = metadata.get("enerc").unwrap();
        assert_eq!(energy.display_name, "Energy");
        assert_eq!(energy.category.as_deref(), Some("Proximates"));

        let vitc = metadata.get("vitc").unwrap();
        assert_eq!(vitc.display_name, "Vitamin C");
        assert!(vitc.extra.contains_key("tags"));
    }

    #[test]
    fn test_scaled_entry_serializes_flat() {
        let entry = ScaledNutrientEntry {
            key: "protcnt".into(),
            descriptor: NutrientDescriptor::new("Protein", "g").with_category("Proximates"),
            value: 15.8,
        };
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["key"], "protcnt");
        assert_eq!(json["display_name"], "Protein");
        assert_eq!(json["unit"], "g");
        assert_eq!(json["category"], "Proximates");
        assert_eq!(json["value"], 15.8);
    }
}
