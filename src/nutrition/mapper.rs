//! Record scaling and enrichment
//!
//! Turns a raw per-100 g composition record into descriptive entries scaled to
//! the requested quantity.

use crate::models::{NutrientMetadata, RawCompositionRecord, ScaledNutrientEntry};

use super::converter::per_hundred_multiplier;

/// Scale a raw record to `grams` and attach metadata to each nutrient
///
/// Fields without a metadata entry, and non-numeric identity fields, are dropped.
/// Output follows the record's field order.
pub fn map_and_scale(
    record: &RawCompositionRecord,
    grams: f64,
    metadata: &NutrientMetadata,
) -> Vec<ScaledNutrientEntry> {
    let multiplier = per_hundred_multiplier(grams);

    record
        .nutrient_values()
        .filter_map(|(key, raw)| {
            metadata.get(key).map(|descriptor| ScaledNutrientEntry {
                key: key.to_string(),
                descriptor: descriptor.clone(),
                value: raw * multiplier,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientDescriptor;

    fn metadata() -> NutrientMetadata {
        [
            ("energy", NutrientDescriptor::new("Energy", "kcal").with_category("Proximates")),
            ("protein", NutrientDescriptor::new("Protein", "g").with_category("Proximates")),
            ("vitc", NutrientDescriptor::new("Vitamin C", "mg").with_category("Vitamins")),
        ]
        .into_iter()
        .collect()
    }

    fn rice() -> RawCompositionRecord {
        RawCompositionRecord::new("Rice")
            .with_attribute("code", "A015")
            .with_value("energy", 345.0)
            .with_value("internal_id", 77.0)
            .with_value("protein", 7.9)
    }

    #[test]
    fn test_hundred_grams_is_identity() {
        let entries = map_and_scale(&rice(), 100.0, &metadata());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, 345.0);
        assert_eq!(entries[1].value, 7.9);
    }

    #[test]
    fn test_fifty_grams_is_half() {
        let entries = map_and_scale(&rice(), 50.0, &metadata());
        assert_eq!(entries[0].value, 345.0 / 2.0);
        assert_eq!(entries[1].value, 7.9 / 2.0);
    }

    #[test]
    fn test_unlisted_fields_dropped() {
        let entries = map_and_scale(&rice(), 100.0, &metadata());
        assert!(entries.iter().all(|e| e.key != "internal_id" && e.key != "code"));
    }

    #[test]
    fn test_preserves_record_order() {
        let record = RawCompositionRecord::new("Guava")
            .with_value("vitc", 214.0)
            .with_value("protein", 1.4)
            .with_value("energy", 55.0);
        let keys: Vec<_> = map_and_scale(&record, 100.0, &metadata())
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["vitc", "protein", "energy"]);
    }

    #[test]
    fn test_entries_carry_descriptor() {
        let entries = map_and_scale(&rice(), 200.0, &metadata());
        assert_eq!(entries[0].display_name(), "Energy");
        assert_eq!(entries[0].unit(), "kcal");
        assert_eq!(entries[0].category(), Some("Proximates"));
        assert!((entries[0].value - 690.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_metadata_yields_nothing() {
        let entries = map_and_scale(&rice(), 100.0, &NutrientMetadata::new());
        assert!(entries.is_empty());
    }
}
