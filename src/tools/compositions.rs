//! Composition MCP Tools
//!
//! Tools for querying the reference composition tables.

use serde::Serialize;

use crate::models::{RawCompositionRecord, ScaledNutrientEntry};
use crate::nutrition::{CompositionResult, CANONICAL_MASS_UNIT};
use crate::service::CompositionService;

/// Response for get_composition
#[derive(Debug, Serialize)]
pub struct GetCompositionResponse {
    /// Reference name the query resolved to
    pub ingredient: String,
    pub code: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub grams: f64,
    pub nutrients: Vec<ScaledNutrientEntry>,
}

/// Summary of a reference record for search results
#[derive(Debug, Serialize)]
pub struct CompositionSummary {
    pub name: String,
    pub code: Option<String>,
    pub nutrient_count: usize,
}

impl From<&RawCompositionRecord> for CompositionSummary {
    fn from(record: &RawCompositionRecord) -> Self {
        Self {
            name: record.name.clone(),
            code: record.code().map(str::to_string),
            nutrient_count: record.nutrient_values().count(),
        }
    }
}

/// Response for search_compositions
#[derive(Debug, Serialize)]
pub struct SearchCompositionsResponse {
    pub query: String,
    pub items: Vec<CompositionSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub unit: String,
    pub grams_per_unit: f64,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub canonical_unit: &'static str,
    pub units: Vec<UnitSummary>,
    pub total: usize,
}

/// Nutrients in a quantity of an ingredient
pub fn get_composition(
    service: &CompositionService,
    ingredient: &str,
    quantity: f64,
    unit: &str,
) -> CompositionResult<GetCompositionResponse> {
    let composition = service.compute(ingredient, quantity, unit)?;

    Ok(GetCompositionResponse {
        ingredient: composition.ingredient,
        code: composition.code,
        quantity,
        unit: unit.trim().to_string(),
        grams: composition.grams,
        nutrients: composition.nutrients,
    })
}

/// Search reference records by name
pub fn search_compositions(
    service: &CompositionService,
    query: &str,
    limit: i64,
) -> CompositionResult<SearchCompositionsResponse> {
    let limit = limit.clamp(1, 100) as usize;
    let items: Vec<CompositionSummary> = service
        .search(query, limit)?
        .into_iter()
        .map(CompositionSummary::from)
        .collect();

    Ok(SearchCompositionsResponse {
        query: query.trim().to_string(),
        total: items.len(),
        items,
    })
}

/// List every unit the converter accepts
pub fn list_units(service: &CompositionService) -> ListUnitsResponse {
    let units: Vec<UnitSummary> = service
        .units()
        .iter()
        .map(|(unit, grams_per_unit)| UnitSummary {
            unit: unit.to_string(),
            grams_per_unit,
        })
        .collect();

    ListUnitsResponse {
        canonical_unit: CANONICAL_MASS_UNIT,
        total: units.len(),
        units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{LoadGate, ReferenceCorpus, ReferenceData};
    use crate::models::{NutrientDescriptor, NutrientMetadata};
    use crate::nutrition::{CompositionError, UnitTable};

    fn service() -> CompositionService {
        let corpus = ReferenceCorpus::new(vec![
            RawCompositionRecord::new("Rice, raw, milled")
                .with_attribute("code", "A015")
                .with_value("enerc", 345.0),
            RawCompositionRecord::new("Rice flakes")
                .with_attribute("code", "A016")
                .with_value("enerc", 346.0)
                .with_value("protcnt", 6.6),
        ]);
        let metadata: NutrientMetadata = [("enerc", NutrientDescriptor::new("Energy", "kcal"))]
            .into_iter()
            .collect();
        CompositionService::new(
            UnitTable::standard(),
            LoadGate::ready(ReferenceData { corpus, metadata }),
        )
    }

    #[test]
    fn test_get_composition_echoes_request() {
        let resp = get_composition(&service(), "Rice flakes", 2.0, " oz ").unwrap();
        assert_eq!(resp.ingredient, "Rice flakes");
        assert_eq!(resp.code.as_deref(), Some("A016"));
        assert_eq!(resp.unit, "oz");
        assert!((resp.grams - 56.699).abs() < 1e-9);
        assert_eq!(resp.nutrients.len(), 1);
    }

    #[test]
    fn test_search_compositions() {
        let resp = search_compositions(&service(), "rice", 50).unwrap();
        assert_eq!(resp.total, 2);
        assert_eq!(resp.items[0].name, "Rice flakes");
        assert_eq!(resp.items[0].nutrient_count, 2);

        let resp = search_compositions(&service(), "rice", -3).unwrap();
        assert_eq!(resp.total, 1);
    }

    #[test]
    fn test_search_requires_query() {
        assert!(matches!(
            search_compositions(&service(), "", 10),
            Err(CompositionError::MissingIngredient)
        ));
    }

    #[test]
    fn test_list_units() {
        let resp = list_units(&service());
        assert_eq!(resp.canonical_unit, "gram");
        assert_eq!(resp.total, UnitTable::standard().len());
        assert!(resp.units.iter().any(|u| u.unit == "cup" && u.grams_per_unit == 240.0));
    }
}
