//! Composition service
//!
//! Wires the unit table and the reference data gate into the query pipeline:
//! normalize the quantity, resolve the ingredient, then scale its record.

use std::sync::Arc;

use crate::corpus::{LoadGate, ReferenceData};
use crate::models::{Composition, RawCompositionRecord, ScaledNutrientEntry};
use crate::nutrition::{
    map_and_scale, to_grams, CompositionError, CompositionResolver, CompositionResult, UnitTable,
};

/// Answers composition queries against shared, read-only reference tables
#[derive(Debug, Clone)]
pub struct CompositionService {
    units: Arc<UnitTable>,
    reference: LoadGate<ReferenceData>,
}

impl CompositionService {
    pub fn new(units: UnitTable, reference: LoadGate<ReferenceData>) -> Self {
        Self {
            units: Arc::new(units),
            reference,
        }
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    pub fn reference(&self) -> &LoadGate<ReferenceData> {
        &self.reference
    }

    /// Nutrients in `quantity` `unit` of `ingredient`, in record order
    pub fn compute_composition(
        &self,
        ingredient: &str,
        quantity: f64,
        unit: &str,
    ) -> CompositionResult<Vec<ScaledNutrientEntry>> {
        self.compute(ingredient, quantity, unit).map(|c| c.nutrients)
    }

    /// Like [`compute_composition`](Self::compute_composition), also reporting the
    /// resolved reference name and the normalized gram quantity
    pub fn compute(&self, ingredient: &str, quantity: f64, unit: &str) -> CompositionResult<Composition> {
        let name = ingredient.trim();
        if name.is_empty() {
            return Err(CompositionError::MissingIngredient);
        }

        let grams = to_grams(&self.units, unit, quantity)?;
        let resolver = CompositionResolver::new(&self.reference);
        let record = resolver.resolve(name)?;
        let metadata = &self.reference.get()?.metadata;

        let nutrients = map_and_scale(record, grams, metadata);
        tracing::debug!(
            query = name,
            resolved = %record.name,
            grams,
            nutrients = nutrients.len(),
            "Computed composition"
        );

        Ok(Composition {
            ingredient: record.name.clone(),
            code: record.code().map(str::to_string),
            grams,
            nutrients,
        })
    }

    /// Candidate records for `query`, best first
    pub fn search(&self, query: &str, limit: usize) -> CompositionResult<Vec<&RawCompositionRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CompositionError::MissingIngredient);
        }
        Ok(self.reference.get()?.corpus.search(query, limit))
    }
}
