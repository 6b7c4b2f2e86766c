//! Data models
//!
//! Reference records, nutrient metadata and computed results.

mod composition;
mod nutrient;

pub use composition::{Composition, RawCompositionRecord};
pub use nutrient::{NutrientDescriptor, NutrientMetadata, ScaledNutrientEntry};
