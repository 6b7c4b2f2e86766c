//! Nutrient Composition Service (nutricomp) Library
//!
//! Answers "how many nutrients are in this much of that ingredient" against a
//! per-100 g reference composition table.

pub mod build_info;
pub mod config;
pub mod corpus;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod service;
pub mod tools;

pub use config::ServiceConfig;
pub use models::{Composition, ScaledNutrientEntry};
pub use nutrition::{CompositionError, CompositionResult};
pub use service::CompositionService;
