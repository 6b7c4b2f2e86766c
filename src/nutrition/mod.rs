//! Nutrition calculation module
//!
//! Unit normalization, name matching, reference resolution and record scaling.

pub mod converter;
pub mod error;
pub mod mapper;
pub mod matcher;
pub mod resolver;
pub mod units;

pub use converter::{per_hundred_multiplier, to_grams};
pub use error::{CompositionError, CompositionResult};
pub use mapper::map_and_scale;
pub use matcher::is_acceptable_match;
pub use resolver::{CompositionResolver, ReferenceLookup};
pub use units::{is_canonical_unit, normalize_unit, UnitTable, CANONICAL_MASS_UNIT};
