//! Composition resolver
//!
//! Looks an ingredient up in the reference and validates the best guess with the
//! similarity check before accepting it.

use crate::models::RawCompositionRecord;

use super::error::{CompositionError, CompositionResult};
use super::matcher::is_acceptable_match;

/// Name-indexed access to reference composition records
///
/// Implementations apply their own fuzzy matching and return candidates best
/// first. A lookup that is not loaded yet returns [`CompositionError::NotReady`].
pub trait ReferenceLookup {
    fn lookup(&self, name: &str) -> CompositionResult<Vec<&RawCompositionRecord>>;
}

impl<T: ReferenceLookup + ?Sized> ReferenceLookup for &T {
    fn lookup(&self, name: &str) -> CompositionResult<Vec<&RawCompositionRecord>> {
        (**self).lookup(name)
    }
}

/// Resolves ingredient names to a single reference record
#[derive(Debug, Clone)]
pub struct CompositionResolver<L> {
    lookup: L,
}

impl<L: ReferenceLookup> CompositionResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve `name` to the first candidate, if it passes the similarity check
    pub fn resolve(&self, name: &str) -> CompositionResult<&RawCompositionRecord> {
        let candidates = self.lookup.lookup(name)?;

        let Some(candidate) = candidates.into_iter().next() else {
            tracing::debug!(query = name, "No reference candidates");
            return Err(CompositionError::NotFound {
                name: name.to_string(),
            });
        };

        if is_acceptable_match(&fold(&candidate.name), &fold(name)) {
            return Ok(candidate);
        }

        tracing::debug!(
            query = name,
            candidate = %candidate.name,
            "Rejected reference candidate"
        );
        Err(CompositionError::AmbiguousOrNotFound {
            name: name.to_string(),
            suggested_name: candidate.name.clone(),
        })
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}
