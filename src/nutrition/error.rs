//! Request error types

use thiserror::Error;

/// Errors that terminate a composition request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionError {
    #[error("Unknown unit: '{unit}'")]
    UnknownUnit { unit: String },

    #[error("Please provide an ingredient name")]
    MissingIngredient,

    #[error("No composition data found for '{name}'")]
    NotFound { name: String },

    #[error("No composition data found for '{name}'. Did you mean '{suggested_name}'?")]
    AmbiguousOrNotFound {
        name: String,
        suggested_name: String,
    },

    #[error("Reference data is still loading, try again shortly")]
    NotReady,
}

impl CompositionError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CompositionError::UnknownUnit { .. } => "unknown_unit",
            CompositionError::MissingIngredient => "missing_ingredient",
            CompositionError::NotFound { .. } => "not_found",
            CompositionError::AmbiguousOrNotFound { .. } => "ambiguous_or_not_found",
            CompositionError::NotReady => "not_ready",
        }
    }

    /// The "did you mean" hint, if any
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            CompositionError::AmbiguousOrNotFound { suggested_name, .. } => Some(suggested_name.as_str()),
            _ => None,
        }
    }
}

/// Result type for composition requests
pub type CompositionResult<T> = Result<T, CompositionError>;
