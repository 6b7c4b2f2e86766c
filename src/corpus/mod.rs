//! Reference data module
//!
//! In-memory composition corpus, startup loading and the readiness gate.

pub mod gate;
pub mod loader;
pub mod reference;

use std::path::PathBuf;

use thiserror::Error;

pub use gate::LoadGate;
pub use loader::{load_compositions, load_metadata, load_reference_data, load_units, ReferenceData};
pub use reference::{ReferenceCorpus, DEFAULT_SEARCH_LIMIT};

/// Startup loading error types
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unit '{unit}' has invalid grams-per-unit factor {factor}")]
    InvalidUnitFactor { unit: String, factor: f64 },

    #[error("Reference data already loaded")]
    AlreadyLoaded,

    #[error("Loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for loading operations
pub type LoadResult<T> = Result<T, LoadError>;
