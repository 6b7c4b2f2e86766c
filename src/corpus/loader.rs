//! Startup loading of the reference files

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use crate::config::ServiceConfig;
use crate::models::{NutrientMetadata, RawCompositionRecord};
use crate::nutrition::{CompositionResult, ReferenceLookup, UnitTable};

use super::{LoadError, LoadGate, LoadResult, ReferenceCorpus};

/// Composition corpus and nutrient metadata, loaded together
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub corpus: ReferenceCorpus,
    pub metadata: NutrientMetadata,
}

impl ReferenceLookup for ReferenceData {
    fn lookup(&self, name: &str) -> CompositionResult<Vec<&RawCompositionRecord>> {
        self.corpus.lookup(name)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the composition corpus: a JSON array of records
pub fn load_compositions(path: &Path, search_limit: usize) -> LoadResult<ReferenceCorpus> {
    let records: Vec<RawCompositionRecord> = read_json(path)?;
    Ok(ReferenceCorpus::new(records).with_search_limit(search_limit))
}

/// Load nutrient metadata: a JSON object keyed by nutrient code
pub fn load_metadata(path: &Path) -> LoadResult<NutrientMetadata> {
    read_json(path)
}

/// Built-in unit table, with overrides from `path` merged over it
pub fn load_units(path: Option<&Path>) -> LoadResult<UnitTable> {
    let mut table = UnitTable::standard();
    if let Some(path) = path {
        let overrides: BTreeMap<String, f64> = read_json(path)?;
        tracing::info!("Loaded {} unit overrides from {}", overrides.len(), path.display());
        table.extend(overrides)?;
    }
    Ok(table)
}

/// Load corpus and metadata synchronously
pub fn load_reference_data(config: &ServiceConfig) -> LoadResult<ReferenceData> {
    let corpus = load_compositions(&config.compositions_path, config.search_limit)?;
    let metadata = load_metadata(&config.nutrients_path)?;
    Ok(ReferenceData { corpus, metadata })
}

/// Load the reference data in the background and open `gate` when done
///
/// Until the task finishes, requests through `gate` fail with `NotReady`. A failed
/// load is logged and leaves the gate closed.
pub fn spawn_reference_load(
    config: ServiceConfig,
    gate: LoadGate<ReferenceData>,
) -> JoinHandle<LoadResult<()>> {
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || load_reference_data(&config))
            .await
            .map_err(LoadError::from)
            .and_then(|loaded| loaded);

        match result {
            Ok(data) => {
                tracing::info!(
                    records = data.corpus.len(),
                    nutrients = data.metadata.len(),
                    "Reference corpus loaded"
                );
                gate.install(data)
            }
            Err(e) => {
                tracing::error!("Failed to load reference corpus: {}", e);
                Err(e)
            }
        }
    })
}
