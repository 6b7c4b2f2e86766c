//! Readiness gate
//!
//! A write-once cell shared between the startup loader and request handlers.
//! Readers never block: before the loader installs a value they get
//! [`CompositionError::NotReady`].

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};

use crate::models::RawCompositionRecord;
use crate::nutrition::{CompositionError, CompositionResult, ReferenceLookup};

use super::{LoadError, LoadResult};

#[derive(Debug)]
struct Loaded<T> {
    value: T,
    loaded_at: DateTime<Utc>,
}

/// Shared handle to a value that becomes available once startup loading completes
#[derive(Debug)]
pub struct LoadGate<T> {
    cell: Arc<OnceLock<Loaded<T>>>,
}

impl<T> LoadGate<T> {
    /// Create an empty, not-ready gate
    pub fn new() -> Self {
        Self {
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// Create a gate that is already open
    pub fn ready(value: T) -> Self {
        let gate = Self::new();
        // a fresh cell cannot already be set
        let _ = gate.cell.set(Loaded {
            value,
            loaded_at: Utc::now(),
        });
        gate
    }

    /// Install the loaded value; fails if a value was installed before
    pub fn install(&self, value: T) -> LoadResult<()> {
        self.cell
            .set(Loaded {
                value,
                loaded_at: Utc::now(),
            })
            .map_err(|_| LoadError::AlreadyLoaded)
    }

    /// The loaded value, or `NotReady`
    pub fn get(&self) -> CompositionResult<&T> {
        self.cell
            .get()
            .map(|loaded| &loaded.value)
            .ok_or(CompositionError::NotReady)
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }

    /// When the value was installed
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.cell.get().map(|loaded| loaded.loaded_at)
    }
}

impl<T> Clone for LoadGate<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> Default for LoadGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ReferenceLookup> ReferenceLookup for LoadGate<T> {
    fn lookup(&self, name: &str) -> CompositionResult<Vec<&RawCompositionRecord>> {
        self.get()?.lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::ReferenceCorpus;

    #[test]
    fn test_not_ready_until_installed() {
        let gate: LoadGate<u32> = LoadGate::new();
        assert!(!gate.is_ready());
        assert_eq!(gate.get(), Err(CompositionError::NotReady));
        assert!(gate.loaded_at().is_none());

        gate.install(7).unwrap();
        assert!(gate.is_ready());
        assert_eq!(gate.get(), Ok(&7));
        assert!(gate.loaded_at().is_some());
    }

    #[test]
    fn test_clones_share_state() {
        let gate: LoadGate<&str> = LoadGate::new();
        let reader = gate.clone();
        gate.install("loaded").unwrap();
        assert_eq!(reader.get(), Ok(&"loaded"));
    }

    #[test]
    fn test_install_twice_fails() {
        let gate = LoadGate::ready(1);
        assert!(matches!(gate.install(2), Err(LoadError::AlreadyLoaded)));
        assert_eq!(gate.get(), Ok(&1));
    }

    #[test]
    fn test_lookup_through_gate() {
        let gate: LoadGate<ReferenceCorpus> = LoadGate::new();
        assert!(matches!(gate.lookup("rice"), Err(CompositionError::NotReady)));

        gate.install(ReferenceCorpus::new(vec![RawCompositionRecord::new("Rice")]))
            .unwrap();
        assert_eq!(gate.lookup("rice").unwrap().len(), 1);
    }
}
