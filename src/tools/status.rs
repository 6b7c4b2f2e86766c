//! Nutricomp Status Tool
//!
//! Provides runtime status information about the composition service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::ServiceConfig;
use crate::service::CompositionService;

/// Query instructions for AI assistants
pub const COMPOSITION_INSTRUCTIONS: &str = r#"
# Nutrient Composition Instructions

The reference table stores nutrient values **per 100 grams** of each ingredient.
`get_composition` scales them to the quantity you ask for.

## Asking for a composition

```
get_composition(ingredient: "Rice", quantity: 200, unit: "gram")
```

- `quantity` defaults to 100 and `unit` defaults to "gram".
- Kitchen units are converted with fixed factors (cup = 240 g, tbsp = 15 g,
  tsp = 5 g). Call `list_units` for the full table.
- Volume units assume the density of water. For dense or airy ingredients,
  weigh in grams instead.

## When the name is not found

- A single typo against the whole reference name is tolerated, and a query
  contained in a reference name matches it ("rice" finds "Rice, raw, milled").
- If the closest reference name is further away, the error carries a
  `suggestion`. Confirm it with the user, then ask again using that name.
- Use `search_compositions` to browse reference names before asking.

## When the service is still starting

The reference table loads in the background at startup. Until it is loaded,
queries fail with kind `not_ready`. Check `nutricomp_status` and retry once
`ready` is true.
"#;

/// Status information for the service
#[derive(Debug, Serialize)]
pub struct NutricompStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub ready: bool,
    pub loaded_at: Option<String>,
    pub composition_records: usize,
    pub nutrient_descriptors: usize,
    pub units: usize,
    pub compositions_path: String,
    pub nutrients_path: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks service runtime information
pub struct StatusTracker {
    start_time: Instant,
    compositions_path: PathBuf,
    nutrients_path: PathBuf,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            start_time: Instant::now(),
            compositions_path: config.compositions_path.clone(),
            nutrients_path: config.nutrients_path.clone(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, service: &CompositionService) -> NutricompStatus {
        let build_info = BuildInfo::current();
        let reference = service.reference();

        let (composition_records, nutrient_descriptors) = reference
            .get()
            .map(|data| (data.corpus.len(), data.metadata.len()))
            .unwrap_or((0, 0));

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutricompStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            ready: reference.is_ready(),
            loaded_at: reference
                .loaded_at()
                .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            composition_records,
            nutrient_descriptors,
            units: service.units().len(),
            compositions_path: self.compositions_path.display().to_string(),
            nutrients_path: self.nutrients_path.display().to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{LoadGate, ReferenceCorpus, ReferenceData};
    use crate::models::RawCompositionRecord;
    use crate::nutrition::UnitTable;

    #[test]
    fn test_status_before_and_after_load() {
        let config = ServiceConfig::with_data_dir("/srv/ifct");
        let tracker = StatusTracker::new(&config);
        let gate = LoadGate::new();
        let service = CompositionService::new(UnitTable::standard(), gate.clone());

        let status = tracker.get_status(&service);
        assert!(!status.ready);
        assert!(status.loaded_at.is_none());
        assert_eq!(status.composition_records, 0);
        assert_eq!(status.compositions_path, "/srv/ifct/compositions.json");

        gate.install(ReferenceData {
            corpus: ReferenceCorpus::new(vec![RawCompositionRecord::new("Rice")]),
            ..Default::default()
        })
        .unwrap();

        let status = tracker.get_status(&service);
        assert!(status.ready);
        assert!(status.loaded_at.is_some());
        assert_eq!(status.composition_records, 1);
        assert_eq!(status.process_id, std::process::id());
    }
}
