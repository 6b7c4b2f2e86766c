//! Service configuration
//!
//! Paths and limits come from environment variables, falling back to the `data/`
//! directory next to the project root.

use std::path::{Path, PathBuf};

use crate::corpus::DEFAULT_SEARCH_LIMIT;

pub const ENV_DATA_DIR: &str = "NUTRICOMP_DATA_DIR";
pub const ENV_COMPOSITIONS: &str = "NUTRICOMP_COMPOSITIONS";
pub const ENV_NUTRIENTS: &str = "NUTRICOMP_NUTRIENTS";
pub const ENV_UNITS: &str = "NUTRICOMP_UNITS";
pub const ENV_SEARCH_LIMIT: &str = "NUTRICOMP_SEARCH_LIMIT";

/// Upper bound for the candidate search limit
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Locations of the reference files and lookup settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub data_dir: PathBuf,
    pub compositions_path: PathBuf,
    pub nutrients_path: PathBuf,
    /// Optional unit overrides merged over the built-in table
    pub units_path: Option<PathBuf>,
    pub search_limit: usize,
}

impl ServiceConfig {
    /// Default layout under `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            compositions_path: data_dir.join("compositions.json"),
            nutrients_path: data_dir.join("nutrients.json"),
            units_path: None,
            search_limit: DEFAULT_SEARCH_LIMIT,
            data_dir,
        }
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = var(ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let mut config = Self::with_data_dir(data_dir);

        if let Some(path) = var(ENV_COMPOSITIONS) {
            config.compositions_path = PathBuf::from(path);
        }
        if let Some(path) = var(ENV_NUTRIENTS) {
            config.nutrients_path = PathBuf::from(path);
        }
        config.units_path = var(ENV_UNITS).map(PathBuf::from);

        if let Some(raw) = var(ENV_SEARCH_LIMIT) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.search_limit = limit.clamp(1, MAX_SEARCH_LIMIT),
                Err(_) => tracing::warn!(
                    "Invalid {} '{}'; using default {}",
                    ENV_SEARCH_LIMIT,
                    raw,
                    DEFAULT_SEARCH_LIMIT
                ),
            }
        }

        config
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::with_data_dir(default_data_dir())
    }
}

/// `<project>/data`, located relative to the running executable
pub fn default_data_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    project_root(exe_dir).join("data")
}

// Go up from target/release or target/debug to the project root
fn project_root(mut path: PathBuf) -> PathBuf {
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(Path::parent) {
            path = grandparent.to_path_buf();
        }
    }
    path
}
