//! Gazetteer override file at <config_dir>/geotagger/gazetteer.json.
//!
//! The file is a JSON array of regions. When absent, the built-in
//! catalog is used. A present but malformed file is an error, never a
//! silent fallback.

use super::types::{ConfigurationError, Region};
use super::Gazetteer;
use std::fs;
use std::path::{Path, PathBuf};

/// Default override path, if a config directory exists on this platform.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("geotagger").join("gazetteer.json"))
}

/// Read and validate a gazetteer file.
pub fn load_from(path: &Path) -> Result<Gazetteer, ConfigurationError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let regions: Vec<Region> =
        serde_json::from_str(&data).map_err(|source| ConfigurationError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let gazetteer = Gazetteer::new(regions)?;
    tracing::info!(
        path = %path.display(),
        regions = gazetteer.len(),
        "loaded gazetteer override"
    );
    Ok(gazetteer)
}

/// Resolve the gazetteer for this process.
///
/// Priority: explicit path > default override file (if it exists) > built-in.
pub fn load(explicit: Option<&Path>) -> Result<Gazetteer, ConfigurationError> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match default_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Gazetteer::builtin(),
    }
}

/// Write regions as pretty JSON (used to seed an override file).
pub fn write_to(path: &Path, regions: &[Region]) -> Result<(), ConfigurationError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigurationError::Read {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(regions).map_err(|source| ConfigurationError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| ConfigurationError::Read {
        path: path.to_path_buf(),
        source,
    })
}
