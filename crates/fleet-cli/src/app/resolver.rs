//! Path resolution for config, database, documents and preferences.

use std::path::{Path, PathBuf};

use fleet_core::storage::DEFAULT_DB_FILENAME;

use crate::config::{default_config_path, xdg_config_dir, FleetConfig};
use crate::constants::{DOCUMENTS_DIRNAME, PREFERENCES_FILENAME};

/// Resolve the config file path, checking FLEET_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("FLEET_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Preferences live next to the config file.
pub fn resolve_preferences_path(config_path: &Path) -> anyhow::Result<PathBuf> {
    match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.join(PREFERENCES_FILENAME)),
        _ => Ok(xdg_config_dir()?.join(PREFERENCES_FILENAME)),
    }
}

/// Database path: flag/env first, then config, then the working directory.
pub fn resolve_db_path(flag: Option<&Path>, config: &FleetConfig) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(ref path) = config.store.path {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from(DEFAULT_DB_FILENAME)
}

/// Documents directory: config, else `files` next to the database.
pub fn resolve_documents_dir(config: &FleetConfig, db_path: &Path) -> PathBuf {
    if let Some(ref dir) = config.documents.dir {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(DOCUMENTS_DIRNAME),
        _ => PathBuf::from(DOCUMENTS_DIRNAME),
    }
}
