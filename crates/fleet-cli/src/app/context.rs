//! Application context for the Fleet CLI.
//!
//! Combines CLI arguments with lazily-loaded configuration and
//! preferences, and opens the stores commands work against.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use tracing::debug;

use fleet_core::documents::DocumentStore;
use fleet_core::storage::{SqliteVehicleStore, VehicleStore};

use crate::cli::Cli;
use crate::config::{read_config, FleetConfig};
use crate::preferences::Preferences;
use crate::ui::UiContext;

use super::resolver::{
    resolve_config_path, resolve_db_path, resolve_documents_dir, resolve_preferences_path,
};

/// Application context that bundles CLI args with loaded settings.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config_path: OnceCell<PathBuf>,
    config: OnceCell<FleetConfig>,
    preferences: OnceCell<Preferences>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config_path: OnceCell::new(),
            config: OnceCell::new(),
            preferences: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn config_path(&self) -> anyhow::Result<&Path> {
        self.config_path
            .get_or_try_init(resolve_config_path)
            .map(PathBuf::as_path)
    }

    /// The config file, or defaults when none has been written yet.
    pub fn config(&self) -> anyhow::Result<&FleetConfig> {
        self.config.get_or_try_init(|| {
            let path = self.config_path()?;
            if path.exists() {
                debug!(path = %path.display(), "loading config");
                read_config(path)
            } else {
                debug!(path = %path.display(), "no config file; using defaults");
                Ok(FleetConfig::default())
            }
        })
    }

    pub fn preferences_path(&self) -> anyhow::Result<PathBuf> {
        resolve_preferences_path(self.config_path()?)
    }

    pub fn preferences(&self) -> anyhow::Result<&Preferences> {
        self.preferences
            .get_or_try_init(|| Ok(Preferences::load(&self.preferences_path()?)))
    }

    pub fn db_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_db_path(self.cli.db.as_deref(), self.config()?))
    }

    pub fn documents_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_documents_dir(self.config()?, &self.db_path()?))
    }

    pub fn open_store(&self) -> anyhow::Result<SqliteVehicleStore> {
        let path = self.db_path()?;
        debug!(path = %path.display(), "opening vehicle store");
        SqliteVehicleStore::open(&path).map_err(|e| {
            anyhow::Error::from(e).context(format!("Failed to open database {}", path.display()))
        })
    }

    pub fn document_store(&self) -> anyhow::Result<DocumentStore> {
        Ok(DocumentStore::new(self.documents_dir()?))
    }

    /// UI context for the current command; preference problems fall back
    /// to defaults so that errors can always be rendered.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let defaults = Preferences::default();
        let preferences = self.preferences().unwrap_or(&defaults);
        UiContext::from_env(
            json,
            format,
            self.cli.no_color,
            self.cli.ascii,
            preferences,
        )
    }
}
