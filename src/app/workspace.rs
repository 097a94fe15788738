//! Startup wiring shared by the TUI and the command line: settings, the
//! zone registry and (optionally) the zone store.

use std::path::PathBuf;

use anyhow::Context;

use crate::app::settings::{self, Settings, SettingsError};
use crate::errors;
use crate::zone::{StoreError, ZoneRegistry, ZoneStore};

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    /// Settings file instead of the platform default.
    pub config: Option<PathBuf>,
    /// Zone store file instead of the platform default.
    pub store: Option<PathBuf>,
    /// Root for default zone folders; wins over the settings file.
    pub base_dir: Option<PathBuf>,
    /// Neither load nor save zone bindings.
    pub no_persist: bool,
}

#[derive(Debug)]
pub struct Workspace {
    pub settings: Settings,
    pub registry: ZoneRegistry,
    /// Problems found while restoring saved zones, shown once at startup.
    pub startup_warnings: Vec<String>,
    store: Option<ZoneStore>,
    settings_path: Option<PathBuf>,
}

impl Workspace {
    /// Load settings, then rebuild zones from the store or create the
    /// default set.
    pub fn open(opts: &StartOptions) -> anyhow::Result<Self> {
        let settings_path = opts
            .config
            .clone()
            .unwrap_or_else(settings::default_settings_path);
        let mut settings = settings::load_settings(&settings_path)?;
        let (file_base_dir, file_persist) = (settings.base_dir.clone(), settings.persist_zones);
        if let Some(base) = &opts.base_dir {
            settings.base_dir = Some(base.clone());
        }
        if opts.no_persist {
            settings.persist_zones = false;
        }

        let base_dir = settings.resolved_base_dir();
        let store = settings.persist_zones.then(|| {
            ZoneStore::new(opts.store.clone().unwrap_or_else(settings::default_store_path))
        });

        let stored = match &store {
            Some(s) => s.load()?,
            None => None,
        };
        let mut startup_warnings = Vec::new();
        let registry = match stored {
            Some(zones) if !zones.zones.is_empty() => {
                tracing::info!("restoring {} zones", zones.zones.len());
                let restored = zones
                    .into_registry(&base_dir, settings.capacity)
                    .context("restoring saved zones")?;
                startup_warnings.extend(
                    restored
                        .unavailable
                        .iter()
                        .map(|e| format!("Zone folder unavailable. {}", errors::render_zone_error(e))),
                );
                restored.registry
            }
            _ => ZoneRegistry::with_default_zones(&base_dir, settings.capacity, settings.default_zones)
                .with_context(|| format!("creating default zones under {}", base_dir.display()))?,
        };

        // Command-line overrides are for this run only.
        settings.base_dir = file_base_dir;
        settings.persist_zones = file_persist;
        let workspace = Workspace {
            settings,
            registry,
            startup_warnings,
            store,
            settings_path: Some(settings_path),
        };
        if let Err(e) = workspace.persist() {
            tracing::warn!("could not save zones: {}", errors::describe(&e));
        }
        Ok(workspace)
    }

    pub fn from_parts(settings: Settings, registry: ZoneRegistry, store: Option<ZoneStore>) -> Self {
        Workspace {
            settings,
            registry,
            startup_warnings: Vec::new(),
            store,
            settings_path: None,
        }
    }

    pub fn store(&self) -> Option<&ZoneStore> {
        self.store.as_ref()
    }

    /// Write the settings back to the file they were loaded from.
    pub fn save_settings(&self) -> Result<(), SettingsError> {
        match &self.settings_path {
            Some(path) => settings::save_settings(path, &self.settings),
            None => Ok(()),
        }
    }

    /// Save the zone bindings when persistence is on.
    pub fn persist(&self) -> Result<(), StoreError> {
        match &self.store {
            Some(store) => store.save(&self.registry),
            None => Ok(()),
        }
    }
}
