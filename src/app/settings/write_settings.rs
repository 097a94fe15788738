use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::settings::SettingsError;
use crate::fs_op::helpers::atomic_write;
use crate::zone::{DEFAULT_CAPACITY, DEFAULT_ZONE_COUNT};

/// User configuration, stored as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root for default zone folders. `None` means `<Documents>/OrganizedFiles`.
    pub base_dir: Option<PathBuf>,
    /// Maximum number of zones.
    pub capacity: usize,
    /// Zones created for a fresh workspace.
    pub default_zones: usize,
    /// Save zone bindings so they survive restarts.
    pub persist_zones: bool,
    /// `"dark"` or `"light"`.
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_dir: None,
            capacity: DEFAULT_CAPACITY,
            default_zones: DEFAULT_ZONE_COUNT,
            persist_zones: true,
            theme: "dark".to_string(),
        }
    }
}

impl Settings {
    pub fn resolved_base_dir(&self) -> PathBuf {
        self.base_dir
            .clone()
            .unwrap_or_else(crate::app::settings::default_base_dir)
    }
}

/// Write `settings` to `path` atomically, creating parent folders.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let text = toml::to_string_pretty(settings)?;
    atomic_write(path, text.as_bytes()).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
