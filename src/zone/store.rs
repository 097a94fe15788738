//! Persisting zone bindings between runs.
//!
//! Only names and folders are saved; counts are recomputed on load and
//! activity timestamps are session-only.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fs_op::helpers::atomic_write;
use crate::zone::error::ZoneError;
use crate::zone::registry::ZoneRegistry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access zone store `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("zone store `{}` is malformed", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot serialize zones")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredZone {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredZones {
    #[serde(default, rename = "zone")]
    pub zones: Vec<StoredZone>,
}

impl StoredZones {
    pub fn from_registry(registry: &ZoneRegistry) -> Self {
        StoredZones {
            zones: registry
                .zones()
                .iter()
                .map(|z| StoredZone {
                    name: z.name.clone(),
                    path: z.path.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a registry. Entries past `capacity` are dropped; a blank name
    /// falls back to the default label.
    ///
    /// A zone whose folder cannot be created is still bound, with a count of
    /// zero, and its error is returned in [`Restored::unavailable`].
    pub fn into_registry(self, base_dir: &Path, capacity: usize) -> Result<Restored, ZoneError> {
        let mut registry = ZoneRegistry::new(base_dir, capacity);
        let mut unavailable = Vec::new();
        let total = self.zones.len();
        for stored in self.zones.into_iter().take(registry.capacity()) {
            let name = Some(stored.name.as_str()).filter(|n| !n.trim().is_empty());
            match registry.create_zone(name, Some(stored.path.clone())) {
                Ok(_) => {}
                Err(ZoneError::Fs(e)) => {
                    registry.restore_unavailable(name, stored.path)?;
                    unavailable.push(ZoneError::Fs(e));
                }
                Err(e) => return Err(e),
            }
        }
        if total > registry.len() {
            tracing::warn!(
                "zone store lists {} zones but capacity is {}; extra zones ignored",
                total,
                registry.capacity()
            );
        }
        Ok(Restored {
            registry,
            unavailable,
        })
    }
}

/// A registry rebuilt from the store.
#[derive(Debug)]
pub struct Restored {
    pub registry: ZoneRegistry,
    /// Zones bound without a usable folder, one error each.
    pub unavailable: Vec<ZoneError>,
}

/// TOML file holding the zone list.
#[derive(Debug, Clone)]
pub struct ZoneStore {
    path: PathBuf,
}

impl ZoneStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ZoneStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the store has never been written.
    pub fn load(&self) -> Result<Option<StoredZones>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        toml::from_str(&text)
            .map(Some)
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    pub fn save(&self, registry: &ZoneRegistry) -> Result<(), StoreError> {
        let text = toml::to_string_pretty(&StoredZones::from_registry(registry))?;
        atomic_write(&self.path, text.as_bytes()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("saved {} zones to {}", registry.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn missing_store_loads_as_none() {
        let temp = assert_fs::TempDir::new().unwrap();
        let store = ZoneStore::new(temp.path().join("zones.toml"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_rebuilds_registry() {
        let temp = assert_fs::TempDir::new().unwrap();
        let base = temp.path().join("base");
        let mut reg = ZoneRegistry::with_default_zones(&base, 8, 2).unwrap();
        let first = reg.zones()[0].id;
        reg.rename_zone(first, "Invoices").unwrap();
        temp.child("base/Area2/keep.txt").write_str("k").unwrap();

        let store = ZoneStore::new(temp.path().join("data/zones.toml"));
        store.save(&reg).unwrap();

        let loaded = store.load().unwrap().expect("store written");
        assert_eq!(loaded.zones.len(), 2);
        assert_eq!(loaded.zones[0].name, "Invoices");

        let rebuilt = loaded.into_registry(&base, 8).unwrap().registry;
        assert_eq!(rebuilt.zones()[0].name, "Invoices");
        assert_eq!(rebuilt.zones()[1].path, base.join("Area2"));
        assert_eq!(rebuilt.zones()[1].file_count, 1);
    }

    #[test]
    fn extra_zones_beyond_capacity_are_dropped() {
        let temp = assert_fs::TempDir::new().unwrap();
        let zones = (1..=5)
            .map(|i| StoredZone {
                name: format!("z{}", i),
                path: temp.path().join(format!("z{}", i)),
            })
            .collect();
        let reg = StoredZones { zones }.into_registry(temp.path(), 3).unwrap().registry;
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn unreachable_folder_is_bound_but_reported() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("blocker").write_str("a file, not a folder").unwrap();
        let zones = vec![
            StoredZone {
                name: "Good".into(),
                path: temp.path().join("good"),
            },
            StoredZone {
                name: "Usb".into(),
                path: temp.path().join("blocker/usb"),
            },
        ];

        let restored = StoredZones { zones }.into_registry(temp.path(), 8).unwrap();
        assert_eq!(restored.registry.len(), 2);
        let usb = &restored.registry.zones()[1];
        assert_eq!(usb.name, "Usb");
        assert_eq!(usb.path, temp.path().join("blocker/usb"));
        assert_eq!(usb.file_count, 0);
        assert_eq!(restored.unavailable.len(), 1);
        assert!(matches!(restored.unavailable[0], ZoneError::Fs(_)));
    }

    #[test]
    fn malformed_store_names_the_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("zones.toml");
        file.write_str("zone = 12").unwrap();
        let err = ZoneStore::new(file.path()).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("zones.toml"));
    }
}
