use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::fs_op::helpers::ensure_dir;
use crate::fs_op::stat::count_files;
use crate::zone::error::ZoneError;

/// Maximum number of zones when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 8;
/// Number of zones built for a fresh workspace.
pub const DEFAULT_ZONE_COUNT: usize = 4;

/// Stable identifier of a zone within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ZoneId(u64);

impl ZoneId {
    #[cfg(test)]
    pub(crate) fn from_raw(raw: u64) -> Self {
        ZoneId(raw)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named binding between a display label and a target folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    /// Absolute folder path. Exists on disk after every successful operation.
    pub path: PathBuf,
    /// Snapshot of the number of regular files directly inside `path`.
    pub file_count: usize,
    /// When files were last relocated into this zone.
    pub last_activity: Option<DateTime<Local>>,
}

/// Ordered, capacity-bounded collection of zones. Insertion order is
/// display order.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    base_dir: PathBuf,
    capacity: usize,
    zones: Vec<Zone>,
    next_id: u64,
}

impl ZoneRegistry {
    /// Empty registry. Default zone folders are created under `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, capacity: usize) -> Self {
        ZoneRegistry {
            base_dir: base_dir.into(),
            capacity: capacity.max(1),
            zones: Vec::new(),
            next_id: 1,
        }
    }

    /// Registry pre-filled with `count` default zones (`Area1`, `Area2`, ...),
    /// never more than `capacity`.
    pub fn with_default_zones(
        base_dir: impl Into<PathBuf>,
        capacity: usize,
        count: usize,
    ) -> Result<Self, ZoneError> {
        let mut registry = ZoneRegistry::new(base_dir, capacity);
        ensure_dir(&registry.base_dir)?;
        for _ in 0..count.min(registry.capacity) {
            registry.create_zone(None, None)?;
        }
        Ok(registry)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.zones.len() >= self.capacity
    }

    /// Zones in display order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    /// Display position of the zone with `id`.
    pub fn position(&self, id: ZoneId) -> Option<usize> {
        self.zones.iter().position(|z| z.id == id)
    }

    /// Default folder for the zone at 1-based `ordinal`.
    pub fn default_path_for(&self, ordinal: usize) -> PathBuf {
        self.base_dir.join(format!("Area{}", ordinal))
    }

    // Start at the next display position. Skip ordinals whose default folder
    // is already bound, which only happens after a removal.
    fn next_default_ordinal(&self) -> usize {
        let mut ordinal = self.zones.len() + 1;
        while self
            .zones
            .iter()
            .any(|z| z.path == self.default_path_for(ordinal))
        {
            ordinal += 1;
        }
        ordinal
    }

    /// Append a new zone.
    ///
    /// Without `path` the folder is `base_dir/Area{n}` where `n` is the
    /// zone's ordinal; without `name` the label is `Zone {n}`. The folder is
    /// created immediately and its files are counted.
    ///
    /// A full registry refuses the request with
    /// [`ZoneError::CapacityReached`] and is left unchanged.
    pub fn create_zone(
        &mut self,
        name: Option<&str>,
        path: Option<PathBuf>,
    ) -> Result<ZoneId, ZoneError> {
        if self.is_full() {
            tracing::warn!("refusing new zone: registry holds {} of {}", self.len(), self.capacity);
            return Err(ZoneError::CapacityReached {
                capacity: self.capacity,
            });
        }

        let ordinal = self.next_default_ordinal();
        let name = match name {
            Some(n) => validate_name(n)?,
            None => format!("Zone {}", ordinal),
        };
        let path = path.unwrap_or_else(|| self.default_path_for(ordinal));
        ensure_dir(&path)?;
        let file_count = count_files(&path)?;

        let id = self.push(name, path, file_count);
        Ok(id)
    }

    /// Bind a saved zone whose folder cannot be created right now (an
    /// unmounted drive, a file in the way). The zone keeps its path with a
    /// count of zero so it can still be retargeted or removed.
    pub(crate) fn restore_unavailable(
        &mut self,
        name: Option<&str>,
        path: PathBuf,
    ) -> Result<ZoneId, ZoneError> {
        if self.is_full() {
            return Err(ZoneError::CapacityReached {
                capacity: self.capacity,
            });
        }
        let name = match name {
            Some(n) => validate_name(n)?,
            None => format!("Zone {}", self.next_default_ordinal()),
        };
        tracing::warn!(name = %name, path = %path.display(), "zone folder unavailable");
        Ok(self.push(name, path, 0))
    }

    fn push(&mut self, name: String, path: PathBuf, file_count: usize) -> ZoneId {
        let id = ZoneId(self.next_id);
        self.next_id += 1;
        tracing::info!(zone = %id, name = %name, path = %path.display(), file_count, "zone created");
        self.zones.push(Zone {
            id,
            name,
            path,
            file_count,
            last_activity: None,
        });
        id
    }

    /// Change a zone's display name. Names are trimmed and must not be empty.
    pub fn rename_zone(&mut self, id: ZoneId, new_name: &str) -> Result<(), ZoneError> {
        let name = validate_name(new_name)?;
        let zone = self.get_mut(id).ok_or(ZoneError::UnknownZone(id))?;
        tracing::info!(zone = %id, from = %zone.name, to = %name, "zone renamed");
        zone.name = name;
        Ok(())
    }

    /// Unbind a zone. Its folder and files stay on disk.
    pub fn remove_zone(&mut self, id: ZoneId) -> Result<Zone, ZoneError> {
        let pos = self.position(id).ok_or(ZoneError::UnknownZone(id))?;
        let zone = self.zones.remove(pos);
        tracing::info!(zone = %id, path = %zone.path.display(), "zone removed");
        Ok(zone)
    }

    /// Recount every zone's folder, recreating folders that went missing.
    ///
    /// A zone whose folder cannot be read keeps its old count; the others
    /// are still refreshed and the first failure is returned.
    pub fn refresh_counts(&mut self) -> Result<(), ZoneError> {
        let mut first_err = None;
        for zone in &mut self.zones {
            let counted = ensure_dir(&zone.path).and_then(|()| count_files(&zone.path));
            match counted {
                Ok(n) => zone.file_count = n,
                Err(e) => {
                    tracing::warn!(zone = %zone.id, "cannot recount {}: {}", zone.path.display(), e);
                    first_err.get_or_insert(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

fn validate_name(name: &str) -> Result<String, ZoneError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ZoneError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn default_zones_get_ordinal_folders() {
        let temp = assert_fs::TempDir::new().unwrap();
        let base = temp.path().join("OrganizedFiles");
        let reg = ZoneRegistry::with_default_zones(&base, DEFAULT_CAPACITY, DEFAULT_ZONE_COUNT).unwrap();

        assert_eq!(reg.len(), 4);
        for (i, zone) in reg.zones().iter().enumerate() {
            assert_eq!(zone.path, base.join(format!("Area{}", i + 1)));
            assert_eq!(zone.name, format!("Zone {}", i + 1));
            assert!(zone.path.is_dir());
            assert_eq!(zone.file_count, 0);
        }
    }

    #[test]
    fn default_count_is_clamped_to_capacity() {
        let temp = assert_fs::TempDir::new().unwrap();
        let reg = ZoneRegistry::with_default_zones(temp.path(), 2, 5).unwrap();
        assert_eq!(reg.len(), 2);
        assert!(reg.is_full());
    }

    #[test]
    fn creation_counts_existing_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("Area1/a.txt").write_str("a").unwrap();
        temp.child("Area1/b.txt").write_str("b").unwrap();
        temp.child("Area1/sub").create_dir_all().unwrap();

        let mut reg = ZoneRegistry::new(temp.path(), 8);
        let id = reg.create_zone(None, None).unwrap();
        assert_eq!(reg.get(id).unwrap().file_count, 2);
    }

    #[test]
    fn explicit_name_and_path_are_used() {
        let temp = assert_fs::TempDir::new().unwrap();
        let custom = temp.path().join("elsewhere/photos");
        let mut reg = ZoneRegistry::new(temp.path(), 8);
        let id = reg.create_zone(Some("  Photos "), Some(custom.clone())).unwrap();
        let zone = reg.get(id).unwrap();
        assert_eq!(zone.name, "Photos");
        assert_eq!(zone.path, custom);
        assert!(custom.is_dir());
    }

    #[test]
    fn ninth_zone_is_refused() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut reg = ZoneRegistry::with_default_zones(temp.path(), 8, 4).unwrap();
        for _ in 0..4 {
            reg.create_zone(None, None).unwrap();
        }
        assert_eq!(reg.len(), 8);

        let err = reg.create_zone(None, None).unwrap_err();
        assert!(matches!(err, ZoneError::CapacityReached { capacity: 8 }));
        assert_eq!(reg.len(), 8);
        temp.child("Area9").assert(predicates::path::missing());
    }

    #[test]
    fn rename_trims_and_rejects_empty() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut reg = ZoneRegistry::with_default_zones(temp.path(), 8, 1).unwrap();
        let id = reg.zones()[0].id;

        reg.rename_zone(id, " Invoices ").unwrap();
        assert_eq!(reg.get(id).unwrap().name, "Invoices");

        assert!(matches!(reg.rename_zone(id, "   "), Err(ZoneError::EmptyName)));
        assert_eq!(reg.get(id).unwrap().name, "Invoices");
    }

    #[test]
    fn names_need_not_be_unique() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut reg = ZoneRegistry::new(temp.path(), 8);
        reg.create_zone(Some("Inbox"), None).unwrap();
        reg.create_zone(Some("Inbox"), None).unwrap();
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn remove_keeps_folder_and_ids_stay_stable() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut reg = ZoneRegistry::with_default_zones(temp.path(), 8, 3).unwrap();
        let first = reg.zones()[0].id;
        let third = reg.zones()[2].id;

        let removed = reg.remove_zone(first).unwrap();
        assert!(removed.path.is_dir(), "folder must stay on disk");
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.position(third), Some(1));
        assert!(matches!(reg.remove_zone(first), Err(ZoneError::UnknownZone(_))));
    }

    #[test]
    fn default_path_skips_bound_folders_after_removal() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut reg = ZoneRegistry::with_default_zones(temp.path(), 8, 3).unwrap();
        let first = reg.zones()[0].id;
        reg.remove_zone(first).unwrap();

        // Area3 is still bound by the last zone, so the new one takes Area4.
        let id = reg.create_zone(None, None).unwrap();
        assert_eq!(reg.get(id).unwrap().path, temp.path().join("Area4"));
    }

    #[test]
    fn refresh_counts_recreates_missing_folders() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut reg = ZoneRegistry::with_default_zones(temp.path(), 8, 1).unwrap();
        let path = reg.zones()[0].path.clone();
        std::fs::remove_dir(&path).unwrap();
        temp.child("Area1").assert(predicates::path::missing());

        reg.refresh_counts().unwrap();
        assert!(path.is_dir());
        assert_eq!(reg.zones()[0].file_count, 0);
    }

    #[test]
    fn refresh_counts_keeps_going_past_a_blocked_folder() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut reg = ZoneRegistry::with_default_zones(temp.path(), 8, 2).unwrap();
        std::fs::remove_dir(temp.path().join("Area1")).unwrap();
        temp.child("Area1").write_str("a file now").unwrap();
        temp.child("Area2/late.txt").write_str("x").unwrap();

        let err = reg.refresh_counts().unwrap_err();
        assert!(matches!(err, ZoneError::Fs(_)));
        assert_eq!(reg.zones()[1].file_count, 1);
    }

    #[test]
    fn unavailable_zone_is_bound_with_no_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut reg = ZoneRegistry::new(temp.path(), 1);
        let id = reg
            .restore_unavailable(None, temp.path().join("offline"))
            .unwrap();
        let zone = reg.get(id).unwrap();
        assert_eq!(zone.name, "Zone 1");
        assert_eq!(zone.file_count, 0);
        temp.child("offline").assert(predicates::path::missing());
        assert!(matches!(
            reg.restore_unavailable(Some("x"), temp.path().join("y")),
            Err(ZoneError::CapacityReached { capacity: 1 })
        ));
    }
}
