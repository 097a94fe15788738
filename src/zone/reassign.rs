use std::path::{Path, PathBuf};

use crate::fs_op::helpers::ensure_dir;
use crate::fs_op::mv::is_same_file;
use crate::fs_op::stat::{count_files, list_files};
use crate::zone::batch::{MoveBatch, Step};
use crate::zone::conflict::{ConflictResolver, Decision};
use crate::zone::error::ZoneError;
use crate::zone::registry::{ZoneId, ZoneRegistry};
use crate::zone::report::ReassignmentReport;

/// Pointing a zone at a new folder and migrating its files there.
///
/// Migration is not transactional. If the process dies half way, some files
/// are already in the new folder while the zone still points at the old one.
#[derive(Debug)]
pub struct Reassignment {
    zone: ZoneId,
    old_path: PathBuf,
    new_path: PathBuf,
    batch: MoveBatch,
}

impl Reassignment {
    /// Create `new_path` and collect the files to migrate from the zone's
    /// current folder (non-recursive). The zone itself is not touched yet.
    pub fn begin(
        registry: &ZoneRegistry,
        zone: ZoneId,
        new_path: PathBuf,
    ) -> Result<Self, ZoneError> {
        let old_path = registry
            .get(zone)
            .ok_or(ZoneError::UnknownZone(zone))?
            .path
            .clone();
        ensure_dir(&new_path)?;

        let sources = if old_path.is_dir() && !same_folder(&old_path, &new_path) {
            list_files(&old_path)?
        } else {
            Vec::new()
        };
        tracing::info!(
            zone = %zone,
            from = %old_path.display(),
            to = %new_path.display(),
            files = sources.len(),
            "reassignment started"
        );

        Ok(Reassignment {
            zone,
            old_path,
            batch: MoveBatch::new(new_path.clone(), sources),
            new_path,
        })
    }

    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    pub fn old_path(&self) -> &Path {
        &self.old_path
    }

    pub fn new_path(&self) -> &Path {
        &self.new_path
    }

    pub fn batch(&self) -> &MoveBatch {
        &self.batch
    }

    pub fn step(&mut self) -> Step {
        self.batch.step()
    }

    pub fn step_once(&mut self) -> Option<Step> {
        self.batch.step_once()
    }

    pub fn decide(&mut self, decision: Decision) {
        self.batch.decide(decision)
    }

    pub fn run<R: ConflictResolver + ?Sized>(&mut self, resolver: &mut R) {
        self.batch.run(resolver)
    }

    /// Repoint the zone at the new folder and recount it, whatever happened
    /// to individual files.
    pub fn finish(self, registry: &mut ZoneRegistry) -> Result<ReassignmentReport, ZoneError> {
        let items = self.batch.into_items();
        // Count first so a failed count leaves the binding untouched.
        let file_count = count_files(&self.new_path)?;
        let zone = registry
            .get_mut(self.zone)
            .ok_or(ZoneError::UnknownZone(self.zone))?;
        zone.path = self.new_path.clone();
        zone.file_count = file_count;

        let report = ReassignmentReport {
            zone: self.zone,
            old_path: self.old_path,
            new_path: self.new_path,
            items,
            file_count,
        };
        tracing::info!(zone = %self.zone, summary = %report.summary(), file_count, "reassignment finished");
        Ok(report)
    }
}

fn same_folder(a: &Path, b: &Path) -> bool {
    a == b || is_same_file(a, b)
}

/// Point `zone` at `new_path`, migrating the files directly inside its old
/// folder with the same collision policy as a relocation.
pub fn reassign<R: ConflictResolver + ?Sized>(
    registry: &mut ZoneRegistry,
    zone: ZoneId,
    new_path: PathBuf,
    resolver: &mut R,
) -> Result<ReassignmentReport, ZoneError> {
    let mut reassignment = Reassignment::begin(registry, zone, new_path)?;
    reassignment.run(resolver);
    reassignment.finish(registry)
}
