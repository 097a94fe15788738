use std::path::PathBuf;

use chrono::Local;

use crate::fs_op::helpers::ensure_dir;
use crate::zone::batch::{MoveBatch, Step};
use crate::zone::conflict::{ConflictResolver, Decision};
use crate::zone::error::ZoneError;
use crate::zone::registry::{ZoneId, ZoneRegistry};
use crate::zone::report::RelocationReport;

/// Moving a set of files into one zone.
///
/// Created by [`Relocation::begin`], driven with `step`/`decide` (or `run`),
/// and applied to the registry with [`Relocation::finish`].
#[derive(Debug)]
pub struct Relocation {
    zone: ZoneId,
    batch: MoveBatch,
}

impl Relocation {
    /// Check the zone and make sure its folder exists. Nothing is moved yet.
    pub fn begin(
        registry: &ZoneRegistry,
        zone: ZoneId,
        sources: Vec<PathBuf>,
    ) -> Result<Self, ZoneError> {
        let target = registry
            .get(zone)
            .ok_or(ZoneError::UnknownZone(zone))?
            .path
            .clone();
        ensure_dir(&target)?;
        tracing::info!(zone = %zone, files = sources.len(), target = %target.display(), "relocation started");
        Ok(Relocation {
            zone,
            batch: MoveBatch::new(target, sources),
        })
    }

    pub fn zone(&self) -> ZoneId {
        self.zone
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

    /// Build the report and bump the zone's count by the number of moved
    /// files. A zone removed in the meantime only loses the count update.
    pub fn finish(self, registry: &mut ZoneRegistry) -> RelocationReport {
        let target = self.batch.target_dir().to_path_buf();
        let report = RelocationReport {
            zone: self.zone,
            target,
            items: self.batch.into_items(),
        };
        let moved = report.moved();
        if let Some(zone) = registry.get_mut(self.zone) {
            zone.file_count += moved;
            if moved > 0 {
                zone.last_activity = Some(Local::now());
            }
        }
        tracing::info!(zone = %self.zone, summary = %report.summary(), "relocation finished");
        report
    }
}

/// Move `sources` into the folder of `zone`, asking `resolver` about
/// collisions. Per-file problems end up in the report; only an unknown zone
/// or an uncreatable folder fails the call.
pub fn relocate<R: ConflictResolver + ?Sized>(
    registry: &mut ZoneRegistry,
    zone: ZoneId,
    sources: Vec<PathBuf>,
    resolver: &mut R,
) -> Result<RelocationReport, ZoneError> {
    let mut relocation = Relocation::begin(registry, zone, sources)?;
    relocation.run(resolver);
    Ok(relocation.finish(registry))
}
