//! The per-file walk shared by relocation and reassignment.
//!
//! A [`MoveBatch`] processes sources in input order and records one
//! [`ItemReport`] per source. When a destination already exists and no
//! "apply to all" answer is in effect, the batch pauses and hands the
//! [`Collision`] back to the caller; [`MoveBatch::decide`] resumes it. The
//! whole thing runs on the caller's thread. A pause is just the batch
//! waiting for its next method call.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::fs_op::mv::{self, MoveError};
use crate::fs_op::stat::PathType;
use crate::zone::conflict::{Collision, ConflictResolver, Decision};
use crate::zone::report::{ItemReport, Outcome};

/// Result of driving a batch forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The batch is paused on this collision until [`MoveBatch::decide`].
    NeedsDecision(Collision),
    /// Every source has an outcome.
    Done,
}

enum Prepared {
    Ready(PathBuf),
    Collision(Collision),
    Resolved(Outcome),
}

#[derive(Debug)]
pub struct MoveBatch {
    target_dir: PathBuf,
    pending: VecDeque<PathBuf>,
    items: Vec<ItemReport>,
    sticky: Option<bool>,
    awaiting: Option<Collision>,
}

impl MoveBatch {
    pub fn new(target_dir: impl Into<PathBuf>, sources: impl IntoIterator<Item = PathBuf>) -> Self {
        MoveBatch {
            target_dir: target_dir.into(),
            pending: sources.into_iter().collect(),
            items: Vec::new(),
            sticky: None,
            awaiting: None,
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Sources with an outcome so far.
    pub fn processed(&self) -> usize {
        self.items.len()
    }

    /// Sources still waiting, including one paused on a collision.
    pub fn remaining(&self) -> usize {
        self.pending.len() + usize::from(self.awaiting.is_some())
    }

    pub fn pending_collision(&self) -> Option<&Collision> {
        self.awaiting.as_ref()
    }

    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }

    /// Process sources until a collision needs an answer or none are left.
    pub fn step(&mut self) -> Step {
        loop {
            if let Some(step) = self.step_once() {
                return step;
            }
        }
    }

    /// Process at most one source. `None` means one source got its outcome
    /// and more may follow; callers use it to report progress.
    pub fn step_once(&mut self) -> Option<Step> {
        if let Some(collision) = &self.awaiting {
            return Some(Step::NeedsDecision(collision.clone()));
        }

        let Some(source) = self.pending.pop_front() else {
            return Some(Step::Done);
        };
        match self.prepare(&source) {
            Prepared::Ready(destination) => self.perform(source, destination, false),
            Prepared::Resolved(outcome) => self.record(source, outcome),
            Prepared::Collision(collision) => match self.sticky {
                Some(true) => self.perform(source, collision.destination, true),
                Some(false) => self.record(source, Outcome::Skipped),
                None => {
                    self.awaiting = Some(collision.clone());
                    return Some(Step::NeedsDecision(collision));
                }
            },
        }
        None
    }

    /// Answer the collision the batch is paused on. Does nothing if the
    /// batch is not paused.
    pub fn decide(&mut self, decision: Decision) {
        let Some(collision) = self.awaiting.take() else {
            return;
        };
        if decision.applies_to_all() {
            self.sticky = Some(decision.overwrites());
        }
        if decision.overwrites() {
            self.perform(collision.source, collision.destination, true);
        } else {
            tracing::debug!("skipping {}: destination kept", collision.source.display());
            self.record(collision.source, Outcome::Skipped);
        }
    }

    /// Run to completion, asking `resolver` about every collision.
    pub fn run<R: ConflictResolver + ?Sized>(&mut self, resolver: &mut R) {
        while let Step::NeedsDecision(collision) = self.step() {
            let decision = resolver.resolve(&collision);
            self.decide(decision);
        }
    }

    /// Consume the batch and return one report per source.
    ///
    /// Sources that never got an outcome are reported as skipped; they were
    /// not touched.
    pub fn into_items(mut self) -> Vec<ItemReport> {
        if let Some(collision) = self.awaiting.take() {
            self.record(collision.source, Outcome::Skipped);
        }
        while let Some(source) = self.pending.pop_front() {
            self.record(source, Outcome::Skipped);
        }
        self.items
    }

    fn prepare(&self, source: &Path) -> Prepared {
        let destination = match mv::destination_in(source, &self.target_dir) {
            Ok(d) => d,
            Err(e) => return failed(e),
        };

        match PathType::of(source) {
            PathType::File => {}
            PathType::NotFound => {
                return Prepared::Resolved(Outcome::Failed {
                    reason: "file not found".to_string(),
                })
            }
            PathType::Directory | PathType::Other => {
                return failed(MoveError::NotAFile(source.to_path_buf()))
            }
        }

        if mv::is_same_file(source, &destination) {
            return Prepared::Resolved(Outcome::AlreadyInPlace);
        }

        match PathType::of(&destination) {
            PathType::NotFound => Prepared::Ready(destination),
            PathType::File => Prepared::Collision(Collision {
                file_name: file_name_of(source),
                source: source.to_path_buf(),
                destination,
            }),
            PathType::Directory | PathType::Other => Prepared::Resolved(Outcome::Failed {
                reason: format!("a folder or special file named {} is in the way", file_name_of(source)),
            }),
        }
    }

    fn perform(&mut self, source: PathBuf, destination: PathBuf, overwrite: bool) {
        let outcome = match mv::move_file(&source, &destination, overwrite) {
            Ok(()) => {
                tracing::debug!("moved {} -> {}", source.display(), destination.display());
                Outcome::Moved { destination }
            }
            Err(e) => {
                tracing::warn!("failed to move {}: {}", source.display(), e);
                Outcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        self.record(source, outcome);
    }

    fn record(&mut self, source: PathBuf, outcome: Outcome) {
        self.items.push(ItemReport { source, outcome });
    }
}

fn failed(e: MoveError) -> Prepared {
    Prepared::Resolved(Outcome::Failed {
        reason: e.to_string(),
    })
}

fn file_name_of(p: &Path) -> String {
    p.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
