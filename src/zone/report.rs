use std::path::PathBuf;

use serde::Serialize;

use crate::zone::registry::ZoneId;

/// What happened to one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Moved { destination: PathBuf },
    /// The destination existed and the user chose not to overwrite it.
    Skipped,
    /// The source already was the destination file; nothing to do.
    AlreadyInPlace,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    pub source: PathBuf,
    pub outcome: Outcome,
}

impl ItemReport {
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

fn count(items: &[ItemReport], pred: impl Fn(&Outcome) -> bool) -> usize {
    items.iter().filter(|i| pred(&i.outcome)).count()
}

fn summarize(items: &[ItemReport]) -> String {
    let mut parts = vec![format!("{} moved", count(items, |o| matches!(o, Outcome::Moved { .. })))];
    let skipped = count(items, |o| matches!(o, Outcome::Skipped));
    if skipped > 0 {
        parts.push(format!("{} skipped", skipped));
    }
    let in_place = count(items, |o| matches!(o, Outcome::AlreadyInPlace));
    if in_place > 0 {
        parts.push(format!("{} already there", in_place));
    }
    let failed = count(items, |o| matches!(o, Outcome::Failed { .. }));
    if failed > 0 {
        parts.push(format!("{} failed", failed));
    }
    parts.join(", ")
}

/// Per-file results of moving a batch of files into a zone.
#[derive(Debug, Clone, Serialize)]
pub struct RelocationReport {
    pub zone: ZoneId,
    pub target: PathBuf,
    pub items: Vec<ItemReport>,
}

/// Per-file results of pointing a zone at a new folder.
#[derive(Debug, Clone, Serialize)]
pub struct ReassignmentReport {
    pub zone: ZoneId,
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub items: Vec<ItemReport>,
    /// Files counted in `new_path` once migration finished.
    pub file_count: usize,
}

macro_rules! item_counters {
    ($ty:ty) => {
        impl $ty {
            pub fn moved(&self) -> usize {
                count(&self.items, |o| matches!(o, Outcome::Moved { .. }))
            }

            pub fn skipped(&self) -> usize {
                count(&self.items, |o| matches!(o, Outcome::Skipped))
            }

            pub fn failed(&self) -> usize {
                count(&self.items, |o| matches!(o, Outcome::Failed { .. }))
            }

            /// `(file name, reason)` for every failed item.
            pub fn failures(&self) -> impl Iterator<Item = (String, &str)> + '_ {
                self.items.iter().filter_map(|i| match &i.outcome {
                    Outcome::Failed { reason } => Some((i.file_name(), reason.as_str())),
                    _ => None,
                })
            }

            pub fn summary(&self) -> String {
                summarize(&self.items)
            }
        }
    };
}

item_counters!(RelocationReport);
item_counters!(ReassignmentReport);

impl ReassignmentReport {
    pub fn path_changed(&self) -> bool {
        self.old_path != self.new_path
    }
}
