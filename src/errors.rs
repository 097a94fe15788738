//! User-facing wording for zone errors and operation reports.
//!
//! Both the TUI dialogs and the command line print through these helpers so
//! the two surfaces describe problems the same way.

use std::error::Error;

use crate::fs_op::FsOpError;
use crate::zone::{ReassignmentReport, RelocationReport, ZoneError};

/// Failures listed in a report before the rest are summarised.
pub const MAX_LISTED_FAILURES: usize = 8;

/// `err` followed by each of its sources, on one line.
pub fn describe(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

pub fn render_zone_error(err: &ZoneError) -> String {
    match err {
        ZoneError::CapacityReached { capacity } => format!(
            "All {} zones are in use. Remove a zone before adding another.",
            capacity
        ),
        ZoneError::EmptyName => "Zone names cannot be empty.".to_string(),
        ZoneError::UnknownZone(id) => format!("Zone {} no longer exists.", id),
        ZoneError::Fs(FsOpError::CreateDir { path, source }) => format!(
            "Could not create folder {}: {}",
            path.display(),
            source
        ),
        ZoneError::Fs(e) => describe(e),
        ZoneError::Store(e) => describe(e),
    }
}

fn push_failures<'a>(out: &mut String, failures: impl Iterator<Item = (String, &'a str)>) {
    let failures: Vec<_> = failures.collect();
    if failures.is_empty() {
        return;
    }
    out.push_str("\n\nNot moved:");
    for (name, reason) in failures.iter().take(MAX_LISTED_FAILURES) {
        out.push_str(&format!("\n  {}: {}", name, reason));
    }
    if failures.len() > MAX_LISTED_FAILURES {
        out.push_str(&format!("\n  ...and {} more", failures.len() - MAX_LISTED_FAILURES));
    }
}

pub fn render_relocation_report(zone_name: &str, report: &RelocationReport) -> String {
    let mut out = format!(
        "{} -> {}\n{}",
        zone_name,
        report.target.display(),
        report.summary()
    );
    push_failures(&mut out, report.failures());
    out
}

pub fn render_reassignment_report(zone_name: &str, report: &ReassignmentReport) -> String {
    let mut out = if report.path_changed() {
        format!(
            "{} now points at {}\n(was {})\n{}",
            zone_name,
            report.new_path.display(),
            report.old_path.display(),
            report.summary()
        )
    } else {
        format!("{} already points at {}", zone_name, report.new_path.display())
    };
    out.push_str(&format!("\n{} files in folder", report.file_count));
    push_failures(&mut out, report.failures());
    out
}
