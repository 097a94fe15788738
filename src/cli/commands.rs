use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use super::{CollisionArgs, Command};
use crate::app::Workspace;
use crate::errors;
use crate::fs_op::path::{resolve_folder, resolve_path};
use crate::zone::{
    AlwaysOverwrite, AlwaysSkip, Collision, ConflictResolver, Decision, ItemReport, Outcome,
    Reassignment, Relocation, Step, ZoneError, ZoneId, ZoneRegistry,
};

/// Run one non-interactive subcommand against `ws`.
pub fn run(command: Command, ws: &mut Workspace) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    match command {
        Command::Tui => bail!("the TUI is started from main"),
        Command::List { json } => list(&ws.registry, json),
        Command::Add { name, path } => {
            let path = path
                .map(|p| resolve_folder(&p, &cwd))
                .transpose()?;
            let id = ws
                .registry
                .create_zone(name.as_deref(), path)
                .map_err(zone_err)?;
            save(ws);
            if let Some(zone) = ws.registry.get(id) {
                println!(
                    "{} {} -> {}",
                    style("added").green(),
                    zone.name,
                    zone.path.display()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Rename { zone, name } => {
            let id = find_zone(&ws.registry, &zone)?;
            ws.registry.rename_zone(id, &name).map_err(zone_err)?;
            save(ws);
            println!("{} zone {} to {}", style("renamed").green(), zone, name.trim());
            Ok(ExitCode::SUCCESS)
        }
        Command::Remove { zone } => {
            let id = find_zone(&ws.registry, &zone)?;
            let removed = ws.registry.remove_zone(id).map_err(zone_err)?;
            save(ws);
            println!(
                "{} {} (folder kept at {})",
                style("removed").green(),
                removed.name,
                removed.path.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Drop {
            zone,
            files,
            collisions,
        } => {
            let id = find_zone(&ws.registry, &zone)?;
            let files = resolve_files(&files, &cwd)?;
            let mut op = Relocation::begin(&ws.registry, id, files).map_err(zone_err)?;
            drive(&mut op, resolver_for(collisions).as_mut());
            let report = op.finish(&mut ws.registry);
            print_items(&report.items);
            println!(
                "{} -> {}: {}",
                style(zone_name(&ws.registry, id)).bold(),
                report.target.display(),
                report.summary()
            );
            Ok(exit_for(report.failed()))
        }
        Command::Retarget {
            zone,
            path,
            collisions,
        } => {
            let id = find_zone(&ws.registry, &zone)?;
            let new_path = resolve_folder(&path, &cwd)?;
            let mut op = Reassignment::begin(&ws.registry, id, new_path).map_err(zone_err)?;
            drive(&mut op, resolver_for(collisions).as_mut());
            let report = op.finish(&mut ws.registry).map_err(zone_err)?;
            save(ws);
            print_items(&report.items);
            println!(
                "{} -> {}: {}, {} files in folder",
                style(zone_name(&ws.registry, id)).bold(),
                report.new_path.display(),
                report.summary(),
                report.file_count
            );
            Ok(exit_for(report.failed()))
        }
    }
}

fn zone_err(e: ZoneError) -> anyhow::Error {
    anyhow!(errors::render_zone_error(&e))
}

fn save(ws: &Workspace) {
    if let Err(e) = ws.persist() {
        let e = errors::describe(&e);
        tracing::warn!("could not save zones: {}", e);
        eprintln!("{} zones not saved: {}", style("warning:").yellow(), e);
    }
}

fn exit_for(failed: usize) -> ExitCode {
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn zone_name(registry: &ZoneRegistry, id: ZoneId) -> String {
    registry.get(id).map(|z| z.name.clone()).unwrap_or_default()
}

/// A 1-based position, or else an exact zone name.
pub fn find_zone(registry: &ZoneRegistry, query: &str) -> anyhow::Result<ZoneId> {
    let query = query.trim();
    if let Ok(pos) = query.parse::<usize>() {
        if let Some(zone) = pos.checked_sub(1).and_then(|i| registry.zones().get(i)) {
            return Ok(zone.id);
        }
    }
    registry
        .zones()
        .iter()
        .find(|z| z.name == query)
        .map(|z| z.id)
        .ok_or_else(|| {
            anyhow!(
                "no zone matches {:?} (use a position from 1 to {} or a name)",
                query,
                registry.len()
            )
        })
}

/// Ask on the terminal; answers arrive through dialoguer.
struct PromptResolver;

impl ConflictResolver for PromptResolver {
    fn resolve(&mut self, collision: &Collision) -> Decision {
        let overwrite = Confirm::new()
            .with_prompt(collision.prompt())
            .default(false)
            .interact();
        let overwrite = match overwrite {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("prompt failed, skipping {}: {}", collision.file_name, e);
                return Decision::SkipAll;
            }
        };
        let apply_all = Confirm::new()
            .with_prompt("Use this answer for the remaining files?")
            .default(false)
            .interact()
            .unwrap_or(false);
        Decision::from_choice(overwrite, apply_all)
    }
}

fn resolver_for(args: CollisionArgs) -> Box<dyn ConflictResolver> {
    if args.overwrite {
        Box::new(AlwaysOverwrite)
    } else if args.skip || !std::io::stdin().is_terminal() {
        Box::new(AlwaysSkip)
    } else {
        Box::new(PromptResolver)
    }
}

/// The stepping surface shared by relocations and reassignments.
trait Batched {
    fn step_once(&mut self) -> Option<Step>;
    fn decide(&mut self, decision: Decision);
    fn processed(&self) -> usize;
    fn remaining(&self) -> usize;
}

macro_rules! batched {
    ($ty:ty) => {
        impl Batched for $ty {
            fn step_once(&mut self) -> Option<Step> {
                <$ty>::step_once(self)
            }
            fn decide(&mut self, decision: Decision) {
                <$ty>::decide(self, decision)
            }
            fn processed(&self) -> usize {
                self.batch().processed()
            }
            fn remaining(&self) -> usize {
                self.batch().remaining()
            }
        }
    };
}

batched!(Relocation);
batched!(Reassignment);

// Step one file at a time so the bar tracks progress. The bar is hidden
// while a prompt is on screen.
fn drive(op: &mut dyn Batched, resolver: &mut dyn ConflictResolver) {
    let total = op.remaining();
    let bar = if total > 1 && std::io::stderr().is_terminal() {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(s) = ProgressStyle::with_template("{bar:30} {pos}/{len}") {
        bar.set_style(s);
    }
    loop {
        match op.step_once() {
            None => bar.set_position(op.processed() as u64),
            Some(Step::Done) => break,
            Some(Step::NeedsDecision(collision)) => {
                let decision = bar.suspend(|| resolver.resolve(&collision));
                op.decide(decision);
                bar.set_position(op.processed() as u64);
            }
        }
    }
    bar.finish_and_clear();
}

fn print_items(items: &[ItemReport]) {
    for item in items {
        let name = item.file_name();
        match &item.outcome {
            Outcome::Moved { .. } => println!("  {} {}", style("moved").green(), name),
            Outcome::Skipped => println!("  {} {}", style("skipped").yellow(), name),
            Outcome::AlreadyInPlace => println!("  {} {}", style("in place").dim(), name),
            Outcome::Failed { reason } => {
                println!("  {} {}: {}", style("failed").red().bold(), name, reason)
            }
        }
    }
}

#[derive(Serialize)]
struct ZoneRow<'a> {
    position: usize,
    name: &'a str,
    path: &'a Path,
    file_count: usize,
}

fn list(registry: &ZoneRegistry, json: bool) -> anyhow::Result<ExitCode> {
    let rows: Vec<ZoneRow> = registry
        .zones()
        .iter()
        .enumerate()
        .map(|(i, z)| ZoneRow {
            position: i + 1,
            name: &z.name,
            path: &z.path,
            file_count: z.file_count,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} of {} zones",
        style(registry.len()).bold(),
        registry.capacity()
    );
    for row in &rows {
        println!(
            "{:>2}  {:<20} {:>5}  {}",
            row.position,
            style(row.name).bold(),
            row.file_count,
            style(row.path.display()).dim()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn resolve_files(files: &[PathBuf], cwd: &Path) -> anyhow::Result<Vec<PathBuf>> {
    Ok(files
        .iter()
        .map(|f| resolve_path(&f.to_string_lossy(), cwd))
        .collect::<Result<Vec<_>, _>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_zone_by_position_or_name() {
        let tmp = tempfile::tempdir().unwrap();
        let mut reg = ZoneRegistry::with_default_zones(tmp.path(), 8, 2).unwrap();
        let second = reg.zones()[1].id;
        reg.rename_zone(second, "Receipts").unwrap();

        assert_eq!(find_zone(&reg, "2").unwrap(), second);
        assert_eq!(find_zone(&reg, "Receipts").unwrap(), second);
        assert!(find_zone(&reg, "0").is_err());
        assert!(find_zone(&reg, "3").is_err());
        assert!(find_zone(&reg, "receipts").is_err());
    }
}
