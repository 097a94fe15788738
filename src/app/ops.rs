//! Zone operations triggered from the terminal shell.
//!
//! Drops and folder changes run as a [`PendingOp`]: the batch moves files
//! until a collision needs an answer, the app switches to
//! [`Mode::Conflict`], and the next [`App::resolve_conflict`] call picks the
//! batch up where it stopped.

use std::path::PathBuf;

use super::core::App;
use super::types::{Action, InputKind, Mode, PendingOp};
use crate::errors;
use crate::zone::{Decision, Reassignment, Relocation, Step, ZoneError, ZoneId};

impl App {
    pub fn add_zone(&mut self, name: Option<&str>) -> Result<ZoneId, ZoneError> {
        let id = self.workspace.registry.create_zone(name, None)?;
        if let Some(pos) = self.registry().position(id) {
            self.selected = pos;
        }
        self.status = format!("Added {}", self.zone_label(id));
        self.persist();
        Ok(id)
    }

    pub fn rename_zone(&mut self, id: ZoneId, name: &str) -> Result<(), ZoneError> {
        self.workspace.registry.rename_zone(id, name)?;
        self.status = format!("Renamed to {}", self.zone_label(id));
        self.persist();
        Ok(())
    }

    pub fn remove_zone(&mut self, id: ZoneId) -> Result<(), ZoneError> {
        let zone = self.workspace.registry.remove_zone(id)?;
        self.clamp_selection();
        self.status = format!("Removed {} (folder kept at {})", zone.name, zone.path.display());
        self.persist();
        Ok(())
    }

    pub fn refresh_counts(&mut self) -> Result<(), ZoneError> {
        self.workspace.registry.refresh_counts()?;
        self.status = "Counts refreshed".to_string();
        Ok(())
    }

    /// Start moving `files` into `zone`.
    pub fn begin_drop(&mut self, zone: ZoneId, files: Vec<PathBuf>) -> Result<(), ZoneError> {
        if self.refuse_while_busy() || files.is_empty() {
            return Ok(());
        }
        let op = Relocation::begin(&self.workspace.registry, zone, files)?;
        self.pending = Some(PendingOp::Relocation(op));
        self.drive();
        Ok(())
    }

    /// Drop onto the highlighted zone.
    pub fn drop_on_selected(&mut self, files: Vec<PathBuf>) -> Result<(), ZoneError> {
        match self.selected_zone_id() {
            Some(id) => self.begin_drop(id, files),
            None => {
                self.status = "No zone to drop into".to_string();
                Ok(())
            }
        }
    }

    /// Start pointing `zone` at `new_path` and migrating its files.
    pub fn begin_retarget(&mut self, zone: ZoneId, new_path: PathBuf) -> Result<(), ZoneError> {
        if self.refuse_while_busy() {
            return Ok(());
        }
        let op = Reassignment::begin(&self.workspace.registry, zone, new_path)?;
        self.pending = Some(PendingOp::Reassignment(op));
        self.drive();
        Ok(())
    }

    /// Answer the collision the pending batch stopped on and continue.
    pub fn resolve_conflict(&mut self, decision: Decision) {
        match &mut self.pending {
            Some(PendingOp::Relocation(op)) => op.decide(decision),
            Some(PendingOp::Reassignment(op)) => op.decide(decision),
            None => return,
        }
        self.mode = Mode::Normal;
        self.drive();
    }

    /// Open the text dialog for `kind`, prefilled where that helps.
    pub fn open_input(&mut self, kind: InputKind) {
        let (prompt, buffer) = match kind {
            InputKind::NewZone => ("Name (blank for default):".to_string(), String::new()),
            InputKind::RenameZone(id) => ("New name:".to_string(), self.zone_name(id)),
            InputKind::RetargetZone(id) => (
                "Folder path:".to_string(),
                self.registry()
                    .get(id)
                    .map(|z| z.path.display().to_string())
                    .unwrap_or_default(),
            ),
            InputKind::DropFiles(id) => (
                format!("Files to move into {}:", self.zone_name(id)),
                String::new(),
            ),
        };
        self.mode = Mode::Input {
            title: kind.to_string(),
            prompt,
            buffer,
            kind,
        };
    }

    pub fn confirm_remove(&mut self, id: ZoneId) {
        self.mode = Mode::Confirm {
            msg: format!(
                "Remove {}? Its folder and files stay on disk.",
                self.zone_label(id)
            ),
            on_yes: Action::RemoveZone(id),
            selected: 1,
        };
    }

    pub fn perform_action(&mut self, action: Action) -> Result<(), ZoneError> {
        match action {
            Action::RemoveZone(id) => self.remove_zone(id),
        }
    }

    /// Switch between the dark and light palettes and remember the choice.
    pub fn toggle_theme(&mut self) {
        let next = if self.workspace.settings.theme == "light" {
            "dark"
        } else {
            "light"
        };
        self.workspace.settings.theme = next.to_string();
        crate::ui::colors::set_theme(next);
        self.status = match self.workspace.save_settings() {
            Ok(()) => format!("Theme: {}", next),
            Err(e) => {
                let e = errors::describe(&e);
                tracing::warn!("could not save settings: {}", e);
                format!("Theme: {} (not saved: {})", next, e)
            }
        };
    }

    fn refuse_while_busy(&mut self) -> bool {
        if self.is_busy() {
            self.status = "Finish the current operation first".to_string();
        }
        self.is_busy()
    }

    // Run the pending batch until it pauses or finishes.
    fn drive(&mut self) {
        let Some(mut op) = self.pending.take() else {
            return;
        };
        let step = match &mut op {
            PendingOp::Relocation(r) => r.step(),
            PendingOp::Reassignment(r) => r.step(),
        };
        match step {
            Step::NeedsDecision(collision) => {
                self.status = format!("{} already exists", collision.file_name);
                self.mode = Mode::Conflict {
                    collision,
                    selected: 0,
                    apply_all: false,
                };
                self.pending = Some(op);
            }
            Step::Done => self.complete(op),
        }
    }

    fn complete(&mut self, op: PendingOp) {
        self.mode = Mode::Normal;
        match op {
            PendingOp::Relocation(r) => {
                let zone = r.zone();
                let report = r.finish(&mut self.workspace.registry);
                let name = self.zone_name(zone);
                self.status = format!("{}: {}", name, report.summary());
                if report.failed() > 0 {
                    self.mode = Mode::Message {
                        title: "Drop finished with errors".to_string(),
                        content: errors::render_relocation_report(&name, &report),
                        is_error: true,
                    };
                }
            }
            PendingOp::Reassignment(r) => {
                let zone = r.zone();
                match r.finish(&mut self.workspace.registry) {
                    Ok(report) => {
                        let name = self.zone_name(zone);
                        self.status = format!("{}: {}", name, report.summary());
                        self.persist();
                        if report.failed() > 0 {
                            self.mode = Mode::Message {
                                title: "Folder changed with errors".to_string(),
                                content: errors::render_reassignment_report(&name, &report),
                                is_error: true,
                            };
                        }
                    }
                    Err(e) => self.show_error(errors::render_zone_error(&e)),
                }
            }
        }
    }

    fn zone_name(&self, id: ZoneId) -> String {
        self.registry()
            .get(id)
            .map(|z| z.name.clone())
            .unwrap_or_default()
    }

    fn zone_label(&self, id: ZoneId) -> String {
        match self.registry().get(id) {
            Some(z) => format!("\"{}\"", z.name),
            None => id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::Settings;
    use crate::app::workspace::Workspace;
    use crate::zone::ZoneRegistry;
    use std::fs;

    fn app_with(count: usize) -> (tempfile::TempDir, App) {
        let tmp = tempfile::tempdir().unwrap();
        let registry = ZoneRegistry::with_default_zones(tmp.path().join("base"), 8, count).unwrap();
        let ws = Workspace::from_parts(Settings::default(), registry, None);
        (tmp, App::new(ws))
    }

    fn write(dir: &std::path::Path, name: &str, body: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let p = dir.join(name);
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn drop_without_collisions_finishes_immediately() {
        let (tmp, mut app) = app_with(1);
        let inbox = tmp.path().join("inbox");
        let files = vec![write(&inbox, "a.txt", "a"), write(&inbox, "b.txt", "b")];

        app.drop_on_selected(files).unwrap();

        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.is_busy());
        assert_eq!(app.selected_zone().unwrap().file_count, 2);
        assert!(app.status.contains("2 moved"));
    }

    #[test]
    fn collision_pauses_until_answered() {
        let (tmp, mut app) = app_with(1);
        let zone_dir = app.selected_zone().unwrap().path.clone();
        write(&zone_dir, "report.pdf", "old");
        app.refresh_counts().unwrap();
        let inbox = tmp.path().join("inbox");
        let files = vec![write(&inbox, "report.pdf", "new"), write(&inbox, "c.txt", "c")];

        app.drop_on_selected(files).unwrap();
        assert!(matches!(app.mode, Mode::Conflict { .. }));
        assert!(app.is_busy());

        app.resolve_conflict(Decision::Skip);
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.is_busy());
        assert_eq!(fs::read_to_string(zone_dir.join("report.pdf")).unwrap(), "old");
        assert!(inbox.join("report.pdf").exists());
        assert_eq!(app.selected_zone().unwrap().file_count, 2);
    }

    #[test]
    fn second_drop_is_refused_while_paused() {
        let (tmp, mut app) = app_with(1);
        let zone_dir = app.selected_zone().unwrap().path.clone();
        write(&zone_dir, "x.txt", "old");
        let inbox = tmp.path().join("inbox");
        app.drop_on_selected(vec![write(&inbox, "x.txt", "new")]).unwrap();

        let other = write(&inbox, "y.txt", "y");
        app.drop_on_selected(vec![other.clone()]).unwrap();
        assert!(other.exists());
        assert!(app.status.contains("Finish the current operation"));
    }

    #[test]
    fn missing_files_end_in_an_error_message() {
        let (tmp, mut app) = app_with(1);
        app.drop_on_selected(vec![tmp.path().join("gone.txt")]).unwrap();
        match &app.mode {
            Mode::Message { is_error, content, .. } => {
                assert!(*is_error);
                assert!(content.contains("gone.txt"));
            }
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn retarget_moves_files_and_repoints() {
        let (tmp, mut app) = app_with(1);
        let id = app.selected_zone_id().unwrap();
        let old = app.selected_zone().unwrap().path.clone();
        for n in ["1.txt", "2.txt", "3.txt"] {
            write(&old, n, n);
        }
        app.refresh_counts().unwrap();

        let new = tmp.path().join("Archive");
        app.begin_retarget(id, new.clone()).unwrap();

        let zone = app.registry().get(id).unwrap();
        assert_eq!(zone.path, new);
        assert_eq!(zone.file_count, 3);
        assert_eq!(fs::read_dir(&old).unwrap().count(), 0);
    }

    #[test]
    fn add_zone_reports_capacity() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = ZoneRegistry::with_default_zones(tmp.path(), 2, 2).unwrap();
        let mut app = App::new(Workspace::from_parts(Settings::default(), registry, None));
        let err = app.add_zone(None).unwrap_err();
        assert!(matches!(err, ZoneError::CapacityReached { capacity: 2 }));
    }

    #[test]
    fn remove_zone_clamps_selection() {
        let (_tmp, mut app) = app_with(2);
        app.select(1);
        let id = app.selected_zone_id().unwrap();
        app.confirm_remove(id);
        assert!(matches!(app.mode, Mode::Confirm { selected: 1, .. }));
        app.perform_action(Action::RemoveZone(id)).unwrap();
        assert_eq!(app.selected, 0);
        assert_eq!(app.registry().len(), 1);
    }

    #[test]
    fn rename_input_is_prefilled() {
        let (_tmp, mut app) = app_with(1);
        let id = app.selected_zone_id().unwrap();
        app.open_input(InputKind::RenameZone(id));
        match &app.mode {
            Mode::Input { buffer, title, .. } => {
                assert_eq!(buffer, "Zone 1");
                assert_eq!(title, "Rename zone");
            }
            other => panic!("unexpected mode {:?}", other),
        }
    }
}
