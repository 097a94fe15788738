use std::fmt;

use super::types::{Mode, PendingOp};
use super::workspace::Workspace;
use crate::zone::{Zone, ZoneId, ZoneRegistry};

/// Zone tiles are laid out in a grid this many columns wide.
pub const GRID_COLUMNS: usize = 2;

pub struct App {
    pub workspace: Workspace,
    /// Display position of the highlighted zone.
    pub selected: usize,
    pub mode: Mode,
    /// One-line status shown under the grid.
    pub status: String,
    pub(crate) pending: Option<PendingOp>,
}

impl App {
    pub fn new(workspace: Workspace) -> Self {
        let status = match workspace.startup_warnings.as_slice() {
            [] => format!(
                "{} zones under {}",
                workspace.registry.len(),
                workspace.registry.base_dir().display()
            ),
            [only] => only.clone(),
            [first, rest @ ..] => format!("{} (+{} more)", first, rest.len()),
        };
        App {
            workspace,
            selected: 0,
            mode: Mode::Normal,
            status,
            pending: None,
        }
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.workspace.registry
    }

    pub fn selected_zone(&self) -> Option<&Zone> {
        self.registry().zones().get(self.selected)
    }

    pub fn selected_zone_id(&self) -> Option<ZoneId> {
        self.selected_zone().map(|z| z.id)
    }

    /// True while a drop or folder change waits on a collision answer.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn select(&mut self, index: usize) {
        if index < self.registry().len() {
            self.selected = index;
        }
    }

    pub fn select_left(&mut self) {
        if self.selected % GRID_COLUMNS > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_right(&mut self) {
        if self.selected % GRID_COLUMNS + 1 < GRID_COLUMNS {
            self.select(self.selected + 1);
        }
    }

    pub fn select_up(&mut self) {
        if self.selected >= GRID_COLUMNS {
            self.selected -= GRID_COLUMNS;
        }
    }

    pub fn select_down(&mut self) {
        self.select(self.selected + GRID_COLUMNS);
    }

    /// Move to the next zone in display order, wrapping around.
    pub fn select_next(&mut self) {
        let len = self.registry().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub(crate) fn clamp_selection(&mut self) {
        let len = self.registry().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn show_message(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.mode = Mode::Message {
            title: title.into(),
            content: content.into(),
            is_error: false,
        };
    }

    pub fn show_error(&mut self, err: impl fmt::Display) {
        let content = err.to_string();
        tracing::warn!("{}", content);
        self.mode = Mode::Message {
            title: "Error".to_string(),
            content,
            is_error: true,
        };
    }

    // Saving is best effort: the session keeps working without it.
    pub(crate) fn persist(&mut self) {
        if let Err(e) = self.workspace.persist() {
            let e = crate::errors::describe(&e);
            tracing::warn!("could not save zones: {}", e);
            self.status = format!("Zones not saved: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::Settings;

    fn app_with(count: usize) -> (tempfile::TempDir, App) {
        let tmp = tempfile::tempdir().unwrap();
        let registry = ZoneRegistry::with_default_zones(tmp.path(), 8, count).unwrap();
        let ws = Workspace::from_parts(Settings::default(), registry, None);
        (tmp, App::new(ws))
    }

    #[test]
    fn grid_navigation_stays_in_bounds() {
        let (_tmp, mut app) = app_with(3);
        app.select_left();
        assert_eq!(app.selected, 0);
        app.select_right();
        assert_eq!(app.selected, 1);
        app.select_right();
        assert_eq!(app.selected, 1, "right edge of a two-column row");
        app.select_down();
        assert_eq!(app.selected, 1, "no zone below the second column");
        app.select_left();
        app.select_down();
        assert_eq!(app.selected, 2);
        app.select_up();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn select_next_wraps() {
        let (_tmp, mut app) = app_with(2);
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn startup_warnings_land_in_the_status() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = ZoneRegistry::with_default_zones(tmp.path(), 8, 1).unwrap();
        let mut ws = Workspace::from_parts(Settings::default(), registry, None);
        ws.startup_warnings = vec!["first".to_string(), "second".to_string()];
        let app = App::new(ws);
        assert_eq!(app.status, "first (+1 more)");
    }

    #[test]
    fn select_ignores_out_of_range() {
        let (_tmp, mut app) = app_with(2);
        app.select(5);
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_zone().unwrap().name, "Zone 1");
    }
}
