//! Split handlers: one submodule per mode, dispatched from here.

pub mod confirm;
pub mod conflict;
pub mod input_mode;
pub mod message;
pub mod normal;

pub use confirm::handle_confirm;
pub use conflict::handle_conflict;
pub use input_mode::handle_input;
pub use message::handle_message;
pub use normal::handle_normal;

use crate::app::{App, InputKind, Mode};
use crate::errors;
use crate::input::keyboard::{is_force_quit, KeyEvent};
use crate::input::parse_dropped_paths;

/// Top-level key handler. Returns `true` when the app should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if is_force_quit(&key) {
        return Ok(true);
    }
    let code = key.code;
    match &app.mode {
        Mode::Normal => handle_normal(app, code),
        Mode::Input { .. } => handle_input(app, code),
        Mode::Conflict { .. } => handle_conflict(app, code),
        Mode::Confirm { .. } => handle_confirm(app, code),
        Mode::Message { .. } => handle_message(app, code),
    }
}

/// Files dragged onto the terminal. In the grid they drop onto the
/// highlighted zone; in the drop dialog they drop onto that dialog's zone.
pub fn handle_paste(app: &mut App, text: &str) {
    match &mut app.mode {
        Mode::Normal => {
            let files = parse_dropped_paths(text);
            if files.is_empty() {
                app.status = "Nothing to drop".to_string();
                return;
            }
            if let Err(e) = app.drop_on_selected(files) {
                app.show_error(errors::render_zone_error(&e));
            }
        }
        Mode::Input {
            kind: InputKind::DropFiles(zone),
            ..
        } => {
            let zone = *zone;
            app.mode = Mode::Normal;
            if let Err(e) = app.begin_drop(zone, parse_dropped_paths(text)) {
                app.show_error(errors::render_zone_error(&e));
            }
        }
        Mode::Input { buffer, .. } => {
            // Other dialogs take a single line.
            buffer.push_str(text.lines().next().unwrap_or_default().trim());
        }
        _ => app.status = "Close the dialog before dropping files".to_string(),
    }
}
