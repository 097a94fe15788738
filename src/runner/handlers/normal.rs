use crate::app::settings::keybinds;
use crate::app::{App, InputKind};
use crate::errors;
use crate::input::KeyCode;
use crate::zone::ZoneError;

pub fn handle_normal(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }

    if keybinds::is_left(&code) {
        app.select_left();
    } else if keybinds::is_right(&code) {
        app.select_right();
    } else if keybinds::is_up(&code) {
        app.select_up();
    } else if keybinds::is_down(&code) {
        app.select_down();
    } else if keybinds::is_tab(&code) {
        app.select_next();
    } else if let Some(idx) = keybinds::zone_digit(&code) {
        app.select(idx);
    } else if keybinds::is_refresh(&code) {
        if let Err(e) = app.refresh_counts() {
            app.show_error(errors::render_zone_error(&e));
        }
    } else if keybinds::is_add_zone(&code) {
        if app.registry().is_full() {
            let capacity = app.registry().capacity();
            app.show_error(errors::render_zone_error(&ZoneError::CapacityReached { capacity }));
        } else {
            app.open_input(InputKind::NewZone);
        }
    } else if keybinds::is_toggle_theme(&code) {
        app.toggle_theme();
    } else if let Some(id) = app.selected_zone_id() {
        if keybinds::is_rename_zone(&code) {
            app.open_input(InputKind::RenameZone(id));
        } else if keybinds::is_retarget_zone(&code) {
            app.open_input(InputKind::RetargetZone(id));
        } else if keybinds::is_drop_files(&code) {
            app.open_input(InputKind::DropFiles(id));
        } else if keybinds::is_remove_zone(&code) {
            app.confirm_remove(id);
        }
    }
    Ok(false)
}
