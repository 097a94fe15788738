use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::KeyCode;
use crate::zone::Decision;

/// Keys while a batch waits on a collision: Left/Right pick Overwrite or
/// Skip, `a` toggles "apply to all", Enter answers. `o` and `s` answer
/// directly; Esc skips.
pub fn handle_conflict(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    let Mode::Conflict {
        selected,
        apply_all,
        ..
    } = &mut app.mode
    else {
        return Ok(false);
    };

    let decision = if keybinds::is_left(&code) || keybinds::is_right(&code) || keybinds::is_tab(&code) {
        *selected = 1 - (*selected).min(1);
        None
    } else if keybinds::is_char(&code, 'a') || keybinds::is_char(&code, 'A') {
        *apply_all = !*apply_all;
        None
    } else if keybinds::is_enter(&code) {
        Some(Decision::from_choice(*selected == 0, *apply_all))
    } else if keybinds::is_char(&code, 'o') || keybinds::is_char(&code, 'O') {
        Some(Decision::from_choice(true, *apply_all))
    } else if keybinds::is_char(&code, 's') || keybinds::is_char(&code, 'S') || keybinds::is_esc(&code) {
        Some(Decision::from_choice(false, *apply_all))
    } else {
        None
    };

    if let Some(decision) = decision {
        app.resolve_conflict(decision);
    }
    Ok(false)
}
