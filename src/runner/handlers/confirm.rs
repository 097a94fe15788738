use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::errors;
use crate::input::KeyCode;

pub fn handle_confirm(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    let Mode::Confirm {
        on_yes, selected, ..
    } = &mut app.mode
    else {
        return Ok(false);
    };

    if keybinds::is_left(&code) || keybinds::is_right(&code) || keybinds::is_tab(&code) {
        // 0 = Yes, 1 = No
        *selected = 1 - (*selected).min(1);
    } else if keybinds::is_enter(&code) || keybinds::is_char(&code, 'y') {
        let yes = *selected == 0 || keybinds::is_char(&code, 'y');
        let action = on_yes.clone();
        app.mode = Mode::Normal;
        if yes {
            if let Err(e) = app.perform_action(action) {
                app.show_error(errors::render_zone_error(&e));
            }
        }
    } else if keybinds::is_esc(&code) || keybinds::is_char(&code, 'n') {
        app.mode = Mode::Normal;
    }
    Ok(false)
}
