use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::KeyCode;

/// Any of Enter, Esc or a printable key dismisses the message.
pub fn handle_message(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_enter(&code) || keybinds::is_esc(&code) || matches!(code, KeyCode::Char(_)) {
        app.mode = Mode::Normal;
    }
    Ok(false)
}
