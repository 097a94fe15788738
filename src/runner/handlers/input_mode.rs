use crate::app::settings::keybinds;
use crate::app::{App, InputKind, Mode};
use crate::errors;
use crate::fs_op::path::{resolve_folder, resolve_path};
use crate::input::{parse_dropped_paths, KeyCode};

pub fn handle_input(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    let Mode::Input { buffer, kind, .. } = &mut app.mode else {
        return Ok(false);
    };

    if keybinds::is_enter(&code) {
        let input = std::mem::take(buffer);
        let kind = *kind;
        app.mode = Mode::Normal;
        submit(app, kind, &input);
    } else if keybinds::is_backspace(&code) {
        buffer.pop();
    } else if keybinds::is_esc(&code) {
        app.mode = Mode::Normal;
    } else if let KeyCode::Char(c) = code {
        buffer.push(c);
    }
    Ok(false)
}

fn submit(app: &mut App, kind: InputKind, input: &str) {
    let base = app.registry().base_dir().to_path_buf();
    let result = match kind {
        InputKind::NewZone => {
            let name = Some(input.trim()).filter(|n| !n.is_empty());
            app.add_zone(name).map(|_| ())
        }
        InputKind::RenameZone(id) => app.rename_zone(id, input),
        InputKind::RetargetZone(id) => match resolve_folder(input, &base) {
            Ok(path) => app.begin_retarget(id, path),
            Err(e) => {
                app.show_error(e);
                return;
            }
        },
        InputKind::DropFiles(id) => {
            let mut files = Vec::new();
            for p in parse_dropped_paths(input) {
                match resolve_path(&p.to_string_lossy(), &base) {
                    Ok(f) => files.push(f),
                    Err(e) => {
                        app.show_error(e);
                        return;
                    }
                }
            }
            if files.is_empty() {
                app.status = "Nothing to drop".to_string();
                return;
            }
            app.begin_drop(id, files)
        }
    };
    if let Err(e) = result {
        app.show_error(errors::render_zone_error(&e));
    }
}
