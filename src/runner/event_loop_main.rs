use std::time::Duration;

use crate::app::{App, Workspace};
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

/// Run the zone grid until the user quits.
pub fn run_app(workspace: Workspace) -> anyhow::Result<()> {
    ui::colors::set_theme(&workspace.settings.theme);
    let mut app = App::new(workspace);
    let mut terminal = init_terminal()?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore even when the loop failed, then report the loop's error first.
    let restored = restore_terminal(terminal);
    result?;
    restored?;
    tracing::info!("session ended with {} zones", app.registry().len());
    Ok(())
}

fn event_loop(terminal: &mut crate::runner::terminal::Tui, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if !poll(Duration::from_millis(250))? {
            continue;
        }
        match read_event()? {
            InputEvent::Key(key) => {
                if handlers::handle_key(app, key)? {
                    return Ok(());
                }
            }
            InputEvent::Paste(text) => handlers::handle_paste(app, &text),
            InputEvent::Resize(_, _) => { /* redraw on next loop */ }
            InputEvent::Other => {}
        }
    }
}
