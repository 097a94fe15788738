use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::app::Mode;

pub mod colors;
pub mod dialogs;
pub mod modal;
pub mod util;
pub mod zones;

pub const HELP_TEXT: &str =
    "Drag files here or press d  ←↑↓→/1-9:select  a:add  r:rename  p:folder  x:remove  F5:recount  t:theme  q:quit";

/// Title bar text: zone usage against capacity.
pub fn header_text(app: &App) -> String {
    let reg = app.registry();
    format!(
        " Drop Zones  {}/{}  {}",
        reg.len(),
        reg.capacity(),
        reg.base_dir().display()
    )
}

pub fn ui(f: &mut Frame, app: &App) {
    // header (1), zone grid (min), status (1), help (3)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(f.area());

    let theme = colors::current();
    f.render_widget(Paragraph::new(header_text(app)).style(theme.header_style), chunks[0]);
    zones::draw_zones(f, chunks[1], app.registry().zones(), app.selected);
    f.render_widget(Paragraph::new(app.status.as_str()).style(theme.muted_style), chunks[2]);
    let help = Paragraph::new(HELP_TEXT)
        .block(Block::default().borders(Borders::ALL).style(theme.footer_style));
    f.render_widget(help, chunks[3]);

    draw_mode(f, f.area(), &app.mode);
}

/// Draw the modal for `mode`, if any, over `area`.
pub fn draw_mode(f: &mut Frame, area: Rect, mode: &Mode) {
    match mode {
        Mode::Normal => {}
        Mode::Input {
            title,
            prompt,
            buffer,
            ..
        } => modal::draw_modal(f, area, title, prompt, buffer),
        Mode::Confirm { msg, selected, .. } => {
            dialogs::draw_confirm(f, area, "Confirm", msg, &["Yes", "No"], *selected)
        }
        Mode::Conflict {
            collision,
            selected,
            apply_all,
        } => dialogs::draw_conflict(f, area, collision, *selected, *apply_all),
        Mode::Message {
            title,
            content,
            is_error,
        } => {
            if *is_error {
                dialogs::draw_error(f, area, title, content);
            } else {
                dialogs::draw_info(f, area, title, content);
            }
        }
    }
}
