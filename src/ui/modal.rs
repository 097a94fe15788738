use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::colors::current as theme_current;
use crate::ui::util::{centered_rect, truncate_left};

/// A one-field text dialog with `prompt` above the typed `buffer`.
pub fn draw_modal(f: &mut Frame, area: Rect, title: &str, prompt: &str, buffer: &str) {
    let theme = theme_current();
    let rect = centered_rect(70, 30, area);
    f.render_widget(Clear, rect);

    let width = rect.width.saturating_sub(4) as usize;
    let lines = vec![
        Line::from(prompt.to_string()),
        Line::from(""),
        Line::styled(format!("> {}_", truncate_left(buffer, width)), theme.tile_selected_style),
        Line::from(""),
        Line::styled("Enter: confirm  Esc: cancel", theme.muted_style),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .style(theme.dialog_style);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), rect);
}
