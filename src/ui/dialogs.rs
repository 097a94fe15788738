use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::colors::current as theme_current;
use crate::ui::util::centered_rect;
use crate::zone::Collision;

/// Buttons in a row, the selected one highlighted.
fn button_line(buttons: &[&str], selected: usize) -> Line<'static> {
    let theme = theme_current();
    let mut spans = Vec::new();
    for (i, b) in buttons.iter().enumerate() {
        let style = if i == selected {
            theme.button_selected_style
        } else {
            theme.button_style
        };
        spans.push(Span::styled(format!(" {} ", b), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans).alignment(Alignment::Center)
}

/// Wrap `content` to `width` columns, keeping explicit line breaks.
pub fn wrap_lines(content: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    content
        .lines()
        .flat_map(|l| {
            if l.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(l, width).into_iter().map(|c| c.into_owned()).collect()
            }
        })
        .collect()
}

fn draw_box(
    f: &mut Frame,
    area: Rect,
    title: &str,
    body: Vec<Line<'static>>,
    footer: Line<'static>,
    style: Style,
) {
    let theme = theme_current();
    let rect = centered_rect(60, 40, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(style)
        .style(theme.dialog_style);
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    f.render_widget(Paragraph::new(body), parts[0]);
    f.render_widget(Paragraph::new(footer), parts[1]);
}

fn body_from(content: &str, area: Rect) -> Vec<Line<'static>> {
    let width = centered_rect(60, 40, area).width.saturating_sub(2) as usize;
    wrap_lines(content, width).into_iter().map(Line::from).collect()
}

pub fn draw_confirm(f: &mut Frame, area: Rect, title: &str, msg: &str, buttons: &[&str], selected: usize) {
    let theme = theme_current();
    let body = body_from(msg, area);
    draw_box(f, area, title, body, button_line(buttons, selected), theme.tile_selected_style);
}

pub fn draw_info(f: &mut Frame, area: Rect, title: &str, content: &str) {
    let theme = theme_current();
    let body = body_from(content, area);
    draw_box(f, area, title, body, button_line(&["OK"], 0), theme.tile_selected_style);
}

pub fn draw_error(f: &mut Frame, area: Rect, title: &str, content: &str) {
    let theme = theme_current();
    let body = body_from(content, area)
        .into_iter()
        .map(|l| l.style(theme.error_style))
        .collect();
    draw_box(f, area, title, body, button_line(&["OK"], 0), theme.error_style);
}

/// Overwrite / Skip prompt for a file that already exists in the target.
pub fn draw_conflict(f: &mut Frame, area: Rect, collision: &Collision, selected: usize, apply_all: bool) {
    let theme = theme_current();
    let mut body = body_from(&collision.prompt(), area);
    body.push(Line::from(""));
    let mark = if apply_all { "[x]" } else { "[ ]" };
    body.push(Line::styled(
        format!("{} Apply to all remaining files (a)", mark),
        theme.muted_style,
    ));
    draw_box(
        f,
        area,
        "File exists",
        body,
        button_line(&["Overwrite", "Skip"], selected),
        theme.error_style,
    );
}
