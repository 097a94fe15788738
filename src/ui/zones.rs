use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::core::GRID_COLUMNS;
use crate::ui::colors::current as theme_current;
use crate::ui::util::truncate_left;
use crate::zone::Zone;

/// The text lines shown inside a zone tile, `width` columns wide.
pub fn format_tile_lines(zone: &Zone, width: usize) -> Vec<String> {
    let count = match zone.file_count {
        1 => "1 file".to_string(),
        n => format!("{} files", n),
    };
    let activity = zone
        .last_activity
        .map(|t| format!("Last drop {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "No drops yet".to_string());
    vec![
        truncate_left(&zone.path.display().to_string(), width),
        count,
        activity,
    ]
}

pub fn draw_zones(f: &mut Frame, area: Rect, zones: &[Zone], selected: usize) {
    let theme = theme_current();
    if zones.is_empty() {
        let p = Paragraph::new("No zones. Press a to add one.")
            .style(theme.muted_style)
            .block(Block::default().borders(Borders::ALL).style(theme.tile_style));
        f.render_widget(p, area);
        return;
    }

    let rows = zones.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);
        for (col, tile_area) in cols.iter().enumerate() {
            let idx = row * GRID_COLUMNS + col;
            if let Some(zone) = zones.get(idx) {
                draw_tile(f, *tile_area, idx, zone, idx == selected);
            }
        }
    }
}

fn draw_tile(f: &mut Frame, area: Rect, idx: usize, zone: &Zone, is_selected: bool) {
    let theme = theme_current();
    let border_style = if is_selected {
        theme.tile_selected_style
    } else {
        theme.tile_style
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(format!(" {} {} ", idx + 1, zone.name), theme.tile_title_style))
        .border_style(border_style)
        .style(theme.tile_style);

    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = format_tile_lines(zone, width)
        .into_iter()
        .enumerate()
        .map(|(i, l)| if i == 0 { Line::styled(l, theme.muted_style) } else { Line::raw(l) })
        .collect();
    let p = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(p, area);
}
