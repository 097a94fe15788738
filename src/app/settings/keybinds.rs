// Centralised keybind predicates for the application.
//
// Handlers ask `is_add_zone(&code)` rather than matching raw `KeyCode`
// patterns, so the bindings live in one place.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('q'))
}

pub fn is_down(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Down | KeyCode::Char('j'))
}

pub fn is_up(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_left(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Left | KeyCode::Char('h'))
}

pub fn is_right(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Right | KeyCode::Char('l'))
}

pub fn is_tab(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Tab)
}

pub fn is_enter(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Enter)
}

pub fn is_backspace(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Backspace)
}

pub fn is_esc(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Esc)
}

pub fn is_refresh(code: &KeyCode) -> bool {
	matches!(code, KeyCode::F(5))
}

pub fn is_add_zone(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('a'))
}

pub fn is_rename_zone(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('r'))
}

pub fn is_retarget_zone(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('p'))
}

pub fn is_drop_files(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('d'))
}

pub fn is_remove_zone(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('x') | KeyCode::Delete)
}

pub fn is_toggle_theme(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('t'))
}

pub fn is_char(code: &KeyCode, want: char) -> bool {
	matches!(code, &KeyCode::Char(c) if c == want)
}

/// Digits `1`..`9` select a zone by its position.
pub fn zone_digit(code: &KeyCode) -> Option<usize> {
	match code {
		KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
		_ => None,
	}
}
