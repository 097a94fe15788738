use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use std::sync::{Mutex, MutexGuard};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
	pub bg: Color,
	pub fg: Color,
	pub accent: Color,
	pub muted: Color,
	pub error: Color,
}

impl Theme {
	pub fn dark() -> Self {
		Self { bg: Color::Rgb(11, 12, 13), fg: Color::Gray, accent: Color::Cyan, muted: Color::DarkGray, error: Color::LightRed }
	}

	pub fn light() -> Self {
		Self { bg: Color::White, fg: Color::Black, accent: Color::Blue, muted: Color::Gray, error: Color::Red }
	}
}

/// Concrete styles derived from a [`Theme`].
#[derive(Clone, Debug)]
pub struct Colors {
	pub name: &'static str,
	pub tile_style: Style,
	pub tile_selected_style: Style,
	pub tile_title_style: Style,
	pub muted_style: Style,
	pub header_style: Style,
	pub footer_style: Style,
	pub dialog_style: Style,
	pub error_style: Style,
	pub button_style: Style,
	pub button_selected_style: Style,
}

impl Colors {
	fn from_theme(name: &'static str, theme: &Theme) -> Self {
		Colors {
			name,
			tile_style: Style::default().fg(theme.fg).bg(theme.bg),
			tile_selected_style: Style::default().fg(theme.accent).bg(theme.bg).add_modifier(Modifier::BOLD),
			tile_title_style: Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
			muted_style: Style::default().fg(theme.muted),
			header_style: Style::default().fg(theme.bg).bg(theme.accent),
			footer_style: Style::default().fg(theme.fg).bg(theme.bg),
			dialog_style: Style::default().fg(theme.fg).bg(theme.bg),
			error_style: Style::default().fg(theme.error).bg(theme.bg),
			button_style: Style::default().fg(theme.fg),
			button_selected_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
		}
	}
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(Colors::from_theme("dark", &Theme::dark())));

// A panic while holding the lock leaves valid styles behind, so keep using them.
fn lock() -> MutexGuard<'static, Colors> {
	CURRENT.lock().unwrap_or_else(|p| p.into_inner())
}

/// Select a palette by name. Unknown names leave the current one in place.
pub fn set_theme(name: &str) {
	let colors = match name {
		"dark" => Colors::from_theme("dark", &Theme::dark()),
		"light" => Colors::from_theme("light", &Theme::light()),
		other => {
			tracing::warn!("unknown theme {:?}; keeping {}", other, lock().name);
			return;
		}
	};
	*lock() = colors;
}

pub fn current() -> Colors {
	lock().clone()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_theme_is_ignored() {
		set_theme("dark");
		set_theme("neon");
		assert_eq!(current().name, "dark");
		set_theme("light");
		assert_eq!(current().name, "light");
		set_theme("dark");
	}
}
