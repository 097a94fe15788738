//! Terminal input: key presses and pasted (dropped) text.

pub mod drop_paths;
pub mod keyboard;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

pub use drop_paths::parse_dropped_paths;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Events the shell reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Bracketed paste. Terminals deliver dragged files this way.
    Paste(String),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Release and repeat events would double every key on Windows.
            Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
            Event::Paste(text) => InputEvent::Paste(text),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Blocks if none is pending.
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}
