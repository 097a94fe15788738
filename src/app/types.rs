use std::fmt;

use crate::zone::{Collision, Reassignment, Relocation, ZoneId};

/// What a text-input dialog's answer is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    NewZone,
    RenameZone(ZoneId),
    RetargetZone(ZoneId),
    DropFiles(ZoneId),
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputKind::NewZone => "New zone",
            InputKind::RenameZone(_) => "Rename zone",
            InputKind::RetargetZone(_) => "Change folder",
            InputKind::DropFiles(_) => "Drop files",
        };
        write!(f, "{}", s)
    }
}

/// Actions that need a yes/no confirmation first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RemoveZone(ZoneId),
}

/// Which modal (if any) currently owns the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Input {
        title: String,
        prompt: String,
        buffer: String,
        kind: InputKind,
    },
    /// A batch is paused on a collision. `selected`: 0 = Overwrite, 1 = Skip.
    Conflict {
        collision: Collision,
        selected: usize,
        apply_all: bool,
    },
    Confirm {
        msg: String,
        on_yes: Action,
        /// 0 = Yes, 1 = No
        selected: usize,
    },
    Message {
        title: String,
        content: String,
        is_error: bool,
    },
}

/// A filesystem batch started from the shell that has not finished yet.
#[derive(Debug)]
pub enum PendingOp {
    Relocation(Relocation),
    Reassignment(Reassignment),
}
