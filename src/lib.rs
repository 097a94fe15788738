pub mod app;
pub mod cli;
pub mod errors;
pub mod fs_op;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;
pub mod zone;

pub use crate::app::{Action, App, InputKind, Mode, StartOptions, Workspace};
pub use crate::zone::{ZoneError, ZoneId, ZoneRegistry};
