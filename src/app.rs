pub mod core;
pub mod ops;
pub mod settings;
pub mod types;
pub mod workspace;

pub use self::core::App;
pub use types::{Action, InputKind, Mode, PendingOp};
pub use workspace::{StartOptions, Workspace};
