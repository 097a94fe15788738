pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod write_settings;

use std::path::PathBuf;

use thiserror::Error;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_base_dir, default_log_dir, default_settings_path, default_store_path};
pub use read_settings::load_settings;
pub use write_settings::{save_settings, Settings};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings file `{}` is malformed", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot serialize settings")]
    Serialize(#[from] toml::ser::Error),
}
