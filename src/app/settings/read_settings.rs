use std::fs;
use std::io;
use std::path::Path;

use crate::app::settings::{Settings, SettingsError};

/// Load settings from `path`. A missing file yields the defaults; missing
/// keys take their default values.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::save_settings;
    use assert_fs::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let s = load_settings(&temp.path().join("settings.toml")).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.capacity, 8);
        assert_eq!(s.default_zones, 4);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("settings.toml");
        f.write_str("capacity = 6\npersist_zones = false\n").unwrap();
        let s = load_settings(f.path()).unwrap();
        assert_eq!(s.capacity, 6);
        assert!(!s.persist_zones);
        assert_eq!(s.default_zones, 4);
        assert_eq!(s.theme, "dark");
    }

    #[test]
    fn round_trip() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.path().join("nested/settings.toml");
        let s = Settings {
            base_dir: Some(PathBuf::from("/srv/zones")),
            capacity: 5,
            default_zones: 2,
            persist_zones: false,
            theme: "light".into(),
        };
        save_settings(&path, &s).unwrap();
        assert_eq!(load_settings(&path).unwrap(), s);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("settings.toml");
        f.write_str("capacity = \"lots\"").unwrap();
        let err = load_settings(f.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
