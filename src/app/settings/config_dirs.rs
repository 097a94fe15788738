//! Where dropzone keeps its files by default.
//!
//! All locations come from `directories-next` so they follow each
//! platform's conventions. Callers may override every one of them.

use std::path::PathBuf;

use directories_next::{ProjectDirs, UserDirs};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "dropzone";
const APPLICATION: &str = "dropzone";

/// Folder under the user's documents that holds the default zone folders.
pub const STORAGE_FOLDER: &str = "OrganizedFiles";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

// Used when the platform reports no home directory.
fn fallback_root() -> PathBuf {
    std::env::temp_dir().join(APPLICATION)
}

/// `<Documents>/OrganizedFiles`, falling back to `<home>/Documents`.
pub fn default_base_dir() -> PathBuf {
    let documents = UserDirs::new().and_then(|u| {
        u.document_dir()
            .map(|d| d.to_path_buf())
            .or_else(|| Some(u.home_dir().join("Documents")))
    });
    documents.unwrap_or_else(fallback_root).join(STORAGE_FOLDER)
}

pub fn default_settings_path() -> PathBuf {
    project_dirs()
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| fallback_root().join("config"))
        .join("settings.toml")
}

pub fn default_store_path() -> PathBuf {
    project_dirs()
        .map(|p| p.data_dir().to_path_buf())
        .unwrap_or_else(|| fallback_root().join("data"))
        .join("zones.toml")
}

pub fn default_log_dir() -> PathBuf {
    project_dirs()
        .map(|p| p.cache_dir().join("logs"))
        .unwrap_or_else(|| fallback_root().join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locations_have_expected_leaves() {
        assert!(default_base_dir().ends_with(STORAGE_FOLDER));
        assert!(default_settings_path().ends_with("settings.toml"));
        assert!(default_store_path().ends_with("zones.toml"));
        assert!(default_log_dir().ends_with("logs"));
    }
}
