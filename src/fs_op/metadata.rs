//! Preserve file metadata across the copy+remove fallback of a move.
//!
//! A plain rename keeps permissions and timestamps for free. When a move has
//! to copy the bytes instead, these helpers re-apply them so a file dropped
//! across filesystems looks the same as one that was renamed.

use std::fs::{self, Permissions};
use std::io;
use std::path::Path;

use filetime::{set_file_times, FileTime};

/// Copy permission bits from `src` to `dst`.
pub(crate) fn copy_permissions(src: &Path, dst: &Path) -> io::Result<()> {
    let perms: Permissions = fs::metadata(src)?.permissions();
    fs::set_permissions(dst, perms)
}

/// Apply the permissions and access/modification times of `src` to `dst`.
///
/// Both paths must be regular files. Missing paths are a no-op so callers can
/// use this as a best-effort finishing step.
pub(crate) fn preserve_file_metadata(src: &Path, dst: &Path) -> io::Result<()> {
    if !src.is_file() || !dst.is_file() {
        return Ok(());
    }

    copy_permissions(src, dst)?;

    let meta = fs::metadata(src)?;
    let modified = FileTime::from_last_modification_time(&meta);
    let accessed = FileTime::from_last_access_time(&meta);
    set_file_times(dst, accessed, modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn copies_permissions_and_timestamps() -> io::Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");

        writeln!(fs::File::create(&src)?, "hello")?;
        writeln!(fs::File::create(&dst)?, "world")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&src, fs::Permissions::from_mode(0o640))?;
        }

        let past = SystemTime::now() - Duration::from_secs(24 * 3600);
        let ft = FileTime::from_system_time(past);
        set_file_times(&src, ft, ft)?;

        preserve_file_metadata(&src, &dst)?;

        let dst_meta = fs::metadata(&dst)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            assert_eq!(dst_meta.permissions().mode() & 0o777, 0o640);
        }

        let src_m = fs::metadata(&src)?.modified()?;
        let dst_m = dst_meta.modified()?;
        let diff = dst_m.duration_since(src_m).unwrap_or_else(|e| e.duration());
        assert!(diff.as_secs() < 2, "timestamps differ too much");
        Ok(())
    }

    #[test]
    fn missing_paths_are_ignored() -> io::Result<()> {
        let dir = tempdir()?;
        preserve_file_metadata(&dir.path().join("nope"), &dir.path().join("nada"))
    }
}
