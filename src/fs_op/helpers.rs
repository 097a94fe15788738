use std::fs;
use std::io;
use std::path::Path;

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};
use rand::distr::Alphanumeric;
use rand::Rng;

use crate::fs_op::error::FsOpError;
use crate::fs_op::test_helpers;

/// Create `dir` (and parents) if it does not exist yet.
///
/// An existing non-directory at `dir` is reported as a creation failure
/// rather than silently accepted.
pub fn ensure_dir(dir: &Path) -> Result<(), FsOpError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| FsOpError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    // `create_dir_all` succeeds when the final component already exists as a
    // file on some platforms.
    if !dir.is_dir() {
        return Err(FsOpError::CreateDir {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "a file is in the way"),
        });
    }
    Ok(())
}

fn temp_sibling(dir: &Path, prefix: &str) -> std::path::PathBuf {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();
    dir.join(format!("{}.{}", prefix, suffix))
}

/// Write `data` to `target` atomically by writing to a temporary file in the
/// same directory and then renaming into place.
pub fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let Some(dir) = target.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return fs::write(target, data);
    };
    fs::create_dir_all(dir)?;
    let tmp = temp_sibling(dir, ".tmp_atomic_write");
    if let Err(e) = fs::write(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, target).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}

/// Copy a single file atomically: copy into a temp file in the destination
/// directory then rename into place. An existing `dst` is replaced.
pub fn atomic_copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    let dir = dst
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;
    let tmp = temp_sibling(dir, ".tmp_atomic_copy");

    let mut options = CopyOptions::new();
    options.overwrite = false;
    options.buffer_size = 64 * 1024;

    let copied = match fs_extra_copy(src, &tmp, &options) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(io::Error::other(e));
        }
    };

    if test_helpers::should_force_rename_fail_in_copy() {
        let _ = fs::remove_file(&tmp);
        return Err(io::Error::other("forced rename failure (copy)"));
    }

    if let Err(e) = fs::rename(&tmp, dst) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = crate::fs_op::metadata::preserve_file_metadata(src, dst) {
        tracing::debug!("could not preserve metadata on {}: {}", dst.display(), e);
    }
    Ok(copied)
}

/// `true` when `err` is the "rename across filesystems" error of the host OS.
pub fn is_cross_device(err: &io::Error) -> bool {
    #[cfg(unix)]
    {
        err.raw_os_error() == Some(libc::EXDEV)
    }
    #[cfg(windows)]
    {
        // ERROR_NOT_SAME_DEVICE
        err.raw_os_error() == Some(17)
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = err;
        false
    }
}

/// Rename `src` to `dst`, replacing `dst` if it exists. When the rename
/// fails because the two paths are on different filesystems, fall back to
/// an atomic copy followed by removal of `src`.
///
/// Only regular files are supported.
pub fn atomic_rename_or_copy(src: &Path, dst: &Path) -> io::Result<()> {
    let renamed = if test_helpers::should_force_cross_device() {
        Err(io::Error::other("forced cross-device rename"))
    } else {
        fs::rename(src, dst)
    };

    match renamed {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) || test_helpers::should_force_cross_device() => {
            tracing::debug!(
                "rename {} -> {} crossed filesystems, copying instead",
                src.display(),
                dst.display()
            );
            atomic_copy_file(src, dst)?;
            fs::remove_file(src)
        }
        Err(e) => Err(e),
    }
}
