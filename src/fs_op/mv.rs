use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors returned by the single-file move helper.
#[derive(Debug, Error)]
pub enum MoveError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("path has no file name")]
    MissingFilename,
    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
}

/// Compute where `src` lands when moved into `target_dir`.
pub fn destination_in(src: &Path, target_dir: &Path) -> Result<PathBuf, MoveError> {
    let name = src.file_name().ok_or(MoveError::MissingFilename)?;
    Ok(target_dir.join(name))
}

/// `true` if `a` and `b` resolve to the same existing filesystem entry.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

/// Move the regular file `src` to the exact path `dest`.
///
/// When `dest` already exists the move only proceeds if `overwrite` is set,
/// and never replaces a directory. The rename is attempted first; a move
/// across filesystems falls back to copy+remove.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dest: Q,
    overwrite: bool,
) -> Result<(), MoveError> {
    let s = src.as_ref();
    let d = dest.as_ref();

    let meta = fs::metadata(s)?;
    if !meta.is_file() {
        return Err(MoveError::NotAFile(s.to_path_buf()));
    }

    if let Ok(existing) = fs::symlink_metadata(d) {
        if existing.is_dir() || !overwrite {
            return Err(MoveError::DestinationExists(d.to_path_buf()));
        }
    }

    crate::fs_op::helpers::atomic_rename_or_copy(s, d)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn destination_joins_base_name() {
        let d = destination_in(Path::new("/a/b/c.txt"), Path::new("/zone")).unwrap();
        assert_eq!(d, PathBuf::from("/zone/c.txt"));
        assert!(matches!(
            destination_in(Path::new("/"), Path::new("/zone")),
            Err(MoveError::MissingFilename)
        ));
    }

    #[test]
    fn move_file_refuses_existing_destination_without_overwrite() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("a.txt");
        let dst = tmp.path().join("b.txt");
        fs::write(&src, "src").unwrap();
        fs::write(&dst, "dst").unwrap();

        let err = move_file(&src, &dst, false).unwrap_err();
        assert!(matches!(err, MoveError::DestinationExists(_)));
        assert_eq!(fs::read_to_string(&src).unwrap(), "src");
        assert_eq!(fs::read_to_string(&dst).unwrap(), "dst");
    }

    #[test]
    fn move_file_overwrites_when_allowed() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("a.txt");
        let dst = tmp.path().join("b.txt");
        fs::write(&src, "src").unwrap();
        fs::write(&dst, "dst").unwrap();

        move_file(&src, &dst, true).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "src");
    }

    #[test]
    fn move_file_never_replaces_a_directory() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("a.txt");
        let dst = tmp.path().join("taken");
        fs::write(&src, "src").unwrap();
        fs::create_dir(&dst).unwrap();

        assert!(matches!(move_file(&src, &dst, true), Err(MoveError::DestinationExists(_))));
        assert!(src.exists());
    }

    #[test]
    fn move_file_rejects_directories_as_source() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("folder");
        fs::create_dir(&dir).unwrap();
        assert!(matches!(
            move_file(&dir, tmp.path().join("elsewhere"), false),
            Err(MoveError::NotAFile(_))
        ));
    }

    #[test]
    fn same_file_detection() {
        let tmp = tempdir().unwrap();
        let f = tmp.path().join("x.txt");
        fs::write(&f, "x").unwrap();
        let via_dot = tmp.path().join(".").join("x.txt");
        assert!(is_same_file(&f, &via_dot));
        assert!(!is_same_file(&f, &tmp.path().join("missing.txt")));
    }
}
