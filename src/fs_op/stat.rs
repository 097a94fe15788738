use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::fs_op::error::FsOpError;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (for example: socket, FIFO, block device, symlink without target, etc.).
    Other,
}

impl PathType {
    /// Classify `path` and return its `PathType`.
    ///
    /// This is a small, allocation-free helper intended for simple
    /// branching logic. It avoids repeated calls to `exists`/`is_dir`/`is_file`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        if !p.exists() {
            PathType::NotFound
        } else if p.is_dir() {
            PathType::Directory
        } else if p.is_file() {
            PathType::File
        } else {
            PathType::Other
        }
    }
}

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Sub-directories are not descended into. Symlinks that point at regular
/// files are included. Entries that cannot be resolved (a dangling symlink,
/// a file removed mid-listing) are left out; only failing to read `dir`
/// itself is an error.
pub fn list_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, FsOpError> {
    let dir = dir.as_ref();
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(FsOpError::ReadDir {
                    path: dir.to_path_buf(),
                    source: e.into(),
                })
            }
            Err(e) => {
                tracing::debug!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Number of regular files directly inside `dir`.
pub fn count_files<P: AsRef<Path>>(dir: P) -> Result<usize, FsOpError> {
    list_files(dir).map(|files| files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn path_type_nonexistent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("no_such_file_hopefully");
        assert_eq!(PathType::of(&p), PathType::NotFound);
    }

    #[test]
    fn path_type_file_and_dir() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        assert_eq!(PathType::of(&file), PathType::File);

        let dir = tmp.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        assert_eq!(PathType::of(&dir), PathType::Directory);
    }

    #[test]
    fn list_files_is_shallow_and_sorted() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("b.txt"), b"b").unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("deep.txt"), b"d").unwrap();

        let files = list_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(count_files(tmp.path()).unwrap(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlinks_are_left_out() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("missing"), tmp.path().join("dangling")).unwrap();
        fs::write(tmp.path().join("target.txt"), b"t").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("target.txt"), tmp.path().join("link.txt")).unwrap();

        let files = list_files(tmp.path()).unwrap();
        assert_eq!(
            files,
            vec![
                tmp.path().join("a.txt"),
                tmp.path().join("link.txt"),
                tmp.path().join("target.txt"),
            ]
        );
    }

    #[test]
    fn count_files_on_missing_dir_errors() {
        let tmp = tempdir().unwrap();
        let err = count_files(tmp.path().join("gone")).unwrap_err();
        assert!(matches!(err, FsOpError::ReadDir { .. }));
    }
}
