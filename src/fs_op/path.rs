use std::path::{Path, PathBuf};

use directories_next::BaseDirs;
use thiserror::Error;

/// Errors that can occur when resolving a user-supplied path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("could not determine home directory")]
    HomeNotFound,
    #[error("not a directory: {}", .0.display())]
    NotDirectory(PathBuf),
}

/// Turn a typed path into an absolute one.
///
/// - Surrounding whitespace is trimmed; an empty result is an error.
/// - A leading `~` is expanded to the user's home directory.
/// - Relative paths are resolved against `base`.
///
/// The path is not required to exist.
pub fn resolve_path(input: &str, base: &Path) -> Result<PathBuf, PathError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PathError::Empty);
    }

    if input.starts_with('~') {
        return expand_tilde(input).ok_or(PathError::HomeNotFound);
    }

    let p = PathBuf::from(input);
    Ok(if p.is_absolute() { p } else { base.join(p) })
}

/// Resolve a typed folder path that will become a zone target.
///
/// The folder may be missing (it gets created later) but an existing
/// non-directory is rejected up front.
pub fn resolve_folder(input: &str, base: &Path) -> Result<PathBuf, PathError> {
    let candidate = resolve_path(input, base)?;
    if candidate.exists() && !candidate.is_dir() {
        return Err(PathError::NotDirectory(candidate));
    }
    Ok(candidate)
}

/// The current user's home directory.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

// Only `~` and `~/...` are supported; `~user` forms are kept literal.
fn expand_tilde(input: &str) -> Option<PathBuf> {
    let rest = &input[1..];
    if !rest.is_empty() && !rest.starts_with(['/', '\\']) {
        return Some(PathBuf::from(input));
    }
    let mut p = home_dir()?;
    let trimmed = rest.trim_start_matches(['/', '\\']);
    if !trimmed.is_empty() {
        p.push(trimmed);
    }
    Some(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_input_is_error() {
        assert_eq!(resolve_path("   ", Path::new("/")), Err(PathError::Empty));
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = home_dir() else { return };
        assert_eq!(resolve_path("~", Path::new("/irrelevant")).unwrap(), home);
        assert_eq!(
            resolve_path("~/Documents/zone", Path::new("/irrelevant")).unwrap(),
            home.join("Documents/zone")
        );
    }

    #[test]
    fn tilde_user_form_stays_literal() {
        let got = resolve_path("~other/x", Path::new("/base")).unwrap();
        assert_eq!(got, PathBuf::from("~other/x"));
    }

    #[test]
    fn relative_resolves_against_base() {
        let td = TempDir::new().unwrap();
        let got = resolve_path("subdir", td.path()).unwrap();
        assert_eq!(got, td.path().join("subdir"));
    }

    #[test]
    fn absolute_path_returns_as_is() {
        let td = TempDir::new().unwrap();
        let p = td.path().to_path_buf();
        let got = resolve_path(&p.to_string_lossy(), Path::new("/ignored")).unwrap();
        assert_eq!(got, p);
    }

    #[test]
    fn missing_folder_is_accepted() {
        let td = TempDir::new().unwrap();
        let p = td.path().join("not-yet");
        assert_eq!(resolve_folder(&p.to_string_lossy(), td.path()).unwrap(), p);
    }

    #[test]
    fn file_is_not_a_folder() {
        let td = TempDir::new().unwrap();
        let f = td.path().join("file.txt");
        fs::write(&f, "hello").unwrap();
        let err = resolve_folder(&f.to_string_lossy(), td.path()).unwrap_err();
        assert_eq!(err, PathError::NotDirectory(f));
    }
}
