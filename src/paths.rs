//! Lexical path resolution.
//!
//! Nothing here touches the filesystem apart from reading the current
//! directory: symlinks are not resolved and paths need not exist.

use crate::error::DocError;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Resolves `path` against the current directory and normalizes it.
pub fn absolute(path: impl AsRef<Path>) -> Result<PathBuf, DocError> {
    let cwd = env::current_dir().map_err(|e| DocError::io(".", e))?;
    Ok(resolve(&cwd, path))
}

/// Joins `path` onto `base` (an absolute `path` wins) and normalizes the result.
pub fn resolve(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    normalize(&base.join(path))
}

/// Removes `.` components and folds `..` into its parent.
///
/// `..` directly under the root is dropped; leading `..` of a relative
/// path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Returns `path` relative to `base`, climbing with `..` when `path` lies
/// outside `base`. Both are expected to be normalized absolute paths.
pub fn relative(path: &Path, base: &Path) -> PathBuf {
    let path: Vec<_> = path.components().collect();
    let base: Vec<_> = base.components().collect();
    let common = path
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base.len() {
        out.push("..");
    }
    for component in &path[common..] {
        out.push(component.as_os_str());
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
