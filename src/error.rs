use std::path::PathBuf;
use thiserror::Error;
/// Errors that abort a run.
///
/// Unreadable files and missing targets are not errors: they are written
/// into the document instead.
#[derive(Debug, Error)]
pub enum DocError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
}
impl DocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocError::Io {
            path: path.into(),
            source,
        }
    }
}
