use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The outcome of walking one or more roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkResult {
    /// The absolute base directory every relative path is computed against.
    pub base: PathBuf,
    /// The rendered tree block, one line per entry, newline-terminated.
    pub tree: String,
    /// Absolute paths of every documented file, in the order they appear in `tree`.
    pub files: Vec<PathBuf>,
    /// Target roots that did not exist and were replaced by a warning line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<PathBuf>,
}

/// The lines written above the directory structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub title: String,
    /// Local time formatted as `%Y-%m-%d %H:%M:%S`.
    pub generated_on: String,
    /// Target directories exactly as the caller supplied them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

/// One documented file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Path relative to the base directory.
    pub path: String,
    /// Code fence tag, empty when the file has no extension.
    pub language: String,
    /// The file's text, or `Error reading file: <message>` if it could not be read.
    pub content: String,
}

/// The full document as emitted by the JSON output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub header: Header,
    pub tree: String,
    pub sections: Vec<Section>,
}
