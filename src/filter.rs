//! Fixed-substring ignore filter.

use std::path::Path;

/// Substrings that exclude a path wherever they occur in it.
pub const IGNORE_PATTERNS: &[&str] = &[".next", "node_modules", "__pycache__", ".git"];

/// Returns `true` if the path's string form contains any of [`IGNORE_PATTERNS`].
///
/// Matching is plain substring containment on the whole path: no anchoring,
/// no case folding, no separator handling. `.github/` and `.gitignore` are
/// therefore ignored too.
pub fn should_ignore(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref().to_string_lossy();
    IGNORE_PATTERNS.iter().any(|pattern| path.contains(pattern))
}
