//! Internal module with the two tree renderings.
//!
//! The engine feeds every style the same pre-order stream of entries: the
//! root at depth 0, then each directory followed by its contents. A style
//! decides how siblings are ordered and how each entry becomes a line.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

const INDENT: &str = "    ";

/// How entries inside one directory are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SiblingOrder {
    FilesFirst,
    DirsFirst,
}

impl SiblingOrder {
    /// Compares two entries of the same directory: by kind first, then by file name.
    pub(crate) fn compare(self, a: &Path, b: &Path, follow_links: bool) -> Ordering {
        let rank = |p: &Path| {
            let is_dir = is_dir(p, follow_links);
            match self {
                SiblingOrder::FilesFirst => is_dir,
                SiblingOrder::DirsFirst => !is_dir,
            }
        };
        rank(a)
            .cmp(&rank(b))
            .then_with(|| a.file_name().cmp(&b.file_name()))
    }
}

fn is_dir(path: &Path, follow_links: bool) -> bool {
    let metadata = if follow_links {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    };
    metadata.map(|m| m.is_dir()).unwrap_or(false)
}

/// Line rendering for one traversal strategy.
pub(crate) trait TreeStyle {
    fn order(&self) -> SiblingOrder;

    /// Whether symlinked directories are descended into even when the
    /// walk does not follow links.
    fn follows_dir_links(&self) -> bool {
        false
    }

    /// Called once per existing root, before any of its entries.
    fn begin_root(&mut self, out: &mut String, label: &str);

    fn dir(&mut self, out: &mut String, name: &str, depth: usize);

    fn file(&mut self, out: &mut String, name: &str, depth: usize);

    fn end_root(&mut self, _out: &mut String) {}

    /// Called instead of the root hooks when a root does not exist.
    fn missing(&mut self, out: &mut String, path: &Path) {
        out.push_str(&format!("Warning: Path not found - {}\n", path.display()));
    }
}

/// Whole-directory rendering.
///
/// Directories are indented by the separator count of their path relative
/// to the root, so the root's direct children sit at column zero alongside
/// the root's own files:
///
/// ```text
/// project/
/// │   ├── Cargo.toml
/// ├── src/
/// │   ├── lib.rs
///     ├── bin/
///     │   ├── main.rs
/// ```
#[derive(Debug, Default)]
pub(crate) struct ListingStyle;

impl TreeStyle for ListingStyle {
    fn order(&self) -> SiblingOrder {
        SiblingOrder::FilesFirst
    }

    fn begin_root(&mut self, out: &mut String, label: &str) {
        out.push_str(&format!("{}/\n", label));
    }

    fn dir(&mut self, out: &mut String, name: &str, depth: usize) {
        if depth == 0 {
            return;
        }
        let indent = INDENT.repeat(depth - 1);
        out.push_str(&format!("{}├── {}/\n", indent, name));
    }

    fn file(&mut self, out: &mut String, name: &str, depth: usize) {
        let indent = INDENT.repeat(depth.saturating_sub(2));
        out.push_str(&format!("{}│   ├── {}\n", indent, name));
    }
}

/// Selective rendering: one block per target, indented by recursion depth.
///
/// ```text
/// src/
///     ├── src/
///         ├── util/
///         │   ├── mod.rs
///     │
///     │   ├── lib.rs
///
/// ```
#[derive(Debug, Default)]
pub(crate) struct NestedStyle {
    /// Whether the last entry emitted at each depth was a directory.
    last_was_dir: Vec<bool>,
}

impl NestedStyle {
    fn mark(&mut self, depth: usize, is_dir: bool) {
        self.last_was_dir.truncate(depth + 1);
        self.last_was_dir.resize(depth + 1, false);
        self.last_was_dir[depth] = is_dir;
    }
}

impl TreeStyle for NestedStyle {
    fn order(&self) -> SiblingOrder {
        SiblingOrder::DirsFirst
    }

    fn follows_dir_links(&self) -> bool {
        true
    }

    fn begin_root(&mut self, out: &mut String, label: &str) {
        self.last_was_dir.clear();
        out.push_str(&format!("{}/\n", label));
    }

    fn dir(&mut self, out: &mut String, name: &str, depth: usize) {
        self.mark(depth, true);
        let indent = INDENT.repeat(depth + 1);
        out.push_str(&format!("{}├── {}/\n", indent, name));
    }

    fn file(&mut self, out: &mut String, name: &str, depth: usize) {
        let after_dir = self.last_was_dir.get(depth).copied().unwrap_or(false);
        self.mark(depth, false);
        let indent = INDENT.repeat(depth);
        if after_dir {
            out.push_str(&format!("{}│   \n", indent));
        }
        out.push_str(&format!("{}│   ├── {}\n", indent, name));
    }

    fn end_root(&mut self, out: &mut String) {
        out.push('\n');
    }
}
