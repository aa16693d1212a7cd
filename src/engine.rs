use crate::error::DocError;
use crate::filter::should_ignore;
use crate::options::{DocOptions, Scope};
use crate::output::write_document;
use crate::paths;
use crate::tree::{ListingStyle, NestedStyle, TreeStyle};
use crate::types::{Header, WalkResult};
use chrono::Local;
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
/// What to do with a root that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MissingRoot {
    /// Emit a warning line and move on.
    Warn,
    /// Fail the whole walk.
    Fail,
}
struct Root {
    path: PathBuf,
    label: String,
}
struct Walker<'a> {
    base: PathBuf,
    follow_links: bool,
    skip: Option<&'a Path>,
    tree: String,
    files: Vec<PathBuf>,
    missing: Vec<PathBuf>,
}
impl<'a> Walker<'a> {
    fn new(base: PathBuf, follow_links: bool, skip: Option<&'a Path>) -> Self {
        Self {
            base,
            follow_links,
            skip,
            tree: String::new(),
            files: Vec::new(),
            missing: Vec::new(),
        }
    }
    fn walk_roots<S: TreeStyle>(
        mut self,
        roots: Vec<Root>,
        style: &mut S,
        policy: MissingRoot,
    ) -> Result<WalkResult, DocError> {
        for root in roots {
            match policy {
                MissingRoot::Fail => {
                    fs::read_dir(&root.path).map_err(|e| DocError::io(&root.path, e))?;
                }
                MissingRoot::Warn if !root.path.exists() => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Path not found: {}", root.path.display());
                    style.missing(&mut self.tree, &root.path);
                    self.missing.push(root.path);
                    continue;
                }
                MissingRoot::Warn => {}
            }
            style.begin_root(&mut self.tree, &root.label);
            if should_ignore(&root.path) {
                #[cfg(feature = "logging")]
                tracing::debug!("Root is ignored: {}", root.path.display());
            } else {
                self.walk_one(&root.path, style, policy)?;
            }
            style.end_root(&mut self.tree);
        }
        Ok(WalkResult {
            base: self.base,
            tree: self.tree,
            files: self.files,
            missing: self.missing,
        })
    }
    fn walk_one<S: TreeStyle>(
        &mut self,
        root: &Path,
        style: &mut S,
        policy: MissingRoot,
    ) -> Result<(), DocError> {
        #[cfg(feature = "logging")]
        tracing::debug!("Walking {}", root.display());
        let order = style.order();
        let follow_links = self.follow_links || style.follows_dir_links();
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(follow_links)
            .filter_entry(|entry| !should_ignore(entry.path()))
            .sort_by_file_path(move |a, b| order.compare(a, b, follow_links));
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) if policy == MissingRoot::Fail && e.depth().unwrap_or(0) == 0 => {
                    return Err(DocError::Walk(e.to_string()));
                }
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry: {}", _err);
                    continue;
                }
            };
            let depth = entry.depth();
            let name = entry.file_name().to_string_lossy();
            if depth == 0 {
                style.dir(&mut self.tree, &name, 0);
                continue;
            }
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                style.dir(&mut self.tree, &name, depth);
                continue;
            }
            // Unfollowed link to a directory: neither listed nor documented.
            if entry.path_is_symlink() && entry.path().is_dir() {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping directory link {}", entry.path().display());
                continue;
            }
            if self.skip == Some(entry.path()) {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping output file {}", entry.path().display());
                continue;
            }
            style.file(&mut self.tree, &name, depth);
            self.files.push(entry.into_path());
        }
        Ok(())
    }
}
/// Walks the base directory (or its targets) and renders the tree block.
///
/// Returns the tree text together with every file to document, in the
/// order the files appear in the tree.
pub fn walk(options: &DocOptions) -> Result<WalkResult, DocError> {
    let base = paths::absolute(&options.base)?;
    walk_from(&base, options, None)
}
fn walk_from(
    base: &Path,
    options: &DocOptions,
    skip: Option<&Path>,
) -> Result<WalkResult, DocError> {
    let walker = Walker::new(base.to_path_buf(), options.follow_links, skip);
    match &options.scope {
        Scope::Directory => {
            let root = Root {
                path: base.to_path_buf(),
                label: folder_name(base),
            };
            walker.walk_roots(vec![root], &mut ListingStyle, MissingRoot::Fail)
        }
        Scope::Targets(targets) => {
            let roots = targets
                .iter()
                .map(|target| {
                    let path = paths::resolve(base, target);
                    let label = paths::relative(&path, base).display().to_string();
                    Root { path, label }
                })
                .collect();
            walker.walk_roots(roots, &mut NestedStyle::default(), MissingRoot::Warn)
        }
    }
}
/// Builds the document header for `options`, stamped with the current local time.
pub fn document_header(options: &DocOptions, base: &Path) -> Header {
    let generated_on = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    match &options.scope {
        Scope::Directory => Header {
            title: format!("Documentation for: {}", folder_name(base)),
            generated_on,
            targets: None,
        },
        Scope::Targets(targets) => Header {
            title: "Documentation for Selected Directories".to_string(),
            generated_on,
            targets: Some(targets.clone()),
        },
    }
}
/// Truncates `options.output`, walks, then writes the full document into it.
///
/// The output is opened before the walk, so a failed walk still leaves it
/// truncated. The output file itself is never documented, even when it
/// lies inside the walked tree: this is the one exception to documenting
/// every non-ignored file.
pub fn generate(options: DocOptions) -> Result<WalkResult, DocError> {
    let base = paths::absolute(&options.base)?;
    let output = paths::absolute(&options.output)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Generating documentation for {} into {}",
        base.display(),
        output.display()
    );
    let file = File::create(&output).map_err(|e| DocError::io(&output, e))?;
    let mut writer = BufWriter::new(file);
    let result = walk_from(&base, &options, Some(&output))?;
    let header = document_header(&options, &base);
    write_document(&mut writer, &header, &result, options.format)
        .map_err(|e| DocError::io(&output, e))?;
    writer.flush().map_err(|e| DocError::io(&output, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!("Documented {} files", result.files.len());
    Ok(result)
}
fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
