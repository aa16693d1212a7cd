//! Output formatting for dirdoc results.
//!
//! Writes a [`WalkResult`] as a markdown document, or as the equivalent
//! [`Document`] in JSON. File contents are read here, at render time, not
//! during the walk.

use crate::options::OutputFormat;
use crate::paths;
use crate::types::{Document, Header, Section, WalkResult};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Returns the code fence tag for a file.
///
/// The tag is the lower-cased extension, with TypeScript and JSX mapped to
/// their language names. Files without an extension get an empty tag.
pub fn extension_for(path: impl AsRef<Path>) -> String {
    let ext = path
        .as_ref()
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "ts" | "tsx" => "typescript".to_string(),
        "jsx" => "javascript".to_string(),
        _ => ext,
    }
}

/// Reads a file as UTF-8, substituting the error message for its content on failure.
pub fn read_file_content(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            format!("Error reading file: {}", e)
        }
    }
}

impl Section {
    /// Reads `path` and labels it relative to `base`.
    pub fn read(path: &Path, base: &Path) -> Self {
        Section {
            path: paths::relative(path, base).display().to_string(),
            language: extension_for(path),
            content: read_file_content(path),
        }
    }
}

/// Writes the whole document in the requested format.
pub fn write_document<W: Write>(
    out: &mut W,
    header: &Header,
    result: &WalkResult,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Markdown => write_markdown(out, header, result),
        OutputFormat::Json => write_json(out, header, result),
    }
}

/// Writes the markdown document, reading each file as its section is reached.
pub fn write_markdown<W: Write>(
    out: &mut W,
    header: &Header,
    result: &WalkResult,
) -> io::Result<()> {
    write!(out, "# {}\n\n", header.title)?;
    write!(out, "Generated on: {}\n\n", header.generated_on)?;

    if let Some(targets) = &header.targets {
        writeln!(out, "## Documented Directories:")?;
        for target in targets {
            writeln!(out, "- {}", target)?;
        }
        writeln!(out)?;
    }

    write!(out, "## Directory Structure\n\n")?;
    writeln!(out, "```")?;
    out.write_all(result.tree.as_bytes())?;
    write!(out, "```\n\n")?;

    write!(out, "## File Contents\n\n")?;
    for file in &result.files {
        let section = Section::read(file, &result.base);
        write_section(out, &section)?;
    }
    Ok(())
}

fn write_section<W: Write>(out: &mut W, section: &Section) -> io::Result<()> {
    write!(out, "### {}\n\n", section.path)?;
    writeln!(out, "```{}", section.language)?;
    out.write_all(section.content.as_bytes())?;
    write!(out, "\n```\n\n")
}

fn write_json<W: Write>(out: &mut W, header: &Header, result: &WalkResult) -> io::Result<()> {
    let sections = result
        .files
        .iter()
        .map(|file| Section::read(file, &result.base))
        .collect();
    let document = Document {
        header: header.clone(),
        tree: result.tree.clone(),
        sections,
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)
}
