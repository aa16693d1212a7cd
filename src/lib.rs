//! # dirdoc
//!
//! `dirdoc` walks a directory tree, renders an ASCII tree of its structure,
//! and concatenates the contents of every non-ignored file into a single
//! markdown document with one fenced code block per file.
//!
//! Two scopes are supported:
//!
//! - [`Scope::Directory`]: the whole base directory as a single tree.
//! - [`Scope::Targets`]: only the listed subdirectories, each rendered as
//!   its own nested block. Targets that do not exist are reported inline.
//!
//! Paths containing `.next`, `node_modules`, `__pycache__` or `.git` are
//! skipped everywhere (see [`should_ignore`]). Files that cannot be read as
//! UTF-8 are documented with the read error in place of their content.
//!
//! # Features
//!
//! - `logging` (default): emits `tracing` events while walking and rendering.
//!
//! # Example
//!
//! ```no_run
//! use dirdoc::{DocBuilder, generate};
//!
//! let options = DocBuilder::new(".")
//!     .targets(["src", "tests"])
//!     .output("DOCS.md")
//!     .build();
//!
//! let result = generate(options).expect("Failed to document directory");
//! println!("Documented {} files", result.files.len());
//! ```

mod engine;
mod error;
mod filter;
mod options;
mod output;
mod paths;
mod tree;
mod types;

pub use engine::{document_header, generate, walk};
pub use error::DocError;
pub use filter::{IGNORE_PATTERNS, should_ignore};
pub use options::{DocBuilder, DocOptions, OutputFormat, Scope};
pub use output::{extension_for, read_file_content, write_document, write_markdown};
pub use paths::{absolute, normalize, relative, resolve};
pub use types::{Document, Header, Section, WalkResult};
