use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}
/// Which part of the base directory gets documented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// The whole base directory, as one tree.
    Directory,
    /// Only the listed paths, each resolved against the base directory.
    Targets(Vec<String>),
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocOptions {
    pub base: PathBuf,
    pub output: PathBuf,
    pub scope: Scope,
    pub format: OutputFormat,
    pub follow_links: bool,
}
impl Default for DocOptions {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
            output: PathBuf::from("README.md"),
            scope: Scope::Directory,
            format: OutputFormat::Markdown,
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct DocBuilder {
    options: DocOptions,
}
impl DocBuilder {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            options: DocOptions {
                base: base.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.scope = Scope::Targets(targets.into_iter().map(Into::into).collect());
        self
    }
    pub fn whole_directory(mut self) -> Self {
        self.options.scope = Scope::Directory;
        self
    }
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.options.format = format;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> DocOptions {
        self.options
    }
}
