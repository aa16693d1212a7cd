//! Command-line interface for documenting a whole directory.
//!
//! Walks the directory given by `--dir` and writes its tree and file
//! contents to a single markdown file.

use clap::Parser;
use dirdoc::{DocBuilder, OutputFormat, absolute, generate};
use std::path::PathBuf;
use std::process::exit;

/// dirdoc: generate project documentation for a directory
#[derive(Parser)]
#[command(name = "dirdoc", version, about, long_about = None)]
struct Cli {
    /// Directory to document (defaults to current directory)
    #[arg(long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Output file name (defaults to README.md)
    #[arg(long, default_value = "README.md")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirdoc=warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let directory = match absolute(&cli.dir) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    println!("Generating documentation for: {}", directory.display());
    println!("Output file: {}", cli.output.display());

    let options = DocBuilder::new(directory)
        .whole_directory()
        .output(cli.output)
        .format(cli.format)
        .follow_links(cli.follow_links)
        .build();

    if let Err(e) = generate(options) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("Documentation generated successfully!");
}
