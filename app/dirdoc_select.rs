//! Command-line interface for documenting selected directories.
//!
//! Each positional argument is resolved against `--dir` and rendered as
//! its own block in the tree. Missing directories are reported inline.

use clap::Parser;
use dirdoc::{DocBuilder, OutputFormat, absolute, generate};
use std::path::PathBuf;
use std::process::exit;

/// dirdoc-select: generate project documentation for specific directories
#[derive(Parser)]
#[command(name = "dirdoc-select", version, about, long_about = None)]
struct Cli {
    /// List of directories to document
    #[arg(required = true, num_args = 1..)]
    directories: Vec<String>,

    /// Base directory (defaults to current directory)
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
    let base = match absolute(&cli.dir) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    println!("Base directory: {}", base.display());
    println!(
        "Generating documentation for paths: {}",
        cli.directories.join(", ")
    );
    println!("Output file: {}", cli.output.display());

    let options = DocBuilder::new(base)
        .targets(cli.directories)
        .output(cli.output)
        .format(cli.format)
        .follow_links(cli.follow_links)
        .build();

    match generate(options) {
        Ok(result) => {
            for path in &result.missing {
                eprintln!("Warning: Path not found - {}", path.display());
            }
            println!("Documentation generated successfully!");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
