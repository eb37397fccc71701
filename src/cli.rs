use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "dirsift")]
#[command(
    author,
    version,
    about = "Find files by folder-name and file-name patterns with a parallel scan"
)]
#[command(long_about = "Walks a directory tree and scans every folder whose name matches \
    one of the folder patterns for files matching the file (and optional extension) pattern.\n\n\
    Patterns are regular expressions matched anywhere in the name.\n\n\
    Exit codes:\n  \
    0 - Walk completed\n  \
    1 - Base path missing or unreadable\n  \
    2 - Configuration error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Root directory to walk (overrides config `base_path`)
    pub base_path: Option<PathBuf>,

    /// Folder name pattern (regex, can be specified multiple times)
    #[arg(short = 'd', long = "folder", value_name = "REGEX")]
    pub folders: Vec<String>,

    /// File name pattern (regex)
    #[arg(short = 'f', long = "file", value_name = "REGEX")]
    pub file: Option<String>,

    /// Extension pattern (regex matched against the dotted extension, e.g. "\.py$")
    #[arg(short = 'e', long = "ext", value_name = "REGEX")]
    pub ext: Option<String>,

    /// Number of worker threads (default: available parallelism minus two)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Write results to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Sort results before output
    #[arg(long)]
    pub sort: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Disable progress reporting
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress all diagnostics on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
