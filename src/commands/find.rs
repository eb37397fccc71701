use std::io::IsTerminal;
use std::sync::Arc;

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::{
    ProgressBarReporter, Reporter, SilentReporter, StderrReporter, format_results, write_results,
};
use crate::walker::DirectoryWalker;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_TRAVERSAL_ERROR};

#[must_use]
pub fn run_find(cli: &Cli) -> i32 {
    match run_find_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_config_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_TRAVERSAL_ERROR
            }
        }
    }
}

pub(crate) fn run_find_impl(cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(cli)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, cli);

    // 3. Build the walker; patterns and base path are validated here
    let kind = ReporterKind::select(cli.quiet, config.progress, std::io::stderr().is_terminal());
    let reporter = kind.build();
    let walker = DirectoryWalker::new(config.to_walker_options()?)?
        .with_reporter(Arc::clone(&reporter));

    // 4. Walk
    let mut files = walker.find_matching_files()?;
    if config.output.sort {
        files.sort();
    }

    // 5. Write output; write failures are reported, never fatal
    if let Some(ref path) = config.output.path {
        write_results(path, &files, config.output.format, &*reporter);
    } else {
        print!("{}", format_results(&files, config.output.format)?);
    }

    Ok(EXIT_SUCCESS)
}

fn load_config(cli: &Cli) -> crate::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match cli.config {
        Some(ref path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

pub(crate) fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref base_path) = cli.base_path {
        config.base_path = Some(base_path.clone());
    }
    if !cli.folders.is_empty() {
        config.folder_patterns.clone_from(&cli.folders);
    }
    if let Some(ref file) = cli.file {
        config.file_pattern = Some(file.clone());
    }
    if let Some(ref ext) = cli.ext {
        config.extension_pattern = Some(ext.clone());
    }
    if let Some(threads) = cli.threads {
        config.threads = Some(threads);
    }
    if let Some(ref output) = cli.output {
        config.output.path = Some(output.clone());
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.sort {
        config.output.sort = true;
    }
    if cli.follow_links {
        config.follow_links = true;
    }
    if cli.no_progress || cli.quiet {
        config.progress = false;
    }
}

/// Diagnostics sink for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReporterKind {
    Silent,
    ProgressBar,
    Stderr,
}

impl ReporterKind {
    /// Quiet mode silences everything. The bar is only drawn on a terminal
    /// with progress enabled; otherwise messages are plain stderr lines.
    pub(crate) const fn select(quiet: bool, progress: bool, is_tty: bool) -> Self {
        if quiet {
            Self::Silent
        } else if progress && is_tty {
            Self::ProgressBar
        } else {
            Self::Stderr
        }
    }

    fn build(self) -> Arc<dyn Reporter> {
        match self {
            Self::Silent => Arc::new(SilentReporter),
            Self::ProgressBar => Arc::new(ProgressBarReporter::new()),
            Self::Stderr => Arc::new(StderrReporter),
        }
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
