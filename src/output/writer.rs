use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DirsiftError, Result};

use super::OutputFormat;
use super::reporter::{Reporter, WalkEvent};

/// Render matched paths: one path per line for text, a JSON array for json.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_results(paths: &[PathBuf], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for path in paths {
                let _ = writeln!(out, "{}", path.display());
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let strings: Vec<String> = paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
            let mut out = serde_json::to_string_pretty(&strings)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Persist matched paths to `output_path`.
///
/// Failures are reported to `reporter` and swallowed: the in-memory result is
/// already complete and the caller keeps it either way. Returns whether the
/// file was written.
pub fn write_results(
    output_path: &Path,
    paths: &[PathBuf],
    format: OutputFormat,
    reporter: &dyn Reporter,
) -> bool {
    match try_write_results(output_path, paths, format) {
        Ok(()) => {
            reporter.report(&WalkEvent::ResultsWritten {
                path: output_path,
                count: paths.len(),
            });
            true
        }
        Err(error) => {
            reporter.report(&WalkEvent::WriteFailed { error: &error });
            false
        }
    }
}

fn try_write_results(output_path: &Path, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let content = format_results(paths, format)?;
    let write_error = |source| DirsiftError::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    };

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(output_path, content).map_err(write_error)
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
