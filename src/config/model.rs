use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DirsiftError, Result};
use crate::output::OutputFormat;
use crate::walker::WalkerOptions;

/// Where and how results are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Results file. Results go to stdout when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub format: OutputFormat,

    /// Sort paths before writing. The walk itself never orders results.
    #[serde(default)]
    pub sort: bool,
}

/// Contents of a `.dirsift.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub base_path: Option<PathBuf>,

    /// Folder-name patterns, OR-combined.
    #[serde(default)]
    pub folder_patterns: Vec<String>,

    #[serde(default)]
    pub file_pattern: Option<String>,

    #[serde(default)]
    pub extension_pattern: Option<String>,

    /// Worker count; defaults to available parallelism minus two.
    #[serde(default)]
    pub threads: Option<usize>,

    #[serde(default = "default_true")]
    pub progress: bool,

    #[serde(default)]
    pub follow_links: bool,

    #[serde(default)]
    pub output: OutputConfig,
}

const fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: None,
            folder_patterns: Vec::new(),
            file_pattern: None,
            extension_pattern: None,
            threads: None,
            progress: true,
            follow_links: false,
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Build walker options, checking that the required fields are present.
    ///
    /// Pattern syntax and the base path are validated later, when the walker
    /// is constructed.
    ///
    /// # Errors
    /// Returns `Config` if the base path or file pattern is missing, or if
    /// `threads` is zero.
    pub fn to_walker_options(&self) -> Result<WalkerOptions> {
        let base_path = self
            .base_path
            .clone()
            .ok_or_else(|| DirsiftError::Config("no base path given".to_string()))?;
        let file_pattern = self
            .file_pattern
            .clone()
            .ok_or_else(|| DirsiftError::Config("no file pattern given".to_string()))?;
        if self.threads == Some(0) {
            return Err(DirsiftError::Config(
                "threads must be a positive integer".to_string(),
            ));
        }

        Ok(WalkerOptions {
            base_path,
            folder_patterns: self.folder_patterns.clone(),
            file_pattern,
            extension_pattern: self.extension_pattern.clone(),
            workers: self.threads,
            progress: self.progress,
            follow_links: self.follow_links,
        })
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
