use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirsiftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid regex pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Base path not found or not a directory: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Failed to traverse {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Cannot access folder {}: {source}", path.display())]
    FolderAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write results to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to read file: {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DirsiftError {
    /// Short, stable name of the variant for diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::PathNotFound(_) => "PathNotFound",
            Self::Traversal { .. } => "Traversal",
            Self::FolderAccess { .. } => "FolderAccess",
            Self::OutputWrite { .. } => "OutputWrite",
            Self::ThreadPool(_) => "ThreadPool",
            Self::FileAccess { .. } => "FileAccess",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Whether the error stems from user-supplied configuration.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_) | Self::FileAccess { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DirsiftError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
