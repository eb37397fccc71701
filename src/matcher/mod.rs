use regex::Regex;

use crate::error::{DirsiftError, Result};

/// Compiled folder, file and extension predicates.
///
/// All patterns use unanchored search semantics: a pattern that matches
/// anywhere in the name qualifies. Patterns are compiled once and never
/// change afterwards.
#[derive(Debug, Clone)]
pub struct PatternSet {
    folder_patterns: Vec<Regex>,
    file_pattern: Regex,
    extension_pattern: Option<Regex>,
}

impl PatternSet {
    /// Compile the folder, file and optional extension patterns.
    ///
    /// # Errors
    /// Returns `InvalidPattern` naming the first pattern that fails to compile.
    pub fn new(
        folder_patterns: &[String],
        file_pattern: &str,
        extension_pattern: Option<&str>,
    ) -> Result<Self> {
        let folder_patterns = folder_patterns
            .iter()
            .map(|pattern| compile(pattern))
            .collect::<Result<Vec<_>>>()?;
        let file_pattern = compile(file_pattern)?;
        let extension_pattern = extension_pattern.map(compile).transpose()?;

        Ok(Self {
            folder_patterns,
            file_pattern,
            extension_pattern,
        })
    }

    /// True if any folder pattern matches `name`. An empty set never matches.
    #[must_use]
    pub fn matches_folder(&self, name: &str) -> bool {
        self.folder_patterns.iter().any(|re| re.is_match(name))
    }

    /// True if the file pattern matches `name` and, when an extension pattern
    /// is configured, it matches `extension` (dot-inclusive, e.g. `.txt`).
    #[must_use]
    pub fn matches_file(&self, name: &str, extension: &str) -> bool {
        self.file_pattern.is_match(name)
            && self
                .extension_pattern
                .as_ref()
                .is_none_or(|re| re.is_match(extension))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| DirsiftError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Dot-inclusive final extension of a file name, or `""` when it has none.
///
/// A leading dot does not start an extension (`.bashrc` has none) and a
/// trailing dot yields none (`notes.` has none).
///
/// # Examples
///
/// - `report.py` -> `.py`
/// - `archive.tar.gz` -> `.gz`
/// - `Makefile` -> ``
#[must_use]
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => &name[idx..],
        _ => "",
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
