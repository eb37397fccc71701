pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod scanner;
pub mod walker;

pub use error::{DirsiftError, Result};
pub use matcher::PatternSet;
pub use walker::{DirectoryWalker, WalkReport, WalkerOptions};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_TRAVERSAL_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
