mod enumerate;
mod filter;
mod folder;

pub use enumerate::{Enumeration, enumerate_directories};
pub use filter::FolderFilter;
pub use folder::{DirectoryScanner, FolderScanner};
