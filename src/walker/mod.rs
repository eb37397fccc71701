mod coordinator;
mod options;
mod progress;

pub use coordinator::{DirectoryWalker, WalkReport};
pub use options::{WalkerOptions, default_worker_count};
pub use progress::ProgressState;
