mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{
    DEFAULT_EXCLUDES, DEFAULT_RESULTS_DIR, FileFilter, GlobFilter, output_dir_exclude,
};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Finds the files a run should count.
pub trait FileScanner {
    /// # Errors
    /// Returns an error if `root` is not a readable directory.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
