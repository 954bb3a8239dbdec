use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use walkdir::WalkDir;

use super::{FileFilter, FileScanner};
use crate::error::Result;
use crate::path_utils::relative_slash_path;

/// Walks a directory tree and returns matching files in sorted order.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn accepts(&self, root: &Path, path: &Path) -> bool {
        self.filter.should_include(&relative_slash_path(path, root))
    }

    fn scan_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.accepts(root, e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(false)
            .require_git(false)
            .hidden(true)
            .parents(false)
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.accepts(root, e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

/// Dotfiles and dot-directories are never scanned.
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not a directory", root.display()),
            )
            .into());
        }

        let mut files = if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        };
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
