use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::counter::LineTally;
use crate::path_utils::{parent_dir, self_and_ancestors};

/// Language label for files no definition matched.
pub const UNSUPPORTED_LANGUAGE: &str = "(Unsupported)";

/// Suffix of the entry holding only a directory's direct files.
const DIRECT_FILES_SUFFIX: &str = " (Files)";

/// Counts for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Relative to the scan root, `/`-separated.
    pub path: String,
    pub language: String,
    pub tally: LineTally,
    pub tokens: usize,
}

impl FileRecord {
    #[must_use]
    pub fn unsupported(path: String) -> Self {
        Self {
            path,
            language: UNSUPPORTED_LANGUAGE.to_string(),
            tally: LineTally::default(),
            tokens: 0,
        }
    }
}

/// Sum over a group of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub name: String,
    pub files: usize,
    pub tally: LineTally,
    pub tokens: usize,
}

impl Statistics {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn add(&mut self, record: &FileRecord) {
        self.files += 1;
        self.tally += record.tally;
        self.tokens += record.tokens;
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.tally.total()
    }
}

/// Totals for a whole run, grouped by language and by directory.
#[derive(Debug, Clone, Default)]
pub struct ProjectStatistics {
    /// Target directory as given on the command line.
    pub root: String,
    /// Sorted by path.
    pub files: Vec<FileRecord>,
    pub total: Statistics,
    /// Keyed by display name, in order of first appearance.
    pub languages: IndexMap<String, Statistics>,
    /// Keyed by relative directory (`.` for the root), sorted by name.
    pub directories: BTreeMap<String, Statistics>,
}

impl ProjectStatistics {
    /// Aggregate `files`.
    ///
    /// Each file counts toward its own directory and every ancestor up to `.`.
    /// A directory whose direct files add up to a different line total than its
    /// whole subtree also gets a `"<dir> (Files)"` entry.
    #[must_use]
    pub fn new(root: impl Into<String>, mut files: Vec<FileRecord>) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let mut total = Statistics::new("Total");
        let mut languages: IndexMap<String, Statistics> = IndexMap::new();
        let mut directories: BTreeMap<String, Statistics> = BTreeMap::new();
        let mut direct: BTreeMap<String, Statistics> = BTreeMap::new();

        for file in &files {
            total.add(file);
            languages
                .entry(file.language.clone())
                .or_insert_with(|| Statistics::new(file.language.clone()))
                .add(file);

            let parent = parent_dir(&file.path);
            direct
                .entry(parent.to_string())
                .or_insert_with(|| Statistics::new(format!("{parent}{DIRECT_FILES_SUFFIX}")))
                .add(file);

            for dir in self_and_ancestors(parent) {
                directories
                    .entry(dir.to_string())
                    .or_insert_with(|| Statistics::new(dir))
                    .add(file);
            }
        }

        for (dir, stats) in direct {
            let recursive = directories.get(&dir).map_or(0, Statistics::total);
            if stats.total() != recursive {
                directories.insert(stats.name.clone(), stats);
            }
        }

        Self {
            root: root.into(),
            files,
            total,
            languages,
            directories,
        }
    }

    /// Languages by code lines, most first.
    #[must_use]
    pub fn languages_by_code(&self) -> Vec<&Statistics> {
        let mut langs: Vec<&Statistics> = self.languages.values().collect();
        langs.sort_by(|a, b| b.tally.code.cmp(&a.tally.code));
        langs
    }

    /// The `n` directories with the most code lines.
    #[must_use]
    pub fn top_directories(&self, n: usize) -> Vec<&Statistics> {
        let mut dirs: Vec<&Statistics> = self.directories.values().collect();
        dirs.sort_by(|a, b| b.tally.code.cmp(&a.tally.code));
        dirs.truncate(n);
        dirs
    }

    /// The `n` files with the most code lines.
    #[must_use]
    pub fn top_files(&self, n: usize) -> Vec<&FileRecord> {
        let mut files: Vec<&FileRecord> = self.files.iter().collect();
        files.sort_by(|a, b| b.tally.code.cmp(&a.tally.code));
        files.truncate(n);
        files
    }

    /// Files grouped by language; groups ordered by their code lines, most first.
    #[must_use]
    pub fn files_by_language(&self) -> Vec<(&str, Vec<&FileRecord>)> {
        self.languages_by_code()
            .into_iter()
            .map(|lang| {
                let files = self
                    .files
                    .iter()
                    .filter(|f| f.language == lang.name)
                    .collect();
                (lang.name.as_str(), files)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod tests;
