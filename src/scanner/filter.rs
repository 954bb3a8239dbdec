use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CtLinesError, Result};

/// Name of the results folder written by `--generate-results`.
pub const DEFAULT_RESULTS_DIR: &str = "ct-lines-result";

/// Excludes applied to every scan.
pub const DEFAULT_EXCLUDES: &[&str] = &["**/node_modules/**", "**/.git/**", "ct-lines-result/**"];

pub trait FileFilter {
    /// `relative` is the path below the scan root with `/` separators.
    fn should_include(&self, relative: &str) -> bool;
}

/// Include/exclude globs matched against root-relative paths.
pub struct GlobFilter {
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl GlobFilter {
    /// An empty `include` list accepts every path not excluded.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        let include = if include.is_empty() {
            None
        } else {
            Some(build_glob_set(include)?)
        };

        Ok(Self {
            include,
            exclude: build_glob_set(exclude)?,
        })
    }

    /// Filter with the built-in excludes plus `extra_excludes`.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn with_defaults(include: &[String], extra_excludes: &[String]) -> Result<Self> {
        let exclude: Vec<String> = DEFAULT_EXCLUDES
            .iter()
            .map(ToString::to_string)
            .chain(extra_excludes.iter().cloned())
            .collect();
        Self::new(include, &exclude)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, relative: &str) -> bool {
        let path = Path::new(relative);
        let included = self.include.as_ref().is_none_or(|set| set.is_match(path));
        included && !self.exclude.is_match(path)
    }
}

/// Exclude glob covering `output_dir` when it lies inside `root`.
#[must_use]
pub fn output_dir_exclude(root: &Path, output_dir: &Path) -> Option<String> {
    let root = dunce::canonicalize(root).ok()?;
    let output = if output_dir.exists() {
        dunce::canonicalize(output_dir).ok()?
    } else if output_dir.is_absolute() {
        output_dir.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(output_dir)
    };

    let relative = output.strip_prefix(&root).ok()?;
    let relative = crate::path_utils::relative_slash_path(relative, Path::new(""));
    (relative != ".").then(|| format!("{relative}/**"))
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| CtLinesError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| CtLinesError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
