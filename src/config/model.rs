use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

use super::languages::LanguageEntry;

/// Contents of a `.ct-lines.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Language overrides layered over the built-in catalog.
    #[serde(default)]
    pub languages: IndexMap<String, LanguageEntry>,
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Include globs; empty means everything.
    #[serde(default)]
    pub include: Vec<String>,

    /// Exclude globs, added to the built-in excludes.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Render numbers with thousands separators.
    #[serde(default = "default_true")]
    pub print_commas: bool,

    #[serde(default)]
    pub include_incomplete_line: bool,

    /// List files with no language definition under "unsupported".
    #[serde(default)]
    pub include_unsupported: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            print_commas: true,
            include_incomplete_line: false,
            include_unsupported: false,
        }
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
