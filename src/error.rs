use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtLinesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid language definition '{id}' in {source_name}: {message}")]
    LanguageConfig {
        source_name: String,
        id: String,
        message: String,
    },

    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("No files found to count in {}", .0.display())]
    NoFiles(PathBuf),

    #[error("Failed to load tokenizer: {0}")]
    Tokenizer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CtLinesError {
    /// Short category label used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::ConfigParse { .. } => "Config",
            Self::LanguageConfig { .. } => "Language",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::NoFiles(_) => "Scan",
            Self::Tokenizer(_) => "Tokens",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Suggested fix shown under the error, when one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::LanguageConfig { .. } => Some(
                "each entry needs \"extensions\" or \"filenames\"; delimiter pairs are [start, end] string arrays",
            ),
            Self::InvalidPattern { .. } => Some("check the glob syntax of --include/--exclude"),
            Self::NoFiles(_) => Some("check --include/--exclude patterns and .gitignore rules"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CtLinesError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
