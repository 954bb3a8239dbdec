mod error_output;
mod progress;
mod results_dir;
pub mod stats;
mod table;

pub use error_output::ErrorOutput;
pub use progress::ScanProgress;
pub use results_dir::{ResultsOptions, write_results};
pub use stats::{
    CsvFormatter, DirectoriesCsvFormatter, FileRecord, FilesCsvFormatter, JsonFormatter,
    MarkdownFormatter, ProjectStatistics, Statistics, StatsFormatter, TextFormatter,
    UNSUPPORTED_LANGUAGE,
};
pub use table::{Cell, MarkdownTable, NumberFormat, TextTable, truncate_middle};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Format of the summary printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    #[serde(alias = "md")]
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when the stream is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";

    /// False when `NO_COLOR` is present, whatever its value (<https://no-color.org>).
    pub fn allowed() -> bool {
        std::env::var_os("NO_COLOR").is_none()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
