mod csv;
mod json;
mod markdown;
mod statistics;
mod text;

pub use csv::{CsvFormatter, DirectoriesCsvFormatter, FilesCsvFormatter};
pub use json::JsonFormatter;
pub use markdown::{DETAILS_FILE, MarkdownFormatter, SUMMARY_FILE};
pub use statistics::{FileRecord, ProjectStatistics, Statistics, UNSUPPORTED_LANGUAGE};
pub use text::TextFormatter;

use crate::error::Result;

pub trait StatsFormatter {
    /// Format the project statistics into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, stats: &ProjectStatistics) -> Result<String>;
}
