mod count;
mod languages;
mod settings;

pub use count::{
    CountContext, FileReader, RealFileReader, collect_records, count_file, format_stats,
    run_count, scan,
};
pub use languages::{format_language_list, run_list_languages};
pub use settings::{RunSettings, build_registry, load_config, load_for};

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch a parsed command line.
///
/// # Errors
/// Returns the first error of the selected action.
pub fn run(cli: &Cli) -> Result<i32> {
    if cli.list_languages {
        run_list_languages(cli)
    } else {
        run_count(cli)
    }
}
