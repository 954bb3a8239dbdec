use std::path::PathBuf;

use clap::Parser;

use crate::output::{ColorMode, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "ct-lines")]
#[command(author, version, about = "Count code, comment and blank lines per language")]
#[command(long_about = "Count code, comment and blank lines per language.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory to count
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Include patterns (glob syntax, can be specified multiple times) [default: **/*]
    #[arg(short, long)]
    pub include: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Do not apply .gitignore rules
    #[arg(long)]
    pub no_gitignore: bool,

    /// Language override file (JSON, or TOML by extension)
    #[arg(long, value_name = "PATH")]
    pub language_conf: Option<PathBuf>,

    /// Output format [possible values: text, json, csv, markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Results folder location [default: <DIRECTORY>/ct-lines-result]
    #[arg(short, long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Write the results folder
    #[arg(long)]
    pub generate_results: bool,

    /// Skip results.txt in the results folder
    #[arg(long)]
    pub no_text_results: bool,

    /// Skip results.md and details.md in the results folder
    #[arg(long)]
    pub no_markdown_results: bool,

    /// List files with no matching language
    #[arg(long)]
    pub include_unsupported: bool,

    /// Count the last line even when it has no line terminator
    #[arg(long)]
    pub include_incomplete_line: bool,

    /// Print numbers without thousands separators
    #[arg(long)]
    pub no_commas: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,

    /// Print the effective language definitions and exit
    #[arg(long)]
    pub list_languages: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
