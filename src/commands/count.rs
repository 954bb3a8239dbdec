use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::cli::Cli;
use crate::counter::ClassifierTable;
use crate::error::{CtLinesError, Result};
use crate::output::{
    CsvFormatter, ErrorOutput, FileRecord, JsonFormatter, MarkdownFormatter, NumberFormat,
    OutputFormat, ProjectStatistics, ScanProgress, StatsFormatter, TextFormatter, write_results,
};
use crate::path_utils::relative_slash_path;
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter, output_dir_exclude};
use crate::tokens::{Cl100kCounter, TokenCounter};
use crate::EXIT_SUCCESS;

use super::settings::{RunSettings, load_for};

/// Source of file contents, mockable in tests.
pub trait FileReader: Send + Sync {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Shared read-only state for counting one file.
pub struct CountContext<'a> {
    pub root: &'a Path,
    pub table: &'a ClassifierTable<'a>,
    pub tokens: &'a dyn TokenCounter,
    pub reader: &'a dyn FileReader,
    pub errors: ErrorOutput,
    pub include_incomplete_line: bool,
    pub include_unsupported: bool,
}

/// Count lines under `cli.directory` and print the report.
///
/// # Errors
/// Returns an error if configuration, scanning or output fails.
pub fn run_count(cli: &Cli) -> Result<i32> {
    let generated_at = Utc::now();
    let (config, registry) = load_for(cli)?;
    let settings = RunSettings::resolve(cli, &config);
    let errors = ErrorOutput::new(cli.color);

    let root = dunce::canonicalize(&cli.directory)?;
    let table = ClassifierTable::new(&registry);
    warn_literal_errors(&table, errors);

    let files = scan(&root, &settings)?;
    if files.is_empty() {
        return Err(CtLinesError::NoFiles(root));
    }

    let tokens = Cl100kCounter::new()?;
    let ctx = CountContext {
        root: &root,
        table: &table,
        tokens: &tokens,
        reader: &RealFileReader,
        errors,
        include_incomplete_line: settings.include_incomplete_line,
        include_unsupported: settings.include_unsupported,
    };
    let records = collect_records(&files, &ctx, settings.quiet);
    let stats = ProjectStatistics::new(root.display().to_string(), records);

    let output = format_stats(settings.format, settings.numbers, &stats, generated_at)?;
    print!("{output}");

    if settings.generate_results {
        write_results(
            &settings.output_dir,
            &stats,
            settings.numbers,
            settings.results,
            generated_at,
        )?;
        if !settings.quiet {
            eprintln!("Results written to {}", settings.output_dir.display());
        }
    }

    Ok(EXIT_SUCCESS)
}

fn warn_literal_errors(table: &ClassifierTable<'_>, errors: ErrorOutput) {
    for (id, err) in table.literal_errors() {
        errors.warning(
            &format!("String literals are not recognised for language '{id}'"),
            Some(&err.to_string()),
            Some("give every lineStrings pair a non-empty start token"),
        );
    }
}

/// Files under `root` selected by the include, exclude and gitignore settings.
///
/// # Errors
/// Returns an error if a glob is invalid or `root` cannot be walked.
pub fn scan(root: &Path, settings: &RunSettings) -> Result<Vec<PathBuf>> {
    let mut excludes = settings.exclude.clone();
    if let Some(pattern) = output_dir_exclude(root, &settings.output_dir) {
        excludes.push(pattern);
    }

    let filter = GlobFilter::with_defaults(&settings.include, &excludes)?;
    DirectoryScanner::with_gitignore(filter, settings.gitignore).scan(root)
}

/// Count every file in parallel. Unreadable files are reported and skipped.
#[must_use]
pub fn collect_records(files: &[PathBuf], ctx: &CountContext<'_>, quiet: bool) -> Vec<FileRecord> {
    let progress = ScanProgress::new(files.len() as u64, quiet);
    let records = files
        .par_iter()
        .filter_map(|path| {
            let result = count_file(path, ctx);
            progress.inc();
            match result {
                Ok(record) => record,
                Err(e) => {
                    let detail = std::error::Error::source(&e).map(ToString::to_string);
                    ctx.errors.warning(&e.to_string(), detail.as_deref(), None);
                    None
                }
            }
        })
        .collect();
    progress.finish();
    records
}

/// Count one file; `None` when no language matches and unsupported files are skipped.
///
/// A file whose tokens cannot be counted is reported and recorded with zero tokens.
///
/// # Errors
/// Returns [`CtLinesError::FileRead`] if the file cannot be read.
pub fn count_file(path: &Path, ctx: &CountContext<'_>) -> Result<Option<FileRecord>> {
    let relative = relative_slash_path(path, ctx.root);
    let Some(classifier) = ctx.table.resolve(path) else {
        return Ok(ctx
            .include_unsupported
            .then(|| FileRecord::unsupported(relative)));
    };

    let bytes = ctx
        .reader
        .read(path)
        .map_err(|source| CtLinesError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    let text = String::from_utf8_lossy(&bytes);
    let tokens = ctx.tokens.count_tokens(&text).unwrap_or_else(|e| {
        ctx.errors.warning(
            &format!("Failed to count tokens for {relative}"),
            Some(&e.to_string()),
            None,
        );
        0
    });

    Ok(Some(FileRecord {
        path: relative,
        language: classifier.name().to_string(),
        tally: classifier.count(&text, ctx.include_incomplete_line),
        tokens,
    }))
}

/// Render the stdout report; text and markdown use their summary layouts.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_stats(
    format: OutputFormat,
    numbers: NumberFormat,
    stats: &ProjectStatistics,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::summary(numbers).format(stats),
        OutputFormat::Json => JsonFormatter.format(stats).map(|mut json| {
            json.push('\n');
            json
        }),
        OutputFormat::Csv => CsvFormatter.format(stats),
        OutputFormat::Markdown => {
            MarkdownFormatter::summary(numbers, generated_at.date_naive()).format(stats)
        }
    }
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
