use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::Result;

use super::stats::{
    DETAILS_FILE, DirectoriesCsvFormatter, FilesCsvFormatter, JsonFormatter, MarkdownFormatter,
    ProjectStatistics, SUMMARY_FILE, StatsFormatter, TextFormatter,
};
use super::table::NumberFormat;

/// Optional members of the results folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsOptions {
    pub text: bool,
    pub markdown: bool,
}

impl Default for ResultsOptions {
    fn default() -> Self {
        Self {
            text: true,
            markdown: true,
        }
    }
}

struct ResultFile {
    name: &'static str,
    description: &'static str,
    content: String,
}

/// Write the results folder for `stats` into `dir`, creating it if needed.
///
/// Returns the paths written, `README.md` last.
///
/// # Errors
/// Returns an error if the directory cannot be created or a file cannot be written.
pub fn write_results(
    dir: &Path,
    stats: &ProjectStatistics,
    numbers: NumberFormat,
    options: ResultsOptions,
    generated_at: DateTime<Utc>,
) -> Result<Vec<PathBuf>> {
    let mut files = vec![ResultFile {
        name: "results.json",
        description: "Machine-readable totals, languages, directories and files",
        content: JsonFormatter.format(stats)?,
    }];

    if options.text {
        files.push(ResultFile {
            name: "results.txt",
            description: "Plain text tables of every language, directory and file",
            content: TextFormatter::full(numbers).format(stats)?,
        });
    }

    files.push(ResultFile {
        name: "files.csv",
        description: "One row per file",
        content: FilesCsvFormatter.format(stats)?,
    });
    files.push(ResultFile {
        name: "directories.csv",
        description: "One row per directory, recursive",
        content: DirectoriesCsvFormatter.format(stats)?,
    });

    if options.markdown {
        let date = generated_at.date_naive();
        files.push(ResultFile {
            name: SUMMARY_FILE,
            description: "Markdown summary of languages and directories",
            content: MarkdownFormatter::summary(numbers, date).format(stats)?,
        });
        files.push(ResultFile {
            name: DETAILS_FILE,
            description: "Markdown details with every file grouped by language",
            content: MarkdownFormatter::details(numbers, date).format(stats)?,
        });
    }

    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(files.len() + 1);
    for file in &files {
        let path = dir.join(file.name);
        fs::write(&path, &file.content)?;
        written.push(path);
    }

    let readme = dir.join("README.md");
    fs::write(&readme, readme_content(stats, &files, generated_at))?;
    written.push(readme);

    Ok(written)
}

fn readme_content(stats: &ProjectStatistics, files: &[ResultFile], generated_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        "# Line Count Results".to_string(),
        String::new(),
        format!(
            "Generated on: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        String::new(),
        format!("Target Directory: {}", stats.root),
        String::new(),
        "This directory contains the following files:".to_string(),
        String::new(),
    ];
    lines.extend(
        files
            .iter()
            .map(|f| format!("- `{}`: {}", f.name, f.description)),
    );

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

#[cfg(test)]
#[path = "results_dir_tests.rs"]
mod tests;
