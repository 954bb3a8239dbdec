use crate::error::Result;

use super::{ProjectStatistics, StatsFormatter};

/// One row per file, with a code column per language.
pub struct CsvFormatter;

/// `files.csv`: one row per file.
pub struct FilesCsvFormatter;

/// `directories.csv`: one row per directory entry.
pub struct DirectoriesCsvFormatter;

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn finish(rows: Vec<String>) -> String {
    let mut output = rows.join("\n");
    output.push('\n');
    output
}

impl StatsFormatter for CsvFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let languages: Vec<&str> = stats.languages.keys().map(String::as_str).collect();

        let mut header = vec![quote("filename"), quote("language")];
        header.extend(languages.iter().map(|l| quote(l)));
        header.extend(["comment", "blank", "total"].map(quote));

        let mut rows = vec![header.join(",")];

        for file in &stats.files {
            let mut row = vec![quote(&file.path), quote(&file.language)];
            row.extend(languages.iter().map(|l| {
                let code = if *l == file.language { file.tally.code } else { 0 };
                code.to_string()
            }));
            row.push(file.tally.comment.to_string());
            row.push(file.tally.blank.to_string());
            row.push(file.tally.total().to_string());
            rows.push(row.join(","));
        }

        let mut total = vec![quote("Total"), quote("-")];
        total.extend(stats.languages.values().map(|s| s.tally.code.to_string()));
        total.push(stats.total.tally.comment.to_string());
        total.push(stats.total.tally.blank.to_string());
        total.push(stats.total.total().to_string());
        rows.push(total.join(","));

        Ok(finish(rows))
    }
}

impl StatsFormatter for FilesCsvFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let mut rows = vec![
            ["path", "language", "code", "comment", "blank", "total", "tokens"]
                .map(quote)
                .join(","),
        ];
        rows.extend(stats.files.iter().map(|f| {
            format!(
                "{},{},{},{},{},{},{}",
                quote(&f.path),
                quote(&f.language),
                f.tally.code,
                f.tally.comment,
                f.tally.blank,
                f.tally.total(),
                f.tokens
            )
        }));
        Ok(finish(rows))
    }
}

impl StatsFormatter for DirectoriesCsvFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let mut rows = vec![
            ["path", "files", "code", "comment", "blank", "total", "tokens"]
                .map(quote)
                .join(","),
        ];
        rows.extend(stats.directories.values().map(|d| {
            format!(
                "{},{},{},{},{},{},{}",
                quote(&d.name),
                d.files,
                d.tally.code,
                d.tally.comment,
                d.tally.blank,
                d.total(),
                d.tokens
            )
        }));
        Ok(finish(rows))
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
