use crate::error::Result;

use super::super::table::{Cell, NumberFormat, TextTable, truncate_middle};
use super::{FileRecord, ProjectStatistics, Statistics, StatsFormatter};

const MAX_PATH_WIDTH: usize = 60;
const MAX_LANGUAGE_WIDTH: usize = 15;
const TOP_N: usize = 10;
const NUMBER_WIDTH: usize = 10;

/// Boxed-table report.
///
/// The summary shows languages plus the top directories and files by code,
/// with long names shortened. The full report lists every directory and file.
pub struct TextFormatter {
    numbers: NumberFormat,
    full: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn summary(numbers: NumberFormat) -> Self {
        Self {
            numbers,
            full: false,
        }
    }

    #[must_use]
    pub const fn full(numbers: NumberFormat) -> Self {
        Self {
            numbers,
            full: true,
        }
    }

    fn fit(&self, s: &str, max: usize) -> String {
        if self.full {
            s.to_string()
        } else {
            truncate_middle(s, max)
        }
    }

    fn width(&self, longest: usize, max: usize) -> usize {
        if self.full { longest } else { longest.min(max) }
    }

    fn group_table(&self, first: &'static str, first_width: usize) -> TextTable {
        TextTable::new(
            self.numbers,
            &[
                (first, first_width),
                ("files", NUMBER_WIDTH),
                ("code", NUMBER_WIDTH),
                ("comment", NUMBER_WIDTH),
                ("blank", NUMBER_WIDTH),
                ("total", NUMBER_WIDTH),
                ("tokens", NUMBER_WIDTH),
            ],
        )
    }

    fn group_row(table: &TextTable, name: String, s: &Statistics) -> String {
        table.line(&[
            Cell::Text(name),
            Cell::Number(s.files),
            Cell::Number(s.tally.code),
            Cell::Number(s.tally.comment),
            Cell::Number(s.tally.blank),
            Cell::Number(s.total()),
            Cell::Number(s.tokens),
        ])
    }

    fn file_row(&self, table: &TextTable, f: &FileRecord) -> String {
        table.line(&[
            Cell::Text(self.fit(&f.path, MAX_PATH_WIDTH)),
            Cell::Text(self.fit(&f.language, MAX_LANGUAGE_WIDTH)),
            Cell::Number(f.tally.code),
            Cell::Number(f.tally.comment),
            Cell::Number(f.tally.blank),
            Cell::Number(f.tally.total()),
            Cell::Number(f.tokens),
        ])
    }
}

impl StatsFormatter for TextFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let n = |v: usize| self.numbers.format(v);
        let total = &stats.total;

        let longest_path = stats
            .files
            .iter()
            .map(|f| f.path.chars().count())
            .chain(stats.directories.keys().map(|d| d.chars().count()))
            .max()
            .unwrap_or(0);
        let longest_language = stats
            .languages
            .keys()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let path_width = self.width(longest_path, MAX_PATH_WIDTH);
        let language_width = self.width(longest_language, MAX_LANGUAGE_WIDTH);

        let lang_table = self.group_table("language", language_width);
        let dir_table = self.group_table("path", path_width);
        let file_table = TextTable::new(
            self.numbers,
            &[
                ("filename", path_width),
                ("language", language_width),
                ("code", NUMBER_WIDTH),
                ("comment", NUMBER_WIDTH),
                ("blank", NUMBER_WIDTH),
                ("total", NUMBER_WIDTH),
                ("tokens", NUMBER_WIDTH),
            ],
        );

        let mut lines = vec![
            format!("Directory : {}", stats.root),
            format!(
                "Total : {} files,  {} codes, {} comments, {} blanks, all {} lines, {} tokens",
                n(total.files),
                n(total.tally.code),
                n(total.tally.comment),
                n(total.tally.blank),
                n(total.total()),
                n(total.tokens)
            ),
            String::new(),
            "Languages".to_string(),
        ];
        lines.extend(lang_table.header_lines());
        for lang in stats.languages_by_code() {
            lines.push(Self::group_row(
                &lang_table,
                self.fit(&lang.name, MAX_LANGUAGE_WIDTH),
                lang,
            ));
        }
        lines.push(lang_table.separator());
        lines.push(String::new());

        let (dir_title, dirs): (String, Vec<&Statistics>) = if self.full {
            ("Directories".to_string(), stats.directories.values().collect())
        } else {
            (
                format!("Top {TOP_N} Directories (by code count)"),
                stats.top_directories(TOP_N),
            )
        };
        lines.push(dir_title);
        lines.extend(dir_table.header_lines());
        for dir in dirs {
            lines.push(Self::group_row(
                &dir_table,
                self.fit(&dir.name, MAX_PATH_WIDTH),
                dir,
            ));
        }
        lines.push(dir_table.separator());
        lines.push(String::new());

        let (file_title, files): (String, Vec<&FileRecord>) = if self.full {
            ("Files".to_string(), stats.files.iter().collect())
        } else {
            (
                format!("Top {TOP_N} Files (by code count)"),
                stats.top_files(TOP_N),
            )
        };
        lines.push(file_title);
        lines.extend(file_table.header_lines());
        for file in files {
            lines.push(self.file_row(&file_table, file));
        }
        lines.push(file_table.line(&[
            Cell::from("Total"),
            Cell::from(""),
            Cell::Number(total.tally.code),
            Cell::Number(total.tally.comment),
            Cell::Number(total.tally.blank),
            Cell::Number(total.total()),
            Cell::Number(total.tokens),
        ]));
        lines.push(file_table.separator());

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
