use chrono::NaiveDate;

use crate::error::Result;

use super::super::table::{Cell, MarkdownTable, NumberFormat};
use super::{FileRecord, ProjectStatistics, Statistics, StatsFormatter};

pub const SUMMARY_FILE: &str = "results.md";
pub const DETAILS_FILE: &str = "details.md";

/// `results.md` / `details.md` report.
///
/// Both carry the totals and the language and directory tables; the details
/// variant adds every file, grouped by language.
pub struct MarkdownFormatter {
    numbers: NumberFormat,
    date: NaiveDate,
    details: bool,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn summary(numbers: NumberFormat, date: NaiveDate) -> Self {
        Self {
            numbers,
            date,
            details: false,
        }
    }

    #[must_use]
    pub const fn details(numbers: NumberFormat, date: NaiveDate) -> Self {
        Self {
            numbers,
            date,
            details: true,
        }
    }

    fn group_table(&self, first: &'static str) -> MarkdownTable {
        MarkdownTable::new(
            self.numbers,
            &[
                (first, false),
                ("Files", true),
                ("Code", true),
                ("Comments", true),
                ("Blanks", true),
                ("Total", true),
                ("Tokens", true),
            ],
        )
    }

    fn group_row(table: &MarkdownTable, name: &str, s: &Statistics) -> String {
        table.line(&[
            Cell::from(escape_backslashes(name)),
            Cell::Number(s.files),
            Cell::Number(s.tally.code),
            Cell::Number(s.tally.comment),
            Cell::Number(s.tally.blank),
            Cell::Number(s.total()),
            Cell::Number(s.tokens),
        ])
    }

    fn header(&self, stats: &ProjectStatistics, lines: &mut Vec<String>) {
        let n = |v: usize| self.numbers.format(v);
        let total = &stats.total;
        let (title, link) = if self.details {
            ("Details", format!("[Summary](./{SUMMARY_FILE})"))
        } else {
            ("Summary", format!("[Details](./{DETAILS_FILE})"))
        };

        lines.extend([
            format!("# {title}"),
            String::new(),
            format!("Date : {}", self.date.format("%Y-%m-%d")),
            String::new(),
            format!("Directory: {}", escape_backslashes(&stats.root)),
            String::new(),
            format!("Total Files : {}", n(total.files)),
            format!("Lines of Code : {}", n(total.tally.code)),
            format!("Comments : {}", n(total.tally.comment)),
            format!("Blank Lines : {}", n(total.tally.blank)),
            format!("Total Lines : {}", n(total.total())),
            format!("Total Tokens : {}", n(total.tokens)),
            String::new(),
            link,
            String::new(),
        ]);
    }

    fn file_sections(&self, stats: &ProjectStatistics, lines: &mut Vec<String>) {
        let table = MarkdownTable::new(
            self.numbers,
            &[
                ("Filename", false),
                ("Language", false),
                ("Code", true),
                ("Comments", true),
                ("Blanks", true),
                ("Total", true),
                ("Tokens", true),
            ],
        );
        let row = |f: &FileRecord| {
            table.line(&[
                Cell::from(escape_backslashes(&f.path)),
                Cell::from(f.language.as_str()),
                Cell::Number(f.tally.code),
                Cell::Number(f.tally.comment),
                Cell::Number(f.tally.blank),
                Cell::Number(f.tally.total()),
                Cell::Number(f.tokens),
            ])
        };

        lines.push(String::new());
        lines.push("## Files".to_string());
        for (language, files) in stats.files_by_language() {
            lines.push(String::new());
            lines.push(format!("### {language}"));
            lines.push(String::new());
            lines.extend(table.header_lines());
            lines.extend(files.into_iter().map(&row));
        }
    }
}

impl StatsFormatter for MarkdownFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let mut lines = Vec::new();
        self.header(stats, &mut lines);

        let lang_table = self.group_table("Language");
        lines.push("## Languages".to_string());
        lines.push(String::new());
        lines.extend(lang_table.header_lines());
        for lang in stats.languages_by_code() {
            lines.push(Self::group_row(&lang_table, &lang.name, lang));
        }

        let dir_table = self.group_table("Path");
        lines.push(String::new());
        lines.push("## Directories".to_string());
        lines.push(String::new());
        lines.extend(dir_table.header_lines());
        for dir in stats.directories.values() {
            lines.push(Self::group_row(&dir_table, &dir.name, dir));
        }

        if self.details {
            self.file_sections(stats, &mut lines);
        }

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }
}

/// Markdown renders `\` as an escape, so Windows paths need doubling.
fn escape_backslashes(s: &str) -> String {
    s.replace('\\', "\\\\")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
