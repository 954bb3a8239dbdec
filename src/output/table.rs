//! Boxed text tables and GitHub markdown tables.

/// Renders counts, with or without thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    commas: bool,
}

impl NumberFormat {
    #[must_use]
    pub const fn new(commas: bool) -> Self {
        Self { commas }
    }

    #[must_use]
    pub fn format(self, n: usize) -> String {
        let digits = n.to_string();
        if !self.commas || digits.len() <= 3 {
            return digits;
        }

        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Left-aligned.
    Text(String),
    /// Right-aligned, rendered through the table's [`NumberFormat`].
    Number(usize),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        Self::Number(n)
    }
}

/// `+---+` boxed table with fixed column widths.
///
/// Cells wider than their column are not cut; callers truncate beforehand.
pub struct TextTable {
    titles: Vec<&'static str>,
    widths: Vec<usize>,
    numbers: NumberFormat,
}

impl TextTable {
    /// Each column is at least as wide as its title.
    #[must_use]
    pub fn new(numbers: NumberFormat, columns: &[(&'static str, usize)]) -> Self {
        Self {
            titles: columns.iter().map(|(title, _)| *title).collect(),
            widths: columns
                .iter()
                .map(|(title, width)| (*width).max(title.chars().count()))
                .collect(),
            numbers,
        }
    }

    #[must_use]
    pub fn separator(&self) -> String {
        let dashes: Vec<String> = self.widths.iter().map(|w| "-".repeat(*w)).collect();
        format!("+-{}-+", dashes.join("-+-"))
    }

    #[must_use]
    pub fn header_lines(&self) -> Vec<String> {
        let titles: Vec<String> = self
            .titles
            .iter()
            .zip(&self.widths)
            .map(|(title, width)| format!("{title:<width$}"))
            .collect();
        vec![
            self.separator(),
            format!("| {} |", titles.join(" | ")),
            self.separator(),
        ]
    }

    #[must_use]
    pub fn line(&self, cells: &[Cell]) -> String {
        let rendered: Vec<String> = cells
            .iter()
            .zip(&self.widths)
            .map(|(cell, width)| match cell {
                Cell::Text(s) => format!("{s:<width$}"),
                Cell::Number(n) => format!("{:>width$}", self.numbers.format(*n)),
            })
            .collect();
        format!("| {} |", rendered.join(" | "))
    }
}

/// Markdown table; numeric columns are right-aligned (`---:`).
pub struct MarkdownTable {
    titles: Vec<&'static str>,
    numeric: Vec<bool>,
    numbers: NumberFormat,
}

impl MarkdownTable {
    /// `columns` pairs each title with whether the column is numeric.
    #[must_use]
    pub fn new(numbers: NumberFormat, columns: &[(&'static str, bool)]) -> Self {
        Self {
            titles: columns.iter().map(|(title, _)| *title).collect(),
            numeric: columns.iter().map(|(_, numeric)| *numeric).collect(),
            numbers,
        }
    }

    #[must_use]
    pub fn header_lines(&self) -> Vec<String> {
        let aligns: Vec<&str> = self
            .numeric
            .iter()
            .map(|n| if *n { "---:" } else { ":---" })
            .collect();
        vec![
            format!("| {} |", self.titles.join(" | ")),
            format!("| {} |", aligns.join(" | ")),
        ]
    }

    #[must_use]
    pub fn line(&self, cells: &[Cell]) -> String {
        let rendered: Vec<String> = cells
            .iter()
            .map(|cell| match cell {
                Cell::Text(s) => s.replace('|', "\\|"),
                Cell::Number(n) => self.numbers.format(*n),
            })
            .collect();
        format!("| {} |", rendered.join(" | "))
    }
}

/// Shorten `s` to at most `max` characters by replacing its middle with `...`.
#[must_use]
pub fn truncate_middle(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }

    let head = (max / 2).saturating_sub(3);
    let tail = max / 2;
    let start: String = s.chars().take(head).collect();
    let end: String = s.chars().skip(len - tail).collect();
    format!("{start}...{end}")
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
