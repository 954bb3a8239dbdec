use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;

use super::{ProjectStatistics, Statistics, StatsFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    directory: &'a str,
    total: JsonCounts,
    languages: IndexMap<&'a str, JsonCounts>,
    directories: IndexMap<&'a str, JsonCounts>,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonCounts {
    files: usize,
    code: usize,
    comment: usize,
    blank: usize,
    total: usize,
    tokens: usize,
}

impl From<&Statistics> for JsonCounts {
    fn from(s: &Statistics) -> Self {
        Self {
            files: s.files,
            code: s.tally.code,
            comment: s.tally.comment,
            blank: s.tally.blank,
            total: s.total(),
            tokens: s.tokens,
        }
    }
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    language: &'a str,
    code: usize,
    comment: usize,
    blank: usize,
    total: usize,
    tokens: usize,
}

impl StatsFormatter for JsonFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let output = JsonOutput {
            directory: &stats.root,
            total: JsonCounts::from(&stats.total),
            languages: stats
                .languages
                .iter()
                .map(|(name, s)| (name.as_str(), JsonCounts::from(s)))
                .collect(),
            directories: stats
                .directories
                .iter()
                .map(|(name, s)| (name.as_str(), JsonCounts::from(s)))
                .collect(),
            files: stats
                .files
                .iter()
                .map(|f| JsonFile {
                    path: &f.path,
                    language: &f.language,
                    code: f.tally.code,
                    comment: f.tally.comment,
                    blank: f.tally.blank,
                    total: f.tally.total(),
                    tokens: f.tokens,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
