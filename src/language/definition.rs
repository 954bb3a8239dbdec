/// An opening/closing token pair such as `/*` and `*/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    pub start: String,
    pub end: String,
}

impl DelimiterPair {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

impl From<(String, String)> for DelimiterPair {
    fn from((start, end): (String, String)) -> Self {
        Self { start, end }
    }
}

/// Declarative lexical markers for one language.
///
/// Definitions are plain data: the registry owns them and the classifier
/// compiles what it needs at construction. Nothing mutates a definition after
/// it has been built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDefinition {
    pub id: String,
    pub aliases: Vec<String>,
    /// Extensions including the leading dot, e.g. `.rs`.
    pub extensions: Vec<String>,
    pub filenames: Vec<String>,
    pub line_comments: Vec<String>,
    pub block_comments: Vec<DelimiterPair>,
    pub block_strings: Vec<DelimiterPair>,
    pub line_strings: Vec<DelimiterPair>,
}

impl LanguageDefinition {
    /// Start an empty definition for `id`; populate it with the `with_*` builders.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = to_strings(aliases);
        self
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = to_strings(extensions);
        self
    }

    #[must_use]
    pub fn with_filenames(mut self, filenames: &[&str]) -> Self {
        self.filenames = to_strings(filenames);
        self
    }

    #[must_use]
    pub fn with_line_comments(mut self, prefixes: &[&str]) -> Self {
        self.line_comments = to_strings(prefixes);
        self
    }

    #[must_use]
    pub fn with_block_comments(mut self, pairs: &[(&str, &str)]) -> Self {
        self.block_comments = to_pairs(pairs);
        self
    }

    #[must_use]
    pub fn with_block_strings(mut self, pairs: &[(&str, &str)]) -> Self {
        self.block_strings = to_pairs(pairs);
        self
    }

    #[must_use]
    pub fn with_line_strings(mut self, pairs: &[(&str, &str)]) -> Self {
        self.line_strings = to_pairs(pairs);
        self
    }

    /// Name shown in reports: the first alias, or the id when there is none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.aliases.first().map_or(self.id.as_str(), String::as_str)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn to_pairs(pairs: &[(&str, &str)]) -> Vec<DelimiterPair> {
    pairs.iter().map(|(s, e)| DelimiterPair::new(s, e)).collect()
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
