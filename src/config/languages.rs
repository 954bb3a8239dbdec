//! Language override documents (`--language-conf` files and `[languages]` tables).

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CtLinesError, Result};
use crate::language::{DelimiterPair, LanguageDefinition, LanguageOverrides};

/// One override entry as written by users.
///
/// Keys are accepted in camelCase (`lineComments`) and snake_case
/// (`line_comments`). Delimiter pairs are two-element arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct LanguageEntry {
    pub aliases: Vec<String>,
    pub extensions: Vec<String>,
    pub filenames: Vec<String>,
    #[serde(alias = "line_comments")]
    pub line_comments: Vec<String>,
    #[serde(alias = "block_comments")]
    pub block_comments: Vec<(String, String)>,
    #[serde(alias = "block_strings")]
    pub block_strings: Vec<(String, String)>,
    #[serde(alias = "line_strings")]
    pub line_strings: Vec<(String, String)>,
}

impl LanguageEntry {
    #[must_use]
    pub fn into_definition(self, id: &str) -> LanguageDefinition {
        let pairs = |pairs: Vec<(String, String)>| -> Vec<DelimiterPair> {
            pairs.into_iter().map(DelimiterPair::from).collect()
        };

        LanguageDefinition {
            id: id.to_string(),
            aliases: self.aliases,
            extensions: self.extensions,
            filenames: self.filenames,
            line_comments: self.line_comments,
            block_comments: pairs(self.block_comments),
            block_strings: pairs(self.block_strings),
            line_strings: pairs(self.line_strings),
        }
    }
}

/// Serialization of an override file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideFormat {
    Json,
    Toml,
}

impl OverrideFormat {
    /// `.toml` files are TOML; everything else is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Turn already-parsed `[languages]` entries into registry overrides.
#[must_use]
pub fn entries_into_overrides(entries: IndexMap<String, LanguageEntry>) -> LanguageOverrides {
    entries
        .into_iter()
        .map(|(id, entry)| {
            let def = entry.into_definition(&id);
            (id, def)
        })
        .collect()
}

/// Parse an override document read from `path`.
///
/// # Errors
/// [`CtLinesError::ConfigParse`] when the document is not a map keyed by
/// language id, and [`CtLinesError::LanguageConfig`] naming the id when a
/// single entry has the wrong shape.
pub fn parse_overrides(content: &str, path: &Path) -> Result<LanguageOverrides> {
    let source_name = path.display().to_string();
    let parse_error = |message: String| CtLinesError::ConfigParse {
        path: path.to_path_buf(),
        message,
    };

    match OverrideFormat::from_path(path) {
        OverrideFormat::Json => {
            let raw: IndexMap<String, serde_json::Value> =
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            convert_entries(&source_name, raw, |value| {
                serde_json::from_value(value).map_err(|e| e.to_string())
            })
        }
        OverrideFormat::Toml => {
            let raw: IndexMap<String, toml::Value> =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            convert_entries(&source_name, raw, |value| {
                value.try_into().map_err(|e: toml::de::Error| e.to_string())
            })
        }
    }
}

fn convert_entries<V, F>(
    source_name: &str,
    raw: IndexMap<String, V>,
    decode: F,
) -> Result<LanguageOverrides>
where
    F: Fn(V) -> std::result::Result<LanguageEntry, String>,
{
    raw.into_iter()
        .map(|(id, value)| {
            let entry = decode(value).map_err(|message| CtLinesError::LanguageConfig {
                source_name: source_name.to_string(),
                id: id.clone(),
                message,
            })?;
            let def = entry.into_definition(&id);
            Ok((id, def))
        })
        .collect()
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
