use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{CtLinesError, Result};

use super::LanguageDefinition;
use super::catalog::builtin_definitions;

/// Language overrides keyed by id, in the order they were declared.
pub type LanguageOverrides = IndexMap<String, LanguageDefinition>;

/// Ordered id → definition table with filename and extension lookups.
///
/// Built once per run from the built-in catalog plus optional overrides and
/// never mutated afterwards, so it can be shared across worker threads.
#[derive(Debug, Clone)]
pub struct DefinitionRegistry {
    definitions: IndexMap<String, LanguageDefinition>,
    filename_map: HashMap<String, usize>,
    extension_map: HashMap<String, usize>,
}

impl DefinitionRegistry {
    /// Registry containing only the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_definitions(builtin_definitions())
    }

    /// Registry over exactly the given definitions, in the given order.
    #[must_use]
    pub fn from_definitions(definitions: Vec<LanguageDefinition>) -> Self {
        let definitions = definitions
            .into_iter()
            .map(|def| (def.id.clone(), def))
            .collect();
        Self::index(definitions)
    }

    /// Layer `overrides` on top of the current entries.
    ///
    /// An override replaces the entry with the same id wholesale and keeps
    /// that entry's position; new ids are appended. Every override is
    /// validated before any is applied, so a failure leaves nothing half-merged.
    ///
    /// # Errors
    /// Returns [`CtLinesError::LanguageConfig`] naming the offending id and
    /// `source_name` when an entry can never be resolved or declares an
    /// unusable delimiter.
    pub fn load(self, source_name: &str, overrides: LanguageOverrides) -> Result<Self> {
        for (id, def) in &overrides {
            validate_override(source_name, id, def)?;
        }

        let mut definitions = self.definitions;
        for (id, mut def) in overrides {
            def.id.clone_from(&id);
            definitions.insert(id, def);
        }

        Ok(Self::index(definitions))
    }

    fn index(definitions: IndexMap<String, LanguageDefinition>) -> Self {
        let mut filename_map = HashMap::new();
        let mut extension_map = HashMap::new();

        for (idx, def) in definitions.values().enumerate() {
            // First definition in catalog order wins a contested key.
            for name in &def.filenames {
                filename_map.entry(name.clone()).or_insert(idx);
            }
            for ext in &def.extensions {
                extension_map.entry(ext.to_lowercase()).or_insert(idx);
            }
        }

        Self {
            definitions,
            filename_map,
            extension_map,
        }
    }

    /// Resolve `path` to a definition: exact filename first, then extension.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> Option<&LanguageDefinition> {
        let by_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.filename_map.get(name));

        let idx = by_name.or_else(|| {
            let ext = path.extension()?.to_str()?;
            self.extension_map
                .get(&format!(".{}", ext.to_lowercase()))
        })?;

        self.definitions.get_index(*idx).map(|(_, def)| def)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LanguageDefinition> {
        self.definitions.get(id)
    }

    /// All definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageDefinition> {
        self.definitions.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for DefinitionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_override(source_name: &str, id: &str, def: &LanguageDefinition) -> Result<()> {
    let fail = |message: String| CtLinesError::LanguageConfig {
        source_name: source_name.to_string(),
        id: id.to_string(),
        message,
    };

    if id.trim().is_empty() {
        return Err(fail("language id must not be empty".to_string()));
    }
    if def.extensions.is_empty() && def.filenames.is_empty() {
        return Err(fail(
            "declares neither \"extensions\" nor \"filenames\"".to_string(),
        ));
    }
    if let Some(ext) = def.extensions.iter().find(|e| !e.starts_with('.') || e.len() < 2) {
        return Err(fail(format!(
            "extension \"{ext}\" must start with '.' and name a suffix"
        )));
    }
    if def.line_comments.iter().any(String::is_empty) {
        return Err(fail("empty line comment prefix".to_string()));
    }

    let mut blocks = def.block_comments.iter().chain(&def.block_strings);
    if blocks.any(|pair| pair.start.is_empty()) {
        return Err(fail("block delimiter with an empty start token".to_string()));
    }

    Ok(())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
