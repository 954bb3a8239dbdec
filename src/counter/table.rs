use std::path::Path;

use indexmap::IndexMap;

use crate::language::DefinitionRegistry;

use super::LineClassifier;
use super::literal::LiteralPatternError;

/// One compiled [`LineClassifier`] per registry entry.
///
/// Classifiers are built up front so worker threads only ever read.
#[derive(Debug)]
pub struct ClassifierTable<'r> {
    registry: &'r DefinitionRegistry,
    classifiers: IndexMap<String, LineClassifier>,
}

impl<'r> ClassifierTable<'r> {
    #[must_use]
    pub fn new(registry: &'r DefinitionRegistry) -> Self {
        let classifiers = registry
            .iter()
            .map(|def| (def.id.clone(), LineClassifier::new(def)))
            .collect();
        Self {
            registry,
            classifiers,
        }
    }

    /// Classifier for the language `path` resolves to, if any.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> Option<&LineClassifier> {
        let def = self.registry.resolve(path)?;
        self.classifiers.get(&def.id)
    }

    /// Languages whose line strings could not be compiled, with the reason.
    pub fn literal_errors(&self) -> impl Iterator<Item = (&str, &LiteralPatternError)> {
        self.classifiers
            .values()
            .filter_map(|c| c.literal_error().map(|e| (c.name(), e)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
