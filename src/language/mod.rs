mod catalog;
mod definition;
mod registry;

pub use catalog::builtin_definitions;
pub use definition::{DelimiterPair, LanguageDefinition};
pub use registry::{DefinitionRegistry, LanguageOverrides};
