mod filesystem;
mod languages;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use languages::{
    LanguageEntry, OverrideFormat, entries_into_overrides, parse_overrides,
};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{Config, OutputConfig, ScannerConfig};
