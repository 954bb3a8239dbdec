use std::path::{Path, PathBuf};

use crate::error::{CtLinesError, Result};
use crate::language::LanguageOverrides;

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::languages::parse_overrides;

/// A loaded configuration and the file it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when no file was found and defaults apply.
    pub source: Option<PathBuf>,
}

impl LoadResult {
    /// Label naming the config file in diagnostics.
    #[must_use]
    pub fn source_name(&self) -> String {
        self.source
            .as_deref()
            .map_or_else(|| LOCAL_CONFIG_NAME.to_string(), |p| p.display().to_string())
    }
}

/// Loads configuration and language override files.
pub trait ConfigLoader {
    /// Load `.ct-lines.toml` for a run over `target_dir`.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self, target_dir: &Path) -> Result<LoadResult>;

    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;

    /// Read a `--language-conf` document (JSON, or TOML by extension).
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or an entry is malformed.
    fn load_language_overrides(&self, path: &Path) -> Result<LanguageOverrides>;
}

pub const LOCAL_CONFIG_NAME: &str = ".ct-lines.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.ct-lines.toml` in the target directory
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()`
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.fs
            .read_to_string(path)
            .map_err(|source| CtLinesError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, target_dir: &Path) -> Result<LoadResult> {
        let local = target_dir.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return self.load_from_path(&local);
        }

        if let Some(user) = self.user_config_path()
            && self.fs.exists(&user)
        {
            return self.load_from_path(&user);
        }

        Ok(LoadResult::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self.read(path)?;
        let config = toml::from_str(&content).map_err(|e| CtLinesError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    fn load_language_overrides(&self, path: &Path) -> Result<LanguageOverrides> {
        let content = self.read(path)?;
        parse_overrides(&content, path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
