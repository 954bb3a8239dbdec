use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult, entries_into_overrides};
use crate::error::Result;
use crate::language::DefinitionRegistry;
use crate::output::{NumberFormat, OutputFormat, ResultsOptions};
use crate::scanner::DEFAULT_RESULTS_DIR;

/// Effective options of one run: config values with CLI flags applied on top.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunSettings {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub gitignore: bool,
    pub format: OutputFormat,
    pub numbers: NumberFormat,
    pub include_incomplete_line: bool,
    pub include_unsupported: bool,
    pub generate_results: bool,
    pub results: ResultsOptions,
    pub output_dir: PathBuf,
    pub quiet: bool,
}

impl RunSettings {
    #[must_use]
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let include = if cli.include.is_empty() {
            config.scanner.include.clone()
        } else {
            cli.include.clone()
        };
        let mut exclude = config.scanner.exclude.clone();
        exclude.extend(cli.exclude.iter().cloned());

        Self {
            include,
            exclude,
            gitignore: config.scanner.gitignore && !cli.no_gitignore,
            format: cli.format.unwrap_or(config.output.format),
            numbers: NumberFormat::new(config.output.print_commas && !cli.no_commas),
            include_incomplete_line: config.output.include_incomplete_line
                || cli.include_incomplete_line,
            include_unsupported: config.output.include_unsupported || cli.include_unsupported,
            generate_results: cli.generate_results,
            results: ResultsOptions {
                text: !cli.no_text_results,
                markdown: !cli.no_markdown_results,
            },
            output_dir: cli
                .output_dir
                .clone()
                .unwrap_or_else(|| cli.directory.join(DEFAULT_RESULTS_DIR)),
            quiet: cli.quiet,
        }
    }
}

/// Load the config for a run over `target_dir`, honouring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if the selected or discovered config cannot be read or parsed.
pub fn load_config<L: ConfigLoader>(
    loader: &L,
    target_dir: &Path,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::default());
    }
    config_path.map_or_else(
        || loader.load(target_dir),
        |path| loader.load_from_path(path),
    )
}

/// Built-in definitions, then `[languages]` from config, then `--language-conf`.
///
/// Invalid entries are reported against the file they were read from.
///
/// # Errors
/// Returns an error if an override file cannot be read or an entry is invalid.
pub fn build_registry<L: ConfigLoader>(
    loader: &L,
    loaded: &LoadResult,
    language_conf: Option<&Path>,
) -> Result<DefinitionRegistry> {
    let mut registry = DefinitionRegistry::builtin();

    if !loaded.config.languages.is_empty() {
        let overrides = entries_into_overrides(loaded.config.languages.clone());
        registry = registry.load(&loaded.source_name(), overrides)?;
    }

    if let Some(path) = language_conf {
        let overrides = loader.load_language_overrides(path)?;
        registry = registry.load(&path.display().to_string(), overrides)?;
    }

    Ok(registry)
}

/// Load config and registry for `cli` from the real filesystem.
///
/// # Errors
/// Returns an error if configuration or language overrides fail to load.
pub fn load_for(cli: &Cli) -> Result<(Config, DefinitionRegistry)> {
    let loader = FileConfigLoader::new();
    let loaded = load_config(&loader, &cli.directory, cli.config.as_deref(), cli.no_config)?;
    let registry = build_registry(&loader, &loaded, cli.language_conf.as_deref())?;
    Ok((loaded.config, registry))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
