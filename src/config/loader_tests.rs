use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;
use crate::output::OutputFormat;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            config_dir: Some(PathBuf::from("/home/user/.config/ct-lines")),
        }
    }

    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    fn without_config_dir(mut self) -> Self {
        self.config_dir = None;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load(Path::new("/project")).unwrap().config;
    assert_eq!(config, Config::default());
}

#[test]
fn returns_default_without_user_config_dir() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new().without_config_dir());
    let config = loader.load(Path::new("/project")).unwrap().config;
    assert_eq!(config, Config::default());
}

#[test]
fn loads_local_config_from_target_directory() {
    let fs = MockFileSystem::new().with_file("/project/.ct-lines.toml", "[output]\nformat = \"json\"\n");
    let loader = FileConfigLoader::with_fs(fs);

    let loaded = loader.load(Path::new("/project")).unwrap();
    assert_eq!(loaded.config.output.format, OutputFormat::Json);
    assert_eq!(loaded.source, Some(PathBuf::from("/project/.ct-lines.toml")));
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/ct-lines/config.toml",
        "[scanner]\ngitignore = false\n",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let loaded = loader.load(Path::new("/project")).unwrap();
    assert!(!loaded.config.scanner.gitignore);
    assert_eq!(
        loaded.source_name(),
        PathBuf::from("/home/user/.config/ct-lines/config.toml").display().to_string()
    );
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.ct-lines.toml", "[output]\nprint_commas = false\n")
        .with_file(
            "/home/user/.config/ct-lines/config.toml",
            "[scanner]\ngitignore = false\n",
        );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load(Path::new("/project")).unwrap().config;
    assert!(!config.output.print_commas);
    assert!(config.scanner.gitignore);
}

#[test]
fn explicit_path_missing_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();
    assert!(matches!(err, CtLinesError::FileRead { .. }));
}

#[test]
fn invalid_toml_is_parse_error_with_path() {
    let fs = MockFileSystem::new().with_file("/project/.ct-lines.toml", "[scanner\n");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load(Path::new("/project")).unwrap_err();
    match err {
        CtLinesError::ConfigParse { path, .. } => {
            assert_eq!(path, PathBuf::from("/project/.ct-lines.toml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loads_language_overrides_by_extension() {
    let fs = MockFileSystem::new()
        .with_file("/langs.json", r#"{"lua": {"extensions": [".lua"], "lineComments": ["--"]}}"#)
        .with_file("/langs.toml", "[lua]\nextensions = [\".lua\"]\nline_comments = [\"--\"]\n");
    let loader = FileConfigLoader::with_fs(fs);

    let from_json = loader.load_language_overrides(Path::new("/langs.json")).unwrap();
    let from_toml = loader.load_language_overrides(Path::new("/langs.toml")).unwrap();
    assert_eq!(from_json, from_toml);
    assert_eq!(from_json["lua"].line_comments, vec!["--"]);
}

#[test]
fn defaults_have_no_source() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let loaded = loader.load(Path::new("/project")).unwrap();
    assert_eq!(loaded.source, None);
    assert_eq!(loaded.source_name(), LOCAL_CONFIG_NAME);
}

#[test]
fn explicit_path_is_recorded_as_source() {
    let fs = MockFileSystem::new().with_file("/etc/custom-settings.toml", "[output]
format = \"csv\"\n");
    let loader = FileConfigLoader::with_fs(fs);

    let loaded = loader.load_from_path(Path::new("/etc/custom-settings.toml")).unwrap();
    assert_eq!(loaded.config.output.format, OutputFormat::Csv);
    assert_eq!(loaded.source, Some(PathBuf::from("/etc/custom-settings.toml")));
}
