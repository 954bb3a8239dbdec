use std::path::PathBuf;

use super::*;

#[test]
fn defaults() {
    let cli = Cli::parse_from(["ct-lines"]);
    assert_eq!(cli.directory, PathBuf::from("."));
    assert!(cli.include.is_empty());
    assert!(cli.exclude.is_empty());
    assert!(cli.format.is_none());
    assert!(cli.output_dir.is_none());
    assert!(!cli.generate_results);
    assert!(!cli.no_gitignore);
    assert!(!cli.quiet);
    assert_eq!(cli.color, ColorMode::Auto);
}

#[test]
fn directory_positional() {
    let cli = Cli::parse_from(["ct-lines", "src"]);
    assert_eq!(cli.directory, PathBuf::from("src"));
}

#[test]
fn repeatable_globs() {
    let cli = Cli::parse_from([
        "ct-lines", "-i", "**/*.rs", "--include", "**/*.py", "-e", "target/**",
    ]);
    assert_eq!(cli.include, vec!["**/*.rs", "**/*.py"]);
    assert_eq!(cli.exclude, vec!["target/**"]);
}

#[test]
fn format_values() {
    for (arg, expected) in [
        ("text", OutputFormat::Text),
        ("json", OutputFormat::Json),
        ("csv", OutputFormat::Csv),
        ("markdown", OutputFormat::Markdown),
        ("md", OutputFormat::Markdown),
    ] {
        let cli = Cli::parse_from(["ct-lines", "-f", arg]);
        assert_eq!(cli.format, Some(expected));
    }
}

#[test]
fn invalid_format_is_rejected() {
    assert!(Cli::try_parse_from(["ct-lines", "--format", "yaml"]).is_err());
}

#[test]
fn results_flags() {
    let cli = Cli::parse_from([
        "ct-lines",
        "--generate-results",
        "-o",
        "out",
        "--no-text-results",
        "--no-markdown-results",
    ]);
    assert!(cli.generate_results);
    assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    assert!(cli.no_text_results);
    assert!(cli.no_markdown_results);
}

#[test]
fn counting_flags() {
    let cli = Cli::parse_from([
        "ct-lines",
        "--include-unsupported",
        "--include-incomplete-line",
        "--no-commas",
        "--no-gitignore",
    ]);
    assert!(cli.include_unsupported);
    assert!(cli.include_incomplete_line);
    assert!(cli.no_commas);
    assert!(cli.no_gitignore);
}

#[test]
fn config_flags() {
    let cli = Cli::parse_from([
        "ct-lines",
        "-c",
        "custom.toml",
        "--no-config",
        "--language-conf",
        "langs.json",
        "-q",
        "--color",
        "never",
    ]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    assert!(cli.no_config);
    assert_eq!(cli.language_conf, Some(PathBuf::from("langs.json")));
    assert!(cli.quiet);
    assert_eq!(cli.color, ColorMode::Never);
}

#[test]
fn list_languages_flag() {
    let cli = Cli::parse_from(["ct-lines", "--list-languages"]);
    assert!(cli.list_languages);
}
