use std::path::PathBuf;

use super::*;

fn render(out: ErrorOutput, severity: Severity<'_>, detail: Option<&str>, help: Option<&str>) -> String {
    let mut buf = Vec::new();
    out.write(&mut buf, severity, "something happened", detail, help);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_line_without_colors() {
    let text = render(ErrorOutput::with_colors(false), Severity::Error("Config"), None, None);
    assert_eq!(text, "✖ Config: something happened\n");
}

#[test]
fn warning_line_without_colors() {
    let text = render(ErrorOutput::with_colors(false), Severity::Warning, None, None);
    assert_eq!(text, "⚠ Warning: something happened\n");
}

#[test]
fn detail_and_help_lines() {
    let text = render(
        ErrorOutput::with_colors(false),
        Severity::Error("IO"),
        Some("permission denied"),
        Some("check file permissions"),
    );
    assert_eq!(
        text,
        "✖ IO: something happened\n  × permission denied\n  help: check file permissions\n"
    );
}

#[test]
fn colors_wrap_the_label() {
    let text = render(ErrorOutput::with_colors(true), Severity::Warning, Some("d"), None);
    assert!(text.starts_with(ansi::BOLD));
    assert!(text.contains(ansi::YELLOW));
    assert!(text.contains("⚠ Warning:"));
    assert!(text.contains(ansi::DIM));
}

#[test]
fn never_mode_disables_colors() {
    assert!(!ErrorOutput::new(ColorMode::Never).use_colors);
    assert!(ErrorOutput::new(ColorMode::Always).use_colors);
}

#[test]
fn report_uses_error_metadata() {
    // Only checks that reporting a sourced error does not panic.
    let err = CtLinesError::FileRead {
        path: PathBuf::from("x.rs"),
        source: std::io::Error::other("boom"),
    };
    ErrorOutput::with_colors(false).report(&err);
}
