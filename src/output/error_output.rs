//! Warnings and errors on stderr.
//!
//! Format: `✖ Type: message` or `⚠ Warning: message`, then optional
//! `  × detail` and `  help: suggestion` lines.

use std::error::Error as _;
use std::io::{IsTerminal, Write};

use crate::error::CtLinesError;

use super::ColorMode;
use super::ansi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity<'a> {
    Error(&'a str),
    Warning,
}

/// Writes diagnostics to stderr, coloured when the terminal allows it.
#[derive(Debug, Clone, Copy)]
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => ansi::allowed() && std::io::stderr().is_terminal(),
        };
        Self { use_colors }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print `err` with its source chain as detail and its suggestion as help.
    pub fn report(&self, err: &CtLinesError) {
        let detail = err.source().map(ToString::to_string);
        self.error(err.error_type(), &err.to_string(), detail.as_deref(), err.suggestion());
    }

    pub fn error(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write(
            &mut stderr,
            Severity::Error(error_type),
            message,
            detail,
            suggestion,
        );
    }

    pub fn warning(&self, message: &str, detail: Option<&str>, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write(&mut stderr, Severity::Warning, message, detail, suggestion);
    }

    fn write<W: Write>(
        &self,
        w: &mut W,
        severity: Severity<'_>,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let (icon, label, color) = match severity {
            Severity::Error(error_type) => ("✖", error_type, ansi::RED),
            Severity::Warning => ("⚠", "Warning", ansi::YELLOW),
        };

        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{color}{icon} {label}:{} {message}",
                ansi::BOLD,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "{icon} {label}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
