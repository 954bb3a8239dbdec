//! Shared language definitions for counter tests.

use crate::language::LanguageDefinition;

/// Only `//` line comments; nothing else.
pub fn line_comment_only_definition() -> LanguageDefinition {
    LanguageDefinition::new("slashes")
        .with_extensions(&[".sl"])
        .with_line_comments(&["//"])
}

/// C-style comments with double-quoted strings, no block strings.
pub fn c_like_definition() -> LanguageDefinition {
    LanguageDefinition::new("clike")
        .with_extensions(&[".cl"])
        .with_line_comments(&["//"])
        .with_block_comments(&[("/*", "*/")])
        .with_line_strings(&[("\"", "\"")])
}

/// Triple quotes act as both block comments and block strings.
pub fn python_definition() -> LanguageDefinition {
    LanguageDefinition::new("python")
        .with_aliases(&["Python"])
        .with_extensions(&[".py"])
        .with_line_comments(&["#"])
        .with_block_comments(&[("\"\"\"", "\"\"\""), ("'''", "'''")])
        .with_block_strings(&[("\"\"\"", "\"\"\""), ("'''", "'''")])
        .with_line_strings(&[("\"", "\""), ("'", "'")])
}

/// Heredoc openers with an empty end never carry to the next line.
pub fn ruby_definition() -> LanguageDefinition {
    LanguageDefinition::new("ruby")
        .with_aliases(&["Ruby"])
        .with_extensions(&[".rb"])
        .with_line_comments(&["#"])
        .with_block_comments(&[("=begin", "=end")])
        .with_block_strings(&[("<<~", ""), ("<<-", ""), ("<<", "")])
        .with_line_strings(&[("\"", "\""), ("'", "'")])
}
