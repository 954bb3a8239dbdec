use super::LanguageDefinition;

const DQ: (&str, &str) = ("\"", "\"");
const SQ: (&str, &str) = ("'", "'");
const C_BLOCK: (&str, &str) = ("/*", "*/");
const HTML_BLOCK: (&str, &str) = ("<!--", "-->");

/// Built-in language catalog, in resolution order.
#[must_use]
pub fn builtin_definitions() -> Vec<LanguageDefinition> {
    vec![
        LanguageDefinition::new("cpp")
            .with_aliases(&["C++", "cpp"])
            .with_extensions(&[".cpp", ".hpp", ".cxx", ".hxx", ".cc", ".hh", ".c", ".h"])
            .with_line_comments(&["//"])
            .with_block_comments(&[C_BLOCK])
            .with_block_strings(&[("R(\"", "\")")])
            .with_line_strings(&[DQ]),
        LanguageDefinition::new("javascript")
            .with_aliases(&["JavaScript", "js"])
            .with_extensions(&[".js", ".jsx", ".mjs", ".cjs"])
            .with_line_comments(&["//"])
            .with_block_comments(&[C_BLOCK])
            .with_block_strings(&[("`", "`")])
            .with_line_strings(&[DQ, SQ]),
        LanguageDefinition::new("typescript")
            .with_aliases(&["TypeScript", "ts"])
            .with_extensions(&[".ts", ".tsx"])
            .with_line_comments(&["//"])
            .with_block_comments(&[C_BLOCK])
            .with_block_strings(&[("`", "`")])
            .with_line_strings(&[DQ, SQ]),
        LanguageDefinition::new("python")
            .with_aliases(&["Python", "py"])
            .with_extensions(&[".py", ".pyw", ".pyi"])
            .with_line_comments(&["#"])
            .with_block_comments(&[("\"\"\"", "\"\"\""), ("'''", "'''")])
            .with_block_strings(&[("\"\"\"", "\"\"\""), ("'''", "'''")])
            .with_line_strings(&[DQ, SQ]),
        LanguageDefinition::new("java")
            .with_aliases(&["Java"])
            .with_extensions(&[".java"])
            .with_line_comments(&["//"])
            .with_block_comments(&[C_BLOCK])
            .with_block_strings(&[("\"\"\"", "\"\"\"")])
            .with_line_strings(&[DQ]),
        LanguageDefinition::new("go")
            .with_aliases(&["Go", "golang"])
            .with_extensions(&[".go"])
            .with_line_comments(&["//"])
            .with_block_comments(&[C_BLOCK])
            .with_block_strings(&[("`", "`")])
            .with_line_strings(&[DQ]),
        LanguageDefinition::new("rust")
            .with_aliases(&["Rust", "rs"])
            .with_extensions(&[".rs"])
            .with_line_comments(&["//"])
            .with_block_comments(&[C_BLOCK])
            .with_block_strings(&[("r#\"", "\"#")])
            .with_line_strings(&[DQ]),
        LanguageDefinition::new("ruby")
            .with_aliases(&["Ruby", "rb"])
            .with_extensions(&[".rb"])
            .with_filenames(&["Rakefile", "Gemfile"])
            .with_line_comments(&["#"])
            .with_block_comments(&[("=begin", "=end")])
            .with_block_strings(&[("<<~", ""), ("<<-", ""), ("<<", "")])
            .with_line_strings(&[DQ, SQ]),
        LanguageDefinition::new("php")
            .with_aliases(&["PHP"])
            .with_extensions(&[".php", ".php3", ".php4", ".php5", ".phtml"])
            .with_line_comments(&["//", "#"])
            .with_block_comments(&[C_BLOCK])
            .with_block_strings(&[("<<<", "")])
            .with_line_strings(&[DQ, SQ]),
        LanguageDefinition::new("html")
            .with_aliases(&["HTML"])
            .with_extensions(&[".html", ".htm", ".xhtml"])
            .with_block_comments(&[HTML_BLOCK])
            .with_line_strings(&[DQ, SQ]),
        LanguageDefinition::new("css")
            .with_aliases(&["CSS"])
            .with_extensions(&[".css"])
            .with_line_comments(&["/*"])
            .with_block_comments(&[C_BLOCK])
            .with_line_strings(&[DQ]),
        LanguageDefinition::new("json")
            .with_aliases(&["JSON"])
            .with_extensions(&[".json"])
            .with_line_strings(&[DQ]),
        LanguageDefinition::new("yaml")
            .with_aliases(&["YAML", "yml"])
            .with_extensions(&[".yaml", ".yml"])
            .with_line_comments(&["#"])
            .with_block_strings(&[("|", ""), (">", "")])
            .with_line_strings(&[DQ, SQ]),
        LanguageDefinition::new("markdown")
            .with_aliases(&["Markdown", "md"])
            .with_extensions(&[".md", ".markdown"])
            .with_block_comments(&[HTML_BLOCK])
            .with_block_strings(&[("```", "```")]),
        LanguageDefinition::new("bash")
            .with_aliases(&["Bash", "sh"])
            .with_extensions(&[".sh", ".bash"])
            .with_line_comments(&["#"])
            .with_block_strings(&[("<<", "")])
            .with_line_strings(&[DQ, SQ]),
        LanguageDefinition::new("bat")
            .with_aliases(&["Batch", "bat"])
            .with_extensions(&[".bat", ".cmd"])
            .with_line_comments(&["::", "REM", "@REM", "rem", "@rem"]),
        LanguageDefinition::new("toml")
            .with_aliases(&["TOML"])
            .with_extensions(&[".toml"])
            .with_filenames(&["Cargo.lock"])
            .with_line_comments(&["#"])
            .with_block_strings(&[("\"\"\"", "\"\"\""), ("'''", "'''")])
            .with_line_strings(&[DQ, SQ]),
        LanguageDefinition::new("makefile")
            .with_aliases(&["Makefile", "make"])
            .with_extensions(&[".mk", ".mak"])
            .with_filenames(&["Makefile", "makefile", "GNUmakefile"])
            .with_line_comments(&["#"]),
        LanguageDefinition::new("dockerfile")
            .with_aliases(&["Dockerfile", "docker"])
            .with_extensions(&[".dockerfile"])
            .with_filenames(&["Dockerfile", "Containerfile"])
            .with_line_comments(&["#"])
            .with_line_strings(&[DQ, SQ]),
    ]
}
