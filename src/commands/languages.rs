use crate::EXIT_SUCCESS;
use crate::cli::Cli;
use crate::error::Result;
use crate::language::DefinitionRegistry;
use crate::output::{Cell, NumberFormat, TextTable};

use super::settings::load_for;

/// Print the effective language registry.
///
/// # Errors
/// Returns an error if configuration or language overrides fail to load.
pub fn run_list_languages(cli: &Cli) -> Result<i32> {
    let (_, registry) = load_for(cli)?;
    print!("{}", format_language_list(&registry));
    Ok(EXIT_SUCCESS)
}

#[must_use]
pub fn format_language_list(registry: &DefinitionRegistry) -> String {
    let rows: Vec<[String; 4]> = registry
        .iter()
        .map(|def| {
            [
                def.id.clone(),
                def.display_name().to_string(),
                def.extensions.join(" "),
                def.filenames.join(" "),
            ]
        })
        .collect();

    let width = |col: usize| rows.iter().map(|r| r[col].chars().count()).max().unwrap_or(0);
    let table = TextTable::new(
        NumberFormat::default(),
        &[
            ("id", width(0)),
            ("name", width(1)),
            ("extensions", width(2)),
            ("filenames", width(3)),
        ],
    );

    let mut lines = table.header_lines();
    lines.extend(
        rows.into_iter()
            .map(|row| table.line(&row.map(Cell::from))),
    );
    lines.push(table.separator());
    lines.push(format!("{} languages", registry.len()));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
