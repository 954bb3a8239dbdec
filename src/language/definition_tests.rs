use super::*;

#[test]
fn builder_populates_fields() {
    let def = LanguageDefinition::new("c")
        .with_aliases(&["C"])
        .with_extensions(&[".c", ".h"])
        .with_line_comments(&["//"])
        .with_block_comments(&[("/*", "*/")])
        .with_line_strings(&[("\"", "\"")]);

    assert_eq!(def.id, "c");
    assert_eq!(def.extensions, vec![".c", ".h"]);
    assert_eq!(def.line_comments, vec!["//"]);
    assert_eq!(def.block_comments, vec![DelimiterPair::new("/*", "*/")]);
    assert!(def.block_strings.is_empty());
    assert_eq!(def.line_strings.len(), 1);
}

#[test]
fn display_name_prefers_first_alias() {
    let def = LanguageDefinition::new("cpp").with_aliases(&["C++", "cpp"]);
    assert_eq!(def.display_name(), "C++");
}

#[test]
fn display_name_falls_back_to_id() {
    let def = LanguageDefinition::new("custom");
    assert_eq!(def.display_name(), "custom");
}

#[test]
fn pair_from_tuple() {
    let pair: DelimiterPair = ("<!--".to_string(), "-->".to_string()).into();
    assert_eq!(pair, DelimiterPair::new("<!--", "-->"));
}
