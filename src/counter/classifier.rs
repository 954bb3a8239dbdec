use std::borrow::Cow;

use crate::language::{DelimiterPair, LanguageDefinition};

use super::literal::{LiteralPatternError, LiteralStripper};
use super::tally::{LineKind, LineTally};

/// Compiled line scanner for one language.
///
/// Everything built here is immutable; the open block comment/string
/// terminators live in locals of [`LineClassifier::count`], so one instance
/// can serve any number of files and threads.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    name: String,
    line_comments: Vec<String>,
    block_comments: Vec<DelimiterPair>,
    block_strings: Vec<DelimiterPair>,
    stripper: LiteralStripper,
    literal_error: Option<LiteralPatternError>,
}

impl LineClassifier {
    #[must_use]
    pub fn new(definition: &LanguageDefinition) -> Self {
        let block_comments = usable_blocks(&definition.block_comments);
        let block_strings = usable_blocks(&definition.block_strings);

        let line_strings: Vec<DelimiterPair> = definition
            .line_strings
            .iter()
            .filter(|pair| {
                !block_comments
                    .iter()
                    .chain(&block_strings)
                    .any(|block| overlaps(&pair.start, &block.start))
            })
            .cloned()
            .collect();

        let (stripper, literal_error) = match LiteralStripper::compile(&line_strings) {
            Ok(stripper) => (stripper, None),
            Err(e) => (LiteralStripper::identity(), Some(e)),
        };

        Self {
            name: definition.display_name().to_string(),
            line_comments: definition.line_comments.clone(),
            block_comments,
            block_strings,
            stripper,
            literal_error,
        }
    }

    /// Display name of the language this classifier was built for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Why literal stripping fell back to a no-op, if it did.
    #[must_use]
    pub const fn literal_error(&self) -> Option<&LiteralPatternError> {
        self.literal_error.as_ref()
    }

    /// Classify every line of `text`.
    ///
    /// The element after the final line terminator (empty, or an unterminated
    /// last line) is only counted when `include_incomplete_line` is set.
    #[must_use]
    pub fn count(&self, text: &str, include_incomplete_line: bool) -> LineTally {
        let mut tally = LineTally::default();
        if text.is_empty() {
            return tally;
        }

        let mut lines = split_lines(text);
        if !include_incomplete_line {
            lines.pop();
        }

        let mut block_comment_end: &str = "";
        let mut block_string_end: &str = "";

        for raw in lines {
            let kind = self.classify_line(
                trim_line(raw),
                &mut block_comment_end,
                &mut block_string_end,
            );
            tally.record(kind);
        }

        tally
    }

    fn classify_line<'d>(
        &'d self,
        line: &str,
        block_comment_end: &mut &'d str,
        block_string_end: &mut &'d str,
    ) -> LineKind {
        let mut kind = if !block_comment_end.is_empty() {
            LineKind::Comment
        } else if !block_string_end.is_empty() {
            LineKind::Code
        } else {
            LineKind::Blank
        };

        let mut buffer = Cow::Borrowed(line);
        let mut i = 0;

        while i < buffer.len() {
            if !block_comment_end.is_empty() {
                match find_from(&buffer, block_comment_end, i) {
                    Some(at) => {
                        i = at + block_comment_end.len();
                        *block_comment_end = "";
                    }
                    None => break,
                }
            } else if !block_string_end.is_empty() {
                match find_from(&buffer, block_string_end, i) {
                    Some(at) => {
                        i = at + block_string_end.len();
                        *block_string_end = "";
                    }
                    None => break,
                }
            } else {
                // Anchored to the line start, not to `i`.
                if self.line_comments.iter().any(|lc| buffer.starts_with(lc.as_str())) {
                    kind = LineKind::Comment;
                    break;
                }

                let stripped = match self.stripper.strip(&buffer) {
                    Cow::Owned(stripped) => Some(stripped),
                    Cow::Borrowed(_) => None,
                };
                if let Some(stripped) = stripped {
                    buffer = Cow::Owned(stripped);
                }

                if let Some((at, pair)) = find_first_of(&buffer, &self.block_comments, i) {
                    kind = if at == 0 {
                        LineKind::Comment
                    } else {
                        LineKind::Code
                    };
                    *block_comment_end = &pair.end;
                    i = at + pair.start.len();
                    continue;
                }

                kind = LineKind::Code;

                match find_first_of(&buffer, &self.block_strings, i) {
                    Some((at, pair)) => {
                        *block_string_end = &pair.end;
                        i = at + pair.start.len();
                    }
                    None => break,
                }
            }
        }

        kind
    }
}

/// Block pairs with an empty opener can never be located, and would stall the scan.
fn usable_blocks(pairs: &[DelimiterPair]) -> Vec<DelimiterPair> {
    pairs.iter().filter(|p| !p.start.is_empty()).cloned().collect()
}

/// An empty start is left for the literal compiler to reject.
fn overlaps(line_start: &str, block_start: &str) -> bool {
    !line_start.is_empty()
        && (block_start.starts_with(line_start) || line_start.starts_with(block_start))
}

/// Split on `\r\n`, `\r` or `\n`, keeping the element after the last terminator.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    lines.push(&text[start..]);
    lines
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Byte index of `needle` in `haystack` at or after `from`.
fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let start = ceil_char_boundary(haystack, from);
    haystack[start..].find(needle).map(|at| at + start)
}

/// Earliest opener at or after `from`; ties go to the pair declared first.
fn find_first_of<'p>(
    haystack: &str,
    pairs: &'p [DelimiterPair],
    from: usize,
) -> Option<(usize, &'p DelimiterPair)> {
    pairs
        .iter()
        .filter_map(|pair| find_from(haystack, &pair.start, from).map(|at| (at, pair)))
        .min_by_key(|(at, _)| *at)
}

fn ceil_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (index..s.len())
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(s.len())
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
