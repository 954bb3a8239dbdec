use std::borrow::Cow;

use thiserror::Error;

use crate::language::DelimiterPair;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralPatternError {
    #[error("line string #{index} has an empty start token")]
    EmptyStart { index: usize },
}

/// One compiled `start (\\any | [^end\\])* end` span.
#[derive(Debug, Clone)]
struct LiteralPattern {
    start: String,
    end: String,
    /// Characters of `end`; none of them may appear unescaped in the body.
    stops: Vec<char>,
}

impl LiteralPattern {
    /// Byte offset just past the span starting at `pos`, if one starts there.
    fn match_at(&self, line: &str, pos: usize) -> Option<usize> {
        if !line[pos..].starts_with(&self.start) {
            return None;
        }

        // Each body step is forced by the current character, so the stop
        // points are tried longest first, like a backtracking greedy matcher.
        let body_start = pos + self.start.len();
        let mut stops = vec![body_start];
        let mut chars = line[body_start..].char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            let step_end = if c == '\\' {
                match chars.next() {
                    Some((next_offset, next)) => body_start + next_offset + next.len_utf8(),
                    None => break,
                }
            } else if self.stops.contains(&c) {
                break;
            } else {
                body_start + offset + c.len_utf8()
            };
            stops.push(step_end);
        }

        stops
            .into_iter()
            .rev()
            .find(|&stop| line[stop..].starts_with(&self.end))
            .map(|stop| stop + self.end.len())
    }
}

/// Removes single-line quoted literals so delimiter-like text inside them
/// cannot open or close block constructs.
///
/// Patterns are tried in declaration order at each position; the first that
/// matches is removed and scanning resumes after it.
#[derive(Debug, Clone, Default)]
pub struct LiteralStripper {
    patterns: Vec<LiteralPattern>,
}

impl LiteralStripper {
    /// A stripper that leaves every line untouched.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Compile the ordered delimiter pairs into a stripper.
    ///
    /// # Errors
    /// Returns [`LiteralPatternError::EmptyStart`] when a pair has no start
    /// token, since such a span would match everywhere.
    pub fn compile(pairs: &[DelimiterPair]) -> Result<Self, LiteralPatternError> {
        let patterns = pairs
            .iter()
            .enumerate()
            .map(|(index, pair)| {
                if pair.start.is_empty() {
                    return Err(LiteralPatternError::EmptyStart { index });
                }
                Ok(LiteralPattern {
                    start: pair.start.clone(),
                    end: pair.end.clone(),
                    stops: pair.end.chars().collect(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    #[must_use]
    pub fn strip<'a>(&self, line: &'a str) -> Cow<'a, str> {
        if self.patterns.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut out = String::new();
        let mut copied = 0;
        let mut pos = 0;

        while let Some(c) = line[pos..].chars().next() {
            match self.patterns.iter().find_map(|p| p.match_at(line, pos)) {
                Some(end) => {
                    out.push_str(&line[copied..pos]);
                    copied = end;
                    pos = end;
                }
                None => pos += c.len_utf8(),
            }
        }

        if copied == 0 {
            Cow::Borrowed(line)
        } else {
            out.push_str(&line[copied..]);
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
