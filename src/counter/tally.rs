use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::Serialize;

/// How a single line was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

/// Code/comment/blank counters for a file or an aggregate of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineTally {
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineTally {
    #[must_use]
    pub const fn new(code: usize, comment: usize, blank: usize) -> Self {
        Self {
            code,
            comment,
            blank,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.code + self.comment + self.blank
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub const fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.blank += 1,
        }
    }
}

impl Add for LineTally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for LineTally {
    fn add_assign(&mut self, rhs: Self) {
        self.code += rhs.code;
        self.comment += rhs.comment;
        self.blank += rhs.blank;
    }
}

/// Component-wise, saturating at zero.
impl Sub for LineTally {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl SubAssign for LineTally {
    fn sub_assign(&mut self, rhs: Self) {
        self.code = self.code.saturating_sub(rhs.code);
        self.comment = self.comment.saturating_sub(rhs.comment);
        self.blank = self.blank.saturating_sub(rhs.blank);
    }
}

impl std::iter::Sum for LineTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
