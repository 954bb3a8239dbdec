mod classifier;
mod literal;
mod table;
mod tally;

pub use classifier::LineClassifier;
pub use literal::{LiteralPatternError, LiteralStripper};
pub use table::ClassifierTable;
pub use tally::{LineKind, LineTally};

#[cfg(test)]
mod test_fixtures;
