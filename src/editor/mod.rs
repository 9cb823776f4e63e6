//! Metadata for editors: highlighting, folding, indentation and completion.
//! None of this affects parsing; it is read off finished trees.

mod completion;
mod folding;
mod highlight;

#[cfg(test)]
mod tests;

pub use self::completion::{keyword_completions, Completion};
pub use self::folding::{folds, indent_level, indent_rule};
pub use self::highlight::{classify, highlight, Category, Highlight};
