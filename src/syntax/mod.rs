//! The Homescript front end: lexing, parsing and the resulting trees.

pub mod document;
pub mod errors;
pub mod grammar;
pub mod green;
pub mod lex;
pub mod parse;
pub mod source;
pub mod table;
pub mod tree;
pub mod version;

mod messages;

#[cfg(test)]
mod tests;

pub use self::document::Document;
pub use self::errors::{Diagnostic, Diagnostics, ErrorType, Severity};
pub use self::green::{Kind, Node};
pub use self::lex::tokenize;
pub use self::parse::{parse, parse_with, Parse, ParseOptions};
pub use self::source::{LineIndex, Location, Span};
pub use self::tree::{SyntaxNode, SyntaxTree};
pub use self::version::Version;
