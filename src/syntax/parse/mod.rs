//! A table driven LR parser with panic mode recovery. Parsing never fails:
//! every input produces a tree covering all of it, along with diagnostics
//! for whatever did not fit the grammar.

mod parsing;

#[cfg(test)]
mod tests;

use log::trace;

use super::errors::{Diagnostic, Diagnostics};
use super::green::Node;
use super::lex::{self, Token};
use super::source::LineIndex;
use super::tree::SyntaxTree;
use super::version::Version;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    pub version: Version,
    /// The name reported in diagnostics.
    pub filename: String,
    /// Whether this script is a driver implementation. Carried along for
    /// later passes; parsing is unaffected.
    pub is_driver: bool,
}

impl ParseOptions {
    pub fn new(version: Version) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn driver(mut self, is_driver: bool) -> Self {
        self.is_driver = is_driver;
        self
    }
}

/// The result of a parse: a tree and the diagnostics in source order of
/// discovery.
#[derive(Clone, Debug)]
pub struct Parse {
    pub tree: SyntaxTree,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parse {
    pub fn is_perfect(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse a script in the current version of the language.
pub fn parse(source: &str) -> Parse {
    parse_with(source, &ParseOptions::default())
}

pub fn parse_with(source: &str, options: &ParseOptions) -> Parse {
    let mut diagnostics = Diagnostics::new();
    let tokens = lex::tokenize(source, options.version);
    let root = parse_tokens(tokens, options.version, &mut diagnostics);

    finish(root, source, options, diagnostics)
}

/// Parse an already lexed source.
pub(crate) fn parse_tokens<'src>(
    tokens: impl IntoIterator<Item = Token<'src>>,
    version: Version,
    diagnostics: &mut Diagnostics,
) -> Node {
    parsing::parse(version.table(), tokens.into_iter(), diagnostics)
}

pub(crate) fn finish(
    root: Node,
    source: &str,
    options: &ParseOptions,
    diagnostics: Diagnostics,
) -> Parse {
    debug_assert_eq!(source.len(), root.width());

    trace!(
        "parsed {} bytes as {} with {} errors",
        source.len(),
        options.version,
        diagnostics.num_errors()
    );

    Parse {
        tree: SyntaxTree::new(root, LineIndex::new(source), options.clone()),
        diagnostics: diagnostics.into_vec(),
    }
}
