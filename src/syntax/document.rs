//! An open document that is edited over time. Edits re-lex only the region
//! around the change; the token list is then parsed again in full.

use std::ops::Range;

use log::trace;

use super::errors::{Diagnostic, Diagnostics};
use super::lex::{self, Edit, Lexeme};
use super::parse::{self, Parse, ParseOptions};
use super::tree::SyntaxTree;

#[derive(Clone, Debug)]
pub struct Document {
    text: String,
    options: ParseOptions,
    lexemes: Vec<Lexeme>,
    parse: Parse,
}

impl Document {
    pub fn new(text: impl Into<String>, options: ParseOptions) -> Self {
        let text = text.into();
        let lexemes = lex::lexemes(&text, options.version);
        let parse = reparse(&text, &lexemes, &options);

        Self {
            text,
            options,
            lexemes,
            parse,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.parse.tree
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.parse.diagnostics
    }

    /// Replace the bytes in `range` with `replacement`. The range is clamped
    /// to the text and widened to character boundaries.
    pub fn edit(&mut self, range: Range<usize>, replacement: &str) {
        let range = self.boundaries(range);
        self.text.replace_range(range.clone(), replacement);

        let edit = Edit {
            range,
            inserted: replacement.len(),
        };

        self.lexemes = lex::relex(self.options.version, &self.lexemes, &self.text, &edit);
        self.parse = reparse(&self.text, &self.lexemes, &self.options);

        trace!(
            "edited {:?}, now {} tokens and {} diagnostics",
            edit.range,
            self.lexemes.len(),
            self.parse.diagnostics.len()
        );
    }

    /// Replace the whole text.
    pub fn replace(&mut self, text: impl Into<String>) {
        *self = Self::new(text, self.options.clone());
    }

    fn boundaries(&self, range: Range<usize>) -> Range<usize> {
        let mut start = range.start.min(self.text.len());
        let mut end = range.end.clamp(start, self.text.len());

        while !self.text.is_char_boundary(start) {
            start -= 1;
        }

        while !self.text.is_char_boundary(end) {
            end += 1;
        }

        start..end
    }
}

fn reparse(text: &str, lexemes: &[Lexeme], options: &ParseOptions) -> Parse {
    let mut diagnostics = Diagnostics::new();
    let tokens = lex::tokens_of(text, lexemes);
    let root = parse::parse_tokens(tokens, options.version, &mut diagnostics);

    parse::finish(root, text, options, diagnostics)
}
